// src/census/aggregate.rs

use tracing::{info, warn};

use crate::census::types::{
    CensusData, CensusRecord, OacClassification, OacSupergroup, OacTaxonomy,
};
use crate::postcode::{self, ParseOutcome, ParsedPostcode};
use crate::process::row::Row;

/// Counters for one run. Kept regardless of whether they are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub files: usize,
    pub rows_read: u64,
    pub rows_accepted: u64,
    /// Rows whose postcode only parsed once its last character was trimmed.
    pub rows_trimmed: u64,
    /// Rows whose postcode never parsed.
    pub rows_dropped: u64,
    /// Rows that had cells merged back into the placename field.
    pub rows_repaired: u64,
    /// Accepted rows that replaced an earlier record for the same postcode.
    pub postcodes_overwritten: u64,
}

impl RunStats {
    pub fn log_summary(&self, report_dropped: bool) {
        info!(
            files = self.files,
            rows = self.rows_read,
            accepted = self.rows_accepted,
            "conversion finished"
        );
        if report_dropped {
            warn!(
                dropped = self.rows_dropped,
                trimmed = self.rows_trimmed,
                repaired = self.rows_repaired,
                overwritten = self.postcodes_overwritten,
                "rows dropped or altered"
            );
        }
    }
}

/// In-memory accumulator for census records and the OAC taxonomy.
#[derive(Debug, Default)]
pub struct Aggregator {
    pub census: CensusData,
    pub taxonomy: OacTaxonomy,
    pub stats: RunStats,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the row's postcode and fold the row in. Returns false when the
    /// postcode is invalid and the row was skipped.
    pub fn ingest(&mut self, row: &Row<'_>) -> bool {
        self.stats.rows_read += 1;

        let parsed = match postcode::parse_with_fallback(row.postcode()) {
            ParseOutcome::Valid(p) => p,
            ParseOutcome::Trimmed(p) => {
                self.stats.rows_trimmed += 1;
                p
            }
            ParseOutcome::Invalid => {
                self.stats.rows_dropped += 1;
                return false;
            }
        };

        self.add_classification(row.classification());
        self.insert(&parsed, row.to_record());
        self.stats.rows_accepted += 1;
        true
    }

    /// Record the OAC codes. Codes already present keep their first-seen names.
    pub fn add_classification(&mut self, class: OacClassification<'_>) {
        let supergroup = self
            .taxonomy
            .entry(class.supergroup_code.to_string())
            .or_insert_with(|| OacSupergroup {
                name: class.supergroup_name.to_string(),
                children: Default::default(),
            });
        supergroup
            .children
            .entry(class.group_code.to_string())
            .or_default()
            .children
            .entry(class.subgroup_code.to_string())
            .or_insert_with(|| class.subgroup_name.to_string());
    }

    /// Store `record` under area → outcode → postcode, replacing any earlier one.
    pub fn insert(&mut self, parsed: &ParsedPostcode, record: CensusRecord) {
        if !self.census.contains_key(&parsed.area) {
            info!(area = %parsed.area, "new area");
        }
        let previous = self
            .census
            .entry(parsed.area.clone())
            .or_default()
            .entry(parsed.outcode.clone())
            .or_default()
            .insert(parsed.postcode.clone(), record);
        if previous.is_some() {
            self.stats.postcodes_overwritten += 1;
        }
    }

    pub fn into_parts(self) -> (CensusData, OacTaxonomy, RunStats) {
        (self.census, self.taxonomy, self.stats)
    }
}
