use std::collections::HashMap;

use crate::census::{CensusRecord, OacClassification};
use crate::process::convert::{parse_count, parse_score};

/// Header names the converter reads. Other columns are carried but ignored.
pub mod col {
    pub const POSTCODE: &str = "PCD";
    pub const SUPERGROUP_CODE: &str = "OAC_Supergroup_Code";
    pub const SUPERGROUP_NAME: &str = "OAC_Supergroup_Name";
    pub const GROUP_CODE: &str = "OAC_Group_Code";
    pub const SUBGROUP_CODE: &str = "OAC_Subgroup_Code";
    pub const SUBGROUP_NAME: &str = "OAC_Subgroup_Name";
    pub const TOTAL_PERSONS: &str = "Total_Persons";
    pub const FEMALES: &str = "Females";
    pub const MALES: &str = "Males";
    pub const HOUSEHOLDS: &str = "Occupied_Households";
    pub const AREA_NAME: &str = "LSOA_DZ_Name";
    pub const AREA_DEPRIVATION: &str = "LSOA_DZ_Townsend_Deprivation_Score";
    pub const POSTCODE_DEPRIVATION: &str = "OA_SA_Townsend_Deprivation_Score";
}

/// One data row keyed by header name.
#[derive(Debug, Default)]
pub struct Row<'a> {
    fields: HashMap<&'a str, &'a str>,
}

impl<'a> Row<'a> {
    /// Pair `cells` with `headers` positionally. Cells past the last header
    /// are dropped; a repeated header keeps its rightmost cell.
    pub fn new(headers: &'a [String], cells: &'a [String]) -> Self {
        let fields = headers
            .iter()
            .zip(cells)
            .map(|(h, c)| (h.as_str(), c.as_str()))
            .collect();
        Self { fields }
    }

    /// Cell under `column`, or "" when the row is too short or lacks the header.
    pub fn get(&self, column: &str) -> &'a str {
        self.fields.get(column).copied().unwrap_or("")
    }

    pub fn postcode(&self) -> &'a str {
        self.get(col::POSTCODE)
    }

    pub fn to_record(&self) -> CensusRecord {
        CensusRecord {
            population: parse_count(self.get(col::TOTAL_PERSONS)),
            females: parse_count(self.get(col::FEMALES)),
            males: parse_count(self.get(col::MALES)),
            households: parse_count(self.get(col::HOUSEHOLDS)),
            area_name: self.get(col::AREA_NAME).to_string(),
            oac_supergroup_code: self.get(col::SUPERGROUP_CODE).to_string(),
            oac_group_code: self.get(col::GROUP_CODE).to_string(),
            oac_subgroup_code: self.get(col::SUBGROUP_CODE).to_string(),
            area_deprivation_score: parse_score(self.get(col::AREA_DEPRIVATION)),
            postcode_deprivation_score: parse_score(self.get(col::POSTCODE_DEPRIVATION)),
        }
    }

    pub fn classification(&self) -> OacClassification<'a> {
        OacClassification {
            supergroup_code: self.get(col::SUPERGROUP_CODE),
            supergroup_name: self.get(col::SUPERGROUP_NAME),
            group_code: self.get(col::GROUP_CODE),
            subgroup_code: self.get(col::SUBGROUP_CODE),
            subgroup_name: self.get(col::SUBGROUP_NAME),
        }
    }
}
