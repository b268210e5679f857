// src/process/mod.rs
use anyhow::{Context, Result};
use csv::{ReaderBuilder, Terminator};

use std::{
    fs::{self, File},
    io::Read,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use crate::census::{Aggregator, RunStats};
use crate::config::Config;
use crate::output;

pub mod columns;
pub mod convert;
pub mod raw_table;
pub mod row;

use columns::ColumnRepair;
use raw_table::RawTable;
use row::Row;

/// Every file in `dir`, in the order the filesystem lists them.
/// Subdirectories are skipped; nothing is filtered by extension.
pub fn list_input_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)
        .with_context(|| format!("Failed to list input directory {}", dir.display()))?
    {
        let entry = entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}

/// Split an extract into header and data rows.
///
/// Lines end at `\n` only. Cells are separated by bare commas, with every
/// carriage return and surrounding whitespace removed. Quotes carry no
/// meaning, so a comma inside a field splits it; see [`ColumnRepair`] for
/// the one case that is undone.
pub fn read_table<R: Read>(reader: R) -> Result<RawTable> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .terminator(Terminator::Any(b'\n'))
        .from_reader(reader);

    let mut table = RawTable::default();
    let mut record = csv::ByteRecord::new();
    let mut first = true;
    while rdr
        .read_byte_record(&mut record)
        .with_context(|| format!("CSV read error at record {}", table.rows.len() + 1))?
    {
        let cells: Vec<String> = record.iter().map(clean_cell).collect();
        // blank line, possibly just a "\r"
        if cells.len() == 1 && cells[0].is_empty() {
            continue;
        }
        if first {
            table.headers = cells;
            first = false;
        } else {
            table.rows.push(cells);
        }
    }
    Ok(table)
}

fn clean_cell(raw: &[u8]) -> String {
    let text = String::from_utf8_lossy(raw);
    text.replace('\r', "").trim().to_string()
}

/// Read one extract and fold every row into `agg`.
#[tracing::instrument(level = "info", skip(path, repair, agg), fields(path = %path.display()))]
pub fn process_file(path: &Path, repair: &ColumnRepair, agg: &mut Aggregator) -> Result<()> {
    info!("processing {}", path.display());
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let RawTable { headers, rows } =
        read_table(file).with_context(|| format!("Failed to read {}", path.display()))?;

    let before = agg.stats;
    for mut cells in rows {
        if repair.repair(&mut cells) > 0 {
            agg.stats.rows_repaired += 1;
        }
        agg.ingest(&Row::new(&headers, &cells));
    }
    agg.stats.files += 1;

    debug!(
        rows = agg.stats.rows_read - before.rows_read,
        accepted = agg.stats.rows_accepted - before.rows_accepted,
        "file done"
    );
    Ok(())
}

/// Convert every extract in `config.input_dir` and write the JSON outputs.
///
/// Nothing is written until all inputs have been read, so a failing file
/// leaves the output directory as it was.
pub fn run(config: &Config) -> Result<RunStats> {
    let files = list_input_files(&config.input_dir)?;
    info!("{} files in {}", files.len(), config.input_dir.display());

    let mut agg = Aggregator::new();
    for path in &files {
        process_file(path, &config.column_repair, &mut agg)?;
    }

    let (census, taxonomy, stats) = agg.into_parts();
    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            config.output_dir.display()
        )
    })?;
    output::write_census(&config.output_dir, &census)?;
    output::write_taxonomy(&config.output_dir, &taxonomy)?;

    stats.log_summary(config.report_dropped);
    Ok(stats)
}
