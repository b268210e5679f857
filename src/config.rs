// src/config.rs

use std::{env, path::PathBuf};

use crate::process::columns::ColumnRepair;

/// Directory scanned for raw census extracts.
pub const DEFAULT_INPUT_DIR: &str = "rawdata";
/// Directory receiving `census-<AREA>.json` and `oac.json`.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Settings for one conversion run.
#[derive(Debug, Clone)]
pub struct Config {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub column_repair: ColumnRepair,
    /// Log a summary of dropped and overwritten postcodes once the run ends.
    pub report_dropped: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            column_repair: ColumnRepair::default(),
            report_dropped: false,
        }
    }
}

impl Config {
    /// Fixed directories, with `CENSUS_REPORT_DROPPED=true` switching on the drop summary.
    pub fn from_env() -> Self {
        let report_dropped = env::var("CENSUS_REPORT_DROPPED").unwrap_or_default() == "true";
        Self {
            report_dropped,
            ..Self::default()
        }
    }

    /// Same settings rooted at other directories. Used by tests.
    pub fn with_dirs(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }
}
