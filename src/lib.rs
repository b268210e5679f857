pub mod census;
pub mod config;
pub mod output;
pub mod postcode;
pub mod process;

pub use census::{Aggregator, CensusData, CensusRecord, OacTaxonomy, RunStats};
pub use config::Config;
pub use process::run;
