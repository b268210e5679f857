pub mod aggregate;
pub mod types;

pub use aggregate::{Aggregator, RunStats};
pub use types::{
    CensusData, CensusRecord, OacClassification, OacGroup, OacSupergroup, OacTaxonomy, OutcodeMap,
};
