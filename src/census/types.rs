// src/census/types.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Statistics for a single postcode, as written to `census-<AREA>.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CensusRecord {
    pub population: i64,
    pub females: i64,
    pub males: i64,
    pub households: i64,
    #[serde(rename = "areaName")]
    pub area_name: String,
    #[serde(rename = "OACSupergroupCode")]
    pub oac_supergroup_code: String,
    #[serde(rename = "OACGroupCode")]
    pub oac_group_code: String,
    #[serde(rename = "OACSubgroupCode")]
    pub oac_subgroup_code: String,
    /// Townsend score of the surrounding LSOA / data zone.
    #[serde(rename = "areaDeprivationScore")]
    pub area_deprivation_score: f64,
    /// Townsend score of the postcode's output area / small area.
    #[serde(rename = "postcodeDeprivationScore")]
    pub postcode_deprivation_score: f64,
}

/// outcode → postcode → record. One of these per area file.
pub type OutcodeMap = BTreeMap<String, BTreeMap<String, CensusRecord>>;

/// area → outcode → postcode → record.
pub type CensusData = BTreeMap<String, OutcodeMap>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OacGroup {
    /// subgroup code → subgroup name
    pub children: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OacSupergroup {
    pub name: String,
    pub children: BTreeMap<String, OacGroup>,
}

/// supergroup code → supergroup. Written as `oac.json`.
pub type OacTaxonomy = BTreeMap<String, OacSupergroup>;

/// The OAC columns of one row, borrowed from the source cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OacClassification<'a> {
    pub supergroup_code: &'a str,
    pub supergroup_name: &'a str,
    pub group_code: &'a str,
    pub subgroup_code: &'a str,
    pub subgroup_name: &'a str,
}
