// src/output/mod.rs

use anyhow::{Context, Result};
use serde::Serialize;
use std::{
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use tracing::{info, warn};

use crate::census::{CensusData, OacTaxonomy};
#[cfg(test)]
use crate::census::OutcodeMap;

pub const TAXONOMY_FILE: &str = "oac.json";

/// `census-<AREA>.json`
pub fn census_file_name(area: &str) -> String {
    format!("census-{}.json", area)
}

/// Pretty-print `value` (2-space indent, trailing newline) to `path`.
///
/// Written to a hidden sibling first and renamed over `path`. The sibling
/// is removed again if writing it fails.
pub fn write_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tmp_path: PathBuf = dir.join(format!(".{}.tmp", file_name));

    let tmp = fs::File::create(&tmp_path)
        .with_context(|| format!("creating {}", tmp_path.display()))?;
    let written = write_pretty_to(BufWriter::new(tmp), value, &file_name, &tmp_path);
    if let Err(e) = written {
        if let Err(rm) = fs::remove_file(&tmp_path) {
            warn!("failed to remove {}: {}", tmp_path.display(), rm);
        }
        return Err(e);
    }

    fs::rename(&tmp_path, path)
        .with_context(|| format!("renaming {} -> {}", tmp_path.display(), path.display()))?;
    Ok(())
}

fn write_pretty_to<W: Write, T: Serialize>(
    mut writer: W,
    value: &T,
    file_name: &str,
    tmp_path: &Path,
) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("serializing {}", file_name))?;
    writer
        .write_all(b"\n")
        .with_context(|| format!("writing {}", tmp_path.display()))?;
    writer
        .flush()
        .with_context(|| format!("flushing {}", tmp_path.display()))?;
    Ok(())
}

/// One file per area holding that area's outcode → postcode → record map.
pub fn write_census(dir: &Path, census: &CensusData) -> Result<()> {
    for (area, outcodes) in census {
        let path = dir.join(census_file_name(area));
        write_json_pretty(&path, outcodes)?;
        info!(area = %area, outcodes = outcodes.len(), "wrote {}", path.display());
    }
    Ok(())
}

pub fn write_taxonomy(dir: &Path, taxonomy: &OacTaxonomy) -> Result<()> {
    let path = dir.join(TAXONOMY_FILE);
    write_json_pretty(&path, taxonomy)?;
    info!(supergroups = taxonomy.len(), "wrote {}", path.display());
    Ok(())
}

/// Load a previously written area file.
#[cfg(test)]
pub fn read_census(dir: &Path, area: &str) -> Result<OutcodeMap> {
    let path = dir.join(census_file_name(area));
    let f = fs::File::open(&path).with_context(|| format!("opening {}", path.display()))?;
    serde_json::from_reader(std::io::BufReader::new(f))
        .with_context(|| format!("parsing {}", path.display()))
}

#[cfg(test)]
pub fn read_taxonomy(dir: &Path) -> Result<OacTaxonomy> {
    let path = dir.join(TAXONOMY_FILE);
    let f = fs::File::open(&path).with_context(|| format!("opening {}", path.display()))?;
    serde_json::from_reader(std::io::BufReader::new(f))
        .with_context(|| format!("parsing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::census::{Aggregator, CensusRecord, OacClassification};
    use crate::postcode;
    use std::collections::BTreeMap;
    use tempfile::tempdir;

    fn record(population: i64, area_score: f64, postcode_score: f64) -> CensusRecord {
        CensusRecord {
            population,
            females: population / 2,
            males: population - population / 2,
            households: population / 3,
            area_name: "Example Area".into(),
            oac_supergroup_code: "1".into(),
            oac_group_code: "1a".into(),
            oac_subgroup_code: "1a1".into(),
            area_deprivation_score: area_score,
            postcode_deprivation_score: postcode_score,
        }
    }

    fn sample() -> Aggregator {
        let mut agg = Aggregator::new();
        for (pc, pop, a, p) in [
            ("AB10 1AA", 1000, -2.1, -1.8),
            ("AB10 1AB", 7, 0.1 + 0.2, 1e-9),
            ("AB11 5QN", 0, 0.0, -0.0),
            ("M1 1AE", 300, 4.123456789012345, 6.02e23),
        ] {
            let parsed = postcode::parse(pc).unwrap();
            agg.insert(&parsed, record(pop, a, p));
        }
        agg.add_classification(OacClassification {
            supergroup_code: "1",
            supergroup_name: "Rural",
            group_code: "1a",
            subgroup_code: "1a1",
            subgroup_name: "Farms",
        });
        agg
    }

    #[test]
    fn test_area_file_round_trip() -> Result<()> {
        let dir = tempdir()?;
        let agg = sample();
        write_census(dir.path(), &agg.census)?;

        for (area, outcodes) in &agg.census {
            let back = read_census(dir.path(), area)?;
            assert_eq!(&back, outcodes);
        }
        let ab = read_census(dir.path(), "AB")?;
        assert_eq!(ab["AB10"]["AB101AB"].area_deprivation_score, 0.1 + 0.2);
        assert!(read_census(dir.path(), "ZZ").is_err());
        Ok(())
    }

    #[test]
    fn test_taxonomy_round_trip() -> Result<()> {
        let dir = tempdir()?;
        let agg = sample();
        write_taxonomy(dir.path(), &agg.taxonomy)?;
        assert_eq!(read_taxonomy(dir.path())?, agg.taxonomy);
        Ok(())
    }

    #[test]
    fn test_pretty_printed_two_spaces() -> Result<()> {
        let dir = tempdir()?;
        write_taxonomy(dir.path(), &sample().taxonomy)?;
        let text = fs::read_to_string(dir.path().join(TAXONOMY_FILE))?;
        let expected = r#"{
  "1": {
    "name": "Rural",
    "children": {
      "1a": {
        "children": {
          "1a1": "Farms"
        }
      }
    }
  }
}
"#;
        assert_eq!(text, expected);
        Ok(())
    }

    #[test]
    fn test_no_temp_files_left_behind() -> Result<()> {
        let dir = tempdir()?;
        write_census(dir.path(), &sample().census)?;
        let mut names: Vec<String> = fs::read_dir(dir.path())?
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["census-AB.json", "census-M.json"]);
        Ok(())
    }

    #[test]
    fn test_failed_serialization_removes_temp_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("broken.json");
        // JSON object keys must be strings
        let mut bad: BTreeMap<(u8, u8), u8> = BTreeMap::new();
        bad.insert((1, 2), 3);

        assert!(write_json_pretty(&path, &bad).is_err());
        assert!(!path.exists());
        assert_eq!(fs::read_dir(dir.path())?.count(), 0);
        Ok(())
    }

    #[test]
    fn test_unwritable_dir_errors() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");
        assert!(write_taxonomy(&missing, &OacTaxonomy::new()).is_err());
    }
}
