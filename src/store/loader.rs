//! Snapshot loading with gzip-first, plain-JSON fallback.

use flate2::read::GzDecoder;
use hashbrown::HashMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::AddressStore;
use crate::error::{AddressError, Result};
use crate::models::{AddressRecord, GeographicLevel};

/// Code-keyed snapshot file
pub const BY_CODE_FILE: &str = "by-psgc.json";

/// Level-keyed snapshot file
pub const BY_LEVEL_FILE: &str = "by-level.json";

/// Level-keyed snapshot document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LevelSnapshot {
    #[serde(default)]
    pub regions: Vec<AddressRecord>,
    #[serde(default)]
    pub provinces: Vec<AddressRecord>,
    #[serde(default)]
    pub cities: Vec<AddressRecord>,
    #[serde(default)]
    pub municipalities: Vec<AddressRecord>,
    #[serde(default)]
    pub barangays: Vec<AddressRecord>,
}

impl LevelSnapshot {
    pub fn into_levels(self) -> BTreeMap<GeographicLevel, Vec<AddressRecord>> {
        BTreeMap::from([
            (GeographicLevel::Region, self.regions),
            (GeographicLevel::Province, self.provinces),
            (GeographicLevel::City, self.cities),
            (GeographicLevel::Municipality, self.municipalities),
            (GeographicLevel::Barangay, self.barangays),
        ])
    }
}

/// Path of the gzip twin of a snapshot file (`<file>.gz`)
pub fn compressed_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".gz");
    PathBuf::from(name)
}

/// Load one snapshot document from `dir`.
///
/// The compressed twin is tried first; if it is absent or unreadable the
/// plain file is read instead. Failing both is an error.
pub fn load_snapshot<T: DeserializeOwned>(dir: &Path, file_name: &str) -> Result<T> {
    let path = dir.join(file_name);
    let gz_path = compressed_path(&path);

    if gz_path.exists() {
        match File::open(&gz_path)
            .map_err(AddressError::from)
            .and_then(|f| parse(GzDecoder::new(f)))
        {
            Ok(value) => {
                info!("Loaded {}", gz_path.display());
                return Ok(value);
            }
            Err(e) => warn!(
                "Failed to read {}: {}. Falling back to {}",
                gz_path.display(),
                e,
                path.display()
            ),
        }
    }

    let value = File::open(&path)
        .map_err(AddressError::from)
        .and_then(parse)
        .map_err(|e| AddressError::Snapshot {
            path: path.clone(),
            source: Box::new(e),
        })?;
    info!("Loaded {}", path.display());
    Ok(value)
}

fn parse<T: DeserializeOwned, R: Read>(reader: R) -> Result<T> {
    Ok(serde_json::from_reader(BufReader::new(reader))?)
}

impl AddressStore {
    /// Load both snapshots from a data directory and build the store
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        info!("Loading address snapshots from {}", dir.display());

        let by_code: HashMap<String, AddressRecord> = load_snapshot(dir, BY_CODE_FILE)?;
        let by_level: LevelSnapshot = load_snapshot(dir, BY_LEVEL_FILE)?;

        Ok(Self::from_snapshots(by_code, by_level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::fs;
    use std::io::Write;

    const BY_CODE: &str = r#"{
        "0100000000": {"psgc": "0100000000", "name": "Region I (Ilocos Region)", "geographicLevel": "Reg"},
        "0102800000": {"psgc": "0102800000", "name": "Ilocos Norte", "correspondenceCode": "012800000", "geographicLevel": "Prov"}
    }"#;

    const BY_LEVEL: &str = r#"{
        "regions": [{"psgc": "0100000000", "name": "Region I (Ilocos Region)"}],
        "provinces": [{"psgc": "0102800000", "name": "Ilocos Norte", "correspondenceCode": "012800000"}]
    }"#;

    fn write_gz(path: &Path, content: &str) {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(content.as_bytes()).unwrap();
        fs::write(path, encoder.finish().unwrap()).unwrap();
    }

    #[test]
    fn test_compressed_path() {
        assert_eq!(
            compressed_path(Path::new("data/by-psgc.json")),
            PathBuf::from("data/by-psgc.json.gz")
        );
    }

    #[test]
    fn test_load_plain_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(BY_CODE_FILE), BY_CODE).unwrap();
        fs::write(dir.path().join(BY_LEVEL_FILE), BY_LEVEL).unwrap();

        let store = AddressStore::load(dir.path()).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.records(GeographicLevel::Province).len(), 1);
    }

    #[test]
    fn test_load_compressed_only() {
        let dir = tempfile::tempdir().unwrap();
        write_gz(&compressed_path(&dir.path().join(BY_CODE_FILE)), BY_CODE);
        write_gz(&compressed_path(&dir.path().join(BY_LEVEL_FILE)), BY_LEVEL);

        let store = AddressStore::load(dir.path()).unwrap();
        assert_eq!(store.get("0102800000").unwrap().name, "Ilocos Norte");
        assert_eq!(store.records(GeographicLevel::Region).len(), 1);
    }

    #[test]
    fn test_compressed_is_preferred() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(BY_LEVEL_FILE);
        fs::write(&path, r#"{"regions": []}"#).unwrap();
        write_gz(&compressed_path(&path), BY_LEVEL);

        let snapshot: LevelSnapshot = load_snapshot(dir.path(), BY_LEVEL_FILE).unwrap();
        assert_eq!(snapshot.regions.len(), 1);
    }

    #[test]
    fn test_corrupt_compressed_falls_back_to_plain() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(BY_LEVEL_FILE);
        fs::write(&path, BY_LEVEL).unwrap();
        fs::write(compressed_path(&path), b"not gzip at all").unwrap();

        let snapshot: LevelSnapshot = load_snapshot(dir.path(), BY_LEVEL_FILE).unwrap();
        assert_eq!(snapshot.provinces.len(), 1);
    }

    #[test]
    fn test_missing_snapshot_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = AddressStore::load(dir.path());
        assert!(matches!(result, Err(AddressError::Snapshot { .. })));
    }

    #[test]
    fn test_unparsable_snapshot_fails() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(BY_LEVEL_FILE), "{ nope").unwrap();

        let result: Result<LevelSnapshot> = load_snapshot(dir.path(), BY_LEVEL_FILE);
        match result {
            Err(AddressError::Snapshot { path, source }) => {
                assert!(path.ends_with(BY_LEVEL_FILE));
                assert!(matches!(*source, AddressError::Json(_)));
            }
            other => panic!("expected snapshot error, got {:?}", other.map(|_| ())),
        }
    }
}
