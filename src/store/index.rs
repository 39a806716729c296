//! In-memory indices over the address dataset.

use hashbrown::HashMap;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

use super::loader::LevelSnapshot;
use crate::models::{AddressRecord, GeographicLevel};

/// Immutable by-code and by-level indices, built once per process.
pub struct AddressStore {
    by_code: HashMap<String, Arc<AddressRecord>>,
    /// Records grouped by level; order within a level is not meaningful
    by_level: BTreeMap<GeographicLevel, Vec<Arc<AddressRecord>>>,
    no_province: AddressRecord,
}

impl AddressStore {
    /// Build both indices from a flat list of records
    pub fn from_records(records: impl IntoIterator<Item = AddressRecord>) -> Self {
        let records: Vec<Arc<AddressRecord>> = records.into_iter().map(Arc::new).collect();

        let by_code = records
            .iter()
            .map(|r| (r.code.clone(), Arc::clone(r)))
            .collect();

        let mut by_level: BTreeMap<GeographicLevel, Vec<Arc<AddressRecord>>> = BTreeMap::new();
        for record in &records {
            if GeographicLevel::indexed().contains(&record.level) {
                by_level
                    .entry(record.level)
                    .or_default()
                    .push(Arc::clone(record));
            }
        }

        Self::build(by_code, by_level)
    }

    /// Build from the two parsed snapshot documents.
    ///
    /// A record listed under a by-level key takes that key's level.
    pub fn from_snapshots(
        by_code: HashMap<String, AddressRecord>,
        by_level: LevelSnapshot,
    ) -> Self {
        let by_code = by_code
            .into_iter()
            .map(|(code, record)| (code, Arc::new(record)))
            .collect();

        let by_level = by_level
            .into_levels()
            .into_iter()
            .map(|(level, records)| {
                let records = records
                    .into_iter()
                    .map(|mut r| {
                        r.level = level;
                        Arc::new(r)
                    })
                    .collect();
                (level, records)
            })
            .collect();

        Self::build(by_code, by_level)
    }

    fn build(
        by_code: HashMap<String, Arc<AddressRecord>>,
        by_level: BTreeMap<GeographicLevel, Vec<Arc<AddressRecord>>>,
    ) -> Self {
        info!("Address store built with {} coded records", by_code.len());
        for (level, records) in &by_level {
            info!("  {:?}: {} records", level, records.len());
        }

        Self {
            by_code,
            by_level,
            no_province: AddressRecord::no_province(),
        }
    }

    /// Look up a record by its exact code
    pub fn get(&self, code: &str) -> Option<&AddressRecord> {
        self.by_code.get(code).map(|r| r.as_ref())
    }

    /// All records listed for a level
    pub fn records(&self, level: GeographicLevel) -> &[Arc<AddressRecord>] {
        self.by_level.get(&level).map_or(&[], Vec::as_slice)
    }

    /// The synthetic "no province" record
    pub fn no_province(&self) -> &AddressRecord {
        &self.no_province
    }

    /// Number of records in the by-code index
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}
