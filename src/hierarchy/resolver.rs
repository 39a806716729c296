//! Cascading region → province → city/municipality → barangay queries.

use serde::{Serialize, Serializer};
use tracing::debug;

use super::collate::sort_by_name;
use crate::code::{
    same_segment, zero_filled, BARANGAY_FALLBACK_PREFIX, CITY_MUN_PREFIX, NO_PROVINCE_CODE,
    NO_PROVINCE_NAME, NO_PROVINCE_REGION_CODE, PROVINCE_PREFIX, REGION_PREFIX,
};
use crate::models::{AddressRecord, GeographicLevel};
use crate::store::AddressStore;

/// Result of a province query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvincesByRegion<'a> {
    /// Provinces to offer, possibly led by the "no province" option
    Provinces(Vec<&'a AddressRecord>),
    /// The region has no province level; go straight to cities/municipalities
    NoProvince,
}

impl<'a> ProvincesByRegion<'a> {
    pub fn is_no_province(&self) -> bool {
        matches!(self, ProvincesByRegion::NoProvince)
    }

    pub fn provinces(&self) -> Option<&[&'a AddressRecord]> {
        match self {
            ProvincesByRegion::Provinces(list) => Some(list),
            ProvincesByRegion::NoProvince => None,
        }
    }
}

/// Lists serialize as arrays, the marker as the bare "-NO PROVINCE-" string.
impl Serialize for ProvincesByRegion<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ProvincesByRegion::Provinces(list) => list.serialize(serializer),
            ProvincesByRegion::NoProvince => serializer.serialize_str(NO_PROVINCE_NAME),
        }
    }
}

/// Read-only query view over an [`AddressStore`].
#[derive(Clone, Copy)]
pub struct HierarchyResolver<'a> {
    pub(super) store: &'a AddressStore,
}

impl<'a> HierarchyResolver<'a> {
    pub fn new(store: &'a AddressStore) -> Self {
        Self { store }
    }

    fn level(&self, level: GeographicLevel) -> impl Iterator<Item = &'a AddressRecord> {
        self.store.records(level).iter().map(|r| r.as_ref())
    }

    fn cities_and_muns(&self) -> impl Iterator<Item = &'a AddressRecord> {
        self.level(GeographicLevel::City)
            .chain(self.level(GeographicLevel::Municipality))
    }

    /// All regions, sorted by name
    pub fn regions(&self) -> Vec<&'a AddressRecord> {
        let mut regions: Vec<_> = self.level(GeographicLevel::Region).collect();
        sort_by_name(&mut regions);
        regions
    }

    /// Provinces in a region.
    ///
    /// Without a region, every province is returned sorted by name with the
    /// "no province" option always first. The capital region yields the
    /// [`ProvincesByRegion::NoProvince`] marker instead of a list.
    pub fn provinces_by_region(&self, region_code: Option<&str>) -> ProvincesByRegion<'a> {
        let region_code = match region_code.filter(|c| !c.is_empty()) {
            Some(code) => code,
            None => {
                let mut provinces: Vec<_> = self.level(GeographicLevel::Province).collect();
                sort_by_name(&mut provinces);
                provinces.insert(0, self.store.no_province());
                return ProvincesByRegion::Provinces(provinces);
            }
        };

        if region_code == NO_PROVINCE_REGION_CODE {
            return ProvincesByRegion::NoProvince;
        }

        let mut provinces: Vec<_> = self
            .level(GeographicLevel::Province)
            .filter(|p| same_segment(&p.code, region_code, REGION_PREFIX))
            .collect();
        sort_by_name(&mut provinces);
        ProvincesByRegion::Provinces(provinces)
    }

    /// Cities and municipalities geographically located in a province.
    ///
    /// Includes HUCs whose geographic province is `province_code` even though
    /// their own code places them outside it. The "no province" code selects
    /// by region instead, defaulting to the capital region. An empty code
    /// means nothing has been chosen yet and yields nothing.
    pub fn cities_and_muns_by_province(
        &self,
        province_code: &str,
        region_code: Option<&str>,
    ) -> Vec<&'a AddressRecord> {
        if province_code == NO_PROVINCE_CODE {
            let region_code = region_code
                .filter(|c| !c.is_empty())
                .unwrap_or(NO_PROVINCE_REGION_CODE);
            let mut found: Vec<_> = self
                .cities_and_muns()
                .filter(|r| same_segment(&r.code, region_code, REGION_PREFIX))
                .collect();
            sort_by_name(&mut found);
            return found;
        }

        if province_code.is_empty() {
            return Vec::new();
        }

        let mut found: Vec<_> = self
            .cities_and_muns()
            .filter(|r| same_segment(&r.code, province_code, PROVINCE_PREFIX))
            .collect();

        let hucs = self
            .level(GeographicLevel::City)
            .filter(|c| c.is_huc() && !same_segment(&c.code, province_code, PROVINCE_PREFIX))
            .filter(|c| {
                self.geographic_province(&c.code)
                    .is_some_and(|p| p.code == province_code)
            });
        found.extend(hucs);

        sort_by_name(&mut found);
        found
    }

    /// Barangays in a city or municipality, sorted by name.
    ///
    /// Some cities have their barangays coded under a sibling seventh digit
    /// (Manila is the known case), so a six-character match is tried only
    /// when the seven-character match finds nothing.
    pub fn barangays_by_city_or_mun(&self, city_mun_code: &str) -> Vec<&'a AddressRecord> {
        let mut found = self.barangays_with_prefix(city_mun_code, CITY_MUN_PREFIX);

        if found.is_empty() {
            debug!(
                "No barangays under {} at {} digits, retrying at {}",
                city_mun_code, CITY_MUN_PREFIX, BARANGAY_FALLBACK_PREFIX
            );
            found = self.barangays_with_prefix(city_mun_code, BARANGAY_FALLBACK_PREFIX);
        }

        sort_by_name(&mut found);
        found
    }

    fn barangays_with_prefix(&self, code: &str, n: usize) -> Vec<&'a AddressRecord> {
        self.level(GeographicLevel::Barangay)
            .filter(|b| same_segment(&b.code, code, n))
            .collect()
    }

    /// Region containing a province, for province-first selection flows
    pub fn region_by_province(&self, province_code: &str) -> Option<&'a AddressRecord> {
        let province = self.store.get(province_code)?;
        if province.level != GeographicLevel::Province {
            return None;
        }
        self.store.get(&zero_filled(province_code, REGION_PREFIX))
    }
}
