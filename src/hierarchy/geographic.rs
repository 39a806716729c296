//! Geographic parent province for Highly Urbanized Cities.
//!
//! An HUC is administratively independent, so its own code does not name a
//! province. Its correspondence code does: the province whose correspondence
//! code shares the same prefix is where the city actually lies.

use tracing::debug;

use super::HierarchyResolver;
use crate::code::{same_segment, CORRESPONDENCE_FALLBACK_PREFIX, CORRESPONDENCE_PREFIX};
use crate::models::{AddressRecord, GeographicLevel};

impl<'a> HierarchyResolver<'a> {
    /// Province an HUC lies in, or `None` for anything that is not an HUC
    /// with a correspondence code.
    ///
    /// Matches on five correspondence digits first and only then on four.
    /// When several provinces match, the first listed wins.
    pub(crate) fn geographic_province(&self, city_code: &str) -> Option<&'a AddressRecord> {
        let city = self.store.get(city_code)?;
        if !city.is_huc() {
            return None;
        }
        let correspondence = city.correspondence_code.as_deref()?;

        self.province_by_correspondence(correspondence, CORRESPONDENCE_PREFIX)
            .or_else(|| {
                debug!(
                    "No province for {} at {} correspondence digits, retrying at {}",
                    city_code, CORRESPONDENCE_PREFIX, CORRESPONDENCE_FALLBACK_PREFIX
                );
                self.province_by_correspondence(correspondence, CORRESPONDENCE_FALLBACK_PREFIX)
            })
    }

    fn province_by_correspondence(
        &self,
        correspondence: &str,
        n: usize,
    ) -> Option<&'a AddressRecord> {
        self.store
            .records(GeographicLevel::Province)
            .iter()
            .map(|p| p.as_ref())
            .find(|p| {
                p.correspondence_code
                    .as_deref()
                    .is_some_and(|c| same_segment(c, correspondence, n))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CityClass;
    use crate::store::fixtures::sample_store;
    use crate::store::AddressStore;

    #[test]
    fn test_five_digit_match() {
        let store = sample_store();
        let resolver = HierarchyResolver::new(&store);
        let province = resolver.geographic_province("1380600000").unwrap();
        assert_eq!(province.code, "0480000000");
    }

    #[test]
    fn test_four_digit_fallback() {
        let store = sample_store();
        let resolver = HierarchyResolver::new(&store);
        let province = resolver.geographic_province("0431600000").unwrap();
        assert_eq!(province.name, "Laguna");
    }

    #[test]
    fn test_not_resolvable() {
        let store = sample_store();
        let resolver = HierarchyResolver::new(&store);

        // Missing code
        assert!(resolver.geographic_province("0000000000").is_none());
        // Component city
        assert!(resolver.geographic_province("0102805000").is_none());
        // HUC without correspondence code
        assert!(resolver.geographic_province("1380700000").is_none());
        // HUC whose correspondence code matches no province
        assert!(resolver.geographic_province("1380800000").is_none());
        // Province, not a city
        assert!(resolver.geographic_province("0402100000").is_none());
    }

    #[test]
    fn test_huc_tag_on_non_city_is_ignored() {
        let store = AddressStore::from_records(vec![
            AddressRecord::new("0480000000", "Quezon", GeographicLevel::Province)
                .with_correspondence_code("0485800000"),
            AddressRecord::new("0480001000", "Agdangan", GeographicLevel::Municipality)
                .with_correspondence_code("0485800000")
                .with_city_class(CityClass::HighlyUrbanized),
        ]);
        let resolver = HierarchyResolver::new(&store);
        assert!(resolver.geographic_province("0480001000").is_none());
    }

    #[test]
    fn test_ambiguous_match_takes_first_listed() {
        // Two provinces sharing a correspondence prefix is a data anomaly;
        // the first in list order is returned, which is not a stable contract.
        let store = AddressStore::from_records(vec![
            AddressRecord::new("0480000000", "Quezon", GeographicLevel::Province)
                .with_correspondence_code("0485800000"),
            AddressRecord::new("0490000000", "Quezon Duplicate", GeographicLevel::Province)
                .with_correspondence_code("0485899999"),
            AddressRecord::new("1380600000", "City of Manila", GeographicLevel::City)
                .with_correspondence_code("0485800000")
                .with_city_class(CityClass::HighlyUrbanized),
        ]);
        let resolver = HierarchyResolver::new(&store);
        assert_eq!(
            resolver.geographic_province("1380600000").unwrap().code,
            "0480000000"
        );
    }
}
