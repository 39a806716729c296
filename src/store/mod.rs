//! Dataset store: the by-code and by-level indices plus their loader.

mod index;
mod loader;

pub use index::AddressStore;
pub use loader::{compressed_path, load_snapshot, LevelSnapshot, BY_CODE_FILE, BY_LEVEL_FILE};

#[cfg(test)]
pub(crate) mod fixtures {
    use super::AddressStore;
    use crate::models::{AddressRecord, CityClass, GeographicLevel};

    fn region(code: &str, name: &str) -> AddressRecord {
        AddressRecord::new(code, name, GeographicLevel::Region)
    }

    fn province(code: &str, name: &str, correspondence: &str) -> AddressRecord {
        AddressRecord::new(code, name, GeographicLevel::Province)
            .with_correspondence_code(correspondence)
    }

    fn city(code: &str, name: &str, class: &str) -> AddressRecord {
        AddressRecord::new(code, name, GeographicLevel::City)
            .with_city_class(CityClass::from(class.to_string()))
    }

    fn huc(code: &str, name: &str, correspondence: &str) -> AddressRecord {
        city(code, name, "HUC").with_correspondence_code(correspondence)
    }

    fn municipality(code: &str, name: &str) -> AddressRecord {
        AddressRecord::new(code, name, GeographicLevel::Municipality)
    }

    fn barangay(code: &str, name: &str) -> AddressRecord {
        AddressRecord::new(code, name, GeographicLevel::Barangay)
    }

    /// A small slice of the national dataset covering the irregular cases.
    pub fn sample_store() -> AddressStore {
        AddressStore::from_records(vec![
            region("0400000000", "Region IV-A (CALABARZON)"),
            region("1300000000", "National Capital Region (NCR)"),
            region("0100000000", "Region I (Ilocos Region)"),
            region("0300000000", "Region III (Central Luzon)"),
            province("0480000000", "Quezon", "0485800000"),
            province("0102800000", "Ilocos Norte", "012800000"),
            province("0403400000", "Laguna", "043500000"),
            province("0402100000", "Cavite", "042100000"),
            province("0105500000", "Pangasinan", "015500000"),
            // Ilocos Norte
            city("0102805000", "City of Batac", "CC"),
            municipality("0102801000", "Adams"),
            barangay("0102805002", "Baay"),
            barangay("0102805001", "Ablan Pob."),
            barangay("0102801001", "Adams Poblacion"),
            barangay("0102806001", "Unrelated Barangay"),
            // Cavite
            city("0402103000", "Bacoor City", "CC"),
            municipality("0402107000", "Alfonso"),
            // Laguna, plus an HUC only matching on four correspondence digits
            municipality("0403401000", "Alaminos"),
            huc("0431600000", "Lucena City", "0435900000"),
            // Quezon
            municipality("0480001000", "Agdangan"),
            // NCR
            huc("1380600000", "City of Manila", "0485800000"),
            city("1380700000", "City of Mandaluyong", "HUC"),
            huc("1380800000", "City of Parañaque", "137600000"),
            huc("1380500000", "Pasay City", "137605000"),
            municipality("1381701000", "Pateros"),
            barangay("1380601002", "Barangay 2"),
            barangay("1380601001", "Barangay 1"),
            barangay("1380602001", "Barangay 10"),
            barangay("1381701001", "Aguho"),
        ])
    }
}
