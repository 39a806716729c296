//! Address record structure as stored in the PSGC snapshots.

use serde::{Deserialize, Deserializer, Serialize};

use super::GeographicLevel;
use crate::code::{NO_PROVINCE_CODE, NO_PROVINCE_NAME};

/// City classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CityClass {
    /// Highly Urbanized City ("HUC"), administratively independent of any province
    HighlyUrbanized,
    /// Any other class (component or independent component city), kept verbatim
    Other(String),
}

impl From<String> for CityClass {
    fn from(value: String) -> Self {
        if value == "HUC" {
            CityClass::HighlyUrbanized
        } else {
            CityClass::Other(value)
        }
    }
}

impl From<CityClass> for String {
    fn from(value: CityClass) -> Self {
        match value {
            CityClass::HighlyUrbanized => "HUC".to_string(),
            CityClass::Other(raw) => raw,
        }
    }
}

/// One row of the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRecord {
    /// Fixed-width hierarchical PSGC code
    #[serde(rename = "psgc")]
    pub code: String,

    pub name: String,

    /// Alternate code mapping an HUC to its geographic province
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correspondence_code: Option<String>,

    #[serde(
        rename = "geographicLevel",
        default,
        deserialize_with = "level_or_unknown",
        skip_serializing_if = "is_unknown"
    )]
    pub level: GeographicLevel,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_class: Option<CityClass>,
}

impl AddressRecord {
    pub fn new(code: impl Into<String>, name: impl Into<String>, level: GeographicLevel) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            correspondence_code: None,
            level,
            city_class: None,
        }
    }

    pub fn with_correspondence_code(mut self, code: impl Into<String>) -> Self {
        self.correspondence_code = Some(code.into());
        self
    }

    pub fn with_city_class(mut self, class: CityClass) -> Self {
        self.city_class = Some(class);
        self
    }

    /// The synthetic "no province" option offered alongside real provinces.
    ///
    /// It carries no level so it never passes for a real province.
    pub fn no_province() -> Self {
        Self::new(NO_PROVINCE_CODE, NO_PROVINCE_NAME, GeographicLevel::Unknown)
    }

    pub fn is_no_province(&self) -> bool {
        self.code == NO_PROVINCE_CODE
    }

    /// True for cities tagged as Highly Urbanized
    pub fn is_huc(&self) -> bool {
        self.level == GeographicLevel::City
            && matches!(self.city_class, Some(CityClass::HighlyUrbanized))
    }
}

fn level_or_unknown<'de, D>(deserializer: D) -> Result<GeographicLevel, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<GeographicLevel>::deserialize(deserializer)?.unwrap_or_default())
}

fn is_unknown(level: &GeographicLevel) -> bool {
    *level == GeographicLevel::Unknown
}
