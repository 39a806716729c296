//! Geographic level tags used by PSGC records.

use serde::{Deserialize, Serialize};

/// PSGC `geographicLevel` mapping to semantic level names.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord,
)]
pub enum GeographicLevel {
    /// Region ("Reg")
    #[serde(rename = "Reg")]
    Region,
    /// Province ("Prov")
    #[serde(rename = "Prov")]
    Province,
    /// Legislative district of the capital region ("Dist")
    #[serde(rename = "Dist")]
    District,
    /// City ("City")
    #[serde(rename = "City")]
    City,
    /// Municipality ("Mun")
    #[serde(rename = "Mun")]
    Municipality,
    /// Sub-municipality of a city ("SubMun")
    #[serde(rename = "SubMun")]
    SubMunicipality,
    /// Special geographic area ("SGU")
    #[serde(rename = "SGU")]
    SpecialGeographicArea,
    /// Barangay ("Bgy")
    #[serde(rename = "Bgy")]
    Barangay,
    /// Missing or unrecognized tag
    #[default]
    #[serde(other)]
    Unknown,
}

impl GeographicLevel {
    /// Levels with their own list in the by-level snapshot, in hierarchical order.
    pub fn indexed() -> &'static [GeographicLevel] {
        &[
            GeographicLevel::Region,
            GeographicLevel::Province,
            GeographicLevel::City,
            GeographicLevel::Municipality,
            GeographicLevel::Barangay,
        ]
    }

    /// Get the snapshot tag for this level
    pub fn tag(&self) -> &'static str {
        match self {
            GeographicLevel::Region => "Reg",
            GeographicLevel::Province => "Prov",
            GeographicLevel::District => "Dist",
            GeographicLevel::City => "City",
            GeographicLevel::Municipality => "Mun",
            GeographicLevel::SubMunicipality => "SubMun",
            GeographicLevel::SpecialGeographicArea => "SGU",
            GeographicLevel::Barangay => "Bgy",
            GeographicLevel::Unknown => "",
        }
    }
}

impl std::fmt::Display for GeographicLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeographicLevel::Unknown => write!(f, "unknown"),
            other => write!(f, "{}", other.tag()),
        }
    }
}
