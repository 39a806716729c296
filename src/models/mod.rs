//! Core data models for the address dataset.

pub mod level;
pub mod record;

pub use level::GeographicLevel;
pub use record::{AddressRecord, CityClass};
