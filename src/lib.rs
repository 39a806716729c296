//! PSGC Address - cascading Philippine address lookup
//!
//! This library loads the region → province → city/municipality → barangay
//! dataset once and answers the queries a selection form needs, including
//! placing Highly Urbanized Cities under the province they lie in.

pub mod code;
pub mod error;
pub mod hierarchy;
pub mod models;
pub mod store;

pub use error::{AddressError, Result};
pub use hierarchy::{HierarchyResolver, ProvincesByRegion};
pub use models::{AddressRecord, CityClass, GeographicLevel};
pub use store::AddressStore;
