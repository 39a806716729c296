//! Hierarchy queries for cascading address selection.
//!
//! Every query is a pure read of an immutable [`crate::store::AddressStore`]
//! and returns records sorted by name.

mod collate;
mod geographic;
mod resolver;

pub use collate::{compare_names, CollationKey};
pub use resolver::{HierarchyResolver, ProvincesByRegion};
