//! Dataset ingestion for the property price estimator.
//!
//! Reads the listings CSV once at startup and derives the city/region
//! lookup that drives the cascading selectors in the form.

pub mod index;
pub mod loader;

pub use index::CityRegionIndex;
pub use loader::{IngestError, load_city_region_index};
