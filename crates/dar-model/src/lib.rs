//! Domain types for the property price estimator.
//!
//! Everything a submission touches lives here: the property enums, the
//! per-submission query, the fixed-schema feature row handed to the model,
//! and the estimate the user gets back.

pub mod currency;
pub mod enums;
pub mod estimate;
pub mod query;

pub use currency::format_tnd;
pub use enums::{ListingType, PropertyCategory};
pub use estimate::{AnomalyWarning, PriceContext, PriceEstimate};
pub use query::{FeatureRow, PropertyQuery};
