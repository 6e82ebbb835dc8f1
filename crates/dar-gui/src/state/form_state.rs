//! Form state: the six inputs plus the last submission outcome.

use dar_ingest::CityRegionIndex;
use dar_model::{ListingType, PriceEstimate, PropertyCategory, PropertyQuery};
use dar_predict::{EstimateError, Predictor, estimate};

/// Current form selections and the outcome of the last submission.
///
/// Field changes alone never trigger a prediction; the values are only
/// read atomically when [`FormState::submit`] runs.
pub struct FormState {
    pub category: PropertyCategory,
    pub listing_type: ListingType,
    pub city: String,
    pub region: String,
    pub room_count: i32,
    pub bathroom_count: i32,
    pub size: f64,
    /// Outcome of the last submission, shown until the next one.
    pub outcome: Option<Result<PriceEstimate, EstimateError>>,
}

impl FormState {
    /// Initial form state: Tunis and "Autres villes" when the dataset has
    /// them, otherwise the alphabetically first city/region.
    pub fn new(index: &CityRegionIndex) -> Self {
        let city = index.default_city().unwrap_or_default().to_string();
        let region = index.default_region(&city).unwrap_or_default().to_string();
        Self {
            category: PropertyCategory::Apartments,
            listing_type: ListingType::ForRent,
            city,
            region,
            room_count: 2,
            bathroom_count: 1,
            size: 100.0,
            outcome: None,
        }
    }

    /// Switches the selected city, cascading the region selection back to
    /// that city's default. A no-op when the city is unchanged.
    pub fn select_city(&mut self, city: &str, index: &CityRegionIndex) {
        if self.city == city {
            return;
        }
        self.city = city.to_string();
        self.region = index.default_region(city).unwrap_or_default().to_string();
    }

    /// Captures the current selections as one query.
    pub fn query(&self) -> PropertyQuery {
        PropertyQuery {
            category: self.category,
            listing_type: self.listing_type,
            city: self.city.clone(),
            region: self.region.clone(),
            room_count: self.room_count,
            bathroom_count: self.bathroom_count,
            size: self.size,
        }
    }

    /// Runs one submission and stores its outcome for display.
    pub fn submit(&mut self, predictor: &dyn Predictor) {
        self.outcome = Some(estimate(&self.query(), predictor));
    }
}
