//! The per-submission prediction service.
//!
//! Pure and stateless: validate, build the feature row, invoke the
//! predictor, classify the result, attach any advisory warning. Nothing is
//! persisted; a failed submission simply surfaces its error.

use thiserror::Error;

use dar_model::{AnomalyWarning, ListingType, PriceContext, PriceEstimate, PropertyQuery};

use crate::model::Predictor;

/// Rental estimates above this are flagged as suspiciously high (TND).
const RENT_HIGH_TND: f64 = 10_000.0;

/// Sale estimates below this are flagged as suspiciously low (TND).
const SALE_LOW_TND: f64 = 10_000.0;

/// Why a submission produced no estimate. Terminal to the current request
/// only; the user corrects the form and resubmits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    #[error("Size must be greater than 0.")]
    NonPositiveSize,
    #[error("Room count and bathroom count cannot be negative.")]
    NegativeCounts,
    #[error("Error making prediction: {0}")]
    Prediction(String),
}

/// Prices one query against the given predictor.
///
/// Validation failures never reach the model. A predictor failure is
/// reported with its underlying description and never crashes the process.
pub fn estimate(
    query: &PropertyQuery,
    predictor: &dyn Predictor,
) -> Result<PriceEstimate, EstimateError> {
    if query.size <= 0.0 {
        return Err(EstimateError::NonPositiveSize);
    }
    if query.room_count < 0 || query.bathroom_count < 0 {
        return Err(EstimateError::NegativeCounts);
    }

    let row = query.feature_row();
    let price = predictor
        .predict(&row)
        .map_err(|e| EstimateError::Prediction(e.to_string()))?;

    let context = PriceContext::for_listing(query.listing_type);
    let warning = match query.listing_type {
        ListingType::ForRent if price > RENT_HIGH_TND => Some(AnomalyWarning::UnusuallyHighRent),
        ListingType::ForSale if price < SALE_LOW_TND => Some(AnomalyWarning::UnusuallyLowSale),
        _ => None,
    };

    Ok(PriceEstimate {
        price,
        context,
        warning,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PredictError, Predictor};
    use dar_model::{FeatureRow, PropertyCategory};
    use std::cell::Cell;

    /// Predictor returning a fixed price, counting its invocations.
    struct FixedPrice {
        price: f64,
        calls: Cell<u32>,
    }

    impl FixedPrice {
        fn new(price: f64) -> Self {
            Self {
                price,
                calls: Cell::new(0),
            }
        }
    }

    impl Predictor for FixedPrice {
        fn predict(&self, _row: &FeatureRow) -> Result<f64, PredictError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.price)
        }
    }

    /// Predictor that always fails, as a strict encoder would on an
    /// unseen level.
    struct AlwaysFails;

    impl Predictor for AlwaysFails {
        fn predict(&self, row: &FeatureRow) -> Result<f64, PredictError> {
            Err(PredictError::UnknownLevel {
                column: "city",
                value: row.city.clone(),
            })
        }
    }

    fn sample_query() -> PropertyQuery {
        PropertyQuery {
            category: PropertyCategory::Apartments,
            listing_type: ListingType::ForSale,
            city: "Tunis".to_string(),
            region: "Autres villes".to_string(),
            room_count: 2,
            bathroom_count: 1,
            size: 100.0,
        }
    }

    #[test]
    fn test_non_positive_size_skips_prediction() {
        let predictor = FixedPrice::new(1000.0);
        let mut query = sample_query();
        query.size = 0.0;

        let err = estimate(&query, &predictor).unwrap_err();
        assert_eq!(err, EstimateError::NonPositiveSize);
        assert_eq!(err.to_string(), "Size must be greater than 0.");
        assert_eq!(predictor.calls.get(), 0);
    }

    #[test]
    fn test_negative_counts_skip_prediction() {
        let predictor = FixedPrice::new(1000.0);
        let mut query = sample_query();
        query.room_count = -1;

        let err = estimate(&query, &predictor).unwrap_err();
        assert_eq!(err, EstimateError::NegativeCounts);
        assert_eq!(predictor.calls.get(), 0);

        let mut query = sample_query();
        query.bathroom_count = -2;
        assert_eq!(
            estimate(&query, &predictor).unwrap_err(),
            EstimateError::NegativeCounts
        );
    }

    #[test]
    fn test_valid_sale_query_is_priced() {
        let predictor = FixedPrice::new(250_000.0);
        let outcome = estimate(&sample_query(), &predictor).unwrap();

        assert_eq!(outcome.price, 250_000.0);
        assert_eq!(outcome.context, PriceContext::Purchase);
        assert_eq!(outcome.warning, None);
        assert_eq!(predictor.calls.get(), 1);
    }

    #[test]
    fn test_high_rental_price_gets_warning() {
        let predictor = FixedPrice::new(15_000.0);
        let mut query = sample_query();
        query.listing_type = ListingType::ForRent;

        let outcome = estimate(&query, &predictor).unwrap();
        assert_eq!(outcome.context, PriceContext::MonthlyRental);
        assert_eq!(outcome.warning, Some(AnomalyWarning::UnusuallyHighRent));
    }

    #[test]
    fn test_low_sale_price_gets_warning() {
        let predictor = FixedPrice::new(5_000.0);
        let outcome = estimate(&sample_query(), &predictor).unwrap();

        assert_eq!(outcome.context, PriceContext::Purchase);
        assert_eq!(outcome.warning, Some(AnomalyWarning::UnusuallyLowSale));
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        // Exactly 10 000 triggers neither warning.
        let predictor = FixedPrice::new(10_000.0);

        let mut rent = sample_query();
        rent.listing_type = ListingType::ForRent;
        assert_eq!(estimate(&rent, &predictor).unwrap().warning, None);

        assert_eq!(estimate(&sample_query(), &predictor).unwrap().warning, None);
    }

    #[test]
    fn test_predictor_failure_is_surfaced_not_fatal() {
        let err = estimate(&sample_query(), &AlwaysFails).unwrap_err();
        let EstimateError::Prediction(message) = err else {
            panic!("expected a prediction error");
        };
        assert!(message.contains("Tunis"));
    }

    #[test]
    fn test_moderate_rent_has_no_warning() {
        let predictor = FixedPrice::new(900.0);
        let mut query = sample_query();
        query.listing_type = ListingType::ForRent;

        let outcome = estimate(&query, &predictor).unwrap();
        assert_eq!(outcome.warning, None);
    }
}
