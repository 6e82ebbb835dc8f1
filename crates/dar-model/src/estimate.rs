//! The outcome of a successful prediction.

use serde::{Deserialize, Serialize};

use crate::currency::format_tnd;
use crate::enums::ListingType;

/// What kind of price the estimate represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceContext {
    MonthlyRental,
    Purchase,
}

impl PriceContext {
    /// Context for a listing type: rentals estimate a monthly price,
    /// sales a one-off purchase price.
    pub fn for_listing(listing_type: ListingType) -> Self {
        match listing_type {
            ListingType::ForRent => PriceContext::MonthlyRental,
            ListingType::ForSale => PriceContext::Purchase,
        }
    }

    /// User-facing description of the estimate.
    pub fn label(&self) -> &'static str {
        match self {
            PriceContext::MonthlyRental => "This is an estimated monthly rental price.",
            PriceContext::Purchase => "This is an estimated purchase price.",
        }
    }
}

/// Advisory flag attached when a prediction's magnitude looks implausible.
///
/// Never blocks the estimate; the price is still shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnomalyWarning {
    UnusuallyHighRent,
    UnusuallyLowSale,
}

impl AnomalyWarning {
    pub fn message(&self) -> &'static str {
        match self {
            AnomalyWarning::UnusuallyHighRent => {
                "The predicted rental price seems unusually high. Verify input details or model data."
            }
            AnomalyWarning::UnusuallyLowSale => {
                "The predicted sale price seems unusually low. Verify input details or model data."
            }
        }
    }
}

/// A point estimate produced for one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEstimate {
    /// Predicted price in Tunisian Dinar.
    pub price: f64,
    pub context: PriceContext,
    pub warning: Option<AnomalyWarning>,
}

impl PriceEstimate {
    /// Formats the price for display, e.g. `152,340.25 TND`.
    pub fn formatted_price(&self) -> String {
        format_tnd(self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_for_listing() {
        assert_eq!(
            PriceContext::for_listing(ListingType::ForRent),
            PriceContext::MonthlyRental
        );
        assert_eq!(
            PriceContext::for_listing(ListingType::ForSale),
            PriceContext::Purchase
        );
    }

    #[test]
    fn test_formatted_price_has_suffix() {
        let estimate = PriceEstimate {
            price: 1234.5,
            context: PriceContext::Purchase,
            warning: None,
        };
        assert_eq!(estimate.formatted_price(), "1,234.50 TND");
    }
}
