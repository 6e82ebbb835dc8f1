//! Type-safe enumerations for property listings.
//!
//! The dataset and the model artifact both identify categories and listing
//! types by the French strings used on Tunisian listing sites, so each enum
//! round-trips through its canonical string form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Property category as it appears in the listings dataset.
///
/// "Terrains et Fermes" existed in historical data but is intentionally not
/// offered: the trained model has no usable signal for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyCategory {
    Apartments,
    Villas,
    IndustrialPremises,
    Offices,
    VacationRentals,
    SharedHousing,
}

impl PropertyCategory {
    /// Returns the canonical dataset string for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyCategory::Apartments => "Appartements",
            PropertyCategory::Villas => "Villas",
            PropertyCategory::IndustrialPremises => "Locaux industriels",
            PropertyCategory::Offices => "Offices",
            PropertyCategory::VacationRentals => "Vacation Rentals",
            PropertyCategory::SharedHousing => "Shared Housing",
        }
    }

    /// All selectable categories, in the order the form presents them.
    pub fn all() -> &'static [PropertyCategory] {
        &[
            Self::Apartments,
            Self::Villas,
            Self::IndustrialPremises,
            Self::Offices,
            Self::VacationRentals,
            Self::SharedHousing,
        ]
    }
}

impl fmt::Display for PropertyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PropertyCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Appartements" => Ok(PropertyCategory::Apartments),
            "Villas" => Ok(PropertyCategory::Villas),
            "Locaux industriels" => Ok(PropertyCategory::IndustrialPremises),
            "Offices" => Ok(PropertyCategory::Offices),
            "Vacation Rentals" => Ok(PropertyCategory::VacationRentals),
            "Shared Housing" => Ok(PropertyCategory::SharedHousing),
            _ => Err(format!("Unknown property category: {s}")),
        }
    }
}

/// Whether the listing is offered for rent or for sale.
///
/// The dataset strings are French ("À Louer" / "À Vendre") and the model was
/// trained on those exact values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListingType {
    ForRent,
    ForSale,
}

impl ListingType {
    /// Returns the canonical dataset string for this listing type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingType::ForRent => "À Louer",
            ListingType::ForSale => "À Vendre",
        }
    }

    /// All listing types, in the order the form presents them.
    pub fn all() -> &'static [ListingType] {
        &[Self::ForRent, Self::ForSale]
    }
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ListingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "À Louer" => Ok(ListingType::ForRent),
            "À Vendre" => Ok(ListingType::ForSale),
            _ => Err(format!("Unknown listing type: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for category in PropertyCategory::all() {
            assert_eq!(
                category.as_str().parse::<PropertyCategory>().unwrap(),
                *category
            );
        }
    }

    #[test]
    fn test_listing_type_from_str() {
        assert_eq!("À Louer".parse::<ListingType>().unwrap(), ListingType::ForRent);
        assert_eq!("À Vendre".parse::<ListingType>().unwrap(), ListingType::ForSale);
        assert!("For Sale".parse::<ListingType>().is_err());
    }

    #[test]
    fn test_category_order_excludes_land() {
        // Six categories; "Terrains et Fermes" stays out of the form.
        assert_eq!(PropertyCategory::all().len(), 6);
        assert!("Terrains et Fermes".parse::<PropertyCategory>().is_err());
    }
}
