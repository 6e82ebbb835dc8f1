//! The per-submission query and the feature row derived from it.

use serde::{Deserialize, Serialize};

use crate::enums::{ListingType, PropertyCategory};

/// One property query, captured atomically when the user submits the form.
///
/// `region` is expected to belong to the city's region list; the cascading
/// selector in the form is what enforces that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyQuery {
    pub category: PropertyCategory,
    pub listing_type: ListingType,
    pub city: String,
    pub region: String,
    /// Number of rooms, 0 for non-residential properties.
    pub room_count: i32,
    /// Number of bathrooms, 0 for non-residential properties.
    pub bathroom_count: i32,
    /// Surface in square meters.
    pub size: f64,
}

impl PropertyQuery {
    /// Builds the fixed-schema row the model consumes.
    pub fn feature_row(&self) -> FeatureRow {
        FeatureRow {
            category: self.category.as_str().to_string(),
            room_count: f64::from(self.room_count),
            bathroom_count: f64::from(self.bathroom_count),
            size: self.size,
            listing_type: self.listing_type.as_str().to_string(),
            city: self.city.clone(),
            region: self.region.clone(),
        }
    }
}

/// The single row of features submitted to the model for inference.
///
/// Field order matches the training schema and must not change:
/// category, room_count, bathroom_count, size, type, city, region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    pub category: String,
    pub room_count: f64,
    pub bathroom_count: f64,
    pub size: f64,
    #[serde(rename = "type")]
    pub listing_type: String,
    pub city: String,
    pub region: String,
}

impl FeatureRow {
    /// Column names in training-schema order.
    pub const COLUMNS: [&'static str; 7] = [
        "category",
        "room_count",
        "bathroom_count",
        "size",
        "type",
        "city",
        "region",
    ];

    /// Categorical columns paired with their values, in schema order.
    pub fn categorical(&self) -> [(&'static str, &str); 4] {
        [
            ("category", self.category.as_str()),
            ("type", self.listing_type.as_str()),
            ("city", self.city.as_str()),
            ("region", self.region.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_column_order_is_fixed() {
        assert_eq!(
            FeatureRow::COLUMNS,
            [
                "category",
                "room_count",
                "bathroom_count",
                "size",
                "type",
                "city",
                "region"
            ]
        );
    }

    #[test]
    fn test_feature_row_matches_query() {
        let row = sample_query().feature_row();
        assert_eq!(row.category, "Appartements");
        assert_eq!(row.room_count, 2.0);
        assert_eq!(row.bathroom_count, 1.0);
        assert_eq!(row.size, 100.0);
        assert_eq!(row.listing_type, "À Vendre");
        assert_eq!(row.city, "Tunis");
        assert_eq!(row.region, "Autres villes");
    }

    #[test]
    fn test_serialized_row_uses_training_schema() {
        let json = serde_json::to_string(&sample_query().feature_row()).unwrap();

        // Every training column appears under its schema name, in order;
        // in particular `listing_type` goes over the wire as "type".
        let positions: Vec<usize> = FeatureRow::COLUMNS
            .iter()
            .map(|column| json.find(&format!("\"{column}\"")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(!json.contains("listing_type"));
    }

    #[test]
    fn test_categorical_pairs_in_schema_order() {
        let row = sample_query().feature_row();
        let pairs = row.categorical();
        assert_eq!(pairs[0], ("category", "Appartements"));
        assert_eq!(pairs[1], ("type", "À Vendre"));
        assert_eq!(pairs[2], ("city", "Tunis"));
        assert_eq!(pairs[3], ("region", "Autres villes"));
    }
}
