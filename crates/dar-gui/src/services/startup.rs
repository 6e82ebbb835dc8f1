//! Startup loading of the dataset and the model.
//!
//! Both loads happen exactly once, before the first frame. Either failure
//! is fatal to the session: the app opens on an error screen instead of
//! the form.

use anyhow::{Context, Result};
use std::path::Path;

use dar_ingest::{CityRegionIndex, load_city_region_index};
use dar_predict::LinearModel;

/// Listings dataset, resolved against the working directory.
pub const DATASET_PATH: &str = "cleaned_property_prices_tunisia.csv";

/// Trained model artifact, resolved against the working directory.
pub const MODEL_PATH: &str = "property_price_model.json";

/// Everything the form needs, loaded once and immutable afterwards.
pub struct StartupResources {
    pub index: CityRegionIndex,
    pub model: LinearModel,
}

/// Loads the model and the dataset from their fixed paths.
pub fn load_resources() -> Result<StartupResources> {
    let model = LinearModel::load(Path::new(MODEL_PATH)).with_context(|| {
        format!("Model file '{MODEL_PATH}' not found. Please ensure it is in the working directory.")
    })?;

    let index = load_city_region_index(Path::new(DATASET_PATH)).with_context(|| {
        format!(
            "Dataset file '{DATASET_PATH}' could not be loaded. Please ensure it is in the working directory."
        )
    })?;

    Ok(StartupResources { index, model })
}
