//! The opaque predictor capability and the bundled linear model.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use dar_model::FeatureRow;

/// Per-request inference failure. Recoverable: the user can correct the
/// inputs and resubmit; the process keeps running.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("the model was not trained on {column} value '{value}'")]
    UnknownLevel { column: &'static str, value: String },
}

/// Startup failure while loading the model artifact. Fatal: the form is
/// never shown without a working model.
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("failed to open model file '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse model file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Capability for pricing a single feature row.
///
/// Any concrete predictor satisfying this is substitutable; nothing in the
/// application depends on the model's internals.
pub trait Predictor {
    fn predict(&self, row: &FeatureRow) -> Result<f64, PredictError>;
}

/// Linear weights for the numeric features, named per the training schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericWeights {
    pub room_count: f64,
    pub bathroom_count: f64,
    pub size: f64,
}

/// The trained pipeline exported as JSON: an intercept, one weight per
/// numeric feature, and one weight per observed level of each categorical
/// feature (the one-hot encoding, flattened).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub intercept: f64,
    pub numeric: NumericWeights,
    pub categorical: BTreeMap<String, BTreeMap<String, f64>>,
}

impl LinearModel {
    /// Loads the model artifact from disk. Called once at process start.
    pub fn load(path: &Path) -> Result<Self, ModelLoadError> {
        let display_path = path.display().to_string();
        let file = File::open(path).map_err(|source| ModelLoadError::Open {
            path: display_path.clone(),
            source,
        })?;
        let model: LinearModel =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| {
                ModelLoadError::Parse {
                    path: display_path.clone(),
                    source,
                }
            })?;
        tracing::info!(
            "loaded model '{}': {} categorical columns",
            display_path,
            model.categorical.len()
        );
        Ok(model)
    }

    /// Weight contribution for one categorical cell.
    ///
    /// A column absent from the artifact contributes nothing (the training
    /// pipeline dropped it); a level unseen at training time is an error,
    /// matching a strict one-hot encoder.
    fn level_weight(&self, column: &'static str, value: &str) -> Result<f64, PredictError> {
        let Some(levels) = self.categorical.get(column) else {
            return Ok(0.0);
        };
        levels
            .get(value)
            .copied()
            .ok_or_else(|| PredictError::UnknownLevel {
                column,
                value: value.to_string(),
            })
    }
}

impl Predictor for LinearModel {
    fn predict(&self, row: &FeatureRow) -> Result<f64, PredictError> {
        let mut price = self.intercept
            + self.numeric.room_count * row.room_count
            + self.numeric.bathroom_count * row.bathroom_count
            + self.numeric.size * row.size;
        for (column, value) in row.categorical() {
            price += self.level_weight(column, value)?;
        }
        Ok(price)
    }
}
