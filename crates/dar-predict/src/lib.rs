//! Model handle and prediction service.
//!
//! The model is consumed as a capability: anything implementing
//! [`Predictor`] can price a feature row. The bundled [`LinearModel`] is the
//! JSON export of the trained one-hot + linear-regression pipeline.

pub mod model;
pub mod service;

pub use model::{LinearModel, ModelLoadError, PredictError, Predictor};
pub use service::{EstimateError, estimate};
