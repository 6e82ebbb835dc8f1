//! Services used by the GUI

mod startup;

pub use startup::{DATASET_PATH, MODEL_PATH, StartupResources, load_resources};
