//! Prediction serving.
//!
//! - [`Predictor`] — immutable model handle shared by every request
//! - [`Prediction`] — one scored feature vector
//! - [`ModelInfo`] — static description of the loaded model
//! - [`PredictError`] — failure while aligning, scaling or scoring
mod error;
mod info;
mod prediction;
mod predictor;

pub use error::*;
pub use info::*;
pub use prediction::*;
pub use predictor::*;
