//! Trained model bundle.
//!
//! The bundle is produced by an external training job and lives in one
//! directory as four JSON documents. It is loaded once, validated as a
//! whole, and never mutated afterwards.
//!
//! - [`Regressor`] — fitted model parameters (linear or tree ensemble)
//! - [`Scaler`] — fitted feature transform applied before inference
//! - [`Metadata`] — display name and held-out test scores
//! - [`Artifact`] — all of the above plus the authoritative column order
mod bundle;
mod error;
mod metadata;
mod model;
mod scaler;
mod tree;

pub use bundle::*;
pub use error::*;
pub use metadata::*;
pub use model::*;
pub use scaler::*;
pub use tree::*;
