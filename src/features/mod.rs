//! House feature schema.
//!
//! - [`Field`] — one of the 14 named inputs, with its type and valid range
//! - [`FeatureVector`] — a fully validated set of all 14 inputs
//! - [`FieldErrors`] — per-field rejection messages for invalid input
pub mod errors;
pub mod field;
pub mod vector;

pub use errors::*;
pub use field::*;
pub use vector::*;
