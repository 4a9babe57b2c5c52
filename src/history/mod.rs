//! Append-only prediction history.
//!
//! ## Core Types
//!
//! - [`Record`] — one persisted prediction
//! - [`History`] — async trait for appending and listing records
//! - [`StoreError`] — storage failure
//!
//! ## Backends
//!
//! - `tokio_postgres::Client` — the `prediction_history` table
//! - [`Memory`] — process-local store for tests and database-less runs
mod error;
mod memory;
mod postgres;
mod record;
mod store;

pub use error::*;
pub use memory::*;
pub use postgres::*;
pub use record::*;
pub use store::*;

/// Table holding one row per successful prediction.
#[rustfmt::skip]
pub const HISTORY: &str = "prediction_history";

/// Number of records returned when the caller names no limit.
pub const DEFAULT_LIMIT: i64 = 10;
