//! HTTP interface.
//!
//! - [`handlers`] — the four endpoints
//! - [`response`] — JSON envelopes
//! - [`HistoryQuery`] — `/history/` query string
//! - [`Server`] — actix-web server wiring
pub mod handlers;
pub mod query;
pub mod response;
pub mod server;

pub use query::*;
pub use response::*;
pub use server::*;

/// Name reported by the health endpoint.
pub const SERVICE: &str = "House Price Prediction API";
