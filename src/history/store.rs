use super::*;
use crate::Price;
use crate::features::FeatureVector;

/// Storage for prediction history.
///
/// Appends are single-row and atomic in the backend; nothing here is ever
/// updated or deleted. Listing is newest first.
#[async_trait::async_trait]
pub trait History: Send + Sync {
    /// Persist one prediction, returning its new id.
    async fn append(&self, features: &FeatureVector, price: Price) -> Result<RecordId, StoreError>;
    /// The `limit` most recent records, newest first. The limit is passed
    /// to the backend unchanged.
    async fn list(&self, limit: i64) -> Result<Vec<Record>, StoreError>;
    /// Total number of records.
    async fn count(&self) -> Result<i64, StoreError>;
}
