use super::*;
use crate::Price;
use crate::features::FeatureVector;
use chrono::Utc;
use tokio::sync::RwLock;

/// Process-local history. Contents are lost on shutdown.
#[derive(Debug, Default)]
pub struct Memory {
    rows: RwLock<Vec<Record>>,
}

#[async_trait::async_trait]
impl History for Memory {
    async fn append(&self, features: &FeatureVector, price: Price) -> Result<RecordId, StoreError> {
        let mut rows = self.rows.write().await;
        let id = rows.len() as RecordId + 1;
        rows.push(Record::new(id, *features, price, Utc::now()));
        Ok(id)
    }

    /// Negative limits are refused, as PostgreSQL refuses them.
    async fn list(&self, limit: i64) -> Result<Vec<Record>, StoreError> {
        if limit < 0 {
            return Err(StoreError::NegativeLimit(limit));
        }
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .rev()
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Ok(self.rows.read().await.len() as i64)
    }
}
