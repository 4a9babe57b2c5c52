use crate::Price;
use crate::features::FeatureVector;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

/// Server-assigned record identifier.
pub type RecordId = i64;

/// One persisted prediction. Serializes flat: the id, the 14 feature
/// fields, the price and the creation time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    id: RecordId,
    #[serde(flatten)]
    features: FeatureVector,
    predicted_price: Price,
    created_at: DateTime<Utc>,
}

impl Record {
    pub fn new(
        id: RecordId,
        features: FeatureVector,
        predicted_price: Price,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            features,
            predicted_price,
            created_at,
        }
    }
    pub fn id(&self) -> RecordId {
        self.id
    }
    pub fn features(&self) -> &FeatureVector {
        &self.features
    }
    pub fn predicted_price(&self) -> Price {
        self.predicted_price
    }
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
