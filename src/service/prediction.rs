use crate::Price;
use crate::features::FeatureVector;
use serde::Serialize;

/// Result of scoring one feature vector.
///
/// `confidence_score` is the model's held-out test R², identical for every
/// prediction made by the same artifact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    predicted_price: Price,
    model_name: String,
    confidence_score: f64,
    features_used: FeatureVector,
}

impl Prediction {
    pub fn new(
        predicted_price: Price,
        model_name: String,
        confidence_score: f64,
        features_used: FeatureVector,
    ) -> Self {
        Self {
            predicted_price,
            model_name,
            confidence_score,
            features_used,
        }
    }
    pub fn predicted_price(&self) -> Price {
        self.predicted_price
    }
    pub fn model_name(&self) -> &str {
        &self.model_name
    }
    pub fn confidence_score(&self) -> f64 {
        self.confidence_score
    }
    pub fn features_used(&self) -> &FeatureVector {
        &self.features_used
    }
}
