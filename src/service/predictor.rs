use super::*;
use crate::artifact::Artifact;
use crate::features::FeatureVector;
use std::path::Path;

/// The model service.
///
/// Built once at startup from a fully validated [`Artifact`] and handed to
/// every request by shared reference. Holds no interior mutability, so
/// concurrent reads need no coordination.
#[derive(Debug, Clone)]
pub struct Predictor(Artifact);

impl From<Artifact> for Predictor {
    fn from(artifact: Artifact) -> Self {
        Self(artifact)
    }
}

impl Predictor {
    /// Load the artifact bundle under `dir`. Any failure here must stop the
    /// process before it accepts traffic.
    pub fn load(dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let predictor = Self::from(Artifact::load(dir)?);
        log::info!("model loaded: {}", predictor.0.metadata().model_name());
        log::info!("model kind: {}", predictor.0.regressor().label());
        log::info!("test R2 score: {:.4}", predictor.0.metadata().test_r2());
        Ok(predictor)
    }

    /// Score one validated feature vector.
    ///
    /// Columns are taken in the artifact's feature-name order, whatever
    /// order the caller supplied them in.
    pub fn predict(&self, features: &FeatureVector) -> Result<Prediction, PredictError> {
        let ref row = features.row(self.0.columns());
        let price = self.0.score(row)?;
        if !price.is_finite() {
            return Err(PredictError::NonFinite(price));
        }
        log::debug!("predicted {:.2}", price);
        Ok(Prediction::new(
            price,
            self.0.metadata().model_name().to_string(),
            self.0.metadata().test_r2(),
            *features,
        ))
    }

    pub fn info(&self) -> ModelInfo {
        let metadata = self.0.metadata();
        ModelInfo {
            model_name: metadata.model_name().to_string(),
            test_r2_score: metadata.test_r2(),
            test_rmse: metadata.test_rmse(),
            test_mae: metadata.test_mae(),
            training_samples: metadata.training_samples(),
            features: self.0.names(),
        }
    }

    /// A constructed predictor always holds a validated model.
    pub fn is_loaded(&self) -> bool {
        !self.0.columns().is_empty()
    }
}
