use serde::Deserialize;
use serde::Serialize;

/// Training summary shipped alongside the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    model_name: String,
    test_r2: f64,
    test_rmse: f64,
    test_mae: f64,
    training_samples: u64,
}

impl Metadata {
    pub fn new(
        model_name: String,
        test_r2: f64,
        test_rmse: f64,
        test_mae: f64,
        training_samples: u64,
    ) -> Self {
        Self {
            model_name,
            test_r2,
            test_rmse,
            test_mae,
            training_samples,
        }
    }
    pub fn model_name(&self) -> &str {
        &self.model_name
    }
    pub fn test_r2(&self) -> f64 {
        self.test_r2
    }
    pub fn test_rmse(&self) -> f64 {
        self.test_rmse
    }
    pub fn test_mae(&self) -> f64 {
        self.test_mae
    }
    pub fn training_samples(&self) -> u64 {
        self.training_samples
    }
    pub fn validate(&self) -> Result<(), String> {
        match [self.test_r2, self.test_rmse, self.test_mae]
            .iter()
            .all(|x| x.is_finite())
        {
            true => Ok(()),
            false => Err("metadata scores must be finite".to_string()),
        }
    }
}
