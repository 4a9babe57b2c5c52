use serde::Serialize;

/// Static description of the loaded model, as served by `/model-info/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelInfo {
    pub model_name: String,
    pub test_r2_score: f64,
    pub test_rmse: f64,
    pub test_mae: f64,
    pub training_samples: u64,
    pub features: Vec<String>,
}
