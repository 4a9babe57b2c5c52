use crate::history::Record;
use crate::history::RecordId;
use crate::service::ModelInfo;
use crate::service::Prediction;
use serde::Serialize;

/// `POST /predict/` success body.
#[derive(Debug, Serialize)]
pub struct Predicted {
    success: bool,
    data: Prediction,
    history_id: RecordId,
}

impl Predicted {
    pub fn new(data: Prediction, history_id: RecordId) -> Self {
        Self {
            success: true,
            data,
            history_id,
        }
    }
}

/// `GET /model-info/` success body.
#[derive(Debug, Serialize)]
pub struct Described {
    success: bool,
    data: ModelInfo,
}

impl From<ModelInfo> for Described {
    fn from(data: ModelInfo) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// `GET /history/` success body.
#[derive(Debug, Serialize)]
pub struct Listed {
    success: bool,
    count: usize,
    data: Vec<Record>,
}

impl From<Vec<Record>> for Listed {
    fn from(data: Vec<Record>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

/// `GET /health/` body.
#[derive(Debug, Serialize)]
pub struct Health {
    status: &'static str,
    service: &'static str,
    model_loaded: bool,
}

impl Health {
    pub fn new(model_loaded: bool) -> Self {
        Self {
            status: "healthy",
            service: super::SERVICE,
            model_loaded,
        }
    }
}

/// Error body shared by every endpoint: a fixed summary plus details,
/// either a string or a field → messages map.
#[derive(Debug, Serialize)]
pub struct Failure<D: Serialize> {
    error: &'static str,
    details: D,
}

impl<D: Serialize> Failure<D> {
    pub fn new(error: &'static str, details: D) -> Self {
        Self { error, details }
    }
}

#[rustfmt::skip]
pub const INVALID_INPUT:     &str = "Invalid input data";
#[rustfmt::skip]
pub const PREDICTION_FAILED: &str = "Prediction failed";
#[rustfmt::skip]
pub const INVALID_LIMIT:     &str = "Invalid limit parameter";
#[rustfmt::skip]
pub const HISTORY_FAILED:    &str = "Failed to retrieve history";
