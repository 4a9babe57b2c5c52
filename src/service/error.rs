use crate::Price;
use crate::artifact::ShapeError;

/// Errors that can occur while scoring a validated feature vector.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictError {
    Shape(ShapeError),
    NonFinite(Price),
}

impl std::fmt::Display for PredictError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shape(e) => write!(f, "Prediction error: {}", e),
            Self::NonFinite(x) => write!(f, "Prediction error: model produced {}", x),
        }
    }
}

impl std::error::Error for PredictError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Shape(e) => Some(e),
            Self::NonFinite(_) => None,
        }
    }
}

impl From<ShapeError> for PredictError {
    fn from(e: ShapeError) -> Self {
        Self::Shape(e)
    }
}
