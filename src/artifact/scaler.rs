use super::*;
use crate::Scalar;
use serde::Deserialize;
use serde::Serialize;

/// Fitted per-column transform, applied to a raw row before inference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Scaler {
    /// `(x - mean) / scale`
    Standard { mean: Vec<Scalar>, scale: Vec<Scalar> },
    /// `x * scale + min`
    MinMax { min: Vec<Scalar>, scale: Vec<Scalar> },
    Identity,
}

impl Scaler {
    /// number of columns this scaler was fitted on; None if any width works
    pub fn width(&self) -> Option<usize> {
        match self {
            Self::Standard { mean, .. } => Some(mean.len()),
            Self::MinMax { min, .. } => Some(min.len()),
            Self::Identity => None,
        }
    }

    /// structural checks run at load time
    pub fn validate(&self) -> Result<(), String> {
        let (shift, scale) = match self {
            Self::Standard { mean, scale } => (mean, scale),
            Self::MinMax { min, scale } => (min, scale),
            Self::Identity => return Ok(()),
        };
        if shift.len() != scale.len() {
            return Err(format!(
                "scaler has {} offsets but {} scales",
                shift.len(),
                scale.len()
            ));
        }
        if shift.iter().chain(scale.iter()).any(|x| !x.is_finite()) {
            return Err("scaler parameters must be finite".to_string());
        }
        if matches!(self, Self::Standard { .. }) && scale.iter().any(|s| *s == 0.0) {
            return Err("standard scaler has a zero scale".to_string());
        }
        Ok(())
    }

    pub fn transform(&self, row: &[Scalar]) -> Result<Vec<Scalar>, ShapeError> {
        if let Some(width) = self.width() {
            expect_width("scaler", width, row.len())?;
        }
        Ok(match self {
            Self::Standard { mean, scale } => row
                .iter()
                .zip(mean.iter().zip(scale.iter()))
                .map(|(x, (m, s))| (x - m) / s)
                .collect(),
            Self::MinMax { min, scale } => row
                .iter()
                .zip(min.iter().zip(scale.iter()))
                .map(|(x, (m, s))| x * s + m)
                .collect(),
            Self::Identity => row.to_vec(),
        })
    }
}
