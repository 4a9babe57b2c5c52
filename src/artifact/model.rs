use super::*;
use crate::Scalar;
use serde::Deserialize;
use serde::Serialize;

/// Fitted regression model parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Regressor {
    /// `intercept + Σ coefficients[i] * x[i]`
    Linear {
        coefficients: Vec<Scalar>,
        intercept: Scalar,
    },
    /// mean of the trees
    Forest { trees: Vec<Tree> },
    /// `init + learning_rate * Σ tree(x)`
    Boosting {
        init: Scalar,
        learning_rate: Scalar,
        trees: Vec<Tree>,
    },
}

impl Regressor {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Linear { .. } => "linear",
            Self::Forest { .. } => "forest",
            Self::Boosting { .. } => "boosting",
        }
    }

    /// structural checks against the number of input columns
    pub fn validate(&self, width: usize) -> Result<(), String> {
        match self {
            Self::Linear {
                coefficients,
                intercept,
            } => {
                if coefficients.len() != width {
                    return Err(format!(
                        "linear model has {} coefficients for {} features",
                        coefficients.len(),
                        width
                    ));
                }
                if coefficients.iter().chain([intercept]).any(|x| !x.is_finite()) {
                    return Err("linear model parameters must be finite".to_string());
                }
                Ok(())
            }
            Self::Forest { trees } if trees.is_empty() => Err("forest has no trees".to_string()),
            Self::Forest { trees } => Self::validate_trees(trees, width),
            Self::Boosting {
                init,
                learning_rate,
                trees,
            } => {
                if !init.is_finite() || !learning_rate.is_finite() {
                    return Err("boosting parameters must be finite".to_string());
                }
                Self::validate_trees(trees, width)
            }
        }
    }

    fn validate_trees(trees: &[Tree], width: usize) -> Result<(), String> {
        trees
            .iter()
            .enumerate()
            .try_for_each(|(i, tree)| tree.validate(width).map_err(|e| format!("tree {}: {}", i, e)))
    }

    /// Run inference on an already scaled row of exactly `width` columns.
    pub fn predict(&self, width: usize, x: &[Scalar]) -> Result<Scalar, ShapeError> {
        expect_width("model", width, x.len())?;
        Ok(match self {
            Self::Linear {
                coefficients,
                intercept,
            } => {
                expect_width("model", coefficients.len(), x.len())?;
                coefficients
                    .iter()
                    .zip(x.iter())
                    .map(|(w, x)| w * x)
                    .sum::<Scalar>()
                    + intercept
            }
            Self::Forest { trees } => {
                trees.iter().map(|t| t.predict(x)).sum::<Scalar>() / trees.len() as Scalar
            }
            Self::Boosting {
                init,
                learning_rate,
                trees,
            } => init + learning_rate * trees.iter().map(|t| t.predict(x)).sum::<Scalar>(),
        })
    }
}
