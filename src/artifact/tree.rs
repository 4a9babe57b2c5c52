use super::*;
use crate::Scalar;
use serde::Deserialize;
use serde::Serialize;

/// Child index marking a leaf.
pub const LEAF: i64 = -1;

/// A fitted regression tree in flat array layout.
///
/// Node `i` is a leaf when `children_left[i] == LEAF`; otherwise a sample
/// goes to `children_left[i]` when `x[feature[i]] <= threshold[i]` and to
/// `children_right[i]` otherwise. Leaves predict `value[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    children_left: Vec<i64>,
    children_right: Vec<i64>,
    feature: Vec<i64>,
    threshold: Vec<Scalar>,
    value: Vec<Scalar>,
}

impl Tree {
    pub fn new(
        children_left: Vec<i64>,
        children_right: Vec<i64>,
        feature: Vec<i64>,
        threshold: Vec<Scalar>,
        value: Vec<Scalar>,
    ) -> Self {
        Self {
            children_left,
            children_right,
            feature,
            threshold,
            value,
        }
    }

    /// single-leaf tree
    pub fn constant(value: Scalar) -> Self {
        Self::new(vec![LEAF], vec![LEAF], vec![LEAF], vec![0.0], vec![value])
    }

    pub fn nodes(&self) -> usize {
        self.value.len()
    }

    fn is_leaf(&self, node: usize) -> bool {
        self.children_left[node] == LEAF
    }

    /// Structural checks run at load time. Children must point strictly
    /// forward so that every walk terminates.
    pub fn validate(&self, width: usize) -> Result<(), String> {
        let n = self.nodes();
        if n == 0 {
            return Err("tree has no nodes".to_string());
        }
        if [
            self.children_left.len(),
            self.children_right.len(),
            self.feature.len(),
            self.threshold.len(),
        ]
        .iter()
        .any(|len| *len != n)
        {
            return Err("tree node arrays differ in length".to_string());
        }
        for node in 0..n {
            if !self.value[node].is_finite() {
                return Err(format!("node {} has a non-finite value", node));
            }
            if self.is_leaf(node) {
                continue;
            }
            let l = self.children_left[node];
            let r = self.children_right[node];
            let f = self.feature[node];
            if l <= node as i64 || l >= n as i64 || r <= node as i64 || r >= n as i64 {
                return Err(format!("node {} has out of order children", node));
            }
            if f < 0 || f >= width as i64 {
                return Err(format!("node {} splits on missing feature {}", node, f));
            }
        }
        Ok(())
    }

    /// Walk from the root to a leaf. Assumes [`Tree::validate`] passed for
    /// a width no larger than `x.len()`.
    pub fn predict(&self, x: &[Scalar]) -> Scalar {
        let mut node = 0;
        while !self.is_leaf(node) {
            let f = self.feature[node] as usize;
            node = match x[f] <= self.threshold[node] {
                true => self.children_left[node] as usize,
                false => self.children_right[node] as usize,
            };
        }
        self.value[node]
    }
}
