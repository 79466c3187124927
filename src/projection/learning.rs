//! Hebbian learning over the connection field
//!
//! Units activated by the competitive kernel pull their incoming weight
//! vectors toward the current input, then every column is rescaled back to
//! the target norm so no unit's total synaptic strength grows without bound.

// Dependencies
use super::renormalize_columns;
use crate::SomError;
use nalgebra::{DMatrix, DVector};

/// Updates connection weights from one step's activity
pub trait LearningRule: Send + Sync {
    /// Applies the weight update in place
    ///
    /// `response` carries the raw pre-competition responses; the plain
    /// Hebbian rule ignores it, response-modulated rules use it.
    fn update(
        &self,
        weights: &mut DMatrix<f32>,
        input: &DVector<f32>,
        kernel: &DVector<f32>,
        rate: f32,
        response: &DVector<f32>,
    ) -> Result<(), SomError>;

    /// Name for logging
    fn name(&self) -> &'static str;
}

/// Normalized Hebbian rule: weights[:, j] += rate * kernel[j] * input,
/// followed by global column renormalization
#[derive(Debug)]
pub struct HebbianRule {
    target_norm: f32,
}

impl HebbianRule {
    /// Creates the rule; columns are rescaled to `target_norm` every update
    pub fn new(target_norm: f32) -> Self {
        HebbianRule { target_norm }
    }
}

impl LearningRule for HebbianRule {
    fn update(
        &self,
        weights: &mut DMatrix<f32>,
        input: &DVector<f32>,
        kernel: &DVector<f32>,
        rate: f32,
        _response: &DVector<f32>,
    ) -> Result<(), SomError> {
        for j in 0..weights.ncols() {
            let k = kernel[j];
            if k > 0.0 {
                weights.column_mut(j).axpy(rate * k, input, 1.0);
            }
        }
        // Renormalization is global: columns untouched above were already at
        // the target norm, so rescaling leaves them unchanged
        renormalize_columns(weights, self.target_norm)
    }

    fn name(&self) -> &'static str {
        "hebbian"
    }
}
