//! Response functions
//!
//! Score each cortical unit's incoming weight vector against the current
//! input. The set is closed and selected explicitly at construction; no
//! dynamic lookup by name.

// Dependencies
use nalgebra::{DMatrix, DVector};

/// Scores every output unit's weight vector against an input vector
pub trait ResponseFunction: Send + Sync {
    /// Returns one response value per output unit (weight matrix column)
    fn respond(&self, weights: &DMatrix<f32>, input: &DVector<f32>) -> DVector<f32>;

    /// Name for logging
    fn name(&self) -> &'static str;
}

/// Negated Euclidean distance: closer weight vectors respond higher
///
/// The raw distance is kept rather than squashed; any monotonic transform is
/// equivalent under the argmax competition that follows.
#[derive(Debug)]
pub struct EuclideanResponse;

impl ResponseFunction for EuclideanResponse {
    fn respond(&self, weights: &DMatrix<f32>, input: &DVector<f32>) -> DVector<f32> {
        let mut response = DVector::zeros(weights.ncols());
        for j in 0..weights.ncols() {
            response[j] = -input.metric_distance(&weights.column(j));
        }
        response
    }

    fn name(&self) -> &'static str {
        "euclidean"
    }
}
