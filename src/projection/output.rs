//! Competitive output
//!
//! Finds the maximally responding cortical unit and produces a bounded
//! neighborhood activation kernel around it. The neighborhood radius shrinks
//! with simulation time, annealing the map from global ordering to
//! winner-only refinement.

// Dependencies
use crate::sim::TimeVaryingScalar;
use crate::SomError;
use nalgebra::DVector;
use serde::{Deserialize, Serialize};

/// Neighborhood falloff shape
///
/// The flat top-hat is the default: every unit within the radius adapts with
/// full strength, matching the book SOM formulation. The Gaussian variant
/// falls off smoothly with distance and is zeroed beyond three radii.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum KernelShape {
    /// kernel = 1.0 inside the radius, 0.0 outside
    TopHat,
    /// kernel = exp(-0.5 * (d / r)^2), zeroed beyond 3r
    Gaussian,
}

/// Turns raw responses into a bounded cortical activation pattern
pub trait OutputFunction: Send + Sync {
    /// Computes the activation kernel for the given responses at time t
    fn apply(&self, response: &DVector<f32>, t: f64) -> DVector<f32>;

    /// Current neighborhood radius, when the function has one
    fn radius(&self, t: f64) -> Option<f32>;

    /// Name for logging
    fn name(&self) -> &'static str;
}

/// Winner-take-all output with a shrinking neighborhood kernel
#[derive(Debug)]
pub struct KernelMax {
    rows: usize,
    cols: usize,
    spacing: f32, // Cell spacing of the cortical grid, in sheet units
    radius: TimeVaryingScalar,
    shape: KernelShape,
}

impl KernelMax {
    /// Creates the output function for a cortical grid of the given shape
    pub fn new(
        rows: usize,
        cols: usize,
        spacing: f32,
        radius: TimeVaryingScalar,
        shape: KernelShape,
    ) -> Result<Self, SomError> {
        if rows == 0 || cols == 0 {
            return Err(SomError::Config(format!(
                "kernel grid must be non-empty, got {}x{}",
                rows, cols
            )));
        }
        if spacing <= 0.0 {
            return Err(SomError::Config(format!(
                "kernel grid spacing must be positive, got {}",
                spacing
            )));
        }
        Ok(KernelMax {
            rows,
            cols,
            spacing,
            radius,
            shape,
        })
    }

    // Rectilinear distance between two units, in sheet coordinate units
    fn grid_distance(&self, a: usize, b: usize) -> f32 {
        let (ar, ac) = (a / self.cols, a % self.cols);
        let (br, bc) = (b / self.cols, b % self.cols);
        let dr = ar.abs_diff(br);
        let dc = ac.abs_diff(bc);
        (dr + dc) as f32 * self.spacing
    }
}

impl OutputFunction for KernelMax {
    fn apply(&self, response: &DVector<f32>, t: f64) -> DVector<f32> {
        debug_assert_eq!(response.len(), self.rows * self.cols);
        let winner = match winning_unit(response) {
            Some(w) => w,
            None => return DVector::zeros(0),
        };
        let r = self.radius.value(t);

        let mut kernel = DVector::zeros(response.len());
        for j in 0..response.len() {
            if j == winner {
                // The winner always adapts with full weight
                kernel[j] = 1.0;
                continue;
            }
            let d = self.grid_distance(j, winner);
            kernel[j] = match self.shape {
                KernelShape::TopHat => {
                    if d <= r {
                        1.0
                    } else {
                        0.0
                    }
                }
                KernelShape::Gaussian => {
                    if d <= 3.0 * r {
                        (-0.5 * (d / r) * (d / r)).exp()
                    } else {
                        0.0
                    }
                }
            };
        }
        kernel
    }

    fn radius(&self, t: f64) -> Option<f32> {
        Some(self.radius.value(t))
    }

    fn name(&self) -> &'static str {
        "kernel_max"
    }
}

/// Index of the maximally responding unit, ties broken toward the lowest
/// index so repeated calls on equal responses pick the same winner
pub fn winning_unit(response: &DVector<f32>) -> Option<usize> {
    if response.is_empty() {
        return None;
    }
    let mut winner = 0;
    for j in 1..response.len() {
        if response[j] > response[winner] {
            winner = j;
        }
    }
    Some(winner)
}
