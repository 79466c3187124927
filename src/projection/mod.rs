//! The plastic connection field between the retinal and cortical sheets
//!
//! A dense weight matrix with one column per cortical unit: seeded uniform
//! initialization, column normalization to a fixed target norm, and forward
//! response computation through a pluggable response function. The strategy
//! submodules hold the closed set of response, output, and learning variants.

// Expose strategy submodules
pub mod learning;
pub mod output;
pub mod response;

pub use learning::{HebbianRule, LearningRule};
pub use output::{winning_unit, KernelMax, KernelShape, OutputFunction};
pub use response::{EuclideanResponse, ResponseFunction};

// Dependencies
use crate::random::RandomStream;
use crate::sim::TimeVaryingScalar;
use crate::SomError;
use log::info;
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

/// Projection and learning parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Seed for the initial weight draw
    pub weight_seed: u64,
    /// Target L2 norm of each unit's incoming weight vector
    pub target_norm: f32,
    /// Propagation delay between the sheets, in simulation-time units.
    /// Applying the delay is the external scheduler's job; the projection
    /// only records it.
    pub delay: f64,
    /// Starting learning rate
    pub alpha_0: f32,
    /// Learning rate decay time constant
    pub alpha_time_constant: f32,
    /// Starting neighborhood radius, in sheet coordinate units
    pub radius_0: f32,
    /// Neighborhood radius decay time constant
    pub radius_time_constant: f32,
    /// Lower bound the shrinking radius never crosses
    pub radius_floor: f32,
    /// Neighborhood falloff shape
    pub kernel: KernelShape,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        ProjectionConfig {
            weight_seed: 0,
            target_norm: 1.0,
            delay: 0.05,
            alpha_0: 0.42,
            alpha_time_constant: 1000.0,
            radius_0: 1.0,
            radius_time_constant: 200.0,
            radius_floor: 0.5 / 40.0,
            kernel: KernelShape::TopHat,
        }
    }
}

impl ProjectionConfig {
    /// Rejects non-positive rates, norms, radii, and time constants
    pub fn validate(&self) -> Result<(), SomError> {
        if self.target_norm <= 0.0 {
            return Err(SomError::Config(format!(
                "target norm must be positive, got {}",
                self.target_norm
            )));
        }
        if self.delay < 0.0 {
            return Err(SomError::Config(format!(
                "delay must be non-negative, got {}",
                self.delay
            )));
        }
        if self.alpha_0 <= 0.0 {
            return Err(SomError::Config(format!(
                "alpha_0 must be positive, got {}",
                self.alpha_0
            )));
        }
        if self.alpha_time_constant <= 0.0 {
            return Err(SomError::Config(format!(
                "alpha time constant must be positive, got {}",
                self.alpha_time_constant
            )));
        }
        if self.radius_0 <= 0.0 {
            return Err(SomError::Config(format!(
                "radius_0 must be positive, got {}",
                self.radius_0
            )));
        }
        if self.radius_time_constant <= 0.0 {
            return Err(SomError::Config(format!(
                "radius time constant must be positive, got {}",
                self.radius_time_constant
            )));
        }
        if self.radius_floor < 0.0 {
            return Err(SomError::Config(format!(
                "radius floor must be non-negative, got {}",
                self.radius_floor
            )));
        }
        Ok(())
    }
}

/// The connection field between the input and cortical sheets
///
/// Weights have shape [n_input, n_output]; column j is cortical unit j's
/// incoming weight vector. Every column holds the target L2 norm after
/// construction and after every learning update.
#[derive(Debug)]
pub struct Projection {
    weights: DMatrix<f32>,
    target_norm: f32,
    delay: f64,
    learning_rate: TimeVaryingScalar,
}

impl Projection {
    /// Creates the projection with seeded uniform initial weights,
    /// column-normalized to the target norm
    pub fn new(
        n_input: usize,
        n_output: usize,
        config: &ProjectionConfig,
    ) -> Result<Self, SomError> {
        config.validate()?;
        if n_input == 0 || n_output == 0 {
            return Err(SomError::Config(format!(
                "projection needs at least one unit on each side, got {}x{}",
                n_input, n_output
            )));
        }

        // Uniform draws over [0, 1) never yield an all-zero column in
        // practice; the normalization below reports it if one ever appears
        let mut stream = RandomStream::unit(config.weight_seed);
        let mut weights = DMatrix::from_fn(n_input, n_output, |_, _| stream.draw());
        renormalize_columns(&mut weights, config.target_norm)?;

        let learning_rate =
            TimeVaryingScalar::new(config.alpha_0, config.alpha_time_constant, None)?;

        info!(
            "Created projection: {}x{} weights, target norm {}, delay {}",
            n_input, n_output, config.target_norm, config.delay
        );

        Ok(Projection {
            weights,
            target_norm: config.target_norm,
            delay: config.delay,
            learning_rate,
        })
    }

    /// Computes the per-unit response to an input activation vector
    pub fn forward(
        &self,
        input: &DVector<f32>,
        response_fn: &dyn ResponseFunction,
    ) -> DVector<f32> {
        response_fn.respond(&self.weights, input)
    }

    /// Read-only view of the weight matrix
    pub fn weights(&self) -> &DMatrix<f32> {
        &self.weights
    }

    // Learning mutates weights through here; not part of the public API so
    // external observers only ever see complete steps
    pub(crate) fn weights_mut(&mut self) -> &mut DMatrix<f32> {
        &mut self.weights
    }

    /// Learning rate at simulation time t
    pub fn learning_rate(&self, t: f64) -> f32 {
        self.learning_rate.value(t)
    }

    /// Target L2 norm of every weight column
    pub fn target_norm(&self) -> f32 {
        self.target_norm
    }

    /// Fixed propagation delay recorded for the external scheduler
    pub fn delay(&self) -> f64 {
        self.delay
    }
}

/// Rescales every column to the target L2 norm
///
/// A zero-norm column cannot be rescaled and reports a degenerate state;
/// correct initialization makes that unreachable.
pub fn renormalize_columns(
    weights: &mut DMatrix<f32>,
    target_norm: f32,
) -> Result<(), SomError> {
    for j in 0..weights.ncols() {
        let mut column = weights.column_mut(j);
        let norm = column.norm();
        if norm == 0.0 {
            return Err(SomError::DegenerateState(format!(
                "weight column {} has zero norm before renormalization",
                j
            )));
        }
        column.scale_mut(target_norm / norm);
    }
    Ok(())
}
