//! Training step orchestration
//!
//! Runs one training step of the retinotopic map: pattern generation, forward
//! response, competitive output, Hebbian learning. The external scheduler
//! owns the clock and drives `training_step(t)`; each step is atomic with
//! respect to the weights, so no partial update is ever observable.

// Expose the clock submodule
pub mod clock;

pub use clock::{SimulationClock, TimeVaryingScalar};

// Dependencies
use crate::projection::{
    winning_unit, EuclideanResponse, HebbianRule, KernelMax, LearningRule, OutputFunction,
    Projection, ResponseFunction,
};
use crate::sheet::{GaussianPattern, Sheet};
use crate::{SimulationConfig, SomError};
use log::{debug, info};
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

/// Training driver settings, consumed by the demo binary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of training steps to run
    pub steps: u64,
    /// Simulation-time increment per step
    pub clock_step: f64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        TrainingConfig {
            steps: 1000,
            clock_step: 1.0,
        }
    }
}

impl TrainingConfig {
    /// Rejects an empty run or a non-positive clock step
    pub fn validate(&self) -> Result<(), SomError> {
        if self.steps == 0 {
            return Err(SomError::Config("training needs at least one step".to_string()));
        }
        if self.clock_step <= 0.0 {
            return Err(SomError::Config(format!(
                "clock step must be positive, got {}",
                self.clock_step
            )));
        }
        Ok(())
    }
}

/// Snapshot of the simulation's training progress
#[derive(Debug, Clone)]
pub struct SimulationStatus {
    /// Training steps completed so far
    pub steps_run: u64,
    /// Winner of the most recent step, if any step has run
    pub last_winner: Option<usize>,
    /// Learning rate at the queried time
    pub learning_rate: f32,
    /// Neighborhood radius at the queried time, when the output function has one
    pub radius: Option<f32>,
}

/// The retinotopic SOM training core
///
/// Owns both sheets, the pattern generator, the projection, and the three
/// strategy objects. Strategies form a closed set chosen at construction;
/// `from_config` wires the defaults (Euclidean response, KernelMax output,
/// normalized Hebbian learning).
pub struct Simulation {
    retina: Sheet,
    cortex: Sheet,
    pattern: GaussianPattern,
    projection: Projection,
    response_fn: Box<dyn ResponseFunction>,
    output_fn: Box<dyn OutputFunction>,
    learning_rule: Box<dyn LearningRule>,
    steps_run: u64,
    last_winner: Option<usize>,
}

impl Simulation {
    /// Builds the simulation with the default strategy set
    pub fn from_config(config: &SimulationConfig) -> Result<Self, SomError> {
        let radius = TimeVaryingScalar::new(
            config.projection.radius_0,
            config.projection.radius_time_constant,
            Some(config.projection.radius_floor),
        )?;

        let cortex = Sheet::new("V1", &config.cortex)?;
        let output = KernelMax::new(
            cortex.rows(),
            cortex.cols(),
            cortex.spacing(),
            radius,
            config.projection.kernel,
        )?;
        let learning = HebbianRule::new(config.projection.target_norm);

        info!(
            "Wiring default strategies: response=euclidean, output={}, learning={}",
            output.name(),
            learning.name()
        );

        Self::assemble(
            config,
            cortex,
            Box::new(EuclideanResponse),
            Box::new(output),
            Box::new(learning),
        )
    }

    /// Builds the simulation with explicitly supplied strategies
    pub fn with_strategies(
        config: &SimulationConfig,
        response_fn: Box<dyn ResponseFunction>,
        output_fn: Box<dyn OutputFunction>,
        learning_rule: Box<dyn LearningRule>,
    ) -> Result<Self, SomError> {
        let cortex = Sheet::new("V1", &config.cortex)?;
        Self::assemble(config, cortex, response_fn, output_fn, learning_rule)
    }

    fn assemble(
        config: &SimulationConfig,
        cortex: Sheet,
        response_fn: Box<dyn ResponseFunction>,
        output_fn: Box<dyn OutputFunction>,
        learning_rule: Box<dyn LearningRule>,
    ) -> Result<Self, SomError> {
        config.validate()?;

        let retina = Sheet::new("Retina", &config.retina)?;
        let pattern = GaussianPattern::new(&config.pattern, retina.bounds())?;
        let projection = Projection::new(retina.units(), cortex.units(), &config.projection)?;

        info!(
            "Simulation ready: retina {}x{}, cortex {}x{}",
            retina.rows(),
            retina.cols(),
            cortex.rows(),
            cortex.cols()
        );

        Ok(Simulation {
            retina,
            cortex,
            pattern,
            projection,
            response_fn,
            output_fn,
            learning_rule,
            steps_run: 0,
            last_winner: None,
        })
    }

    /// Runs one training step at simulation time t
    ///
    /// Pipeline: generate input -> forward response -> competitive kernel ->
    /// Hebbian update. The per-step ordering is fixed; weights mutate only in
    /// the final phase.
    pub fn training_step(&mut self, t: f64) -> Result<(), SomError> {
        // 1. New input pattern on the retina
        self.pattern.generate(&mut self.retina);

        // 2. Forward response of every cortical unit
        let response = self
            .projection
            .forward(self.retina.activation(), self.response_fn.as_ref());

        // 3. Competition: winner and neighborhood kernel
        let kernel = self.output_fn.apply(&response, t);
        self.last_winner = winning_unit(&response);
        self.cortex.activation_mut().copy_from(&kernel);

        // 4. Learning: kernel-gated Hebbian update, then renormalization
        let rate = self.projection.learning_rate(t);
        self.learning_rule.update(
            self.projection.weights_mut(),
            self.retina.activation(),
            &kernel,
            rate,
            &response,
        )?;

        self.steps_run += 1;
        debug!(
            "Step {} at t={}: winner={:?}, rate={:.5}",
            self.steps_run, t, self.last_winner, rate
        );
        Ok(())
    }

    /// Read-only view of the current weight matrix
    pub fn weights(&self) -> &DMatrix<f32> {
        self.projection.weights()
    }

    /// The retinal input sheet
    pub fn retina(&self) -> &Sheet {
        &self.retina
    }

    /// The cortical sheet; its activation holds the last step's kernel
    pub fn cortex(&self) -> &Sheet {
        &self.cortex
    }

    /// The projection between the sheets
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Reports training progress at simulation time t
    pub fn status(&self, t: f64) -> SimulationStatus {
        SimulationStatus {
            steps_run: self.steps_run,
            last_winner: self.last_winner,
            learning_rate: self.projection.learning_rate(t),
            radius: self.output_fn.radius(t),
        }
    }
}

// Weaknesses:
// - The response loop is single-threaded; per-unit responses are independent
//   and could be computed in parallel without touching the step ordering.
// - The cortex activation holds the kernel, not a graded response map; apps
//   wanting raw responses must recompute them through the projection.

// Current Functionality:
// - Wires sheets, projection, and strategies from a validated config.
// - Runs the generate -> forward -> compete -> learn pipeline atomically.
// - Exposes read-only weight/activation views and a progress status report.
