//! Cortimap - Retinotopic Self-Organizing Map Simulator
//!
//! This library provides the numerical core of a cortical map simulation:
//! a retinal input sheet emitting Gaussian activation blobs, a fully
//! connected plastic projection onto a cortical sheet, and competitive
//! Hebbian learning with a shrinking neighborhood kernel.

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

pub mod projection;
pub mod random;
pub mod sheet;
pub mod sim;

// Re-export commonly used items for easier access
pub use projection::{winning_unit, EuclideanResponse, HebbianRule, KernelMax, KernelShape};
pub use projection::{LearningRule, OutputFunction, Projection, ResponseFunction};
pub use random::RandomStream;
pub use sheet::{BoundingBox, GaussianPattern, PatternConfig, Sheet, SheetConfig};
pub use sim::{Simulation, SimulationClock, SimulationStatus, TimeVaryingScalar};

use projection::ProjectionConfig;
use sim::TrainingConfig;

/// Main configuration structure for a Cortimap simulation
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SimulationConfig {
    /// Retinal input sheet parameters
    pub retina: SheetConfig,
    /// Cortical sheet parameters
    pub cortex: SheetConfig,
    /// Input pattern generation parameters
    pub pattern: PatternConfig,
    /// Projection and learning parameters
    pub projection: ProjectionConfig,
    /// Training driver settings
    pub training: TrainingConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            retina: SheetConfig::default(),
            cortex: SheetConfig::default(),
            pattern: PatternConfig::default(),
            projection: ProjectionConfig::default(),
            training: TrainingConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Loads and validates a configuration from a YAML file
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let file = std::fs::File::open(path)?;
        let config: SimulationConfig = serde_yaml::from_reader(file)?;
        config.validate()?;
        log::info!("Loaded simulation config from {}", path);
        Ok(config)
    }

    /// Validates every numeric parameter; all limits are checked here once
    /// so constructed components can rely on them
    pub fn validate(&self) -> Result<(), SomError> {
        self.retina.validate()?;
        self.cortex.validate()?;
        self.pattern.validate()?;
        self.projection.validate()?;
        self.training.validate()?;
        Ok(())
    }
}

/// Cortimap error types
#[derive(Debug)]
pub enum SomError {
    /// Invalid configuration parameter, rejected at construction
    Config(String),
    /// A weight column reached zero norm before renormalization;
    /// indicates an initialization bug and halts the run
    DegenerateState(String),
}

impl std::fmt::Display for SomError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SomError::Config(msg) => write!(f, "Configuration error: {}", msg),
            SomError::DegenerateState(msg) => write!(f, "Degenerate state: {}", msg),
        }
    }
}

impl std::error::Error for SomError {}
