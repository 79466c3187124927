//! Simulation time
//!
//! The clock advances in fixed steps and is owned by the driver;
//! time-dependent computations receive the current time explicitly instead
//! of reading ambient global state. Annealed quantities (learning rate,
//! neighborhood radius) are pure functions of that time.

// Dependencies
use crate::SomError;

/// Monotonic simulation clock advancing by a fixed step per tick
#[derive(Debug, Clone)]
pub struct SimulationClock {
    t: f64,
    step: f64,
}

impl SimulationClock {
    /// Creates a clock at t = 0 with the given step size
    pub fn new(step: f64) -> Result<Self, SomError> {
        if step <= 0.0 {
            return Err(SomError::Config(format!(
                "clock step must be positive, got {}",
                step
            )));
        }
        Ok(SimulationClock { t: 0.0, step })
    }

    /// Current simulation time
    pub fn now(&self) -> f64 {
        self.t
    }

    /// Advances one tick and returns the new time
    pub fn advance(&mut self) -> f64 {
        self.t += self.step;
        self.t
    }

    /// Fixed step size per tick
    pub fn step_size(&self) -> f64 {
        self.step
    }
}

/// Exponentially decaying scalar with an optional lower bound
///
/// value(t) = max(floor, start * exp(-t / time_constant)); pure in t, so the
/// value is deterministic and monotonically non-increasing for t >= 0.
#[derive(Debug, Clone)]
pub struct TimeVaryingScalar {
    start: f32,
    time_constant: f32,
    floor: Option<f32>,
}

impl TimeVaryingScalar {
    /// Creates the scalar; start and time constant must be positive
    pub fn new(start: f32, time_constant: f32, floor: Option<f32>) -> Result<Self, SomError> {
        if start <= 0.0 {
            return Err(SomError::Config(format!(
                "starting value must be positive, got {}",
                start
            )));
        }
        if time_constant <= 0.0 {
            return Err(SomError::Config(format!(
                "time constant must be positive, got {}",
                time_constant
            )));
        }
        if let Some(floor) = floor {
            if floor < 0.0 {
                return Err(SomError::Config(format!(
                    "floor must be non-negative, got {}",
                    floor
                )));
            }
        }
        Ok(TimeVaryingScalar {
            start,
            time_constant,
            floor,
        })
    }

    /// Value at simulation time t
    pub fn value(&self, t: f64) -> f32 {
        let decayed = (self.start as f64 * (-t / self.time_constant as f64).exp()) as f32;
        match self.floor {
            Some(floor) => decayed.max(floor),
            None => decayed,
        }
    }

    /// The lower bound, if one is set
    pub fn floor(&self) -> Option<f32> {
        self.floor
    }
}
