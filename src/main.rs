// src/main.rs
// Entry point for Cortimap, standing in for the external simulation
// scheduler: it owns the clock, drives training steps in order, and logs
// the annealing progress of the map.

// Imports dependencies and Cortimap modules.
// - env_logger: Logging for debugging.
// - Cortimap modules: Simulation core, clock, and configuration.
use cortimap::{Simulation, SimulationClock, SimulationConfig};
use log::{error, info};
use std::error::Error;

/// Main function to initialize and run a Cortimap training session.
/// Coordinates pattern generation, competition, and learning per step.
fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting Cortimap SOM training...");

    // Load the reference configuration, falling back to built-in defaults
    let config = match SimulationConfig::load("config/default.yaml") {
        Ok(config) => config,
        Err(e) => {
            info!("Using default config ({})", e);
            SimulationConfig::default()
        }
    };

    // Build the simulation with the default strategy set
    let mut simulation = Simulation::from_config(&config)?;
    info!(
        "Projection initialized: {} retinal -> {} cortical units",
        simulation.retina().units(),
        simulation.cortex().units()
    );

    // The driver owns the clock; the core only ever sees explicit times
    let mut clock = SimulationClock::new(config.training.clock_step)?;
    let steps = config.training.steps;

    // Main loop: one atomic training step per tick
    for step in 0..steps {
        let t = clock.now();

        if let Err(e) = simulation.training_step(t) {
            error!("Training step {} failed at t={}: {}", step, t, e);
            return Err(e.into());
        }

        // Periodic progress report
        if (step + 1) % 100 == 0 {
            let status = simulation.status(t);
            info!(
                "Step {}/{}: rate={:.5}, radius={:?}, winner={:?}",
                step + 1,
                steps,
                status.learning_rate,
                status.radius,
                status.last_winner
            );
        }

        clock.advance();
    }

    let status = simulation.status(clock.now());
    info!(
        "Training complete: {} steps, final rate {:.5}",
        status.steps_run, status.learning_rate
    );
    Ok(())
}
