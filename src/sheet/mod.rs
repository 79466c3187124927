//! The 2D activation sheets of the simulation
//!
//! A fixed spatial density over a bounding coordinate box yields a discrete
//! grid of units, each holding one scalar activation. Two instances exist per
//! simulation (the retinal input sheet and the cortical sheet); the
//! activation buffer is overwritten every step and never resized.

// Expose the pattern generator submodule
pub mod pattern;

pub use pattern::{GaussianPattern, PatternConfig};

// Dependencies
use crate::SomError;
use log::info;
use nalgebra::DVector;
use serde::{Deserialize, Serialize};

/// Bounding coordinate box of a sheet, in sheet coordinate units
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge (x minimum)
    pub x_lo: f32,
    /// Right edge (x maximum)
    pub x_hi: f32,
    /// Bottom edge (y minimum)
    pub y_lo: f32,
    /// Top edge (y maximum)
    pub y_hi: f32,
}

impl BoundingBox {
    /// Horizontal extent
    pub fn width(&self) -> f32 {
        self.x_hi - self.x_lo
    }

    /// Vertical extent
    pub fn height(&self) -> f32 {
        self.y_hi - self.y_lo
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        // Unit square centered on the origin
        BoundingBox {
            x_lo: -0.5,
            x_hi: 0.5,
            y_lo: -0.5,
            y_hi: 0.5,
        }
    }
}

/// Sheet construction parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Units per unit length of sheet coordinate space
    pub density: f32,
    /// Bounding coordinate box
    pub bounds: BoundingBox,
}

impl Default for SheetConfig {
    fn default() -> Self {
        SheetConfig {
            density: 10.0,
            bounds: BoundingBox::default(),
        }
    }
}

impl SheetConfig {
    /// Rejects non-positive density and empty bounds
    pub fn validate(&self) -> Result<(), SomError> {
        if self.density <= 0.0 {
            return Err(SomError::Config(format!(
                "sheet density must be positive, got {}",
                self.density
            )));
        }
        if self.bounds.width() <= 0.0 || self.bounds.height() <= 0.0 {
            return Err(SomError::Config(format!(
                "sheet bounds must span a positive area, got {}x{}",
                self.bounds.width(),
                self.bounds.height()
            )));
        }
        Ok(())
    }
}

/// A named 2D grid of scalar activations with fixed geometry
#[derive(Debug)]
pub struct Sheet {
    name: String,
    bounds: BoundingBox,
    density: f32,
    rows: usize,
    cols: usize,
    spacing: f32,              // Distance between adjacent cell centers
    activation: DVector<f32>,  // Flat row-major buffer, one value per unit
}

impl Sheet {
    /// Creates a sheet; the grid shape is derived from density and bounds
    pub fn new(name: &str, config: &SheetConfig) -> Result<Self, SomError> {
        config.validate()?;

        let rows = (config.bounds.height() * config.density).round().max(1.0) as usize;
        let cols = (config.bounds.width() * config.density).round().max(1.0) as usize;

        info!("Created sheet '{}': {}x{} units", name, rows, cols);

        Ok(Sheet {
            name: name.to_string(),
            bounds: config.bounds,
            density: config.density,
            rows,
            cols,
            spacing: 1.0 / config.density,
            activation: DVector::zeros(rows * cols),
        })
    }

    /// Returns the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the bounding coordinate box
    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    /// Returns the configured density (units per unit length)
    pub fn density(&self) -> f32 {
        self.density
    }

    /// Number of grid rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of grid columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of units
    pub fn units(&self) -> usize {
        self.rows * self.cols
    }

    /// Distance between adjacent cell centers, in sheet coordinate units
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Returns the coordinates of a unit's cell center from its flat index
    pub fn coordinates(&self, index: usize) -> (f32, f32) {
        let row = index / self.cols;
        let col = index % self.cols;
        let x = self.bounds.x_lo + (col as f32 + 0.5) * self.spacing;
        // Row 0 sits at the top edge, matching matrix ordering
        let y = self.bounds.y_hi - (row as f32 + 0.5) * self.spacing;
        (x, y)
    }

    /// Read-only view of the current activation buffer
    pub fn activation(&self) -> &DVector<f32> {
        &self.activation
    }

    /// Mutable view of the activation buffer, for the per-step overwrite
    pub fn activation_mut(&mut self) -> &mut DVector<f32> {
        &mut self.activation
    }
}

// Current Functionality:
// - Derives grid shape from density and bounding box at construction.
// - Maps flat unit indices to cell-center coordinates for pattern evaluation.
// - Holds the per-step activation buffer for both retina and cortex.
