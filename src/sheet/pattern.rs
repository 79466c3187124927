//! Retinal input generation
//!
//! Produces a 2D Gaussian activation blob centered at a randomly drawn
//! location each simulation step. The center coordinates come from two
//! independently seeded random streams bounded to the sheet, so the input
//! sequence is fully reproducible from the input seed.

// Dependencies
use crate::random::RandomStream;
use crate::sheet::{BoundingBox, Sheet};
use crate::SomError;
use log::debug;
use serde::{Deserialize, Serialize};

/// Input pattern generation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternConfig {
    /// Gaussian width (standard deviation), in sheet coordinate units
    pub scale: f32,
    /// Seed for the center coordinate streams
    pub input_seed: u64,
}

impl Default for PatternConfig {
    fn default() -> Self {
        PatternConfig {
            scale: 0.1,
            input_seed: 0,
        }
    }
}

impl PatternConfig {
    /// Rejects a degenerate zero or negative Gaussian width
    pub fn validate(&self) -> Result<(), SomError> {
        if self.scale <= 0.0 {
            return Err(SomError::Config(format!(
                "pattern scale must be positive, got {}",
                self.scale
            )));
        }
        Ok(())
    }
}

/// Gaussian blob generator with randomly drawn centers
///
/// Aspect ratio and orientation are fixed at 1.0 and 0: the blob is isotropic,
/// so each cell's value depends only on its distance from the drawn center.
#[derive(Debug)]
pub struct GaussianPattern {
    scale: f32,
    x_stream: RandomStream,
    y_stream: RandomStream,
    last_center: Option<(f32, f32)>,
}

impl GaussianPattern {
    /// Creates a generator whose centers fall inside the given bounds
    ///
    /// The x stream is seeded with `input_seed` and the y stream with
    /// `input_seed + 1`, keeping the two coordinate sequences independent
    /// while the configuration carries a single seed.
    pub fn new(config: &PatternConfig, bounds: &BoundingBox) -> Result<Self, SomError> {
        config.validate()?;

        let x_stream = RandomStream::new(config.input_seed, bounds.x_lo, bounds.x_hi)?;
        let y_stream = RandomStream::new(
            config.input_seed.wrapping_add(1),
            bounds.y_lo,
            bounds.y_hi,
        )?;

        Ok(GaussianPattern {
            scale: config.scale,
            x_stream,
            y_stream,
            last_center: None,
        })
    }

    /// Draws a fresh center and overwrites the sheet's activation with the
    /// Gaussian evaluated at every cell center
    ///
    /// Advances both coordinate streams by exactly one draw.
    pub fn generate(&mut self, sheet: &mut Sheet) {
        let cx = self.x_stream.draw();
        let cy = self.y_stream.draw();
        self.last_center = Some((cx, cy));

        let inv_two_scale_sq = 1.0 / (2.0 * self.scale * self.scale);
        for index in 0..sheet.units() {
            let (x, y) = sheet.coordinates(index);
            let dx = x - cx;
            let dy = y - cy;
            let value = (-(dx * dx + dy * dy) * inv_two_scale_sq).exp();
            sheet.activation_mut()[index] = value;
        }

        debug!("Generated Gaussian pattern centered at ({:.3}, {:.3})", cx, cy);
    }

    /// Returns the center drawn by the most recent `generate` call
    pub fn last_center(&self) -> Option<(f32, f32)> {
        self.last_center
    }
}
