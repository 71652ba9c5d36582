use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::planet_core::error::ConfigError;
use crate::planet_core::noise_field::NoiseField;

/// Octave stack for the height field. Each octave divides the period and the
/// amplitude of the previous one by `ratio`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalParams {
    pub octaves: u32,
    pub base_period: f64,
    pub ratio: f64,
    /// Sphere radius in noise space. Only its size relative to `base_period`
    /// matters.
    pub radius: f64,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            octaves: 4,
            base_period: 1024.0,
            ratio: 4.0,
            radius: 1000.0,
        }
    }
}

impl FractalParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("base_period", self.base_period),
            ("ratio", self.ratio),
            ("radius", self.radius),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidFractal { name, value });
            }
        }
        Ok(())
    }

    /// Sums `octaves` layers of `field` at `point`.
    pub fn accumulate(&self, field: &NoiseField, point: DVec3) -> f64 {
        let mut height = 0.0;
        for k in 0..self.octaves {
            let scale = self.ratio.powi(k as i32);
            let period = self.base_period / scale;
            let amplitude = 1.0 / scale;
            let p = point / period;
            height += field.sample(p.x, p.y, p.z) * amplitude;
        }
        height
    }
}
