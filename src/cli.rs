//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::planet_core::config::PlanetConfig;
use crate::planet_core::noise_field::NoiseBasis;

/// Command line arguments. Every generation flag overrides the config file.
#[derive(Parser, Debug)]
#[command(name = "planet-texture")]
#[command(about = "Generate an equirectangular planet terrain texture", long_about = None)]
pub struct Args {
    /// JSON config file; missing files fall back to defaults
    #[arg(long, value_name = "PATH", default_value = "planet.json")]
    pub config: PathBuf,

    /// Where to write the PNG
    #[arg(long, short, value_name = "PATH", default_value = "captures/planet.png")]
    pub output: PathBuf,

    /// Noise seed (integer or real); random when neither flag nor config sets one
    #[arg(long, allow_negative_numbers = true)]
    pub seed: Option<f64>,

    /// Texture side length in texels
    #[arg(long, value_name = "TEXELS")]
    pub resolution: Option<u32>,

    /// Number of noise octaves
    #[arg(long)]
    pub octaves: Option<u32>,

    /// Period of the first octave in noise space
    #[arg(long)]
    pub base_period: Option<f64>,

    /// Period and amplitude divisor between octaves
    #[arg(long)]
    pub ratio: Option<f64>,

    /// Sphere radius in noise space
    #[arg(long)]
    pub radius: Option<f64>,

    /// Noise basis: super_simplex, simplex, open_simplex, perlin
    #[arg(long, value_name = "BASIS")]
    pub noise: Option<NoiseBasis>,
}

impl Args {
    pub fn apply_to(&self, config: &mut PlanetConfig) {
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(resolution) = self.resolution {
            config.resolution = resolution;
        }
        if let Some(octaves) = self.octaves {
            config.fractal.octaves = octaves;
        }
        if let Some(base_period) = self.base_period {
            config.fractal.base_period = base_period;
        }
        if let Some(ratio) = self.ratio {
            config.fractal.ratio = ratio;
        }
        if let Some(radius) = self.radius {
            config.fractal.radius = radius;
        }
        if let Some(noise) = self.noise {
            config.noise = noise;
        }
    }
}
