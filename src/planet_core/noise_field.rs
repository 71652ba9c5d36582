use std::fmt;
use std::str::FromStr;

use noise::{NoiseFn, OpenSimplex, Perlin, Simplex, SuperSimplex};
use serde::{Deserialize, Serialize};

use crate::planet_core::error::ConfigError;

/// Seed for a [`NoiseField`]. Every real-valued seed is normalized to 32 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(pub u32);

impl Seed {
    /// Integral values in `u32` range are used as-is; any other finite real is
    /// folded from its bit pattern deterministically.
    pub fn from_real(value: f64) -> Result<Self, ConfigError> {
        if !value.is_finite() {
            return Err(ConfigError::NonFiniteSeed(value));
        }
        if value.fract() == 0.0 && value >= 0.0 && value <= u32::MAX as f64 {
            return Ok(Self(value as u32));
        }
        let bits = value.to_bits();
        Ok(Self(fold_bits((bits >> 32) as u32, bits as u32)))
    }

    pub fn random() -> Self {
        Self(rand::random())
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn fold_bits(hi: u32, lo: u32) -> u32 {
    let mut x = hi.wrapping_mul(0x9E37_79B9) ^ lo.rotate_left(13);
    x ^= x >> 16;
    x = x.wrapping_mul(0x85EB_CA6B);
    x ^= x >> 13;
    x = x.wrapping_mul(0xC2B2_AE35);
    x ^ (x >> 16)
}

/// Noise algorithm behind a [`NoiseField`]. The default spans the full
/// [-1, 1] range, so every band of a ramp is reachable. `OpenSimplex` only
/// reaches about ±0.5 and leaves the upper half of a ramp unused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseBasis {
    #[default]
    SuperSimplex,
    Simplex,
    OpenSimplex,
    Perlin,
}

impl NoiseBasis {
    pub const ALL: [Self; 4] = [
        Self::SuperSimplex,
        Self::Simplex,
        Self::OpenSimplex,
        Self::Perlin,
    ];

    /// Name used in config files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::SuperSimplex => "super_simplex",
            Self::Simplex => "simplex",
            Self::OpenSimplex => "open_simplex",
            Self::Perlin => "perlin",
        }
    }
}

impl FromStr for NoiseBasis {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|basis| basis.name() == s)
            .ok_or_else(|| ConfigError::UnknownNoiseBasis(s.to_string()))
    }
}

enum Source {
    SuperSimplex(SuperSimplex),
    Simplex(Simplex),
    OpenSimplex(OpenSimplex),
    Perlin(Perlin),
}

/// Seeded 3D coherent noise. The permutation tables are built once in
/// [`NoiseField::new`] and never change afterwards, so a field can be shared
/// freely between worker threads.
pub struct NoiseField {
    seed: Seed,
    source: Source,
}

impl NoiseField {
    pub fn new(seed: Seed, basis: NoiseBasis) -> Self {
        let source = match basis {
            NoiseBasis::SuperSimplex => Source::SuperSimplex(SuperSimplex::new(seed.0)),
            NoiseBasis::Simplex => Source::Simplex(Simplex::new(seed.0)),
            NoiseBasis::OpenSimplex => Source::OpenSimplex(OpenSimplex::new(seed.0)),
            NoiseBasis::Perlin => Source::Perlin(Perlin::new(seed.0)),
        };
        Self { seed, source }
    }

    pub fn seed(&self) -> Seed {
        self.seed
    }

    /// Returns a value in roughly [-1, 1]. Non-finite input is not guarded.
    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        let point = [x, y, z];
        match &self.source {
            Source::SuperSimplex(n) => n.get(point),
            Source::Simplex(n) => n.get(point),
            Source::OpenSimplex(n) => n.get(point),
            Source::Perlin(n) => n.get(point),
        }
    }
}
