#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::planet_core::color::ColorRamp;
use crate::planet_core::error::ConfigError;
use crate::planet_core::fractal::FractalParams;
use crate::planet_core::noise_field::{NoiseBasis, NoiseField, Seed};
use crate::planet_core::texture::{TerrainTextureGenerator, TextureConfig};

pub const DEFAULT_RESOLUTION: u32 = 2048;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanetConfig {
    /// `None` picks a fresh random seed per run.
    pub seed: Option<f64>,
    pub resolution: u32,
    pub noise: NoiseBasis,
    pub fractal: FractalParams,
    pub palette: ColorRamp,
}

impl Default for PlanetConfig {
    fn default() -> Self {
        Self {
            seed: None,
            resolution: DEFAULT_RESOLUTION,
            noise: NoiseBasis::default(),
            fractal: FractalParams::default(),
            palette: ColorRamp::default(),
        }
    }
}

impl PlanetConfig {
    /// Reads `path`, falling back to defaults when the file is missing or
    /// cannot be parsed.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            log::info!("no {} found, using defaults", path.display());
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_json_str(&contents) {
                Ok(config) => {
                    log::info!("loaded {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("failed to parse {}: {e:#}, using defaults", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("failed to read {}: {e}, using defaults", path.display());
                Self::default()
            }
        }
    }

    pub fn from_json_str(contents: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn resolve_seed(&self) -> Result<Seed, ConfigError> {
        match self.seed {
            Some(value) => Seed::from_real(value),
            None => {
                let seed = Seed::random();
                log::info!("no seed configured, picked {seed}");
                Ok(seed)
            }
        }
    }

    pub fn noise_field(&self, seed: Seed) -> NoiseField {
        NoiseField::new(seed, self.noise)
    }

    pub fn generator(&self) -> Result<TerrainTextureGenerator, ConfigError> {
        TerrainTextureGenerator::new(TextureConfig {
            resolution: self.resolution,
            ramp: self.palette.clone(),
            fractal: self.fractal,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::PlanetConfig;
    use crate::planet_core::color::Rgb;
    use crate::planet_core::error::ConfigError;
    use crate::planet_core::noise_field::{NoiseBasis, Seed};

    #[test]
    fn empty_object_gives_defaults() {
        let config = PlanetConfig::from_json_str("{}").unwrap();
        assert_eq!(config, PlanetConfig::default());
        assert_eq!(config.resolution, 2048);
        assert_eq!(config.palette.band_count(), 6);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = PlanetConfig::from_json_str(
            r##"{
                "seed": 42,
                "resolution": 512,
                "noise": "perlin",
                "fractal": { "octaves": 6 },
                "palette": { "terrain": ["#102030", "#405060"], "water": "#0000ff" }
            }"##,
        )
        .unwrap();

        assert_eq!(config.seed, Some(42.0));
        assert_eq!(config.resolution, 512);
        assert_eq!(config.noise, NoiseBasis::Perlin);
        assert_eq!(config.fractal.octaves, 6);
        assert_eq!(config.fractal.base_period, 1024.0);
        assert_eq!(config.fractal.ratio, 4.0);
        assert_eq!(config.palette.terrain(), &[Rgb::from_hex(0x102030), Rgb::from_hex(0x405060)]);
        assert_eq!(config.palette.water(), Rgb::from_hex(0x0000ff));
    }

    #[test]
    fn empty_palette_is_a_parse_error() {
        let parsed = PlanetConfig::from_json_str(
            r##"{ "palette": { "terrain": [], "water": "#0000ff" } }"##,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn configured_seed_is_used() {
        let config = PlanetConfig {
            seed: Some(1234.0),
            ..PlanetConfig::default()
        };
        assert_eq!(config.resolve_seed().unwrap(), Seed(1234));
    }

    #[test]
    fn non_finite_seed_is_a_config_error() {
        let config = PlanetConfig {
            seed: Some(f64::NAN),
            ..PlanetConfig::default()
        };
        assert!(matches!(config.resolve_seed(), Err(ConfigError::NonFiniteSeed(_))));
    }

    #[test]
    fn zero_resolution_is_rejected_by_generator() {
        let config = PlanetConfig {
            resolution: 0,
            ..PlanetConfig::default()
        };
        assert!(matches!(config.generator(), Err(ConfigError::ZeroResolution)));
    }

    #[test]
    fn default_settings_reach_every_band() {
        let config = PlanetConfig {
            resolution: 128,
            ..PlanetConfig::default()
        };
        let generator = config.generator().unwrap();
        let top = config.palette.band_count() - 1;

        let top_band_seen = [1, 42, 12345].into_iter().any(|seed| {
            let (_, stats) = generator.generate_with_stats(&config.noise_field(Seed(seed)));
            stats.band_texels[top] > 0
        });
        assert!(top_band_seen);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let config = PlanetConfig::load(Path::new("definitely/not/here/planet.json"));
        assert_eq!(config, PlanetConfig::default());
    }

    #[test]
    fn malformed_file_loads_defaults() {
        let path = std::env::temp_dir().join(format!("planet-config-{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").unwrap();
        let config = PlanetConfig::load(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(config, PlanetConfig::default());
    }
}
