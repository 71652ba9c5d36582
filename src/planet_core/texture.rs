#[cfg(not(target_arch = "wasm32"))]
use rayon::prelude::*;

use crate::planet_core::color::{Band, ColorRamp};
use crate::planet_core::error::ConfigError;
use crate::planet_core::fractal::FractalParams;
use crate::planet_core::noise_field::NoiseField;
use crate::planet_core::sphere::texel_to_sphere;

pub const BYTES_PER_TEXEL: usize = 4;
pub const MAX_RESOLUTION: u32 = 16_384;

/// Row-major RGBA8 texels. Only [`TerrainTextureGenerator`] writes one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = (y as usize * self.width as usize + x as usize) * BYTES_PER_TEXEL;
        let mut texel = [0; 4];
        texel.copy_from_slice(&self.data[index..index + BYTES_PER_TEXEL]);
        Some(texel)
    }

    pub fn texels(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
        self.data
            .chunks_exact(BYTES_PER_TEXEL)
            .map(|c| [c[0], c[1], c[2], c[3]])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextureConfig {
    pub resolution: u32,
    pub ramp: ColorRamp,
    pub fractal: FractalParams,
}

/// Per-run coverage figures. `band_texels[i]` counts texels in terrain band `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureStats {
    pub water_texels: usize,
    pub band_texels: Vec<usize>,
    pub degenerate_texels: usize,
    pub min_height: f64,
    pub max_height: f64,
}

impl TextureStats {
    fn empty(bands: usize) -> Self {
        Self {
            water_texels: 0,
            band_texels: vec![0; bands],
            degenerate_texels: 0,
            min_height: f64::MAX,
            max_height: f64::MIN,
        }
    }

    fn record(&mut self, height: f64, band: Band) {
        match band {
            Band::Water => self.water_texels += 1,
            Band::Terrain(index) => self.band_texels[index] += 1,
        }
        if height.is_finite() {
            self.min_height = self.min_height.min(height);
            self.max_height = self.max_height.max(height);
        } else {
            self.degenerate_texels += 1;
        }
    }

    fn merge(mut self, other: Self) -> Self {
        self.water_texels += other.water_texels;
        for (total, count) in self.band_texels.iter_mut().zip(other.band_texels) {
            *total += count;
        }
        self.degenerate_texels += other.degenerate_texels;
        self.min_height = self.min_height.min(other.min_height);
        self.max_height = self.max_height.max(other.max_height);
        self
    }

    pub fn total_texels(&self) -> usize {
        self.water_texels + self.band_texels.iter().sum::<usize>()
    }

    pub fn water_fraction(&self) -> f64 {
        let total = self.total_texels();
        if total == 0 {
            return 0.0;
        }
        self.water_texels as f64 / total as f64
    }
}

/// Validated generation parameters. Construction is the only place a
/// configuration can fail, so `generate` always produces a full buffer.
#[derive(Debug, Clone)]
pub struct TerrainTextureGenerator {
    config: TextureConfig,
}

impl TerrainTextureGenerator {
    pub fn new(config: TextureConfig) -> Result<Self, ConfigError> {
        if config.resolution == 0 {
            return Err(ConfigError::ZeroResolution);
        }
        if config.resolution > MAX_RESOLUTION {
            return Err(ConfigError::ResolutionTooLarge(config.resolution));
        }
        config.fractal.validate()?;
        Ok(Self { config })
    }

    /// Accumulated height at a texel position. Fractional coordinates are
    /// allowed; column `resolution` is the same longitude as column 0.
    pub fn sample_height(&self, field: &NoiseField, column: f64, row: f64) -> f64 {
        let resolution = self.config.resolution as f64;
        let point = texel_to_sphere(
            column / resolution,
            row / resolution,
            self.config.fractal.radius,
        );
        self.config.fractal.accumulate(field, point)
    }

    pub fn generate(&self, field: &NoiseField) -> PixelBuffer {
        self.generate_with_stats(field).0
    }

    pub fn generate_with_stats(&self, field: &NoiseField) -> (PixelBuffer, TextureStats) {
        let side = self.config.resolution as usize;
        let row_bytes = side * BYTES_PER_TEXEL;
        let mut data = vec![0u8; row_bytes * side];

        let row_stats: Vec<TextureStats> = maybe_par_chunks_mut!(data, row_bytes)
            .enumerate()
            .map(|(y, row)| self.fill_row(field, y, row))
            .collect();

        let stats = row_stats
            .into_iter()
            .fold(TextureStats::empty(self.config.ramp.band_count()), TextureStats::merge);
        if stats.degenerate_texels > 0 {
            log::warn!(
                "{} texels had a non-finite height and fell back to the lowest band",
                stats.degenerate_texels
            );
        }

        let buffer = PixelBuffer {
            width: self.config.resolution,
            height: self.config.resolution,
            data,
        };
        (buffer, stats)
    }

    fn fill_row(&self, field: &NoiseField, y: usize, row: &mut [u8]) -> TextureStats {
        let ramp = &self.config.ramp;
        let mut stats = TextureStats::empty(ramp.band_count());
        for (x, texel) in row.chunks_exact_mut(BYTES_PER_TEXEL).enumerate() {
            let height = self.sample_height(field, x as f64, y as f64);
            let band = ramp.classify(height);
            texel.copy_from_slice(&ramp.color(band).to_rgba());
            stats.record(height, band);
        }
        stats
    }
}

/// One-shot form of [`TerrainTextureGenerator`]: validates, then fills a
/// `resolution` × `resolution` buffer.
pub fn generate(
    field: &NoiseField,
    resolution: u32,
    ramp: ColorRamp,
    octaves: u32,
    base_period: f64,
    radius: f64,
) -> Result<PixelBuffer, ConfigError> {
    let generator = TerrainTextureGenerator::new(TextureConfig {
        resolution,
        ramp,
        fractal: FractalParams {
            octaves,
            base_period,
            radius,
            ..FractalParams::default()
        },
    })?;
    Ok(generator.generate(field))
}
