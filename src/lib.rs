#[cfg(not(target_arch = "wasm32"))]
pub mod cli;
#[cfg(not(target_arch = "wasm32"))]
pub mod export;
pub mod planet_core;

pub use planet_core::color::{Band, ColorRamp, Rgb};
pub use planet_core::config::PlanetConfig;
pub use planet_core::error::ConfigError;
pub use planet_core::fractal::FractalParams;
pub use planet_core::noise_field::{NoiseBasis, NoiseField, Seed};
pub use planet_core::texture::{
    generate, PixelBuffer, TerrainTextureGenerator, TextureConfig, TextureStats,
};

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use wasm_bindgen::prelude::*;

    use crate::planet_core::config::PlanetConfig;

    #[wasm_bindgen(start)]
    pub fn wasm_main() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("failed to init logger");
    }

    /// RGBA8 bytes of a `resolution` × `resolution` planet texture using the
    /// default palette and octave settings. A missing seed picks a random one.
    #[wasm_bindgen]
    pub fn generate_planet_texture(seed: Option<f64>, resolution: u32) -> Result<Vec<u8>, JsError> {
        let config = PlanetConfig {
            seed,
            resolution,
            ..PlanetConfig::default()
        };
        let generator = config.generator()?;
        let field = config.noise_field(config.resolve_seed()?);
        Ok(generator.generate(&field).into_bytes())
    }
}
