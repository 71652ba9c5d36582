// Binary entry point — native only.
// On wasm32, the exports in lib.rs are used instead.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use std::time::Instant;

    use anyhow::Context;
    use clap::Parser;

    use planet_texture::cli::Args;
    use planet_texture::export;
    use planet_texture::planet_core::config::PlanetConfig;

    env_logger::init();
    let args = Args::parse();

    let mut config = PlanetConfig::load(&args.config);
    args.apply_to(&mut config);
    log::debug!("effective config: {config:?}");

    let generator = config.generator().context("invalid texture configuration")?;
    let seed = config.resolve_seed().context("invalid seed")?;
    let field = config.noise_field(seed);
    log::info!(
        "generating {res}x{res} texture, seed {}, {} octaves, noise {}",
        field.seed(),
        config.fractal.octaves,
        config.noise.name(),
        res = config.resolution,
    );

    let started = Instant::now();
    let (buffer, stats) = generator.generate_with_stats(&field);
    log::info!(
        "generated in {:.2?}: water {:.1}%, height range [{:.3}, {:.3}]",
        started.elapsed(),
        stats.water_fraction() * 100.0,
        stats.min_height,
        stats.max_height,
    );
    for (band, count) in stats.band_texels.iter().enumerate() {
        log::debug!(
            "band {band} ({}): {count} texels",
            config.palette.terrain()[band]
        );
    }

    export::save_png(&buffer, &args.output)?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Wasm entry points are the #[wasm_bindgen] exports in lib.rs.
}
