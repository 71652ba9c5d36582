use std::path::Path;

use anyhow::{Context, Result};

use crate::planet_core::texture::PixelBuffer;

/// Encodes `buffer` as an RGBA PNG at `path`, creating parent directories.
pub fn save_png(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    image::save_buffer(
        path,
        buffer.as_bytes(),
        buffer.width(),
        buffer.height(),
        image::ColorType::Rgba8,
    )
    .context("failed to encode PNG")?;

    log::info!("texture saved: {}", path.display());
    Ok(())
}
