//! Configuration error types.

/// Errors raised while validating generation inputs, before any sampling.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The texture must have at least one texel per side.
    #[error("texture resolution must be positive")]
    ZeroResolution,

    /// The texture would exceed the largest supported side length.
    #[error(
        "texture resolution {0} exceeds the maximum of {max}",
        max = crate::planet_core::texture::MAX_RESOLUTION
    )]
    ResolutionTooLarge(u32),

    /// A color ramp needs at least one terrain band.
    #[error("color ramp has no terrain colors")]
    EmptyRamp,

    /// Seeds must be finite numbers.
    #[error("seed must be finite, got {0}")]
    NonFiniteSeed(f64),

    /// A fractal parameter was non-finite or not strictly positive.
    #[error("fractal parameter `{name}` must be finite and positive, got {value}")]
    InvalidFractal { name: &'static str, value: f64 },

    /// A color string was not of the form `#rrggbb` or `0xrrggbb`.
    #[error("invalid color `{0}`")]
    InvalidColor(String),

    /// The noise basis name is not one we know.
    #[error("unknown noise basis `{0}`")]
    UnknownNoiseBasis(String),
}
