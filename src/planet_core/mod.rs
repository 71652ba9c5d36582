#[macro_use]
mod par;

pub mod color;
pub mod config;
pub mod error;
pub mod fractal;
pub mod noise_field;
pub mod sphere;
pub mod texture;
