use std::f64::consts::{PI, TAU};

use glam::DVec3;

/// Equirectangular texture coordinates to a point on a sphere. `u` wraps
/// longitude once around the equator and `v` runs from the south pole
/// (`z = -radius`) to the north pole.
pub fn texel_to_sphere(u: f64, v: f64, radius: f64) -> DVec3 {
    let theta = TAU * u;
    let phi = PI * v;
    DVec3::new(
        theta.cos() * phi.sin() * radius,
        theta.sin() * phi.sin() * radius,
        -phi.cos() * radius,
    )
}
