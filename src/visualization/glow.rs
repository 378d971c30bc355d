//! Halo geometry for star rendering
//!
//! A star is a filled disc of `radius` surrounded by unit-spaced rings out
//! to `GLOW_EXTENT * radius`. Ring opacity falls off with the cube of the
//! ring radius, a sharper decay than physical inverse-square light.

/// Halo reaches this multiple of the core radius
pub const GLOW_EXTENT: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HaloRing {
    pub radius: f64,
    pub opacity: f64, // in [0, 1]
}

/// Rings from `radius` (inclusive) to `GLOW_EXTENT * radius` (exclusive)
pub fn halo_rings(radius: f64) -> impl Iterator<Item = HaloRing> {
    let end = GLOW_EXTENT * radius;
    let r3 = radius * radius * radius;
    (0..)
        .map(move |k| radius + k as f64)
        .take_while(move |&j| radius > 0.0 && j < end)
        .map(move |j| HaloRing {
            radius: j,
            opacity: r3 / (j * j * j),
        })
}
