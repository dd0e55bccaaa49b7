//! Deterministic value noise.
//!
//! The scalar hash is the classic `fract(sin(x) * k)` shader trick, except that the
//! fractional part is taken with `%`, which keeps the sign of the dividend. Negative hashes
//! are part of the look and are reproduced as-is.

/// Row stride used to fold a 2D lattice coordinate into the 1D hash input.
pub const LATTICE_ROW_STRIDE: f64 = 57.0;

const HASH_FREQUENCY: f64 = 12.9898;
const HASH_SCALE: f64 = 43758.5453123;

/// Scalar pseudo-random value in `(-1, 1)`, pure in `x`.
pub fn pseudo_random(x: f64) -> f64 {
    ((x * HASH_FREQUENCY).sin() * HASH_SCALE) % 1.0
}

/// Cubic Hermite fade `t² (3 - 2t)`.
#[inline]
pub fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Smoothed value noise on the unit lattice.
///
/// Continuous everywhere: at integer coordinates the fade weights collapse to 0 or 1, so both
/// neighbouring cells agree on the lattice value.
pub fn noise_2d(x: f64, y: f64) -> f64 {
    let i = x.floor();
    let j = y.floor();
    let fx = x - i;
    let fy = y - j;

    let a = pseudo_random(i + j * LATTICE_ROW_STRIDE);
    let b = pseudo_random(i + 1.0 + j * LATTICE_ROW_STRIDE);
    let c = pseudo_random(i + (j + 1.0) * LATTICE_ROW_STRIDE);
    let d = pseudo_random(i + 1.0 + (j + 1.0) * LATTICE_ROW_STRIDE);

    let ux = smoothstep(fx);
    let uy = smoothstep(fy);

    a * (1.0 - ux) * (1.0 - uy) + b * ux * (1.0 - uy) + c * (1.0 - ux) * uy + d * ux * uy
}

#[cfg(test)]
#[path = "../../tests/unit/noise/hash.rs"]
mod tests;
