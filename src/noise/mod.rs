pub mod fractal;
pub mod hash;
