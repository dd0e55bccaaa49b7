//! `electric_border` builds the animated, noise-displaced outline of a glowing "electric"
//! border around a rectangular region, and optionally rasterizes it.
//!
//! # Pipeline overview
//!
//! 1. **Clock**: an [`AnimationClock`] owned by each [`ElectricBorder`] advances by
//!    `frame delta * speed`, driven by any [`FrameTicker`].
//! 2. **Outline**: [`RoundedRectOutline`] maps normalized arc length to points on the
//!    rounded rectangle around the measured [`RegionSize`].
//! 3. **Displacement**: two [`FractalNoise`] channels push every sample off the outline.
//! 4. **Path**: [`PathSampler`] assembles the closed [`BorderPath`] for one frame.
//! 5. **Present** (optional): [`CpuRenderer`] strokes the path three times (two blurred glow
//!    layers and a crisp core); [`render_sequence`] renders whole animations.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: a path depends only on size, time and style; there is no hidden state
//!   and no true randomness.
//! - **Total core**: the geometry and noise functions never fail; degenerate input (empty
//!   regions, oversized radii, negative parameters) is clamped or yields an empty path.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod component;
mod config;
mod foundation;
mod geometry;
mod noise;
mod path;
mod render;

pub use animation::clock::{
    AnimationClock, FixedStepTicker, Fps, FrameDelta, FrameTicker, InstantTicker,
};
pub use component::electric_border::ElectricBorder;
pub use config::style::{
    BorderStyle, DEFAULT_COLOR, DISPLACEMENT_SCALE, MAX_SAMPLES, NOISE_PROGRESS_SCALE, PADDING,
};
pub use foundation::core::{BezPath, Point, Rect, RegionSize, Rgba8, Vec2};
pub use foundation::error::{BorderError, BorderResult};
pub use geometry::rounded_rect::{
    CORNER_SWEEP, Corner, OutlineSegment, RoundedRectOutline, effective_radius,
};
pub use noise::fractal::{FractalNoise, NoiseChannel};
pub use noise::hash::{LATTICE_ROW_STRIDE, noise_2d, pseudo_random, smoothstep};
pub use path::border_path::BorderPath;
pub use path::sampler::{OutlineCache, OutlineSample, PathSampler, sample_count};
pub use render::blur::{blur_rgba8_premul, radius_for_sigma};
pub use render::composite::{over, over_in_place};
pub use render::cpu::{CpuRenderer, FrameRGBA, RenderSettings};
pub use render::layers::{BorderFrame, GlowLayer, SurfaceDesc, glow_layers};
pub use render::pipeline::{
    RenderStats, RenderThreading, build_frames, frame_fingerprint, render_sequence,
};
