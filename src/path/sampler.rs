//! Per-frame path assembly: outline samples displaced by two fractal noise channels.

use crate::config::style::{
    BorderStyle, DISPLACEMENT_SCALE, MAX_SAMPLES, NOISE_PROGRESS_SCALE, PADDING,
};
use crate::foundation::core::{Point, RegionSize};
use crate::geometry::rounded_rect::RoundedRectOutline;
use crate::noise::fractal::{FractalNoise, NoiseChannel};
use crate::path::border_path::BorderPath;

/// Number of segments for a nominal perimeter: one per 2 units, in `1..=MAX_SAMPLES`.
pub fn sample_count(approx_perimeter: f64) -> usize {
    let n = (approx_perimeter / 2.0).floor();
    if n.is_nan() {
        return 1;
    }
    n.clamp(1.0, MAX_SAMPLES as f64) as usize
}

/// One undisplaced outline sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutlineSample {
    /// Normalized arc-length position in `[0, 1]`.
    pub progress: f64,
    /// Point on the undisplaced outline.
    pub point: Point,
}

/// Builds displaced border paths for one style.
///
/// Stateless: the same `(size, time)` always yields the same path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathSampler {
    border_radius: f64,
    noise: FractalNoise,
    padding: f64,
    displacement_scale: f64,
    progress_scale: f64,
}

impl PathSampler {
    /// Sampler for a (sanitized) style.
    pub fn new(style: &BorderStyle) -> Self {
        Self {
            border_radius: style.border_radius,
            noise: FractalNoise::with_chaos(style.chaos),
            padding: PADDING,
            displacement_scale: DISPLACEMENT_SCALE,
            progress_scale: NOISE_PROGRESS_SCALE,
        }
    }

    /// The fractal noise driving the displacement.
    pub fn noise(&self) -> &FractalNoise {
        &self.noise
    }

    /// Undisplaced outline for a content box.
    pub fn outline(&self, size: RegionSize) -> RoundedRectOutline {
        RoundedRectOutline::new(size, self.border_radius, self.padding)
    }

    /// Undisplaced samples `0..=N` for a content box (empty when the box is empty).
    pub fn outline_samples(&self, size: RegionSize) -> Vec<OutlineSample> {
        if size.is_empty() {
            return Vec::new();
        }
        let outline = self.outline(size);
        let n = sample_count(outline.approx_perimeter());
        (0..=n)
            .map(|i| {
                let progress = i as f64 / n as f64;
                OutlineSample {
                    progress,
                    point: outline.point_at(progress),
                }
            })
            .collect()
    }

    /// Full path for `size` at animation time `time`.
    pub fn build_path(&self, size: RegionSize, time: f64) -> BorderPath {
        let samples = self.outline_samples(size);
        self.displace_all(&samples, time)
    }

    /// Same output as [`PathSampler::build_path`], reusing undisplaced samples across frames.
    pub fn build_path_cached(
        &self,
        cache: &mut OutlineCache,
        size: RegionSize,
        time: f64,
    ) -> BorderPath {
        let samples = cache.samples(self, size);
        self.displace_all(samples, time)
    }

    /// Displace one outline sample at `time`.
    pub fn displace(&self, sample: OutlineSample, time: f64) -> Point {
        let x = sample.progress * self.progress_scale;
        let dx = self.noise.channel(x, time, NoiseChannel::X);
        let dy = self.noise.channel(x, time, NoiseChannel::Y);
        Point::new(
            sample.point.x + dx * self.displacement_scale,
            sample.point.y + dy * self.displacement_scale,
        )
    }

    fn displace_all(&self, samples: &[OutlineSample], time: f64) -> BorderPath {
        BorderPath::from_points(samples.iter().map(|&s| self.displace(s, time)).collect())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct OutlineKey {
    width: u64,
    height: u64,
    border_radius: u64,
    padding: u64,
}

impl OutlineKey {
    fn new(sampler: &PathSampler, size: RegionSize) -> Self {
        Self {
            width: size.width.to_bits(),
            height: size.height.to_bits(),
            border_radius: sampler.border_radius.to_bits(),
            padding: sampler.padding.to_bits(),
        }
    }
}

/// Undisplaced outline samples for the most recent geometry.
///
/// The outline only depends on size and radius, so it survives across frames until the
/// region is resized.
#[derive(Clone, Debug, Default)]
pub struct OutlineCache {
    key: Option<OutlineKey>,
    samples: Vec<OutlineSample>,
    rebuilds: u64,
}

impl OutlineCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Samples for `size`, rebuilt only when the geometry changed.
    pub fn samples(&mut self, sampler: &PathSampler, size: RegionSize) -> &[OutlineSample] {
        let key = OutlineKey::new(sampler, size);
        if self.key != Some(key) {
            self.samples = sampler.outline_samples(size);
            self.key = Some(key);
            self.rebuilds += 1;
            tracing::debug!(
                width = size.width,
                height = size.height,
                samples = self.samples.len(),
                "rebuilt outline samples"
            );
        }
        &self.samples
    }

    /// How many times the samples were recomputed.
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }

    /// Drop cached samples.
    pub fn clear(&mut self) {
        self.key = None;
        self.samples.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/sampler.rs"]
mod tests;
