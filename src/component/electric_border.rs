use crate::animation::clock::{AnimationClock, FrameDelta, FrameTicker};
use crate::config::style::BorderStyle;
use crate::foundation::core::RegionSize;
use crate::path::border_path::BorderPath;
use crate::path::sampler::{OutlineCache, PathSampler};
use crate::render::layers::{BorderFrame, GlowLayer, SurfaceDesc, glow_layers};

/// One animated border instance.
///
/// Owns its clock and the latest layout snapshot. Layout updates and frame callbacks arrive
/// independently; every path is built from whatever size was reported last.
#[derive(Clone, Debug)]
pub struct ElectricBorder {
    style: BorderStyle,
    sampler: PathSampler,
    layers: [GlowLayer; 3],
    clock: AnimationClock,
    size: RegionSize,
    cache: OutlineCache,
}

impl ElectricBorder {
    /// New instance at time 0 with no measured region yet.
    pub fn new(style: BorderStyle) -> Self {
        let style = style.sanitized();
        Self {
            sampler: PathSampler::new(&style),
            layers: glow_layers(&style),
            clock: AnimationClock::new(style.speed),
            size: RegionSize::ZERO,
            cache: OutlineCache::new(),
            style,
        }
    }

    /// Sanitized style in use.
    pub fn style(&self) -> &BorderStyle {
        &self.style
    }

    /// Latest reported content size.
    pub fn size(&self) -> RegionSize {
        self.size
    }

    /// Current animation time.
    pub fn time(&self) -> f64 {
        self.clock.elapsed()
    }

    /// Record a layout measurement of the wrapped content.
    pub fn on_layout(&mut self, width: f64, height: f64) {
        let size = RegionSize::new(width, height);
        if size != self.size {
            tracing::debug!(width, height, "border region resized");
            self.size = size;
        }
    }

    /// Advance the clock by one frame; returns the new time.
    pub fn on_frame(&mut self, delta: FrameDelta) -> f64 {
        self.clock.advance(delta)
    }

    /// Pull one delta from a ticker. A skipped frame leaves the clock where it was.
    pub fn tick(&mut self, ticker: &mut dyn FrameTicker) -> f64 {
        match ticker.next_delta() {
            Some(delta) => self.on_frame(delta),
            None => self.clock.elapsed(),
        }
    }

    /// Path for the current size and time.
    pub fn path(&mut self) -> BorderPath {
        let time = self.clock.elapsed();
        self.path_at(time)
    }

    /// Path for the current size at an explicit time.
    pub fn path_at(&mut self, time: f64) -> BorderPath {
        self.sampler.build_path_cached(&mut self.cache, self.size, time)
    }

    /// Everything the presentation layer needs for the current frame.
    pub fn frame(&mut self) -> BorderFrame {
        let time = self.clock.elapsed();
        self.frame_at(time)
    }

    /// Frame for the current size at an explicit time.
    pub fn frame_at(&mut self, time: f64) -> BorderFrame {
        BorderFrame {
            time,
            size: self.size,
            path: self.path_at(time),
            surface: SurfaceDesc::for_region(self.size),
            layers: self.layers,
        }
    }
}

impl Default for ElectricBorder {
    fn default() -> Self {
        Self::new(BorderStyle::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/component/electric_border.rs"]
mod tests;
