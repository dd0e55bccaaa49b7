use std::collections::HashMap;

use rayon::prelude::*;

use crate::animation::clock::{AnimationClock, FixedStepTicker, Fps, FrameTicker};
use crate::config::style::BorderStyle;
use crate::foundation::core::RegionSize;
use crate::foundation::error::{BorderError, BorderResult};
use crate::foundation::math::Fnv1a64;
use crate::path::border_path::BorderPath;
use crate::path::sampler::{OutlineCache, PathSampler};
use crate::render::cpu::{CpuRenderer, FrameRGBA, RenderSettings};
use crate::render::layers::{BorderFrame, SurfaceDesc, glow_layers};

/// How a frame sequence is scheduled.
#[derive(Clone, Debug, Default)]
pub struct RenderThreading {
    /// Rasterize frames on a rayon pool.
    pub parallel: bool,
    /// Pool size; `None` uses rayon's default.
    pub threads: Option<usize>,
    /// Render each distinct path once and reuse the pixels for repeats.
    pub static_frame_elision: bool,
}

/// Counters from a sequence render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames requested.
    pub frames_total: u64,
    /// Frames actually rasterized.
    pub frames_rendered: u64,
    /// Frames copied from an identical earlier frame.
    pub frames_elided: u64,
}

/// Stable hash of a path's exact point coordinates.
pub fn frame_fingerprint(path: &BorderPath) -> u64 {
    let mut h = Fnv1a64::new_default();
    h.write_u64(path.len() as u64);
    for p in path.points() {
        h.write_f64(p.x);
        h.write_f64(p.y);
    }
    h.finish()
}

/// Build the frames of an animation driven at a fixed frame rate.
///
/// Frame `k` is built at the clock value reached after `k` fixed steps.
pub fn build_frames(
    style: &BorderStyle,
    size: RegionSize,
    fps: Fps,
    frame_count: u64,
) -> Vec<BorderFrame> {
    let style = style.sanitized();
    let sampler = PathSampler::new(&style);
    let mut cache = OutlineCache::new();
    let mut clock = AnimationClock::new(style.speed);
    let mut ticker = FixedStepTicker::new(fps);
    let surface = SurfaceDesc::for_region(size);
    let layers = glow_layers(&style);

    let mut frames = Vec::with_capacity(frame_count.min(4096) as usize);
    for k in 0..frame_count {
        if k > 0
            && let Some(delta) = ticker.next_delta()
        {
            clock.advance(delta);
        }
        let time = clock.elapsed();
        frames.push(BorderFrame {
            time,
            size,
            path: sampler.build_path_cached(&mut cache, size, time),
            surface,
            layers,
        });
    }
    frames
}

/// Render an animation to pixels.
#[tracing::instrument(skip(style, settings))]
pub fn render_sequence(
    style: &BorderStyle,
    size: RegionSize,
    fps: Fps,
    frame_count: u64,
    settings: &RenderSettings,
    threading: &RenderThreading,
) -> BorderResult<(Vec<FrameRGBA>, RenderStats)> {
    if frame_count == 0 {
        return Err(BorderError::validation("frame count must be > 0"));
    }

    let frames = build_frames(style, size, fps, frame_count);
    let mut stats = RenderStats {
        frames_total: frame_count,
        ..RenderStats::default()
    };

    // Index of the frame whose pixels each frame reuses.
    let mut source = Vec::with_capacity(frames.len());
    let mut unique = Vec::new();
    let mut seen = HashMap::<u64, usize>::new();
    for (idx, frame) in frames.iter().enumerate() {
        if threading.static_frame_elision {
            let fp = frame_fingerprint(&frame.path);
            if let Some(&slot) = seen.get(&fp) {
                source.push(slot);
                continue;
            }
            seen.insert(fp, unique.len());
        }
        source.push(unique.len());
        unique.push(idx);
    }

    let rendered: Vec<FrameRGBA> = if threading.parallel {
        let pool = build_thread_pool(threading.threads)?;
        pool.install(|| {
            unique
                .par_iter()
                .map_init(
                    || CpuRenderer::new(settings.clone()),
                    |renderer, &idx| renderer.render(&frames[idx]),
                )
                .collect::<BorderResult<Vec<_>>>()
        })?
    } else {
        let mut renderer = CpuRenderer::new(settings.clone());
        unique
            .iter()
            .map(|&idx| renderer.render(&frames[idx]))
            .collect::<BorderResult<Vec<_>>>()?
    };

    stats.frames_rendered = rendered.len() as u64;
    stats.frames_elided = stats.frames_total - stats.frames_rendered;
    tracing::debug!(
        rendered = stats.frames_rendered,
        elided = stats.frames_elided,
        "sequence rendered"
    );

    let out = source.iter().map(|&slot| rendered[slot].clone()).collect();
    Ok((out, stats))
}

fn build_thread_pool(threads: Option<usize>) -> BorderResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(BorderError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| BorderError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
