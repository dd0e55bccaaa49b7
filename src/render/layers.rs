use crate::config::style::{BorderStyle, PADDING};
use crate::foundation::core::{RegionSize, Rgba8, Vec2};
use crate::path::border_path::BorderPath;

/// One stroke of the glow stack.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GlowLayer {
    /// Stroke width in layout units.
    pub stroke_width: f64,
    /// Gaussian blur sigma; 0 draws a crisp stroke.
    pub blur_sigma: f64,
    /// Stroke color.
    pub color: Rgba8,
}

/// The three strokes drawn back to front: wide heavy glow, narrow light glow, crisp white core.
pub fn glow_layers(style: &BorderStyle) -> [GlowLayer; 3] {
    [
        GlowLayer {
            stroke_width: style.stroke_width * 4.0,
            blur_sigma: 6.0,
            color: style.color,
        },
        GlowLayer {
            stroke_width: style.stroke_width * 2.0,
            blur_sigma: 2.0,
            color: style.color,
        },
        GlowLayer {
            stroke_width: style.stroke_width,
            blur_sigma: 0.0,
            color: Rgba8::WHITE,
        },
    ]
}

/// Drawing surface that wraps the content box plus the padding margin on every side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SurfaceDesc {
    /// Pixel width.
    pub width: u32,
    /// Pixel height.
    pub height: u32,
}

impl SurfaceDesc {
    /// Surface for a content box; empty content still gets the padding-only surface.
    pub fn for_region(size: RegionSize) -> Self {
        let padded = RegionSize::new(size.width.max(0.0), size.height.max(0.0)).padded(PADDING);
        Self {
            width: to_px(padded.width),
            height: to_px(padded.height),
        }
    }

    /// Where the surface sits relative to the content box's top-left corner.
    pub fn offset() -> Vec2 {
        Vec2::new(-PADDING, -PADDING)
    }
}

fn to_px(v: f64) -> u32 {
    if v.is_finite() {
        v.ceil().clamp(0.0, f64::from(u32::MAX)) as u32
    } else {
        0
    }
}

/// Everything needed to present one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BorderFrame {
    /// Animation time the path was built at.
    pub time: f64,
    /// Content size snapshot the path was built for.
    pub size: RegionSize,
    /// The displaced outline.
    pub path: BorderPath,
    /// Target surface.
    pub surface: SurfaceDesc,
    /// Strokes, back to front.
    pub layers: [GlowLayer; 3],
}

#[cfg(test)]
#[path = "../../tests/unit/render/layers.rs"]
mod tests;
