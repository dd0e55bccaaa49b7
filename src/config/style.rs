use std::io::Read;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{BorderError, BorderResult};

/// Margin (layout units) added around the content so strokes and blur are not clipped.
pub const PADDING: f64 = 60.0;
/// Multiplier from fractal noise value to displacement in layout units.
pub const DISPLACEMENT_SCALE: f64 = 10.0;
/// Multiplier from perimeter progress to the noise `x` coordinate.
pub const NOISE_PROGRESS_SCALE: f64 = 8.0;
/// Upper bound on path segments per frame; longer outlines are sampled more sparsely.
pub const MAX_SAMPLES: usize = 1 << 16;

/// Default border color (`#7df9ff`).
pub const DEFAULT_COLOR: Rgba8 = Rgba8::rgb(0x7d, 0xf9, 0xff);

/// User-facing appearance parameters of one border instance.
///
/// Every field is optional in JSON (`{"borderRadius": 8, "chaos": 0.2}`).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BorderStyle {
    /// Requested corner radius; clamped per frame to half the short side.
    pub border_radius: f64,
    /// Glow color of the two blurred strokes.
    pub color: Rgba8,
    /// Clock multiplier (animation seconds per wall-clock second).
    pub speed: f64,
    /// Noise amplitude.
    pub chaos: f64,
    /// Width of the crisp inner stroke; glow strokes are multiples of it.
    pub stroke_width: f64,
}

impl Default for BorderStyle {
    fn default() -> Self {
        Self {
            border_radius: 12.0,
            color: DEFAULT_COLOR,
            speed: 0.5,
            chaos: 0.5,
            stroke_width: 1.0,
        }
    }
}

impl BorderStyle {
    /// Clamp out-of-range values to the nearest valid ones.
    ///
    /// Configuration is never rejected for being out of range.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        Self {
            border_radius: non_negative("borderRadius", self.border_radius),
            color: self.color,
            speed: non_negative("speed", self.speed),
            chaos: non_negative("chaos", self.chaos),
            stroke_width: if self.stroke_width.is_finite() && self.stroke_width > 0.0 {
                self.stroke_width
            } else {
                tracing::warn!(
                    value = self.stroke_width,
                    "strokeWidth must be > 0; using default"
                );
                defaults.stroke_width
            },
        }
    }

    /// Parse a JSON style document and sanitize it.
    pub fn from_json_str(s: &str) -> BorderResult<Self> {
        let style: Self = serde_json::from_str(s)
            .map_err(|e| BorderError::serde(format!("parse border style JSON: {e}")))?;
        Ok(style.sanitized())
    }

    /// Parse a JSON style document from a reader and sanitize it.
    pub fn from_json_reader<R: Read>(reader: R) -> BorderResult<Self> {
        let style: Self = serde_json::from_reader(reader)
            .map_err(|e| BorderError::serde(format!("parse border style JSON: {e}")))?;
        Ok(style.sanitized())
    }
}

fn non_negative(field: &'static str, value: f64) -> f64 {
    if value.is_nan() {
        tracing::warn!(field, "NaN style value; clamping to 0");
        return 0.0;
    }
    if value < 0.0 {
        tracing::warn!(field, value, "negative style value; clamping to 0");
        return 0.0;
    }
    value
}

#[cfg(test)]
#[path = "../../tests/unit/config/style.rs"]
mod tests;
