use crate::foundation::error::{BorderError, BorderResult};

pub use kurbo::{BezPath, Point, Rect, Vec2};

/// Measured size of the wrapped content box, in layout units.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RegionSize {
    /// Content width.
    pub width: f64,
    /// Content height.
    pub height: f64,
}

impl RegionSize {
    /// The unmeasured region (before the first layout pass).
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Build a region size from raw layout values.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `true` when there is nothing to outline (a zero, negative or non-finite dimension).
    pub fn is_empty(self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }

    /// The size grown by `padding` on every side.
    pub fn padded(self, padding: f64) -> Self {
        Self {
            width: self.width + 2.0 * padding,
            height: self.height + 2.0 * padding,
        }
    }
}

/// Straight-alpha RGBA8 color. Serialized as a hex string (`"#7df9ff"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque color from three channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (the `#` is optional).
    pub fn from_hex(s: &str) -> BorderResult<Self> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(BorderError::config(format!("invalid hex color '{s}'")));
        }

        let channel = |src: &str| -> BorderResult<u8> {
            u8::from_str_radix(src, 16)
                .map_err(|_| BorderError::config(format!("invalid hex color '{s}'")))
        };

        match hex.len() {
            3 => {
                let mut c = [0u8; 3];
                for (i, out) in c.iter_mut().enumerate() {
                    let v = channel(&hex[i..i + 1])?;
                    *out = v * 17;
                }
                Ok(Self::rgb(c[0], c[1], c[2]))
            }
            6 | 8 => {
                let r = channel(&hex[0..2])?;
                let g = channel(&hex[2..4])?;
                let b = channel(&hex[4..6])?;
                let a = if hex.len() == 8 {
                    channel(&hex[6..8])?
                } else {
                    255
                };
                Ok(Self { r, g, b, a })
            }
            _ => Err(BorderError::config(format!(
                "hex color '{s}' must have 3, 6 or 8 digits"
            ))),
        }
    }

    /// Lowercase `#rrggbb` (or `#rrggbbaa` when not opaque).
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Premultiplied `[r, g, b, a]` bytes.
    pub fn premultiplied(self) -> [u8; 4] {
        let a = u16::from(self.a);
        let premul = |c: u8| crate::foundation::math::mul_div255(u16::from(c), a) as u8;
        [premul(self.r), premul(self.g), premul(self.b), self.a]
    }
}

impl serde::Serialize for Rgba8 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Rgba8 {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
