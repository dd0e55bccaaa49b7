//! Arc-length parametrization of a rounded rectangle outline.
//!
//! The outline is walked clockwise (in y-down screen space) starting at the left end of the
//! top edge: top edge, top-right corner, right edge, bottom-right corner, bottom edge,
//! bottom-left corner, left edge, top-left corner.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::foundation::core::{Point, RegionSize};

/// Angular sweep of every corner arc.
pub const CORNER_SWEEP: f64 = FRAC_PI_2;

/// One of the four quarter-circle corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Upper right.
    TopRight,
    /// Lower right.
    BottomRight,
    /// Lower left.
    BottomLeft,
    /// Upper left.
    TopLeft,
}

impl Corner {
    /// Angle (radians, y-down) where the arc starts; each arc sweeps `+π/2`.
    pub fn start_angle(self) -> f64 {
        match self {
            Self::TopRight => -FRAC_PI_2,
            Self::BottomRight => 0.0,
            Self::BottomLeft => FRAC_PI_2,
            Self::TopLeft => PI,
        }
    }
}

/// The eight pieces of the outline, in traversal order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutlineSegment {
    /// Straight top edge, left to right.
    TopEdge,
    /// Top-right arc.
    TopRightCorner,
    /// Straight right edge, top to bottom.
    RightEdge,
    /// Bottom-right arc.
    BottomRightCorner,
    /// Straight bottom edge, right to left.
    BottomEdge,
    /// Bottom-left arc.
    BottomLeftCorner,
    /// Straight left edge, bottom to top.
    LeftEdge,
    /// Top-left arc.
    TopLeftCorner,
}

impl OutlineSegment {
    /// All segments in traversal order.
    pub const ALL: [Self; 8] = [
        Self::TopEdge,
        Self::TopRightCorner,
        Self::RightEdge,
        Self::BottomRightCorner,
        Self::BottomEdge,
        Self::BottomLeftCorner,
        Self::LeftEdge,
        Self::TopLeftCorner,
    ];

    /// The corner this segment traces, if it is an arc.
    pub fn corner(self) -> Option<Corner> {
        match self {
            Self::TopRightCorner => Some(Corner::TopRight),
            Self::BottomRightCorner => Some(Corner::BottomRight),
            Self::BottomLeftCorner => Some(Corner::BottomLeft),
            Self::TopLeftCorner => Some(Corner::TopLeft),
            Self::TopEdge | Self::RightEdge | Self::BottomEdge | Self::LeftEdge => None,
        }
    }
}

/// Clamp a requested corner radius into `[0, min(width, height) / 2]`.
pub fn effective_radius(border_radius: f64, size: RegionSize) -> f64 {
    let max = (size.width.min(size.height) / 2.0).max(0.0);
    if border_radius.is_nan() {
        return 0.0;
    }
    border_radius.clamp(0.0, max)
}

/// Undisplaced rounded rectangle outline placed at `(padding, padding)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundedRectOutline {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    radius: f64,
    straight_width: f64,
    straight_height: f64,
    corner_arc: f64,
}

impl RoundedRectOutline {
    /// Build the outline for a content box of `size`, offset by `padding` on both axes.
    pub fn new(size: RegionSize, border_radius: f64, padding: f64) -> Self {
        let width = size.width.max(0.0);
        let height = size.height.max(0.0);
        let radius = effective_radius(border_radius, RegionSize::new(width, height));
        Self {
            left: padding,
            top: padding,
            width,
            height,
            radius,
            straight_width: (width - 2.0 * radius).max(0.0),
            straight_height: (height - 2.0 * radius).max(0.0),
            corner_arc: (PI * radius) / 2.0,
        }
    }

    /// Clamped corner radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Top-left corner of the (unrounded) box.
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Exact outline length.
    pub fn perimeter(&self) -> f64 {
        2.0 * self.straight_width + 2.0 * self.straight_height + 4.0 * self.corner_arc
    }

    /// Nominal length `2(w + h) + 2πr` used to pick the sampling density.
    pub fn approx_perimeter(&self) -> f64 {
        2.0 * (self.width + self.height) + 2.0 * PI * self.radius
    }

    /// Length of one segment.
    pub fn segment_length(&self, segment: OutlineSegment) -> f64 {
        match segment {
            OutlineSegment::TopEdge | OutlineSegment::BottomEdge => self.straight_width,
            OutlineSegment::RightEdge | OutlineSegment::LeftEdge => self.straight_height,
            _ => self.corner_arc,
        }
    }

    /// Center of a corner arc.
    pub fn corner_center(&self, corner: Corner) -> Point {
        let r = self.radius;
        let (x0, y0) = (self.left, self.top);
        let (x1, y1) = (self.left + self.width, self.top + self.height);
        match corner {
            Corner::TopRight => Point::new(x1 - r, y0 + r),
            Corner::BottomRight => Point::new(x1 - r, y1 - r),
            Corner::BottomLeft => Point::new(x0 + r, y1 - r),
            Corner::TopLeft => Point::new(x0 + r, y0 + r),
        }
    }

    /// Point at normalized arc-length `progress` (0 is the left end of the top edge).
    ///
    /// Progress slightly past 1 (float error) lands on the final corner instead of running
    /// off the segment table.
    pub fn point_at(&self, progress: f64) -> Point {
        const FINAL: OutlineSegment = OutlineSegment::TopLeftCorner;

        let distance = progress * self.perimeter();
        let mut acc = 0.0;
        for &segment in &OutlineSegment::ALL[..OutlineSegment::ALL.len() - 1] {
            let len = self.segment_length(segment);
            if distance <= acc + len {
                return self.point_on(segment, fraction(distance - acc, len));
            }
            acc += len;
        }
        self.point_on(FINAL, fraction(distance - acc, self.segment_length(FINAL)))
    }

    /// Point at fraction `t` along one segment.
    pub fn point_on(&self, segment: OutlineSegment, t: f64) -> Point {
        let r = self.radius;
        if let Some(corner) = segment.corner() {
            let center = self.corner_center(corner);
            let angle = corner.start_angle() + t * CORNER_SWEEP;
            return Point::new(center.x + r * angle.cos(), center.y + r * angle.sin());
        }

        let (x0, y0) = (self.left, self.top);
        let (x1, y1) = (self.left + self.width, self.top + self.height);
        match segment {
            OutlineSegment::TopEdge => Point::new(x0 + r + t * self.straight_width, y0),
            OutlineSegment::RightEdge => Point::new(x1, y0 + r + t * self.straight_height),
            OutlineSegment::BottomEdge => Point::new(x1 - r - t * self.straight_width, y1),
            _ => Point::new(x0, y1 - r - t * self.straight_height),
        }
    }

    /// Unsigned distance from `p` to the outline.
    pub fn distance_to_outline(&self, p: Point) -> f64 {
        let cx = self.left + self.width / 2.0;
        let cy = self.top + self.height / 2.0;
        let qx = (p.x - cx).abs() - (self.width / 2.0 - self.radius);
        let qy = (p.y - cy).abs() - (self.height / 2.0 - self.radius);
        let outside = qx.max(0.0).hypot(qy.max(0.0));
        let inside = qx.max(qy).min(0.0);
        (outside + inside - self.radius).abs()
    }
}

fn fraction(walked: f64, len: f64) -> f64 {
    if len > 0.0 { walked / len } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/rounded_rect.rs"]
mod tests;
