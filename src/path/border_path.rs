use crate::foundation::core::{BezPath, Point, Rect};

/// One frame's closed polyline.
///
/// Holds samples `0..=N` in traversal order; the closing segment from the last sample back to
/// the first is implicit. Rebuilt from scratch every frame.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BorderPath {
    points: Vec<Point>,
}

impl BorderPath {
    /// A path with no points (nothing to draw).
    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Wrap already-ordered samples.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// `true` when nothing should be drawn.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of samples (not counting the implicit closing point).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Samples in traversal order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// First sample.
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Last sample.
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Samples followed by the first one again, i.e. the vertices of the closed polyline.
    pub fn closed_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied().chain(self.first())
    }

    /// Axis-aligned bounds of all samples.
    pub fn bounds(&self) -> Option<Rect> {
        let first = self.first()?;
        let init = Rect::from_points(first, first);
        Some(self.points.iter().fold(init, |r, &p| r.union_pt(p)))
    }

    /// Largest distance between corresponding samples of two paths of equal length.
    pub fn max_point_distance(&self, other: &Self) -> Option<f64> {
        if self.points.len() != other.points.len() || self.points.is_empty() {
            return None;
        }
        Some(
            self.points
                .iter()
                .zip(&other.points)
                .map(|(a, b)| a.distance(*b))
                .fold(0.0, f64::max),
        )
    }

    /// Straight-segment `BezPath` (`move_to`, `line_to`…, `close_path`).
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let Some((&first, rest)) = self.points.split_first() else {
            return path;
        };
        path.move_to(first);
        for &p in rest {
            path.line_to(p);
        }
        path.close_path();
        path
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/border_path.rs"]
mod tests;
