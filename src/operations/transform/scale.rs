use crate::math::{polygon_2d, Matrix2, Point2};

use super::Transform2;

/// Scales vertices by independent X and Y factors about a pivot point.
///
/// The factors may be any real numbers: negative factors flip the shape,
/// zero collapses a dimension.
pub struct Scale {
    sx: f64,
    sy: f64,
    pivot: Option<Point2>,
}

impl Scale {
    /// Creates a new `Scale` operation pivoted at the vertex centroid.
    #[must_use]
    pub fn new(sx: f64, sy: f64) -> Self {
        Self {
            sx,
            sy,
            pivot: None,
        }
    }

    /// Sets an explicit pivot point instead of the centroid.
    #[must_use]
    pub fn about(mut self, pivot: Point2) -> Self {
        self.pivot = Some(pivot);
        self
    }
}

impl Transform2 for Scale {
    fn matrix(&self) -> Matrix2 {
        Matrix2::new(self.sx, 0.0, 0.0, self.sy)
    }

    fn anchor(&self, vertices: &[Point2]) -> Point2 {
        self.pivot
            .unwrap_or_else(|| polygon_2d::centroid(vertices))
    }
}
