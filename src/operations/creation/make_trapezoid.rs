use crate::error::Result;
use crate::math::Point2;
use crate::shape::{PolygonKind, Shape};

/// Creates an isosceles trapezoid from its bottom width, top width,
/// height, and the bottom-left corner.
///
/// The top edge is horizontally centered over the bottom edge:
/// `offset = (bottom_width - top_width) / 2`.
pub struct MakeTrapezoid {
    bottom_width: f64,
    top_width: f64,
    height: f64,
    corner: Point2,
}

impl MakeTrapezoid {
    /// Creates a new `MakeTrapezoid` operation.
    #[must_use]
    pub fn new(bottom_width: f64, top_width: f64, height: f64, corner: Point2) -> Self {
        Self {
            bottom_width,
            top_width,
            height,
            corner,
        }
    }

    /// Executes the operation, returning the trapezoid as a polygon.
    ///
    /// Vertices run counter-clockwise from the bottom-left corner.
    /// Non-positive widths and heights are accepted.
    ///
    /// # Errors
    ///
    /// This builder has no failing inputs.
    pub fn execute(&self) -> Result<Shape> {
        let (x0, y0) = (self.corner.x, self.corner.y);
        let offset = (self.bottom_width - self.top_width) / 2.0;
        Ok(Shape::Polygon {
            kind: PolygonKind::Trapezoid,
            vertices: vec![
                Point2::new(x0, y0),
                Point2::new(x0 + self.bottom_width, y0),
                Point2::new(x0 + self.bottom_width - offset, y0 + self.height),
                Point2::new(x0 + offset, y0 + self.height),
            ],
        })
    }
}
