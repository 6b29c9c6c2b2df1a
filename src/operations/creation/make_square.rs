use crate::error::Result;
use crate::math::Point2;
use crate::shape::{PolygonKind, Shape};

/// Creates an axis-aligned square from a side length and its bottom-left
/// corner.
pub struct MakeSquare {
    side: f64,
    corner: Point2,
}

impl MakeSquare {
    /// Creates a new `MakeSquare` operation.
    #[must_use]
    pub fn new(side: f64, corner: Point2) -> Self {
        Self { side, corner }
    }

    /// Executes the operation, returning the square as a polygon.
    ///
    /// Vertices run counter-clockwise from the bottom-left corner. A
    /// non-positive side length is accepted and yields a degenerate or
    /// mirrored square.
    ///
    /// # Errors
    ///
    /// This builder has no failing inputs; the `Result` keeps the creation
    /// surface uniform across builders.
    pub fn execute(&self) -> Result<Shape> {
        let (x0, y0) = (self.corner.x, self.corner.y);
        let s = self.side;
        Ok(Shape::Polygon {
            kind: PolygonKind::Square,
            vertices: vec![
                Point2::new(x0, y0),
                Point2::new(x0 + s, y0),
                Point2::new(x0 + s, y0 + s),
                Point2::new(x0, y0 + s),
            ],
        })
    }
}
