use crate::error::Result;
use crate::math::Point2;
use crate::shape::{PolygonKind, Shape};

/// Creates an axis-aligned rectangle from its width, height, and
/// bottom-left corner.
pub struct MakeRectangle {
    width: f64,
    height: f64,
    corner: Point2,
}

impl MakeRectangle {
    /// Creates a new `MakeRectangle` operation.
    #[must_use]
    pub fn new(width: f64, height: f64, corner: Point2) -> Self {
        Self {
            width,
            height,
            corner,
        }
    }

    /// Executes the operation, returning the rectangle as a polygon.
    ///
    /// Vertices run counter-clockwise from the bottom-left corner.
    /// Non-positive dimensions are accepted, like [`MakeSquare`].
    ///
    /// # Errors
    ///
    /// This builder has no failing inputs.
    ///
    /// [`MakeSquare`]: super::MakeSquare
    pub fn execute(&self) -> Result<Shape> {
        let (x0, y0) = (self.corner.x, self.corner.y);
        let (w, h) = (self.width, self.height);
        Ok(Shape::Polygon {
            kind: PolygonKind::Rectangle,
            vertices: vec![
                Point2::new(x0, y0),
                Point2::new(x0 + w, y0),
                Point2::new(x0 + w, y0 + h),
                Point2::new(x0, y0 + h),
            ],
        })
    }
}
