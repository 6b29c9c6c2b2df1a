use crate::error::Result;
use crate::math::Point2;
use crate::shape::{PolygonKind, Shape};

/// Creates a triangle from three explicit corner points.
pub struct MakeTriangle {
    a: Point2,
    b: Point2,
    c: Point2,
}

impl MakeTriangle {
    /// Creates a new `MakeTriangle` operation.
    #[must_use]
    pub fn new(a: Point2, b: Point2, c: Point2) -> Self {
        Self { a, b, c }
    }

    /// Executes the operation, returning the triangle as a polygon.
    ///
    /// The vertices are the three input points in the given order.
    /// Collinear points are accepted and yield a zero-area triangle.
    ///
    /// # Errors
    ///
    /// This builder has no failing inputs.
    pub fn execute(&self) -> Result<Shape> {
        Ok(Shape::Polygon {
            kind: PolygonKind::Triangle,
            vertices: vec![self.a, self.b, self.c],
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn triangle_keeps_input_order() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(4.0, 0.0);
        let c = Point2::new(2.0, 3.0);
        let shape = MakeTriangle::new(a, b, c).execute().unwrap();
        let Shape::Polygon { kind, vertices } = shape else {
            panic!("expected polygon");
        };
        assert_eq!(kind, PolygonKind::Triangle);
        assert!((vertices[0] - a).norm() < TOLERANCE);
        assert!((vertices[1] - b).norm() < TOLERANCE);
        assert!((vertices[2] - c).norm() < TOLERANCE);
    }

    #[test]
    fn collinear_points_are_accepted() {
        let shape = MakeTriangle::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
        )
        .execute()
        .unwrap();
        assert_eq!(shape.vertices().len(), 3);
    }
}
