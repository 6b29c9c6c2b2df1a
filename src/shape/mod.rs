use crate::math::Point2;

/// Number of boundary samples in a circle's vertex approximation.
///
/// The samples let a circle flow through the same vertex-based transform
/// pipeline as the polygonal shapes.
pub const CIRCLE_SEGMENTS: usize = 100;

/// Named construction of a polygonal shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonKind {
    Square,
    Rectangle,
    Triangle,
    Trapezoid,
    /// A polygon with no named construction. Produced when a circle is
    /// pushed through the transform pipeline and comes back as a plain
    /// point loop.
    Freeform,
}

/// A 2D shape: either a polygon or a circle.
///
/// Shapes are plain values. Every builder and transform returns a new
/// `Shape`; nothing mutates one in place.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// An ordered vertex loop. Edges connect consecutive vertices and the
    /// last vertex connects back to the first; the polygon is implicitly
    /// closed. Builders always produce at least three vertices.
    Polygon {
        kind: PolygonKind,
        vertices: Vec<Point2>,
    },
    /// A circle described by center and radius. The `approximation` holds
    /// [`CIRCLE_SEGMENTS`] boundary samples at equally spaced angles over
    /// `[0, 2*pi)`, used only by the transform pipeline; `center` and
    /// `radius` stay authoritative for direct rendering.
    Circle {
        center: Point2,
        radius: f64,
        approximation: Vec<Point2>,
    },
}

impl Shape {
    /// Returns the vertex list a transform operates on: the polygon's
    /// vertices, or the circle's boundary approximation.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        match self {
            Self::Polygon { vertices, .. } => vertices,
            Self::Circle { approximation, .. } => approximation,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;
    use crate::operations::creation::{MakeCircle, MakeSquare};

    #[test]
    fn polygon_vertices_are_the_loop() {
        let shape = MakeSquare::new(1.0, Point2::new(0.0, 0.0))
            .execute()
            .unwrap();
        assert_eq!(shape.vertices().len(), 4);
    }

    #[test]
    fn circle_vertices_are_the_approximation() {
        let shape = MakeCircle::new(Point2::new(0.0, 0.0), 2.0)
            .execute()
            .unwrap();
        assert_eq!(shape.vertices().len(), CIRCLE_SEGMENTS);
        assert!((shape.vertices()[0].x - 2.0).abs() < TOLERANCE);
    }
}
