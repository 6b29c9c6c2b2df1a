use crate::math::{polygon_2d, Matrix2, Point2};

use super::Transform2;

/// Rotates vertices by an angle in degrees about a pivot point.
///
/// A positive angle rotates counter-clockwise.
pub struct Rotate {
    angle_degrees: f64,
    pivot: Option<Point2>,
}

impl Rotate {
    /// Creates a new `Rotate` operation pivoted at the vertex centroid.
    #[must_use]
    pub fn new(angle_degrees: f64) -> Self {
        Self {
            angle_degrees,
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

impl Transform2 for Rotate {
    fn matrix(&self) -> Matrix2 {
        let (s, c) = self.angle_degrees.to_radians().sin_cos();
        Matrix2::new(c, -s, s, c)
    }

    fn anchor(&self, vertices: &[Point2]) -> Point2 {
        self.pivot
            .unwrap_or_else(|| polygon_2d::centroid(vertices))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::TOLERANCE;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn rotate_90_about_origin() {
        let verts = vec![p(1.0, 0.0), p(0.0, 0.0), p(0.0, 1.0)];
        let rotated = Rotate::new(90.0).about(p(0.0, 0.0)).apply(&verts).unwrap();
        assert_relative_eq!(rotated[0], p(0.0, 1.0), epsilon = 1e-9);
        assert_relative_eq!(rotated[1], p(0.0, 0.0), epsilon = 1e-9);
        assert_relative_eq!(rotated[2], p(-1.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn opposite_angles_round_trip() {
        let verts = vec![p(2.0, 1.0), p(-1.0, 3.0), p(0.5, -2.0)];
        let pivot = p(1.0, 1.0);
        let there = Rotate::new(37.5).about(pivot).apply(&verts).unwrap();
        let back = Rotate::new(-37.5).about(pivot).apply(&there).unwrap();
        for (v, b) in verts.iter().zip(back.iter()) {
            assert_relative_eq!(v, b, epsilon = 1e-9);
        }
    }

    #[test]
    fn full_turn_is_identity() {
        let verts = vec![p(2.0, 1.0), p(-1.0, 3.0), p(0.5, -2.0)];
        let rotated = Rotate::new(360.0).apply(&verts).unwrap();
        for (v, r) in verts.iter().zip(rotated.iter()) {
            assert_relative_eq!(v, r, epsilon = 1e-9);
        }
    }

    #[test]
    fn rotation_is_rigid() {
        let verts = vec![p(0.0, 0.0), p(3.0, 0.0), p(3.0, 4.0), p(-1.0, 2.0)];
        let rotated = Rotate::new(123.4).apply(&verts).unwrap();
        for i in 0..verts.len() {
            for j in (i + 1)..verts.len() {
                let before = (verts[i] - verts[j]).norm();
                let after = (rotated[i] - rotated[j]).norm();
                assert!((before - after).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn centroid_pivot_keeps_centroid_fixed() {
        let verts = vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0)];
        let before = polygon_2d::centroid(&verts);
        let rotated = Rotate::new(45.0).apply(&verts).unwrap();
        let after = polygon_2d::centroid(&rotated);
        assert_relative_eq!(before, after, epsilon = 1e-9);
    }

    #[test]
    fn matrix_at_90_degrees() {
        let m = Rotate::new(90.0).matrix();
        assert!(m[(0, 0)].abs() < TOLERANCE);
        assert!((m[(0, 1)] + 1.0).abs() < TOLERANCE);
        assert!((m[(1, 0)] - 1.0).abs() < TOLERANCE);
        assert!(m[(1, 1)].abs() < TOLERANCE);
    }
}
