use std::f64::consts::TAU;

use crate::error::{Result, ShapeError};
use crate::math::{Point2, Vector2};
use crate::shape::{Shape, CIRCLE_SEGMENTS};

/// Creates a circle from a center point and radius.
pub struct MakeCircle {
    center: Point2,
    radius: f64,
}

impl MakeCircle {
    /// Creates a new `MakeCircle` operation.
    #[must_use]
    pub fn new(center: Point2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Executes the operation, returning the circle with its boundary
    /// approximation precomputed.
    ///
    /// Sample `i` sits at angle `2*pi*i / CIRCLE_SEGMENTS`, so the first
    /// sample is at `center + (radius, 0)`.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidParameter`] if the radius is not
    /// positive.
    pub fn execute(&self) -> Result<Shape> {
        if self.radius <= 0.0 {
            return Err(ShapeError::InvalidParameter {
                parameter: "radius",
                value: self.radius,
            }
            .into());
        }

        #[allow(clippy::cast_precision_loss)]
        let approximation = (0..CIRCLE_SEGMENTS)
            .map(|i| {
                let angle = TAU * i as f64 / CIRCLE_SEGMENTS as f64;
                self.center + self.radius * Vector2::new(angle.cos(), angle.sin())
            })
            .collect();

        Ok(Shape::Circle {
            center: self.center,
            radius: self.radius,
            approximation,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn circle_at_origin() {
        let shape = MakeCircle::new(Point2::new(0.0, 0.0), 5.0)
            .execute()
            .unwrap();
        let Shape::Circle {
            center,
            radius,
            approximation,
        } = shape
        else {
            panic!("expected circle");
        };
        assert!((center - Point2::new(0.0, 0.0)).norm() < TOLERANCE);
        assert!((radius - 5.0).abs() < TOLERANCE);
        assert_eq!(approximation.len(), CIRCLE_SEGMENTS);
        assert!((approximation[0] - Point2::new(5.0, 0.0)).norm() < TOLERANCE);
    }

    #[test]
    fn samples_lie_on_the_circle() {
        let center = Point2::new(1.0, -2.0);
        let shape = MakeCircle::new(center, 3.0).execute().unwrap();
        let Shape::Circle { approximation, .. } = shape else {
            panic!("expected circle");
        };
        for pt in &approximation {
            assert!(((pt - center).norm() - 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn quarter_sample_is_on_top() {
        let shape = MakeCircle::new(Point2::new(0.0, 0.0), 2.0)
            .execute()
            .unwrap();
        let Shape::Circle { approximation, .. } = shape else {
            panic!("expected circle");
        };
        // CIRCLE_SEGMENTS / 4 lands exactly on the 90 degree sample.
        let top = approximation[CIRCLE_SEGMENTS / 4];
        assert!((top - Point2::new(0.0, 2.0)).norm() < 1e-9);
    }

    #[test]
    fn negative_radius_is_rejected() {
        let result = MakeCircle::new(Point2::new(0.0, 0.0), -1.0).execute();
        assert!(result.is_err());
    }

    #[test]
    fn zero_radius_is_rejected() {
        let result = MakeCircle::new(Point2::new(0.0, 0.0), 0.0).execute();
        assert!(result.is_err());
    }
}
