mod reflect;
mod rotate;
mod scale;

pub use reflect::{Axis, Reflect};
pub use rotate::Rotate;
pub use scale::Scale;

use crate::error::{Result, TransformError};
use crate::math::{Matrix2, Point2};
use crate::shape::{PolygonKind, Shape};

/// A 2D affine transform realized as a linear map applied about an anchor
/// point: translate to the anchor, multiply by the 2x2 matrix, translate
/// back.
///
/// `apply` maps input vertex `i` to output vertex `i`; vertices are never
/// reordered or dropped.
pub trait Transform2 {
    /// Returns the 2x2 matrix of the underlying linear map.
    fn matrix(&self) -> Matrix2;

    /// Returns the point the linear map is applied about.
    ///
    /// The vertex list is passed so centroid-pivoted transforms can derive
    /// their anchor from it; `apply` guarantees it is non-empty.
    fn anchor(&self, vertices: &[Point2]) -> Point2;

    /// Applies the transform to a vertex list, returning the transformed
    /// list.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::EmptyShape`] if the vertex list is empty.
    fn apply(&self, vertices: &[Point2]) -> Result<Vec<Point2>> {
        if vertices.is_empty() {
            return Err(TransformError::EmptyShape.into());
        }
        let anchor = self.anchor(vertices);
        let m = self.matrix();
        Ok(vertices.iter().map(|v| anchor + m * (v - anchor)).collect())
    }
}

/// Applies a transform to a shape, producing a new shape.
///
/// Polygons keep their kind. A circle is transformed through its boundary
/// approximation and comes back as a [`PolygonKind::Freeform`] polygon:
/// the stored center and radius would no longer describe the transformed
/// outline, so the circle identity is dropped rather than left stale.
///
/// # Errors
///
/// Returns [`TransformError::EmptyShape`] if the shape has no vertices.
pub fn transform_shape<T: Transform2>(shape: &Shape, transform: &T) -> Result<Shape> {
    match shape {
        Shape::Polygon { kind, vertices } => Ok(Shape::Polygon {
            kind: *kind,
            vertices: transform.apply(vertices)?,
        }),
        Shape::Circle { approximation, .. } => Ok(Shape::Polygon {
            kind: PolygonKind::Freeform,
            vertices: transform.apply(approximation)?,
        }),
    }
}
