use crate::shape::Shape;

use super::Patch;

/// Produces the drawable patch for a shape.
///
/// Polygons become closed outlines through their vertices; circles keep
/// their exact center-and-radius form. No geometry is computed here, only
/// repackaged for a rendering frontend.
pub struct OutlineShape<'a> {
    shape: &'a Shape,
}

impl<'a> OutlineShape<'a> {
    /// Creates a new `OutlineShape` operation.
    #[must_use]
    pub fn new(shape: &'a Shape) -> Self {
        Self { shape }
    }

    /// Executes the operation, returning the patch.
    #[must_use]
    pub fn execute(&self) -> Patch {
        match self.shape {
            Shape::Polygon { vertices, .. } => Patch::Outline {
                vertices: vertices.clone(),
            },
            Shape::Circle { center, radius, .. } => Patch::Disc {
                center: *center,
                radius: *radius,
            },
        }
    }
}
