mod canvas;
mod outline;

pub use canvas::{Canvas, Window};
pub use outline::OutlineShape;

use crate::math::Point2;

/// A drawable primitive produced from a shape.
///
/// The engine owns no drawing backend; a patch is the data a rendering
/// frontend needs to stroke the current shape onto a canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum Patch {
    /// A closed outline: consecutive vertices are connected and the last
    /// vertex connects back to the first.
    Outline { vertices: Vec<Point2> },
    /// A true circle, drawn from center and radius rather than from
    /// boundary samples.
    Disc { center: Point2, radius: f64 },
}
