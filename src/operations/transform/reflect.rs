use crate::math::{Matrix2, Point2};

use super::Transform2;

/// Reflection axis.
///
/// Reflections are anchored at the absolute coordinate system (the true
/// axes, the origin, or the line `y = x`), never at the shape's centroid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Mirror across the X axis: `(x, y) -> (x, -y)`.
    X,
    /// Mirror across the Y axis: `(x, y) -> (-x, y)`.
    Y,
    /// Point reflection through the origin: `(x, y) -> (-x, -y)`.
    Origin,
    /// Mirror across the line `y = x`: `(x, y) -> (y, x)`.
    Diagonal,
}

impl Axis {
    /// Parses a textual axis choice as entered at a menu prompt.
    ///
    /// Recognizes `"x"`, `"y"`, `"origin"`, and `"y=x"`. Anything else
    /// falls back to [`Axis::X`]; the fallback is a documented default,
    /// not an error. Callers that want strict validation should match the
    /// input themselves before constructing an `Axis`.
    #[must_use]
    pub fn from_choice(choice: &str) -> Self {
        match choice {
            "y" => Self::Y,
            "origin" => Self::Origin,
            "y=x" => Self::Diagonal,
            _ => Self::X,
        }
    }
}

/// Reflects vertices across a fixed axis.
pub struct Reflect {
    axis: Axis,
}

impl Reflect {
    /// Creates a new `Reflect` operation.
    #[must_use]
    pub fn new(axis: Axis) -> Self {
        Self { axis }
    }
}

impl Transform2 for Reflect {
    fn matrix(&self) -> Matrix2 {
        match self.axis {
            Axis::X => Matrix2::new(1.0, 0.0, 0.0, -1.0),
            Axis::Y => Matrix2::new(-1.0, 0.0, 0.0, 1.0),
            Axis::Origin => Matrix2::new(-1.0, 0.0, 0.0, -1.0),
            Axis::Diagonal => Matrix2::new(0.0, 1.0, 1.0, 0.0),
        }
    }

    fn anchor(&self, _vertices: &[Point2]) -> Point2 {
        Point2::origin()
    }
}
