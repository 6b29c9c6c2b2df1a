use crate::shape::Shape;

use super::{OutlineShape, Patch};

/// Fixed visible coordinate window of a canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for Window {
    fn default() -> Self {
        Self {
            x_min: -10.0,
            x_max: 10.0,
            y_min: -10.0,
            y_max: 10.0,
        }
    }
}

/// A persistent drawing surface holding at most one patch.
///
/// Every builder or transform call in the surrounding loop redraws:
/// [`Canvas::draw`] clears whatever was drawn before and stores the
/// current shape's patch. The canvas stores drawable data only; putting
/// it on screen is the job of whatever frontend consumes [`Canvas::patch`].
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    window: Window,
    patch: Option<Patch>,
}

impl Canvas {
    /// Creates an empty canvas with the default window.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty canvas with an explicit window.
    #[must_use]
    pub fn with_window(window: Window) -> Self {
        Self {
            window,
            patch: None,
        }
    }

    /// Removes any previously drawn patch. Idempotent.
    pub fn clear(&mut self) {
        self.patch = None;
    }

    /// Clears the canvas and draws the given shape's outline.
    pub fn draw(&mut self, shape: &Shape) {
        self.clear();
        self.patch = Some(OutlineShape::new(shape).execute());
    }

    /// Returns the currently drawn patch, if any.
    #[must_use]
    pub fn patch(&self) -> Option<&Patch> {
        self.patch.as_ref()
    }

    /// Returns the visible coordinate window.
    #[must_use]
    pub fn window(&self) -> Window {
        self.window
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use crate::operations::creation::{MakeCircle, MakeSquare};

    #[test]
    fn starts_empty_with_default_window() {
        let canvas = Canvas::new();
        assert!(canvas.patch().is_none());
        assert!((canvas.window().x_min + 10.0).abs() < f64::EPSILON);
        assert!((canvas.window().y_max - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn draw_replaces_the_previous_patch() {
        let mut canvas = Canvas::new();
        let square = MakeSquare::new(2.0, Point2::new(0.0, 0.0))
            .execute()
            .unwrap();
        let circle = MakeCircle::new(Point2::new(0.0, 0.0), 1.0)
            .execute()
            .unwrap();

        canvas.draw(&square);
        assert!(matches!(canvas.patch(), Some(Patch::Outline { .. })));

        canvas.draw(&circle);
        assert!(matches!(canvas.patch(), Some(Patch::Disc { .. })));
    }

    #[test]
    fn clear_is_idempotent() {
        let mut canvas = Canvas::new();
        let square = MakeSquare::new(1.0, Point2::new(0.0, 0.0))
            .execute()
            .unwrap();
        canvas.draw(&square);

        canvas.clear();
        assert!(canvas.patch().is_none());
        canvas.clear();
        assert!(canvas.patch().is_none());
    }
}
