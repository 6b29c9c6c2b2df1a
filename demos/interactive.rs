//! Interactive console driver for the figura engine.
//!
//! Menu-driven loop: build a shape, apply transforms to the most recently
//! built one, and inspect the canvas after every action. This layer owns
//! the current-shape slot and all text parsing; the engine only ever sees
//! validated numbers.

use std::io::{self, Write as _};

use figura::math::Point2;
use figura::operations::creation::{
    MakeCircle, MakeRectangle, MakeSquare, MakeTrapezoid, MakeTriangle,
};
use figura::operations::transform::{transform_shape, Axis, Reflect, Rotate, Scale};
use figura::render::{Canvas, Patch};
use figura::shape::Shape;
use figura::Result;

fn show_menu() {
    println!();
    println!("--- Draw ---");
    println!("1. Square");
    println!("2. Triangle");
    println!("3. Rectangle");
    println!("4. Circle");
    println!("5. Trapezoid");
    println!("--- Transform ---");
    println!("6. Scale");
    println!("7. Reflect");
    println!("8. Rotate");
    println!("--- Other ---");
    println!("9. Clear canvas");
    println!("10. Exit");
}

/// Prompts for one line of input; `None` means stdin was closed.
fn prompt(label: &str) -> Option<String> {
    print!("{label}: ");
    let _ = io::stdout().flush();
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

/// Prompts for a real number. A parse failure is reported and ends the
/// current action without touching the current shape.
fn prompt_f64(label: &str) -> Option<f64> {
    let line = prompt(label)?;
    match line.parse::<f64>() {
        Ok(value) => Some(value),
        Err(_) => {
            println!("Invalid input: expected a number.");
            None
        }
    }
}

fn build_square() -> Option<Result<Shape>> {
    let side = prompt_f64("Side length")?;
    let x0 = prompt_f64("Bottom-left X")?;
    let y0 = prompt_f64("Bottom-left Y")?;
    Some(MakeSquare::new(side, Point2::new(x0, y0)).execute())
}

fn build_triangle() -> Option<Result<Shape>> {
    let x1 = prompt_f64("First point X")?;
    let y1 = prompt_f64("First point Y")?;
    let x2 = prompt_f64("Second point X")?;
    let y2 = prompt_f64("Second point Y")?;
    let x3 = prompt_f64("Third point X")?;
    let y3 = prompt_f64("Third point Y")?;
    Some(
        MakeTriangle::new(
            Point2::new(x1, y1),
            Point2::new(x2, y2),
            Point2::new(x3, y3),
        )
        .execute(),
    )
}

fn build_rectangle() -> Option<Result<Shape>> {
    let width = prompt_f64("Width")?;
    let height = prompt_f64("Height")?;
    let x0 = prompt_f64("Bottom-left X")?;
    let y0 = prompt_f64("Bottom-left Y")?;
    Some(MakeRectangle::new(width, height, Point2::new(x0, y0)).execute())
}

fn build_circle() -> Option<Result<Shape>> {
    let cx = prompt_f64("Center X")?;
    let cy = prompt_f64("Center Y")?;
    let radius = prompt_f64("Radius")?;
    Some(MakeCircle::new(Point2::new(cx, cy), radius).execute())
}

fn build_trapezoid() -> Option<Result<Shape>> {
    let bottom = prompt_f64("Bottom width")?;
    let top = prompt_f64("Top width")?;
    let height = prompt_f64("Height")?;
    let x0 = prompt_f64("Bottom-left X")?;
    let y0 = prompt_f64("Bottom-left Y")?;
    Some(MakeTrapezoid::new(bottom, top, height, Point2::new(x0, y0)).execute())
}

fn apply_scale(shape: &Shape) -> Option<Result<Shape>> {
    let sx = prompt_f64("Scale factor X")?;
    let sy = prompt_f64("Scale factor Y")?;
    Some(transform_shape(shape, &Scale::new(sx, sy)))
}

fn apply_reflect(shape: &Shape) -> Option<Result<Shape>> {
    println!("Axis: x, y, origin, y=x (anything else defaults to x)");
    let choice = prompt("Axis")?;
    let axis = Axis::from_choice(&choice);
    Some(transform_shape(shape, &Reflect::new(axis)))
}

fn apply_rotate(shape: &Shape) -> Option<Result<Shape>> {
    let angle = prompt_f64("Angle in degrees (positive = counter-clockwise)")?;
    Some(transform_shape(shape, &Rotate::new(angle)))
}

fn describe(patch: &Patch) {
    match patch {
        Patch::Outline { vertices } => {
            println!("Canvas: closed outline through {} vertices:", vertices.len());
            for v in vertices.iter().take(8) {
                println!("  ({:.3}, {:.3})", v.x, v.y);
            }
            if vertices.len() > 8 {
                println!("  ... {} more", vertices.len() - 8);
            }
        }
        Patch::Disc { center, radius } => {
            println!(
                "Canvas: circle at ({:.3}, {:.3}) with radius {radius:.3}",
                center.x, center.y
            );
        }
    }
}

fn main() {
    let mut canvas = Canvas::new();
    let mut current: Option<Shape> = None;

    loop {
        show_menu();
        let Some(choice) = prompt("Choose an option (1-10)") else {
            break;
        };

        let outcome = match choice.as_str() {
            "1" => build_square(),
            "2" => build_triangle(),
            "3" => build_rectangle(),
            "4" => build_circle(),
            "5" => build_trapezoid(),
            "6" | "7" | "8" => {
                let Some(shape) = current.as_ref() else {
                    println!("No shape to transform; draw one first.");
                    continue;
                };
                match choice.as_str() {
                    "6" => apply_scale(shape),
                    "7" => apply_reflect(shape),
                    _ => apply_rotate(shape),
                }
            }
            "9" => {
                canvas.clear();
                current = None;
                println!("Canvas cleared.");
                continue;
            }
            "10" => break,
            _ => {
                println!("Unknown option.");
                continue;
            }
        };

        match outcome {
            Some(Ok(shape)) => {
                canvas.draw(&shape);
                if let Some(patch) = canvas.patch() {
                    describe(patch);
                }
                current = Some(shape);
            }
            Some(Err(err)) => println!("Error: {err}"),
            // Parse failure or closed stdin: the current shape is untouched.
            None => {}
        }
    }

    println!("Goodbye.");
}
