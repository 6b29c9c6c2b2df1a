mod make_circle;
mod make_rectangle;
mod make_square;
mod make_trapezoid;
mod make_triangle;

pub use make_circle::MakeCircle;
pub use make_rectangle::MakeRectangle;
pub use make_square::MakeSquare;
pub use make_trapezoid::MakeTrapezoid;
pub use make_triangle::MakeTriangle;
