pub mod error;
pub mod math;
pub mod operations;
pub mod render;
pub mod shape;

pub use error::{FiguraError, Result};
