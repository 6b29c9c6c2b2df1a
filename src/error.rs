use thiserror::Error;

/// Top-level error type for the Figura geometry engine.
#[derive(Debug, Error)]
pub enum FiguraError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Errors related to shape construction.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("invalid parameter {parameter} = {value}: must be positive")]
    InvalidParameter {
        parameter: &'static str,
        value: f64,
    },
}

/// Errors related to transform application.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("transform requested on an empty vertex list")]
    EmptyShape,
}

/// Convenience type alias for results using [`FiguraError`].
pub type Result<T> = std::result::Result<T, FiguraError>;
