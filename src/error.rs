use thiserror::Error;

/// Errors raised when constructing eye or pupil shapes by name.
#[derive(Debug, Error, PartialEq)]
pub enum ShapeError {
    /// No shape is registered under this name.
    #[error("unknown shape name: {0}")]
    UnknownShape(String),

    /// The corner radius fraction is NaN or infinite.
    #[error("corner radius fraction must be finite, got {0}")]
    NonFiniteFraction(f64),
}
