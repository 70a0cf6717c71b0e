use thiserror::Error;

use crate::brush::BrushId;

/// Top-level error type for the curved stair generator.
#[derive(Debug, Error)]
pub enum StairError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Brush(#[from] BrushError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to the brush arena and the brushes handed to the generator.
#[derive(Debug, Error)]
pub enum BrushError {
    #[error("brush not found: {0:?}")]
    BrushNotFound(BrushId),

    #[error("brush listed more than once: {0:?}")]
    DuplicateBrush(BrushId),

    #[error("expected {expected} brushes, got {actual}")]
    BrushCountMismatch { expected: usize, actual: usize },
}

/// Convenience type alias for results using [`StairError`].
pub type Result<T> = std::result::Result<T, StairError>;
