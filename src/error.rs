use thiserror::Error;

use crate::topology::ShapeKind;

/// Top-level error type for the Topolis exploration engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopolisError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("unsupported geometry: {0}")]
    Unsupported(String),
}

/// Errors related to topological queries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopologyError {
    #[error("expected a {expected}, found a {actual}")]
    KindMismatch {
        expected: ShapeKind,
        actual: ShapeKind,
    },

    #[error("no adjacency relationship is defined from {from} to {to}")]
    UnsupportedPair { from: ShapeKind, to: ShapeKind },

    #[error("invalid shape: {0}")]
    InvalidShape(String),

    #[error("wire is not closed")]
    WireNotClosed,
}

/// Errors related to shape construction operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`TopolisError`].
pub type Result<T> = std::result::Result<T, TopolisError>;
