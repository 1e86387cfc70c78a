//! Error types for the graph-ops library.

use thiserror::Error;

/// All errors that can occur in the graph-ops library.
///
/// Most invalid inputs (unknown nodes, missing edges) are not errors at all:
/// they degrade to empty or zero results. Only the cases below are surfaced.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A node id fell outside the bound supplied to a bounded query.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed construction input.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Command name not recognised by the dispatcher.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Command recognised but its arguments were missing or malformed.
    #[error("Usage: {0}")]
    Usage(String),

    /// Session config could not be read or decoded.
    #[error("Config error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for graph-ops operations.
pub type GraphResult<T> = Result<T, GraphError>;
