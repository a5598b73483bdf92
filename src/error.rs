// src/error.rs

//! Error types for the canvas engine.
//!
//! Every fallible engine operation reports a [`CanvasError`] to its
//! immediate caller. The engine never treats one of these as fatal and
//! never terminates the process; retry policy belongs to the host.

use thiserror::Error;

/// Failure conditions reported by the canvas engine.
#[derive(Error, Debug)]
pub enum CanvasError {
    /// A malformed dimension or parameter was supplied at construction.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// A coordinate or axis index lies outside the valid bounds.
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// The operation is not legal for the canvas's current mode or state.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Image encoding or file output failed.
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}
