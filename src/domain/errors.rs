//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Workout type not found: {0}")]
    UnknownActivityCode(String),

    /// Positional data does not match the arity or types the workout expects.
    #[error("Argument mismatch for {code}: {reason}")]
    ArgumentMismatch { code: String, reason: String },

    /// Duration must be finite and strictly positive; speed divides by it.
    #[error("Invalid duration: {0} h (must be > 0)")]
    InvalidDuration(f64),

    #[error("Package source error: {0}")]
    Source(String),

    #[error("Report sink error: {0}")]
    Sink(String),

    #[error("Input error: {0}")]
    Input(String),
}
