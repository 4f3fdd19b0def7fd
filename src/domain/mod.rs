//! Core domain layer. No external I/O dependencies.
//!
//! Training records, formulas and dispatch live here. Dependencies flow inward.

pub mod coefficients;
pub mod dispatcher;
pub mod errors;
pub mod summary;
pub mod training;

pub use dispatcher::{Field, SensorPackage, WorkoutKind, read_package};
pub use errors::DomainError;
pub use summary::WorkoutSummary;
pub use training::{Activity, Training};
