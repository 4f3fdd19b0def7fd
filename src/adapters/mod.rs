//! Infrastructure adapters. Implement ports.
//!
//! Package files, report output, terminal UI. Map errors to DomainError.

pub mod output;
pub mod sources;
pub mod ui;
