//! Package sources. Implement PackageSource.
//!
//! Built-in demonstration list plus JSON and CSV package files.

pub mod csv_file;
pub mod demo;
pub mod json_file;

pub use csv_file::CsvFileSource;
pub use demo::DemoPackages;
pub use json_file::JsonFileSource;

use crate::ports::PackageSource;
use std::path::Path;
use std::sync::Arc;

/// Pick a file source by extension: `.json` is read as JSON, anything else as CSV.
pub fn file_source(path: impl AsRef<Path>) -> Arc<dyn PackageSource> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    if is_json {
        Arc::new(JsonFileSource::new(path))
    } else {
        Arc::new(CsvFileSource::new(path))
    }
}
