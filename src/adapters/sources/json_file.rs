//! Implements PackageSource using a JSON file.
//!
//! Format: array of `{ "workout_type": "RUN", "data": [15000, 1, 75] }`.

use crate::domain::{DomainError, SensorPackage};
use crate::ports::PackageSource;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl PackageSource for JsonFileSource {
    async fn load_packages(&self) -> Result<Vec<SensorPackage>, DomainError> {
        let raw = fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::Source(format!("read {}: {}", self.path.display(), e))
        })?;
        let packages: Vec<SensorPackage> = serde_json::from_str(&raw).map_err(|e| {
            DomainError::Source(format!("parse {}: {}", self.path.display(), e))
        })?;
        info!(path = %self.path.display(), packages = packages.len(), "loaded JSON packages");
        Ok(packages)
    }
}
