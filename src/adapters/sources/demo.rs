//! Fixed demonstration packages. Implements PackageSource.

use crate::domain::{DomainError, SensorPackage};
use crate::ports::PackageSource;
use async_trait::async_trait;

/// The three sample packages: one swim, one run, one walk.
pub struct DemoPackages;

impl DemoPackages {
    pub fn packages() -> Vec<SensorPackage> {
        vec![
            SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
            SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
            SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
        ]
    }
}

#[async_trait]
impl PackageSource for DemoPackages {
    async fn load_packages(&self) -> Result<Vec<SensorPackage>, DomainError> {
        Ok(Self::packages())
    }
}
