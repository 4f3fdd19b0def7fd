//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, SensorPackage, WorkoutSummary};

/// Package source port. Supplies raw sensor packages in processing order.
#[async_trait::async_trait]
pub trait PackageSource: Send + Sync {
    /// Load every package this source holds.
    async fn load_packages(&self) -> Result<Vec<SensorPackage>, DomainError>;
}

/// Report sink port. Receives one summary per processed workout.
#[async_trait::async_trait]
pub trait ReportSink: Send + Sync {
    async fn publish(&self, summary: &WorkoutSummary) -> Result<(), DomainError>;
}
