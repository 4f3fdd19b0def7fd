//! Report service. Turns sensor packages into published workout summaries.
//!
//! Coordinates between a package source (input) and a report sink (output).

use crate::domain::{DomainError, WorkoutSummary};
use crate::ports::{PackageSource, ReportSink};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Service for batch workout reports.
///
/// Orchestrates the flow:
/// 1. Load packages from the source
/// 2. Dispatch each package to its training record
/// 3. Publish the summary of each record to the sink
///
/// Stops at the first failing package; nothing is retried.
pub struct ReportService {
    source: Arc<dyn PackageSource>,
    sink: Arc<dyn ReportSink>,
}

impl ReportService {
    pub fn new(source: Arc<dyn PackageSource>, sink: Arc<dyn ReportSink>) -> Self {
        Self { source, sink }
    }

    /// Process every package in source order. Returns the published summaries.
    pub async fn run(&self) -> Result<Vec<WorkoutSummary>, DomainError> {
        let packages = self.source.load_packages().await?;
        if packages.is_empty() {
            warn!("package source is empty");
            return Ok(Vec::new());
        }
        info!(packages = packages.len(), "processing sensor packages");

        let mut summaries = Vec::with_capacity(packages.len());
        for (index, package) in packages.iter().enumerate() {
            let training = package.to_training().inspect_err(|e| {
                warn!(index, workout_type = %package.workout_type, error = %e, "rejected package");
            })?;
            let summary = training.summary();
            debug!(
                index,
                training_type = %summary.training_type,
                calories = summary.calories_kcal,
                "workout computed"
            );
            self.sink.publish(&summary).await?;
            summaries.push(summary);
        }

        info!(reports = summaries.len(), "report complete");
        Ok(summaries)
    }
}
