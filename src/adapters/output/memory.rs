//! In-memory sink. Collects summaries for callers that render them later.

use crate::domain::{DomainError, WorkoutSummary};
use crate::ports::ReportSink;
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Default)]
pub struct MemorySink {
    published: Mutex<Vec<WorkoutSummary>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything published so far, in order.
    pub fn published(&self) -> Vec<WorkoutSummary> {
        self.published
            .lock()
            .map(|v| v.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ReportSink for MemorySink {
    async fn publish(&self, summary: &WorkoutSummary) -> Result<(), DomainError> {
        self.published
            .lock()
            .map_err(|e| DomainError::Sink(e.to_string()))?
            .push(summary.clone());
        Ok(())
    }
}
