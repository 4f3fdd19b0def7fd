//! Console sink. Prints the rendered summary line to stdout.

use crate::domain::{DomainError, WorkoutSummary};
use crate::ports::ReportSink;
use async_trait::async_trait;

pub struct ConsoleSink;

#[async_trait]
impl ReportSink for ConsoleSink {
    async fn publish(&self, summary: &WorkoutSummary) -> Result<(), DomainError> {
        println!("{}", summary.render());
        Ok(())
    }
}
