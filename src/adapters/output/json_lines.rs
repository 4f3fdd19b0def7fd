//! JSON-lines sink. One serialized summary per line.

use crate::domain::{DomainError, WorkoutSummary};
use crate::ports::ReportSink;
use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt, Stdout};
use tokio::sync::Mutex;

pub struct JsonLinesSink<W> {
    writer: Mutex<W>,
}

impl<W> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl JsonLinesSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

#[async_trait]
impl<W> ReportSink for JsonLinesSink<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn publish(&self, summary: &WorkoutSummary) -> Result<(), DomainError> {
        let mut line = serde_json::to_vec(summary).map_err(|e| DomainError::Sink(e.to_string()))?;
        line.push(b'\n');

        let mut writer = self.writer.lock().await;
        writer
            .write_all(&line)
            .await
            .map_err(|e| DomainError::Sink(format!("write summary: {}", e)))?;
        writer
            .flush()
            .await
            .map_err(|e| DomainError::Sink(format!("flush summary: {}", e)))?;
        Ok(())
    }
}
