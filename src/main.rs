//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run.
//! No business logic here; formulas live in the domain layer.

use dotenv::dotenv;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use workout_stats::adapters::output::{ConsoleSink, JsonLinesSink};
use workout_stats::adapters::sources::{DemoPackages, file_source};
use workout_stats::adapters::ui::tui::TuiInputPort;
use workout_stats::ports::{InputPort, PackageSource, ReportSink};
use workout_stats::shared::config::{AppConfig, OutputFormat};
use workout_stats::usecases::ReportService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }

    let cfg = AppConfig::load()?;
    workout_stats::adapters::ui::init_ui(cfg.show_banner());

    let output_format = cfg.output_format_or_default();
    info!(output = %output_format, "report output");
    let sink: Arc<dyn ReportSink> = match output_format {
        OutputFormat::Text => Arc::new(ConsoleSink),
        OutputFormat::Json => Arc::new(JsonLinesSink::stdout()),
    };

    // --- Interactive entry ---
    if cfg.is_interactive() {
        let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(sink));
        input_port.run().await?;
        return Ok(());
    }

    // --- Batch report (package file or demonstration list) ---
    let source: Arc<dyn PackageSource> = match cfg.packages_path.as_deref() {
        Some(path) => {
            info!(path, "reading packages from file");
            file_source(path)
        }
        None => {
            info!("no packages_path set, using demonstration packages");
            Arc::new(DemoPackages)
        }
    };

    let report_service = ReportService::new(source, sink);
    report_service.run().await?;

    Ok(())
}
