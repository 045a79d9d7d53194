//! Wiring & DI. Entry point: bootstrap adapters, inject into the service, run once.
//! No business logic here; combining is delegated to CombineService.

use combine_files::adapters::fs::{FsLister, FsOutputSink, FsTextReader};
use combine_files::adapters::ui::ConsoleReporter;
use combine_files::ports::{DirectoryLister, InputPort, OutputSink, ReportPort, TextReader};
use combine_files::shared::config::AppConfig;
use combine_files::usecases::CombineService;
use dotenv::dotenv;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    // stdout carries only the summary line.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Ok(path) = &env_loaded {
        info!(path = %path.display(), "loaded .env");
    }

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "invalid configuration, using defaults");
        AppConfig::default()
    });

    let source_dir = cfg.source_dir_or_default();
    let output_file = cfg.output_file_or_default();
    info!(
        source_dir = %source_dir.display(),
        output = %output_file.display(),
        skip_directories = cfg.skip_directories_or_default(),
        "configuration resolved"
    );

    let lister: Arc<dyn DirectoryLister> = Arc::new(FsLister::new(&source_dir));
    let reader: Arc<dyn TextReader> = Arc::new(FsTextReader::new());
    let sink: Arc<dyn OutputSink> = Arc::new(FsOutputSink::new(&output_file));
    let reporter: Arc<dyn ReportPort> = Arc::new(ConsoleReporter::new());

    let service: Arc<dyn InputPort> = Arc::new(
        CombineService::new(lister, reader, sink, cfg.extensions_or_default())
            .with_skip_directories(cfg.skip_directories_or_default()),
    );

    let report = service
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    reporter.report(&report);

    Ok(())
}
