use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_sdk::logs::SdkLoggerProvider;
use std::path::Path;
use tracing_appender::{
    non_blocking,
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Keeps the file writer flushing until dropped; hold it for the life of
/// `main`.
pub struct Logger {
    _guard: Option<WorkerGuard>,
    provider: Option<SdkLoggerProvider>,
}

impl Logger {
    pub fn new(component: &str, is_dev: bool, log_dir: &Path) -> Self {
        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix(format!("rust_app_{component}.log"))
            .build(log_dir);

        let (file_layer, guard) = match file_appender {
            Ok(appender) => {
                let (file_writer, guard) = non_blocking(appender);
                let layer = fmt::layer()
                    .with_writer(file_writer)
                    .with_ansi(false)
                    .json()
                    .with_filter(EnvFilter::new("info"));
                (Some(layer), Some(guard))
            }
            Err(e) => {
                eprintln!("file logging disabled, {}: {e}", log_dir.display());
                (None, None)
            }
        };

        let console_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

        // stdout carries the JSON result only
        let console_layer = fmt::layer()
            .pretty()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_filter(console_filter);

        let registry = tracing_subscriber::registry()
            .with(file_layer)
            .with(console_layer);

        let provider = if !is_dev {
            Some(SdkLoggerProvider::builder().build())
        } else {
            None
        };

        let result = if let Some(provider) = &provider {
            let otel_filter =
                EnvFilter::try_new("info,hyper=off,opentelemetry=off,h2=off,reqwest=off")
                    .unwrap_or_else(|_| EnvFilter::new("info"));

            registry
                .with(OpenTelemetryTracingBridge::new(provider).with_filter(otel_filter))
                .try_init()
        } else {
            registry.try_init()
        };

        if let Err(e) = result {
            eprintln!("logger already initialised: {e}");
        }

        Self {
            _guard: guard,
            provider,
        }
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Some(provider) = self.provider.take() {
            let _ = provider.shutdown();
        }
    }
}
