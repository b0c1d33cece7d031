use anyhow::{Context, Result};
use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_sdk::logs::SdkLoggerProvider;
use tracing_appender::{
    non_blocking,
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, filter::Directive, fmt, prelude::*};

/// Keeps the file writer flushing for as long as it is alive.
pub struct Logger {
    _guard: WorkerGuard,
    provider: Option<SdkLoggerProvider>,
}

impl Logger {
    pub fn new(component: &str, is_dev: bool) -> Result<Self> {
        let log_dir = if is_dev { "./logs" } else { "/var/log/app" };
        let file_name = format!("point_{component}.log");
        let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, file_name);
        let (file_writer, guard) = non_blocking(file_appender);

        let file_layer = fmt::layer()
            .with_writer(file_writer)
            .with_ansi(false)
            .json()
            .with_filter(EnvFilter::new("info"));

        let console_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let console_layer = fmt::layer()
            .pretty()
            .with_thread_names(true)
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

        if let Some(provider) = &provider {
            let otel_filter = ["hyper=off", "opentelemetry=off", "h2=off", "tower=off"]
                .iter()
                .filter_map(|directive| directive.parse::<Directive>().ok())
                .fold(EnvFilter::new("info"), EnvFilter::add_directive);

            registry
                .with(OpenTelemetryTracingBridge::new(provider).with_filter(otel_filter))
                .try_init()
                .context("Failed to install tracing subscriber")?;
        } else {
            registry
                .try_init()
                .context("Failed to install tracing subscriber")?;
        }

        Ok(Self {
            _guard: guard,
            provider,
        })
    }

    pub fn shutdown(self) {
        if let Some(provider) = &self.provider {
            if let Err(e) = provider.shutdown() {
                eprintln!("Failed to shut down log provider: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dev_logger_installs_once_and_shuts_down() {
        let logger = Logger::new("unit", true).unwrap();
        assert!(logger.provider.is_none());

        tracing::info!("logger installed");

        assert!(Logger::new("unit", true).is_err());
        logger.shutdown();
    }
}
