//! Tracing subscriber setup.
//!
//! The output format follows `[logging] format`: JSON lines for
//! deployments, pretty output for local runs. A `RUST_LOG` environment
//! variable overrides the configured level filter.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Installs the global tracing subscriber. Call once at startup.
pub fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_events(FmtSpan::CLOSE);
            registry.with(layer).init();
        }
        LogFormat::Pretty => {
            let layer = fmt::layer().pretty().with_span_events(FmtSpan::CLOSE);
            registry.with(layer).init();
        }
    }
}
