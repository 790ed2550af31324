//! Logging setup for the render pipeline
//!
//! The pipeline reports through `tracing`: one `render_sparkline` span per
//! element, `debug!` events per stage, and an `error!` event when an element
//! names a chart type that does not exist. This module only installs a
//! subscriber; library code never requires one.
//!
//! # Usage
//!
//! ```rust
//! use sparklines::core::logging::init_logging;
//!
//! // Explicit level and format; `None` falls back to the environment
//! if let Err(e) = init_logging(Some("debug"), Some("pretty")) {
//!     eprintln!("logging not initialized: {}", e);
//! }
//! ```
//!
//! # Environment Variables
//!
//! - `SPARKLINES_LOG_LEVEL`: trace|debug|info|warn|error|off
//! - `SPARKLINES_LOG_FORMAT`: compact|pretty|json
//! - `RUST_LOG`: standard `EnvFilter` directives, e.g.
//!   `RUST_LOG="info,sparklines::plugins::pie=trace"`
//!
//! On `wasm32` the subscriber is `tracing-wasm`, which writes to the browser
//! console; the format argument is ignored there.

use std::str::FromStr;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

#[cfg(target_arch = "wasm32")]
use tracing_wasm::WASMLayerConfig;

/// Log format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact single-line format
    Compact,
    /// Pretty multi-line format with colors
    Pretty,
    /// JSON format for log aggregation
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

impl LogFormat {
    /// Get all valid format names
    pub fn variants() -> &'static [&'static str] {
        &["compact", "pretty", "json"]
    }
}

/// Install the global tracing subscriber
///
/// * `level` - trace|debug|info|warn|error|off, or any `EnvFilter` directive.
///   Falls back to `SPARKLINES_LOG_LEVEL`, then `RUST_LOG`, then `info`.
/// * `format` - compact|pretty|json. Falls back to `SPARKLINES_LOG_FORMAT`,
///   then `compact`.
///
/// Fails on an unknown format or when a subscriber is already installed.
pub fn init_logging(
    level: Option<&str>,
    format: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = (level, format);
        tracing_wasm::set_as_global_default_with_config(WASMLayerConfig::default());

        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let log_level = level
            .map(|s| s.to_string())
            .or_else(|| std::env::var("SPARKLINES_LOG_LEVEL").ok())
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| "info".to_string());

        let log_format = format
            .map(|s| s.to_string())
            .or_else(|| std::env::var("SPARKLINES_LOG_FORMAT").ok())
            .unwrap_or_else(|| "compact".to_string());

        let filter = if log_level == "off" {
            EnvFilter::new("off")
        } else {
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(&log_level))
                .unwrap_or_else(|_| EnvFilter::new("info"))
        };

        let format = LogFormat::from_str(&log_format)
            .map_err(|e| format!("Invalid log format: {}", e))?;

        // Diagnostics go to stderr so rendered SVG on stdout stays clean
        let layer = fmt::Layer::default()
            .with_writer(std::io::stderr)
            .with_target(format != LogFormat::Compact);
        let layer: Box<dyn Layer<Registry> + Send + Sync> = match format {
            LogFormat::Compact => layer.with_span_events(FmtSpan::NONE).boxed(),
            LogFormat::Pretty => layer
                .with_file(true)
                .with_line_number(true)
                .with_span_events(FmtSpan::ACTIVE)
                .pretty()
                .boxed(),
            LogFormat::Json => layer.with_span_events(FmtSpan::CLOSE).json().boxed(),
        };

        Registry::default().with(layer).with(filter).try_init()?;

        Ok(())
    }
}

/// Initialize logging with default settings (info level, compact format)
pub fn init_default_logging() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(None, None)
}
