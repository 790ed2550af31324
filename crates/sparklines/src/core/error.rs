//! Core error types for sparkline rendering
//!
//! Data problems (bad numbers, missing points) never surface as errors; they
//! degrade into defaults or `NaN` geometry. The variants here cover the few
//! conditions that are reported: an unrecognized chart type, host failures,
//! and I/O around the CLI.

use thiserror::Error;

/// Core error types for sparkline rendering
#[derive(Error, Debug)]
pub enum SparklineError {
    #[error("{chart_type} is not a valid sparkline type")]
    UnknownChartType { chart_type: String },

    #[error("Host error: {message}")]
    HostError { message: String },

    #[error("Config error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl SparklineError {
    /// Create a new unknown chart type error
    pub fn unknown_chart_type(chart_type: impl Into<String>) -> Self {
        Self::UnknownChartType {
            chart_type: chart_type.into(),
        }
    }

    /// Create a new host error
    pub fn host_error(message: impl Into<String>) -> Self {
        Self::HostError {
            message: message.into(),
        }
    }

    /// Create a new config error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_chart_type() {
        let error = SparklineError::unknown_chart_type("donut");
        assert_eq!(error.to_string(), "donut is not a valid sparkline type");
    }

    #[test]
    fn test_host_error() {
        let error = SparklineError::host_error("node 7 does not exist");
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Host error"));
        assert!(error_msg.contains("node 7"));
    }

    #[test]
    fn test_config_error() {
        let error = SparklineError::config_error("expected a JSON object");
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Config error"));
        assert!(error_msg.contains("JSON object"));
    }

    #[test]
    fn test_io_error_conversion() {
        use std::io;
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: SparklineError = io_err.into();
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("IO error"));
        assert!(error_msg.contains("File not found"));
    }
}
