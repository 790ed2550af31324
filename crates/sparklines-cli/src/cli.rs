//! Command-line interface for the sparklines utility
//!
//! Renders sparkline charts to SVG from the same `data-*` attributes a page
//! would carry, either one chart from flags or many from a JSON file.

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::{debug, error, info};

use sparklines::core::logging::init_logging;
use sparklines::plugins::Orchestrator;
use sparklines::{
    attributes_from_json, render_svg, resolve_options, ChartType, SvgDocument, ATTR_COLORS,
    ATTR_FORMAT, ATTR_GAP, ATTR_HEIGHT, ATTR_LABELS, ATTR_POINTS, ATTR_STROKE_WIDTH, ATTR_TYPE,
    ATTR_WIDTH,
};

/// Sparklines - Render small inline charts to SVG
#[derive(Parser)]
#[command(name = "sparklines")]
#[command(about = "Render bar, line, pie, and stacked sparklines to SVG")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

/// Chart attributes given as flags
///
/// Values are passed through as attribute strings, so malformed numbers fall
/// back to their defaults exactly as they would on a page.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartArgs {
    /// Chart type (bar|line|pie|stacked)
    #[arg(short = 't', long = "type")]
    pub chart_type: Option<String>,

    /// Comma-separated series, e.g. 1,4,2,8
    #[arg(short, long, allow_hyphen_values = true)]
    pub points: Option<String>,

    /// Comma-separated colors, cycled per shape
    #[arg(short, long)]
    pub colors: Option<String>,

    /// Chart width in pixels
    #[arg(long, allow_hyphen_values = true)]
    pub width: Option<String>,

    /// Chart height in pixels
    #[arg(long, allow_hyphen_values = true)]
    pub height: Option<String>,

    /// Gap between bars or segments
    #[arg(long, allow_hyphen_values = true)]
    pub gap: Option<String>,

    /// Line stroke width
    #[arg(long, allow_hyphen_values = true)]
    pub stroke_width: Option<String>,

    /// Reserved; accepted but not drawn
    #[arg(long)]
    pub labels: Option<String>,

    /// Reserved; accepted but not applied
    #[arg(long)]
    pub format: Option<String>,
}

impl ChartArgs {
    /// The flags as `data-*` attribute pairs, omitting unset ones
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        [
            (ATTR_TYPE, &self.chart_type),
            (ATTR_POINTS, &self.points),
            (ATTR_COLORS, &self.colors),
            (ATTR_WIDTH, &self.width),
            (ATTR_HEIGHT, &self.height),
            (ATTR_GAP, &self.gap),
            (ATTR_STROKE_WIDTH, &self.stroke_width),
            (ATTR_LABELS, &self.labels),
            (ATTR_FORMAT, &self.format),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.clone().map(|value| (name, value)))
        .collect()
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render one chart to SVG markup
    Render {
        #[command(flatten)]
        chart: ChartArgs,

        /// Output file for the SVG (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render every chart described in a JSON array of attribute objects
    Batch {
        /// JSON input file (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for the chart containers (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the resolved options for a chart as JSON
    Inspect {
        #[command(flatten)]
        chart: ChartArgs,
    },

    /// Show supported chart types
    Types {
        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },
}

/// Resolved options as printed by `inspect`
#[derive(Debug, Serialize)]
struct InspectReport<'a> {
    #[serde(rename = "type")]
    chart_type: &'a str,
    valid_type: bool,
    width: f64,
    height: f64,
    gap: f64,
    stroke_width: f64,
    colors: &'a [String],
    /// Unparsable points serialize as `null`
    points: Option<&'a [f64]>,
    labels: Option<&'a str>,
    format: Option<&'a str>,
}

/// Main CLI application
#[derive(Debug, Default)]
pub struct SparklinesApp;

impl SparklinesApp {
    /// Create a new application instance
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over flags
        let log_level_str = std::env::var("SPARKLINES_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var("SPARKLINES_LOG_FORMAT")
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Sparklines v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Render { chart, output } => self.render_command(&chart, output, cli.verbose),
            Commands::Batch { input, output } => self.batch_command(input, output, cli.verbose),
            Commands::Inspect { chart } => self.inspect_command(&chart),
            Commands::Types { json } => self.types_command(json, cli.verbose),
        }
    }

    /// Handle the render command
    fn render_command(&self, chart: &ChartArgs, output: Option<PathBuf>, verbose: bool) -> Result<()> {
        let svg = render_svg(chart.attributes())?;

        if verbose {
            if svg.is_empty() {
                eprintln!("No points given; nothing to render");
            } else {
                eprintln!("Rendered {} bytes of SVG", svg.len());
            }
        }

        self.write_output(output, &svg)
    }

    /// Render a JSON batch into one container per chart
    pub fn render_batch(&self, content: &str) -> Result<String> {
        let value: serde_json::Value =
            serde_json::from_str(content).map_err(|e| anyhow!("Invalid JSON input: {}", e))?;
        let items = value
            .as_array()
            .ok_or_else(|| anyhow!("Expected a JSON array of chart attribute objects"))?;

        let mut doc = SvgDocument::new();
        for (index, item) in items.iter().enumerate() {
            let attributes =
                attributes_from_json(item).map_err(|e| anyhow!("Chart {}: {}", index, e))?;
            doc.add_sparkline(attributes);
        }

        let mut orchestrator = Orchestrator::new();
        let reports = orchestrator.mount(&mut doc)?;
        info!(charts = reports.len(), "Rendered batch");

        let mut containers = Vec::with_capacity(reports.len());
        for (index, report) in reports.iter().enumerate() {
            if let Err(e) = &report.outcome {
                error!(index, error = %e, "Chart failed to render");
                return Err(anyhow!("Chart {}: {}", index, e));
            }
            containers.push(doc.to_markup(report.element));
        }

        Ok(containers.join("\n"))
    }

    /// Handle the batch command
    fn batch_command(&self, input: Option<PathBuf>, output: Option<PathBuf>, verbose: bool) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let markup = self.render_batch(&content)?;
        self.write_output(output, &markup)
    }

    /// Resolved options for a chart as JSON
    pub fn inspect_json(&self, chart: &ChartArgs) -> Result<serde_json::Value> {
        let options = resolve_options(chart.attributes());
        debug!(?options, "Resolved options for inspection");

        let report = InspectReport {
            chart_type: &options.chart_type,
            valid_type: options.chart_type().is_ok(),
            width: options.width,
            height: options.height,
            gap: options.gap,
            stroke_width: options.stroke_width,
            colors: &options.colors,
            points: options.points.as_deref(),
            labels: options.labels.as_deref(),
            format: options.format.as_deref(),
        };
        Ok(serde_json::to_value(report)?)
    }

    /// Handle the inspect command
    fn inspect_command(&self, chart: &ChartArgs) -> Result<()> {
        let json = self.inspect_json(chart)?;
        println!("{}", serde_json::to_string_pretty(&json)?);
        Ok(())
    }

    /// Handle the types command
    fn types_command(&self, json: bool, verbose: bool) -> Result<()> {
        if verbose {
            eprintln!("Listing supported chart types");
        }

        if json {
            let supported: Vec<serde_json::Value> = ChartType::ALL
                .iter()
                .map(|chart_type| {
                    serde_json::json!({
                        "name": chart_type.as_str(),
                        "description": chart_type.description(),
                    })
                })
                .collect();
            let types = serde_json::json!({
                "supported_types": supported,
                "default": ChartType::default().as_str(),
                "total": ChartType::ALL.len(),
            });
            println!("{}", serde_json::to_string_pretty(&types)?);
        } else {
            println!("Supported chart types:");
            for chart_type in ChartType::ALL {
                println!("  {:<8} - {}", chart_type.as_str(), chart_type.description());
            }
            println!();
            println!("Total: {} chart types supported", ChartType::ALL.len());
        }

        Ok(())
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) => {
                if path.to_string_lossy() == "-" {
                    let mut content = String::new();
                    io::stdin().read_to_string(&mut content)?;
                    Ok(content)
                } else {
                    fs::read_to_string(&path).map_err(|e| {
                        anyhow!("Failed to read input file '{}': {}", path.display(), e)
                    })
                }
            }
            None => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
        }
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        let stdout_content = if content.is_empty() || content.ends_with('\n') {
            content.to_string()
        } else {
            format!("{}\n", content)
        };

        match output {
            Some(path) => {
                if path.to_string_lossy() == "-" {
                    print!("{}", stdout_content);
                    io::stdout().flush()?;
                } else {
                    fs::write(&path, content).map_err(|e| {
                        anyhow!("Failed to write output file '{}': {}", path.display(), e)
                    })?;
                }
            }
            None => {
                print!("{}", stdout_content);
                io::stdout().flush()?;
            }
        }
        Ok(())
    }
}
