//! Chart configuration resolution
//!
//! Reads a chart element's `data-*` attributes, applies defaults, and
//! validates the result into a [`ChartSpec`]. Nothing here fails on bad data:
//! malformed integers fall back to their defaults and malformed points become
//! `NaN`.

use anyhow::Result;
use tracing::{debug, span, trace, Level};

use super::numeric::{format_number, parse_int_with_default, parse_series};
use super::{ChartType, Host, SparklineError};

pub const ATTR_TYPE: &str = "data-type";
pub const ATTR_WIDTH: &str = "data-width";
pub const ATTR_HEIGHT: &str = "data-height";
pub const ATTR_GAP: &str = "data-gap";
pub const ATTR_STROKE_WIDTH: &str = "data-stroke-width";
pub const ATTR_COLORS: &str = "data-colors";
pub const ATTR_POINTS: &str = "data-points";
pub const ATTR_LABELS: &str = "data-labels";
pub const ATTR_FORMAT: &str = "data-format";

/// Every attribute the resolver reads
pub const CHART_ATTRIBUTES: [&str; 9] = [
    ATTR_TYPE,
    ATTR_WIDTH,
    ATTR_HEIGHT,
    ATTR_GAP,
    ATTR_STROKE_WIDTH,
    ATTR_COLORS,
    ATTR_POINTS,
    ATTR_LABELS,
    ATTR_FORMAT,
];

pub const DEFAULT_WIDTH: f64 = 100.0;
pub const DEFAULT_HEIGHT: f64 = 30.0;
pub const DEFAULT_GAP: f64 = 5.0;
pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;
pub const DEFAULT_CHART_TYPE: &str = "bar";
pub const DEFAULT_COLOR: &str = "gray";

/// Attribute values with defaults applied, before validation
///
/// `colors` and `points` are still the raw attribute strings here.
#[derive(Debug, Clone, PartialEq)]
pub struct RawOptions {
    pub width: f64,
    pub height: f64,
    pub gap: f64,
    pub stroke_width: f64,
    pub chart_type: String,
    pub colors: Option<String>,
    pub points: Option<String>,
    pub labels: Option<String>,
    pub format: Option<String>,
}

impl RawOptions {
    /// Assemble defaults from an attribute lookup
    ///
    /// Empty strings count as absent, matching how a page script treats a
    /// blank `data-*` value.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |name: &str| lookup(name).filter(|value| !value.is_empty());
        let int = |name: &str, default: f64| parse_int_with_default(lookup(name).as_deref(), default);

        Self {
            width: int(ATTR_WIDTH, DEFAULT_WIDTH),
            height: int(ATTR_HEIGHT, DEFAULT_HEIGHT),
            gap: int(ATTR_GAP, DEFAULT_GAP),
            stroke_width: int(ATTR_STROKE_WIDTH, DEFAULT_STROKE_WIDTH),
            chart_type: text(ATTR_TYPE).unwrap_or_else(|| DEFAULT_CHART_TYPE.to_string()),
            colors: text(ATTR_COLORS),
            points: text(ATTR_POINTS),
            labels: text(ATTR_LABELS),
            format: text(ATTR_FORMAT),
        }
    }

    /// Normalize colors and parse the point series
    pub fn validate(self) -> ChartOptions {
        let colors = match self.colors {
            Some(raw) => raw.split(',').map(str::to_string).collect(),
            None => vec![DEFAULT_COLOR.to_string()],
        };
        let points = self.points.as_deref().map(parse_series);

        ChartOptions {
            width: self.width,
            height: self.height,
            gap: self.gap,
            stroke_width: self.stroke_width,
            chart_type: self.chart_type,
            colors,
            points,
            labels: self.labels,
            format: self.format,
        }
    }
}

/// Normalized chart options
///
/// `colors` always holds at least one entry. `points` is `None` when the
/// element has no `data-points`, which renders nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub width: f64,
    pub height: f64,
    pub gap: f64,
    pub stroke_width: f64,
    pub chart_type: String,
    pub colors: Vec<String>,
    pub points: Option<Vec<f64>>,
    /// Reserved; read but not applied
    pub labels: Option<String>,
    /// Reserved; custom number formatting is not implemented
    pub format: Option<String>,
}

impl ChartOptions {
    /// Resolve options from an attribute lookup without touching a host
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        RawOptions::from_lookup(lookup).validate()
    }

    /// Interpret the `data-type` string
    pub fn chart_type(&self) -> Result<ChartType, SparklineError> {
        self.chart_type.parse()
    }

    /// Color for the shape at `index`, cycling through the palette
    pub fn color(&self, index: usize) -> &str {
        &self.colors[index % self.colors.len()]
    }

    /// The series, or an empty slice in the empty state
    pub fn series(&self) -> &[f64] {
        self.points.as_deref().unwrap_or(&[])
    }

    pub fn has_points(&self) -> bool {
        self.points.is_some()
    }
}

impl Default for ChartOptions {
    fn default() -> Self {
        ChartOptions::from_lookup(|_| None)
    }
}

/// Options plus the surface created for this render pass
///
/// The surface is fresh on every resolve; the previous one is dropped with the
/// previous spec.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec<N> {
    pub options: ChartOptions,
    pub surface: N,
}

/// Canonical attribute name for a chart option key
///
/// Accepts the full attribute name (`data-stroke-width`), the bare option
/// name (`stroke-width`), or its dataset spelling (`strokeWidth`).
///
/// # Example
/// ```
/// use sparklines::core::attribute_name;
///
/// assert_eq!(attribute_name("strokeWidth"), "data-stroke-width");
/// assert_eq!(attribute_name("points"), "data-points");
/// assert_eq!(attribute_name("data-gap"), "data-gap");
/// ```
pub fn attribute_name(key: &str) -> String {
    if key.starts_with("data-") {
        return key.to_string();
    }

    let mut name = String::with_capacity(key.len() + 8);
    name.push_str("data-");
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            name.push('-');
            name.push(ch.to_ascii_lowercase());
        } else {
            name.push(ch);
        }
    }
    name
}

/// Convert a JSON object of chart options into attribute pairs
///
/// Keys go through [`attribute_name`]. Strings pass through, numbers and
/// booleans are printed, and arrays are joined with `,` so
/// `{"points": [1, 2, 3]}` becomes `data-points="1,2,3"`. `null` values are
/// skipped.
pub fn attributes_from_json(value: &serde_json::Value) -> Result<Vec<(String, String)>> {
    let object = value
        .as_object()
        .ok_or_else(|| SparklineError::config_error("expected a JSON object of chart attributes"))?;

    let mut attributes = Vec::with_capacity(object.len());
    for (key, value) in object {
        if let Some(text) = json_attribute_value(value)? {
            attributes.push((attribute_name(key), text));
        }
    }
    Ok(attributes)
}

fn json_attribute_value(value: &serde_json::Value) -> Result<Option<String>> {
    use serde_json::Value;

    let text = match value {
        Value::Null => return Ok(None),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::Array(_) | Value::Object(_) => {
                        return Err(SparklineError::config_error("nested arrays are not supported").into())
                    }
                    other => parts.push(json_attribute_value(other)?.unwrap_or_default()),
                }
            }
            parts.join(",")
        }
        Value::Object(_) => {
            return Err(SparklineError::config_error("attribute values cannot be objects").into())
        }
    };
    Ok(Some(text))
}

/// Reads element attributes into a [`ChartSpec`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigResolver;

impl ConfigResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve `element` into a spec, creating its surface
    ///
    /// Clears the element's existing content only when it has points to draw.
    pub fn resolve<H: Host>(&self, host: &mut H, element: &H::Node) -> Result<ChartSpec<H::Node>> {
        let resolve_span = span!(Level::DEBUG, "resolve_chart");
        let _enter = resolve_span.enter();

        let raw = RawOptions::from_lookup(|name| host.attribute(element, name));
        trace!(?raw, "Assembled chart defaults");

        let surface = host.create_surface()?;
        host.set_attribute(&surface, "width", &format_number(raw.width))?;
        host.set_attribute(&surface, "height", &format_number(raw.height))?;

        let options = raw.validate();
        if options.has_points() {
            host.clear(element)?;
        }

        debug!(
            chart_type = %options.chart_type,
            points = options.series().len(),
            colors = options.colors.len(),
            "Resolved chart options"
        );

        Ok(ChartSpec { options, surface })
    }
}
