//! Core type definitions for sparkline rendering
//!
//! Chart types, the shape kinds a host must be able to create, and the
//! geometry values the chart layouts produce.

use std::fmt;
use std::str::FromStr;

use super::numeric::{format_number, format_percent};
use super::SparklineError;

/// The four supported chart geometries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum ChartType {
    /// Bottom-aligned columns, one per point
    #[default]
    Bar,
    /// A single open polyline through all points
    Line,
    /// Filled wedges proportional to each point's share of the total
    Pie,
    /// One horizontal bar split into proportional segments
    Stacked,
}

impl ChartType {
    /// All chart types, in the order they are documented
    pub const ALL: [ChartType; 4] = [
        ChartType::Bar,
        ChartType::Line,
        ChartType::Pie,
        ChartType::Stacked,
    ];

    /// Name as written in the `data-type` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Line => "line",
            ChartType::Pie => "pie",
            ChartType::Stacked => "stacked",
        }
    }

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            ChartType::Bar => "Vertical columns scaled to the largest point",
            ChartType::Line => "Polyline through every point, single stroke color",
            ChartType::Pie => "Wedges sized by each point's share of the total",
            ChartType::Stacked => "Horizontal bar of proportional segments",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = SparklineError;

    /// Exact, case-sensitive match
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bar" => Ok(ChartType::Bar),
            "line" => Ok(ChartType::Line),
            "pie" => Ok(ChartType::Pie),
            "stacked" => Ok(ChartType::Stacked),
            other => Err(SparklineError::unknown_chart_type(other)),
        }
    }
}

/// Kinds of element a host creates for chart shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rect,
    Polyline,
    Path,
}

impl ShapeKind {
    /// SVG tag name for this shape
    pub fn tag(&self) -> &'static str {
        match self {
            ShapeKind::Rect => "rect",
            ShapeKind::Polyline => "polyline",
            ShapeKind::Path => "path",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A point in surface coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", format_number(self.x), format_number(self.y))
    }
}

/// Axis-aligned filled rectangle with a tooltip label
#[derive(Debug, Clone, PartialEq)]
pub struct RectShape {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
    pub label: String,
}

/// Open, unfilled polyline
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineShape {
    pub points: Vec<Point>,
    pub stroke: String,
    pub stroke_width: f64,
}

/// Filled pie slice: center, out to the arc start, along the arc, and back
#[derive(Debug, Clone, PartialEq)]
pub struct WedgeShape {
    pub center: Point,
    pub start: Point,
    pub end: Point,
    pub radius: f64,
    /// Angle swept by this slice, in radians
    pub sweep: f64,
    pub fill: String,
    pub label: String,
}

impl WedgeShape {
    /// Large-arc flag for the SVG arc command
    pub fn large_arc(&self) -> bool {
        self.sweep > std::f64::consts::PI
    }

    /// Share of the full circle as a percentage (0-100)
    pub fn percent(&self) -> f64 {
        self.sweep / std::f64::consts::TAU * 100.0
    }

    /// SVG path data for the wedge
    pub fn path_data(&self) -> String {
        let radius = format_number(self.radius);
        format!(
            "M {} L {} A {},{} 0 {} 1 {} Z",
            self.center,
            self.start,
            radius,
            radius,
            u8::from(self.large_arc()),
            self.end
        )
    }
}

/// A single drawable primitive produced by a chart layout
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect(RectShape),
    Polyline(PolylineShape),
    Wedge(WedgeShape),
}

impl Shape {
    /// The host element kind used to draw this shape
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rect(_) => ShapeKind::Rect,
            Shape::Polyline(_) => ShapeKind::Polyline,
            Shape::Wedge(_) => ShapeKind::Path,
        }
    }

    /// Geometry and paint attributes, in the order they are set on the host
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        match self {
            Shape::Rect(rect) => vec![
                ("x", format_number(rect.x)),
                ("y", format_number(rect.y)),
                ("width", format_number(rect.width)),
                ("height", format_number(rect.height)),
                ("fill", rect.fill.clone()),
            ],
            Shape::Polyline(line) => {
                let points = line
                    .points
                    .iter()
                    .map(Point::to_string)
                    .collect::<Vec<_>>()
                    .join(" ");
                vec![
                    ("points", points),
                    ("fill", "none".to_string()),
                    ("stroke-width", format_number(line.stroke_width)),
                    ("stroke", line.stroke.clone()),
                ]
            }
            Shape::Wedge(wedge) => vec![
                ("d", wedge.path_data()),
                ("fill", wedge.fill.clone()),
            ],
        }
    }

    /// Tooltip text nested inside the shape, if any
    pub fn label(&self) -> Option<&str> {
        match self {
            Shape::Rect(rect) => Some(&rect.label),
            Shape::Polyline(_) => None,
            Shape::Wedge(wedge) => Some(&wedge.label),
        }
    }

    /// Fill or stroke color of the shape
    pub fn color(&self) -> &str {
        match self {
            Shape::Rect(rect) => &rect.fill,
            Shape::Polyline(line) => &line.stroke,
            Shape::Wedge(wedge) => &wedge.fill,
        }
    }
}

/// Build the label for a pie slice from its value and the series total
pub(crate) fn slice_label(value: f64, total: f64) -> String {
    format!("{}%", format_percent(value / total * 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_chart_type_round_trip_names() {
        for chart_type in ChartType::ALL {
            assert_eq!(chart_type.as_str().parse::<ChartType>().unwrap(), chart_type);
        }
    }

    #[test]
    fn test_chart_type_is_case_sensitive() {
        assert!("Bar".parse::<ChartType>().is_err());
        assert!(" bar".parse::<ChartType>().is_err());
    }

    #[test]
    fn test_unknown_chart_type_message() {
        let err = "donut".parse::<ChartType>().unwrap_err();
        assert_eq!(err.to_string(), "donut is not a valid sparkline type");
    }

    #[test]
    fn test_rect_attributes() {
        let shape = Shape::Rect(RectShape {
            x: 35.0,
            y: 20.0,
            width: 30.0,
            height: 10.0,
            fill: "red".to_string(),
            label: "1".to_string(),
        });
        assert_eq!(shape.kind(), ShapeKind::Rect);
        assert_eq!(
            shape.attributes(),
            vec![
                ("x", "35".to_string()),
                ("y", "20".to_string()),
                ("width", "30".to_string()),
                ("height", "10".to_string()),
                ("fill", "red".to_string()),
            ]
        );
        assert_eq!(shape.label(), Some("1"));
    }

    #[test]
    fn test_polyline_attributes() {
        let shape = Shape::Polyline(PolylineShape {
            points: vec![Point::new(0.0, 30.0), Point::new(50.0, 7.5)],
            stroke: "blue".to_string(),
            stroke_width: 2.0,
        });
        let attrs = shape.attributes();
        assert_eq!(attrs[0], ("points", "0,30 50,7.5".to_string()));
        assert_eq!(attrs[1], ("fill", "none".to_string()));
        assert_eq!(attrs[2], ("stroke-width", "2".to_string()));
        assert_eq!(attrs[3], ("stroke", "blue".to_string()));
        assert_eq!(shape.label(), None);
    }

    #[test]
    fn test_wedge_path_data() {
        let wedge = WedgeShape {
            center: Point::new(15.0, 15.0),
            start: Point::new(30.0, 15.0),
            end: Point::new(0.0, 15.0),
            radius: 15.0,
            sweep: PI,
            fill: "gray".to_string(),
            label: "50.00%".to_string(),
        };
        assert!(!wedge.large_arc());
        assert_eq!(wedge.path_data(), "M 15,15 L 30,15 A 15,15 0 0 1 0,15 Z");
    }

    #[test]
    fn test_wedge_large_arc_flag() {
        let wedge = WedgeShape {
            center: Point::default(),
            start: Point::default(),
            end: Point::default(),
            radius: 1.0,
            sweep: PI * 1.5,
            fill: "gray".to_string(),
            label: String::new(),
        };
        assert!(wedge.large_arc());
        assert!(wedge.path_data().contains(" 0 1 1 "));
        assert!((wedge.percent() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_slice_label() {
        assert_eq!(slice_label(1.0, 4.0), "25.00%");
        assert_eq!(slice_label(1.0, 3.0), "33.33%");
        assert_eq!(slice_label(1.0, 0.0), "Infinity%");
        assert_eq!(slice_label(0.0, 0.0), "NaN%");
    }
}
