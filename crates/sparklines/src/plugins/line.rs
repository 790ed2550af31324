//! Line chart layout
//!
//! A single open polyline. Points are spread evenly so the first sits at
//! `x = 0` and the last at `x = width`; only the first palette color is used.
//!
//! A one-point series divides the width by zero, which places the point at
//! `x = 0 * inf = NaN`. That degenerate output is kept as-is.

use tracing::trace;

use crate::core::numeric::series_max;
use crate::core::{ChartLayout, ChartOptions, Point, PolylineShape, Shape};

/// Line chart layout
#[derive(Debug, Clone, Copy, Default)]
pub struct LineLayout;

impl LineLayout {
    pub fn new() -> Self {
        Self
    }
}

impl ChartLayout for LineLayout {
    fn layout(&self, options: &ChartOptions, series: &[f64]) -> Vec<Shape> {
        let width = options.width;
        let height = options.height;
        let spacing = width / (series.len() as f64 - 1.0);
        let max = series_max(series);
        trace!(spacing, max, "Line layout metrics");

        let points = series
            .iter()
            .enumerate()
            .map(|(idx, &value)| Point::new(idx as f64 * spacing, height - value / max * height))
            .collect();

        vec![Shape::Polyline(PolylineShape {
            points,
            stroke: options.color(0).to_string(),
            stroke_width: options.stroke_width,
        })]
    }

    fn name(&self) -> &'static str {
        "line"
    }
}
