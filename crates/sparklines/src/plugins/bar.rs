//! Bar chart layout
//!
//! One bottom-aligned column per point. `n` columns and `n - 1` gaps fill the
//! width exactly, and heights scale against the largest point.

use tracing::trace;

use crate::core::numeric::{format_number, series_max};
use crate::core::{ChartLayout, ChartOptions, RectShape, Shape};

/// Bar chart layout
#[derive(Debug, Clone, Copy, Default)]
pub struct BarLayout;

impl BarLayout {
    pub fn new() -> Self {
        Self
    }
}

impl ChartLayout for BarLayout {
    fn layout(&self, options: &ChartOptions, series: &[f64]) -> Vec<Shape> {
        let n = series.len() as f64;
        let width = options.width;
        let height = options.height;
        let gap = options.gap;

        let column_width = gap / n + width / n - gap;
        let max = series_max(series);
        trace!(column_width, max, "Bar layout metrics");

        series
            .iter()
            .enumerate()
            .map(|(idx, &value)| {
                let i = idx as f64;
                let bar_height = value / max * height;
                Shape::Rect(RectShape {
                    x: i * column_width + i * gap,
                    y: height - bar_height,
                    width: column_width,
                    height: bar_height,
                    fill: options.color(idx).to_string(),
                    label: format_number(value),
                })
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "bar"
    }
}
