//! Stacked bar layout
//!
//! One full-height horizontal bar split into segments proportional to each
//! point's share of the total, separated by the configured gap.

use tracing::trace;

use crate::core::numeric::{format_number, series_total};
use crate::core::{ChartLayout, ChartOptions, RectShape, Shape};

/// Stacked bar layout
#[derive(Debug, Clone, Copy, Default)]
pub struct StackedLayout;

impl StackedLayout {
    pub fn new() -> Self {
        Self
    }
}

impl ChartLayout for StackedLayout {
    fn layout(&self, options: &ChartOptions, series: &[f64]) -> Vec<Shape> {
        let height = options.height;
        let gap = options.gap;
        let total = series_total(series);
        let total_gap_width = (series.len() as f64 - 1.0) * gap;
        let available_width = options.width - total_gap_width;
        trace!(total, available_width, "Stacked layout metrics");

        let mut offset = 0.0_f64;
        series
            .iter()
            .enumerate()
            .map(|(idx, &value)| {
                let segment_width = value / total * available_width;
                let rect = RectShape {
                    x: offset,
                    y: 0.0,
                    width: segment_width,
                    height,
                    fill: options.color(idx).to_string(),
                    label: format_number(value),
                };
                offset += segment_width + gap;
                Shape::Rect(rect)
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "stacked"
    }
}
