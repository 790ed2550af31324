//! Pie chart layout
//!
//! Slices run clockwise from angle 0 (3 o'clock), each sized by its share of
//! the series total. The circle is inscribed in the bounding box.

use std::f64::consts::TAU;

use tracing::trace;

use crate::core::numeric::series_total;
use crate::core::types::slice_label;
use crate::core::{ChartLayout, ChartOptions, Point, Shape, WedgeShape};

/// Pie chart layout
#[derive(Debug, Clone, Copy, Default)]
pub struct PieLayout;

impl PieLayout {
    pub fn new() -> Self {
        Self
    }
}

impl ChartLayout for PieLayout {
    fn layout(&self, options: &ChartOptions, series: &[f64]) -> Vec<Shape> {
        let width = options.width;
        let height = options.height;
        let radius = width.min(height) / 2.0;
        let center = Point::new(width / 2.0, height / 2.0);
        let total = series_total(series);
        trace!(radius, total, "Pie layout metrics");

        let on_circle = |angle: f64| {
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        };

        let mut start_angle = 0.0_f64;
        series
            .iter()
            .enumerate()
            .map(|(idx, &value)| {
                let sweep = value / total * TAU;
                let end_angle = start_angle + sweep;
                let wedge = WedgeShape {
                    center,
                    start: on_circle(start_angle),
                    end: on_circle(end_angle),
                    radius,
                    sweep,
                    fill: options.color(idx).to_string(),
                    label: slice_label(value, total),
                };
                start_angle = end_angle;
                Shape::Wedge(wedge)
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "pie"
    }
}
