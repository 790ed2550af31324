//! Core layout trait for chart geometry
//!
//! A layout turns resolved options and a series into positioned shapes. It is
//! pure: no host access, so coordinate math is testable on its own.

use super::{ChartOptions, Shape};

/// Core trait for chart layouts
///
/// # Example
/// ```
/// use sparklines::core::{ChartLayout, ChartOptions};
/// use sparklines::plugins::BarLayout;
///
/// let options = ChartOptions::default();
/// let shapes = BarLayout::new().layout(&options, &[1.0, 2.0, 3.0]);
/// assert_eq!(shapes.len(), 3);
/// ```
pub trait ChartLayout: Send + Sync {
    /// Compute the shapes for `series` inside the options' bounding box
    ///
    /// Must not panic on degenerate input (`NaN`, zero totals, negative
    /// sizes); the shapes simply carry degenerate coordinates.
    fn layout(&self, options: &ChartOptions, series: &[f64]) -> Vec<Shape>;

    /// Get the name of this layout
    fn name(&self) -> &'static str;
}
