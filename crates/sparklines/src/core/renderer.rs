//! Chart renderer
//!
//! Dispatches a resolved [`ChartSpec`] to its layout, then materializes the
//! shapes on the host: each shape becomes a child of the spec surface, and the
//! surface is appended to the chart element last.

use anyhow::Result;
use tracing::{debug, error, span, Level};

use super::{ChartLayout, ChartOptions, ChartSpec, ChartType, Host, Shape};
use crate::plugins::{BarLayout, LineLayout, PieLayout, StackedLayout};

/// Result of one render pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Shapes were drawn and the surface attached
    Drawn { chart_type: ChartType, shapes: usize },
    /// The element has no points; nothing was drawn or cleared
    Empty,
    /// The element named an unknown chart type; an empty surface was attached
    InvalidType(String),
}

impl RenderOutcome {
    pub fn is_drawn(&self) -> bool {
        matches!(self, RenderOutcome::Drawn { .. })
    }
}

impl ChartType {
    /// The layout implementing this chart type
    pub fn layout(&self) -> &'static dyn ChartLayout {
        match self {
            ChartType::Bar => &BarLayout,
            ChartType::Line => &LineLayout,
            ChartType::Pie => &PieLayout,
            ChartType::Stacked => &StackedLayout,
        }
    }
}

/// Compute the shapes for validated options without a host
///
/// Returns an empty list when there are no points.
pub fn layout_shapes(chart_type: ChartType, options: &ChartOptions) -> Vec<Shape> {
    match &options.points {
        Some(series) => chart_type.layout().layout(options, series),
        None => Vec::new(),
    }
}

/// Draws resolved specs onto a host
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartRenderer;

impl ChartRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Draw `spec` into `element`
    ///
    /// An empty spec (no points) is a no-op. An unknown chart type is logged
    /// and attaches the empty surface; neither is an error. Only host
    /// failures propagate.
    pub fn render<H: Host>(
        &self,
        host: &mut H,
        element: &H::Node,
        spec: &ChartSpec<H::Node>,
    ) -> Result<RenderOutcome> {
        let render_span = span!(Level::DEBUG, "render_chart", chart_type = %spec.options.chart_type);
        let _enter = render_span.enter();

        if !spec.options.has_points() {
            debug!("No points; leaving element untouched");
            host.release(&spec.surface)?;
            return Ok(RenderOutcome::Empty);
        }

        let chart_type = match spec.options.chart_type() {
            Ok(chart_type) => chart_type,
            Err(e) => {
                error!("{}", e);
                host.attach(element, &spec.surface)?;
                return Ok(RenderOutcome::InvalidType(spec.options.chart_type.clone()));
            }
        };

        let shapes = layout_shapes(chart_type, &spec.options);
        debug!(shape_count = shapes.len(), "Computed layout");

        for shape in &shapes {
            self.draw_shape(host, &spec.surface, shape)?;
        }
        host.attach(element, &spec.surface)?;

        Ok(RenderOutcome::Drawn {
            chart_type,
            shapes: shapes.len(),
        })
    }

    fn draw_shape<H: Host>(&self, host: &mut H, surface: &H::Node, shape: &Shape) -> Result<()> {
        let node = host.create_shape(shape.kind())?;
        for (name, value) in shape.attributes() {
            host.set_attribute(&node, name, &value)?;
        }
        if let Some(label) = shape.label() {
            host.set_label(&node, label)?;
        }
        host.attach(surface, &node)
    }
}
