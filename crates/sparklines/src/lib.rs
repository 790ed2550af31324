//! Sparklines - Render small inline charts from declarative attributes
//!
//! Chart elements carry `data-*` attributes describing a series and its
//! presentation; this crate resolves them, lays out one of four chart
//! geometries (bar, line, pie, stacked), and draws the result as SVG shapes
//! on a host.
//!
//! # Quick Start
//!
//! ```rust
//! use sparklines::render_svg;
//!
//! let svg = render_svg([("data-type", "bar"), ("data-points", "1,2,3")]).unwrap();
//! assert!(svg.starts_with("<svg"));
//! assert_eq!(svg.matches("<rect").count(), 3);
//! ```
//!
//! # Advanced Usage
//!
//! For more control, drive the pipeline on a host yourself:
//!
//! ```rust
//! use sparklines::prelude::*;
//!
//! let mut doc = SvgDocument::new();
//! let chart = doc.add_sparkline([("data-type", "pie"), ("data-points", "1,1,2")]);
//!
//! let mut orchestrator = Orchestrator::new();
//! orchestrator.mount(&mut doc).unwrap();
//!
//! // Change the data and re-render through an update event
//! doc.set_attribute(&chart, "data-points", "2,2").unwrap();
//! let outcome = orchestrator.dispatch(&mut doc, &chart, UPDATE_EVENT).unwrap();
//! assert!(outcome.unwrap().is_drawn());
//! ```

pub mod core;
pub mod plugins;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use crate::core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        ChartLayout, ChartOptions, ChartRenderer, ChartSpec, ChartType, ConfigResolver, Host,
        NodeId, RenderOutcome, Shape, ShapeKind, SparklineError, SvgDocument,
    };
    pub use crate::plugins::{
        BarLayout, LineLayout, MountReport, Orchestrator, PieLayout, StackedLayout, UPDATE_EVENT,
    };
}

/// Render one chart from its attributes to SVG markup
///
/// Attribute names are the element's `data-*` names (`data-points`,
/// `data-type`, ...). Returns an empty string when there are no points.
///
/// # Example
/// ```rust
/// use sparklines::render_svg;
///
/// let svg = render_svg([("data-type", "stacked"), ("data-points", "1,1")]).unwrap();
/// assert!(svg.contains("width=\"47.5\""));
///
/// assert_eq!(render_svg([("data-type", "line")]).unwrap(), "");
/// ```
pub fn render_svg<K, V>(attributes: impl IntoIterator<Item = (K, V)>) -> anyhow::Result<String>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    use crate::plugins::Orchestrator;

    let mut doc = SvgDocument::new();
    let element = doc.add_sparkline(attributes);
    Orchestrator::new().render(&mut doc, &element)?;
    Ok(doc.inner_markup(element))
}

/// Resolve attributes into normalized options without drawing
///
/// # Example
/// ```rust
/// use sparklines::resolve_options;
///
/// let options = resolve_options([("data-width", "abc"), ("data-colors", "red,blue")]);
/// assert_eq!(options.width, 100.0);
/// assert_eq!(options.colors, vec!["red", "blue"]);
/// ```
pub fn resolve_options<K, V>(attributes: impl IntoIterator<Item = (K, V)>) -> ChartOptions
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let pairs: Vec<(String, String)> = attributes
        .into_iter()
        .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
        .collect();
    ChartOptions::from_lookup(|name| {
        pairs
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    })
}
