//! Host capability trait
//!
//! The render pipeline never touches a concrete document. Everything it needs
//! from the environment (reading attributes, creating the surface and shapes,
//! nesting labels, attaching, clearing, discovering charts) goes through this
//! trait. [`SvgDocument`](super::SvgDocument) implements it in memory; the
//! wasm build implements it over the browser DOM.

use anyhow::Result;

use super::ShapeKind;

/// Attribute that flags an element as a sparkline container
pub const SPARKLINE_FLAG: &str = "data-sparkline";

/// SVG namespace used when creating surfaces and shapes
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Core trait for rendering hosts
///
/// # Example
/// ```
/// use sparklines::core::{Host, ShapeKind, SvgDocument};
///
/// let mut doc = SvgDocument::new();
/// let surface = doc.create_surface().unwrap();
/// let rect = doc.create_shape(ShapeKind::Rect).unwrap();
/// doc.set_attribute(&rect, "fill", "red").unwrap();
/// doc.set_label(&rect, "3").unwrap();
/// doc.attach(&surface, &rect).unwrap();
/// assert!(doc.to_markup(surface).contains("<title>3</title>"));
/// ```
pub trait Host {
    /// Handle to an element owned by the host
    type Node: Clone + PartialEq;

    /// Read an attribute of `element`
    fn attribute(&self, element: &Self::Node, name: &str) -> Option<String>;

    /// Create a detached, empty drawing surface
    fn create_surface(&mut self) -> Result<Self::Node>;

    /// Create a detached shape element of the given kind
    fn create_shape(&mut self, kind: ShapeKind) -> Result<Self::Node>;

    /// Set an attribute on `node`, replacing any previous value
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str) -> Result<()>;

    /// Nest a tooltip-like label with `text` inside `shape`
    fn set_label(&mut self, shape: &Self::Node, text: &str) -> Result<()>;

    /// Append `child` as the last child of `parent`
    fn attach(&mut self, parent: &Self::Node, child: &Self::Node) -> Result<()>;

    /// Remove all content of `element`
    fn clear(&mut self, element: &Self::Node) -> Result<()>;

    /// Hand back a detached node that will never be attached
    ///
    /// Hosts whose documents are garbage collected can leave this as a no-op.
    fn release(&mut self, _node: &Self::Node) -> Result<()> {
        Ok(())
    }

    /// Every element flagged with `data-sparkline="true"`, in document order
    fn discover(&self) -> Result<Vec<Self::Node>>;
}
