//! Element orchestrator for the render pipeline
//!
//! The orchestrator runs ConfigResolver → ChartRenderer for a chart element,
//! discovers every flagged element through the host at mount time, and keeps
//! the set of wired elements so an `update` dispatch re-renders exactly the
//! element it targets.

use anyhow::Result;
use tracing::{debug, error, info, span, trace, Level};

use crate::core::{ChartRenderer, ConfigResolver, Host, RenderOutcome};

/// Event name that triggers a full re-render of one element
pub const UPDATE_EVENT: &str = "update";

/// Per-element result of [`Orchestrator::mount`]
#[derive(Debug)]
pub struct MountReport<N> {
    pub element: N,
    pub outcome: Result<RenderOutcome>,
}

/// Orchestrator that owns the resolve → render pipeline and update wiring
#[derive(Debug, Clone)]
pub struct Orchestrator<N> {
    resolver: ConfigResolver,
    renderer: ChartRenderer,
    listeners: Vec<N>,
}

impl<N: Clone + PartialEq> Orchestrator<N> {
    /// Create an orchestrator with no wired elements
    pub fn new() -> Self {
        Self {
            resolver: ConfigResolver::new(),
            renderer: ChartRenderer::new(),
            listeners: Vec::new(),
        }
    }

    /// Run the full pipeline for one element
    ///
    /// Attributes are read at call time, so a re-render always reflects the
    /// element's current state.
    pub fn render<H: Host<Node = N>>(&self, host: &mut H, element: &N) -> Result<RenderOutcome> {
        let render_span = span!(Level::INFO, "render_sparkline");
        let _enter = render_span.enter();

        let spec = self.resolver.resolve(host, element)?;
        let outcome = self.renderer.render(host, element, &spec)?;
        debug!(?outcome, "Sparkline rendered");
        Ok(outcome)
    }

    /// Discover, wire, and render every flagged element
    ///
    /// A host failure on one element is logged and reported in that element's
    /// [`MountReport`]; the remaining elements still render. Elements already
    /// wired are re-rendered but not wired twice.
    pub fn mount<H: Host<Node = N>>(&mut self, host: &mut H) -> Result<Vec<MountReport<N>>> {
        let mount_span = span!(Level::INFO, "mount_sparklines");
        let _enter = mount_span.enter();

        let elements = host.discover()?;
        info!(count = elements.len(), "Discovered sparkline elements");

        let mut reports = Vec::with_capacity(elements.len());
        for element in elements {
            if !self.is_wired(&element) {
                self.listeners.push(element.clone());
            }

            let outcome = self.render(host, &element);
            if let Err(e) = &outcome {
                error!(error = %e, "Failed to render sparkline");
            }
            reports.push(MountReport { element, outcome });
        }

        Ok(reports)
    }

    /// Deliver an event to an element
    ///
    /// Only `update` on a wired element does anything: it re-runs the
    /// pipeline and returns the new outcome. Anything else returns `None`.
    pub fn dispatch<H: Host<Node = N>>(
        &self,
        host: &mut H,
        element: &N,
        event: &str,
    ) -> Result<Option<RenderOutcome>> {
        if event != UPDATE_EVENT {
            trace!(event, "Ignoring event");
            return Ok(None);
        }
        if !self.is_wired(element) {
            debug!("Update for an element that was never mounted");
            return Ok(None);
        }

        self.render(host, element).map(Some)
    }

    /// Whether `element` has an update listener
    pub fn is_wired(&self, element: &N) -> bool {
        self.listeners.contains(element)
    }

    /// Number of wired elements
    pub fn wired_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<N: Clone + PartialEq> Default for Orchestrator<N> {
    fn default() -> Self {
        Self::new()
    }
}
