//! WebAssembly bindings for Sparklines
//!
//! Provides a [`Host`] backed by the live browser document, plus the exports a
//! page script calls: `mount_sparklines` to draw every flagged element and
//! listen for `update` events, and `render_sparkline_svg` for markup-only use.

use std::cell::RefCell;

use anyhow::Result;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use crate::core::{
    attributes_from_json, ChartType, Host, ShapeKind, SparklineError, SPARKLINE_FLAG,
    SVG_NAMESPACE,
};
use crate::plugins::{Orchestrator, UPDATE_EVENT};

thread_local! {
    static ORCHESTRATOR: RefCell<Orchestrator<Element>> = RefCell::new(Orchestrator::new());
}

fn js_error(value: JsValue) -> anyhow::Error {
    SparklineError::host_error(format!("{:?}", value)).into()
}

fn to_js(error: anyhow::Error) -> JsValue {
    js_sys::Error::new(&format!("{}", error)).into()
}

/// Host over the page's `document`
///
/// Surfaces and shapes are created in the SVG namespace. Shape labels become
/// `<title>` children so browsers show them as tooltips.
pub struct DomHost {
    document: Document,
}

impl DomHost {
    /// Bind to the current window's document
    pub fn new() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| SparklineError::host_error("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| SparklineError::host_error("window has no document"))?;
        Ok(Self { document })
    }

    fn create_svg_element(&self, tag: &str) -> Result<Element> {
        self.document
            .create_element_ns(Some(SVG_NAMESPACE), tag)
            .map_err(js_error)
    }
}

impl Host for DomHost {
    type Node = Element;

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn create_surface(&mut self) -> Result<Element> {
        self.create_svg_element("svg")
    }

    fn create_shape(&mut self, kind: ShapeKind) -> Result<Element> {
        self.create_svg_element(kind.tag())
    }

    fn set_attribute(&mut self, node: &Element, name: &str, value: &str) -> Result<()> {
        node.set_attribute(name, value).map_err(js_error)
    }

    fn set_label(&mut self, shape: &Element, text: &str) -> Result<()> {
        let title = self.create_svg_element("title")?;
        title.set_text_content(Some(text));
        shape.append_child(&title).map_err(js_error)?;
        Ok(())
    }

    fn attach(&mut self, parent: &Element, child: &Element) -> Result<()> {
        parent.append_child(child).map_err(js_error)?;
        Ok(())
    }

    fn clear(&mut self, element: &Element) -> Result<()> {
        element.set_inner_html("");
        Ok(())
    }

    fn discover(&self) -> Result<Vec<Element>> {
        let selector = format!("[{}=\"true\"]", SPARKLINE_FLAG);
        let nodes = self
            .document
            .query_selector_all(&selector)
            .map_err(js_error)?;

        Ok((0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }
}

/// Initialize WASM module
///
/// Sets up panic hooks and logging for better error messages in the browser.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    use crate::core::logging::init_logging;
    let _ = init_logging(Some("info"), None);
}

/// Draw every `data-sparkline="true"` element and listen for `update`
///
/// Dispatching `new Event("update")` on a chart element re-reads its
/// attributes and redraws it. Calling this again picks up newly added
/// elements without adding a second listener to existing ones.
///
/// # Returns
/// * The number of elements discovered
/// * Throws a JavaScript error if the document is unavailable
#[wasm_bindgen]
pub fn mount_sparklines() -> Result<u32, JsValue> {
    let mut host = DomHost::new().map_err(to_js)?;

    let discovered = host.discover().map_err(to_js)?;
    let unwired: Vec<Element> = ORCHESTRATOR.with(|orchestrator| {
        let orchestrator = orchestrator.borrow();
        discovered
            .into_iter()
            .filter(|element| !orchestrator.is_wired(element))
            .collect()
    });

    let reports = ORCHESTRATOR
        .with(|orchestrator| orchestrator.borrow_mut().mount(&mut host))
        .map_err(to_js)?;

    for element in &unwired {
        listen_for_updates(element)?;
    }

    Ok(reports.len() as u32)
}

fn listen_for_updates(element: &Element) -> Result<(), JsValue> {
    let target = element.clone();
    let closure = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |event: Event| {
        let outcome = DomHost::new().and_then(|mut host| {
            ORCHESTRATOR.with(|orchestrator| {
                orchestrator
                    .borrow()
                    .dispatch(&mut host, &target, &event.type_())
            })
        });
        if let Err(e) = outcome {
            tracing::error!(error = %e, "Failed to update sparkline");
        }
    }));

    element.add_event_listener_with_callback(UPDATE_EVENT, closure.as_ref().unchecked_ref())?;
    // The listener lives as long as the element
    closure.forget();
    Ok(())
}

/// Render one chart to SVG markup from a JSON object of attributes
///
/// # Arguments
/// * `attributes_json` - e.g. `{"type": "pie", "points": [1, 2, 3]}`; keys may
///   be full attribute names, bare option names, or camelCase
///
/// # Returns
/// * The `<svg>` markup, or an empty string when there are no points
/// * Throws a JavaScript error if the JSON is not an object of attributes
#[wasm_bindgen]
pub fn render_sparkline_svg(attributes_json: &str) -> Result<String, JsValue> {
    let value: serde_json::Value = serde_json::from_str(attributes_json)
        .map_err(|e| JsValue::from(js_sys::Error::new(&format!("Invalid JSON: {}", e))))?;
    let attributes = attributes_from_json(&value).map_err(to_js)?;
    crate::render_svg(attributes).map_err(to_js)
}

/// List supported chart types as a JSON array
#[wasm_bindgen]
pub fn sparkline_types() -> String {
    let types: Vec<serde_json::Value> = ChartType::ALL
        .iter()
        .map(|chart_type| {
            serde_json::json!({
                "name": chart_type.as_str(),
                "description": chart_type.description(),
            })
        })
        .collect();
    serde_json::Value::Array(types).to_string()
}
