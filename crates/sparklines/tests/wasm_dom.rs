//! Browser tests for the DOM host and wasm exports
//!
//! Run with `wasm-pack test --headless --firefox crates/sparklines`.

#![cfg(target_arch = "wasm32")]

use sparklines::wasm::{mount_sparklines, render_sparkline_svg};
use wasm_bindgen_test::*;
use web_sys::{Element, Event};

wasm_bindgen_test_configure!(run_in_browser);

fn chart_element(attrs: &[(&str, &str)]) -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element("div").unwrap();
    element.set_attribute("data-sparkline", "true").unwrap();
    for (name, value) in attrs {
        element.set_attribute(name, value).unwrap();
    }
    document
        .document_element()
        .unwrap()
        .append_child(&element)
        .unwrap();
    element
}

#[wasm_bindgen_test]
fn test_mount_draws_into_the_document() {
    let element = chart_element(&[("data-type", "pie"), ("data-points", "1,1,2")]);

    let count = mount_sparklines().unwrap();

    assert!(count >= 1);
    let svg = element.first_element_child().unwrap();
    assert_eq!(svg.namespace_uri().as_deref(), Some("http://www.w3.org/2000/svg"));
    assert_eq!(svg.get_attribute("width").as_deref(), Some("100"));
    assert_eq!(element.query_selector_all("path").unwrap().length(), 3);
    element.remove();
}

#[wasm_bindgen_test]
fn test_update_event_redraws() {
    let element = chart_element(&[("data-points", "1,2,3")]);
    mount_sparklines().unwrap();
    assert_eq!(element.query_selector_all("rect").unwrap().length(), 3);

    element.set_attribute("data-points", "4,5").unwrap();
    element
        .dispatch_event(&Event::new("update").unwrap())
        .unwrap();

    assert_eq!(element.query_selector_all("svg").unwrap().length(), 1);
    assert_eq!(element.query_selector_all("rect").unwrap().length(), 2);
    element.remove();
}

#[wasm_bindgen_test]
fn test_render_sparkline_svg_from_json() {
    let svg = render_sparkline_svg(r#"{"type": "line", "points": [2, 4], "colors": "red"}"#).unwrap();
    assert!(svg.contains("points=\"0,15 100,0\""));
    assert!(render_sparkline_svg("[1, 2]").is_err());
}
