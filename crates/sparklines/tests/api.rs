//! Integration tests for the public API

use std::f64::consts::PI;

use sparklines::prelude::*;
use sparklines::{layout_shapes, render_svg, resolve_options, WedgeShape};

fn rect_heights(shapes: &[Shape]) -> Vec<f64> {
    shapes
        .iter()
        .map(|shape| match shape {
            Shape::Rect(rect) => rect.height,
            other => panic!("expected a rect, got {:?}", other),
        })
        .collect()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_render_bar_chart() {
    let svg = render_svg([("data-type", "bar"), ("data-points", "1,2,3")]).unwrap();
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"100\" height=\"30\">"));
    assert_eq!(svg.matches("<rect").count(), 3);
    assert!(svg.contains("<title>3</title>"));
}

#[test]
fn test_bar_heights_scale_to_tallest() {
    let options = resolve_options([("data-points", "1,2,3"), ("data-height", "30")]);
    let shapes = layout_shapes(ChartType::Bar, &options);
    let heights = rect_heights(&shapes);

    assert!(approx(heights[2], 30.0));
    assert!(approx(heights[0], 10.0));
    assert!(approx(heights[1], 20.0));

    for shape in &shapes {
        if let Shape::Rect(rect) = shape {
            assert!(approx(rect.y, 30.0 - rect.height));
        }
    }
}

#[test]
fn test_pie_angles_and_labels() {
    let options = resolve_options([("data-type", "pie"), ("data-points", "1,1,2")]);
    let shapes = layout_shapes(ChartType::Pie, &options);

    let wedges: Vec<&WedgeShape> = shapes
        .iter()
        .map(|shape| match shape {
            Shape::Wedge(wedge) => wedge,
            other => panic!("expected a wedge, got {:?}", other),
        })
        .collect();

    assert!(approx(wedges[0].sweep, PI / 2.0));
    assert!(approx(wedges[1].sweep, PI / 2.0));
    assert!(approx(wedges[2].sweep, PI));

    let labels: Vec<&str> = shapes.iter().filter_map(Shape::label).collect();
    assert_eq!(labels, vec!["25.00%", "25.00%", "50.00%"]);
}

#[test]
fn test_stacked_segments() {
    let svg = render_svg([
        ("data-type", "stacked"),
        ("data-points", "1,1"),
        ("data-width", "100"),
        ("data-gap", "5"),
    ])
    .unwrap();
    assert!(svg.contains("<rect x=\"0\" y=\"0\" width=\"47.5\" height=\"30\""));
    assert!(svg.contains("<rect x=\"52.5\" y=\"0\" width=\"47.5\" height=\"30\""));
}

#[test]
fn test_line_uses_first_color_only() {
    let svg = render_svg([
        ("data-type", "line"),
        ("data-points", "0,5,10"),
        ("data-colors", "teal,orange"),
        ("data-stroke-width", "3"),
    ])
    .unwrap();
    assert!(svg.contains("points=\"0,30 50,15 100,0\""));
    assert!(svg.contains("stroke=\"teal\""));
    assert!(svg.contains("stroke-width=\"3\""));
    assert!(!svg.contains("orange"));
}

#[test]
fn test_colors_cycle_across_shapes() {
    let svg = render_svg([("data-points", "1,1,1"), ("data-colors", "red,blue")]).unwrap();
    let fills: Vec<&str> = svg
        .split("fill=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .collect();
    assert_eq!(fills, vec!["red", "blue", "red"]);
}

#[test]
fn test_unknown_type_renders_no_shapes() {
    let svg = render_svg([("data-type", "unknown"), ("data-points", "1,2,3")]).unwrap();
    assert_eq!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"100\" height=\"30\"/>"
    );
}

#[test]
fn test_resolve_options_integer_attributes() {
    let options = resolve_options([
        ("data-width", "240"),
        ("data-height", "abc"),
        ("data-gap", "3px"),
    ]);
    assert_eq!(options.width, 240.0);
    assert_eq!(options.height, 30.0);
    assert_eq!(options.gap, 3.0);
    assert_eq!(options.stroke_width, 2.0);
}

#[test]
fn test_mount_and_update_through_prelude() {
    let mut doc = SvgDocument::new();
    let first = doc.add_sparkline([("data-points", "1,2,3")]);
    let second = doc.add_sparkline([("data-type", "line"), ("data-points", "4,2")]);

    let mut orchestrator = Orchestrator::new();
    let reports = orchestrator.mount(&mut doc).unwrap();
    assert_eq!(reports.len(), 2);
    assert!(reports.iter().all(|report| report.outcome.is_ok()));

    doc.set_attribute(&first, "data-type", "stacked").unwrap();
    let outcome = orchestrator
        .dispatch(&mut doc, &first, UPDATE_EVENT)
        .unwrap()
        .unwrap();
    assert_eq!(
        outcome,
        RenderOutcome::Drawn {
            chart_type: ChartType::Stacked,
            shapes: 3
        }
    );

    // The other chart is untouched by the update
    assert!(doc.inner_markup(second).contains("<polyline"));
    assert_eq!(doc.inner_markup(first).matches("<svg").count(), 1);
}

#[test]
fn test_render_is_idempotent() {
    let attrs = [("data-type", "pie"), ("data-points", "5,3,2")];
    assert_eq!(render_svg(attrs).unwrap(), render_svg(attrs).unwrap());
}
