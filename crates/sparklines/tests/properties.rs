//! Property tests for attribute resolution and layout

use proptest::prelude::*;
use sparklines::{layout_shapes, render_svg, resolve_options, ChartType, Shape};

proptest! {
    #[test]
    fn prop_integer_attributes_round_trip(width in -10_000i64..10_000, gap in 0i64..50) {
        let width_text = width.to_string();
        let gap_text = gap.to_string();
        let options = resolve_options([("data-width", width_text.as_str()), ("data-gap", gap_text.as_str())]);
        prop_assert_eq!(options.width, width as f64);
        prop_assert_eq!(options.gap, gap as f64);
    }

    #[test]
    fn prop_non_numeric_attributes_default(text in "[a-z]{1,8}") {
        let options = resolve_options([("data-height", text.as_str()), ("data-stroke-width", text.as_str())]);
        prop_assert_eq!(options.height, 30.0);
        prop_assert_eq!(options.stroke_width, 2.0);
    }

    #[test]
    fn prop_one_shape_per_point(points in prop::collection::vec(1i64..1000, 1..20)) {
        let series = points.iter().map(i64::to_string).collect::<Vec<_>>().join(",");
        let options = resolve_options([("data-points", series.as_str())]);

        prop_assert_eq!(layout_shapes(ChartType::Bar, &options).len(), points.len());
        prop_assert_eq!(layout_shapes(ChartType::Pie, &options).len(), points.len());
        prop_assert_eq!(layout_shapes(ChartType::Stacked, &options).len(), points.len());
        prop_assert_eq!(layout_shapes(ChartType::Line, &options).len(), 1);
    }

    #[test]
    fn prop_tallest_bar_fills_height(points in prop::collection::vec(1i64..1000, 1..20), height in 1i64..200) {
        let series = points.iter().map(i64::to_string).collect::<Vec<_>>().join(",");
        let height_text = height.to_string();
        let options = resolve_options([("data-points", series.as_str()), ("data-height", height_text.as_str())]);

        let tallest = layout_shapes(ChartType::Bar, &options)
            .iter()
            .filter_map(|shape| match shape {
                Shape::Rect(rect) => Some(rect.height),
                _ => None,
            })
            .fold(f64::NEG_INFINITY, f64::max);
        prop_assert!((tallest - height as f64).abs() < 1e-9);
    }

    #[test]
    fn prop_pie_sweeps_cover_circle(points in prop::collection::vec(1i64..1000, 1..20)) {
        let series = points.iter().map(i64::to_string).collect::<Vec<_>>().join(",");
        let options = resolve_options([("data-points", series.as_str())]);

        let total: f64 = layout_shapes(ChartType::Pie, &options)
            .iter()
            .filter_map(|shape| match shape {
                Shape::Wedge(wedge) => Some(wedge.sweep),
                _ => None,
            })
            .sum();
        prop_assert!((total - std::f64::consts::TAU).abs() < 1e-9);
    }

    #[test]
    fn prop_render_never_fails_on_arbitrary_points(points in ".{0,40}", chart_type in "(bar|line|pie|stacked|other)") {
        let result = render_svg([("data-type", chart_type.as_str()), ("data-points", points.as_str())]);
        prop_assert!(result.is_ok());
    }
}
