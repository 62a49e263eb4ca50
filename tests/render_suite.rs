use std::f64::consts::TAU;
use std::path::Path;

use pie_chart_renderer::{
    ChartConfig, ChartData, ChartProps, PieChart, PointerOutcome, Theme, parse_chart_data,
    render_animated_svg, render_frame_svg,
};

fn assert_valid_svg(svg: &str, fixture: &str) {
    assert!(svg.contains("<svg"), "{fixture}: missing <svg tag");
    assert!(svg.contains("</svg>"), "{fixture}: missing </svg tag");
}

fn load_fixture(rel: &str) -> ChartData {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(rel);
    let input = std::fs::read_to_string(&path).expect("fixture read failed");
    parse_chart_data(&input).expect("parse failed")
}

fn mount(data: ChartData) -> PieChart {
    let mut chart = PieChart::new(
        ChartProps::new(data),
        ChartConfig::default(),
        Theme::set3(),
    );
    chart.init(0.0);
    chart
}

#[test]
fn render_all_fixtures() {
    // Keep this list explicit so new fixtures must be added intentionally.
    let candidates = [
        ("sample.json", 6),
        ("series.json5", 3),
        ("plain.txt", 6),
        ("empty.txt", 0),
        ("single.json", 1),
        ("degenerate.txt", 3),
    ];

    for (rel, segments) in candidates {
        let chart = mount(load_fixture(rel));
        let layout = chart.layout().expect("chart mounted");
        assert_eq!(layout.arcs.len(), segments, "{rel}: segment count");

        let animated = render_animated_svg(layout, chart.theme(), chart.config());
        assert_valid_svg(&animated, rel);

        for at in [0.0, 1000.0, 2000.0, 5000.0] {
            let frame = chart.frame(at).expect("frame");
            let svg = render_frame_svg(&frame, chart.theme());
            assert_valid_svg(&svg, rel);
            assert_eq!(svg.matches("<path class=\"arc\"").count(), segments, "{rel}");
        }
    }
}

#[test]
fn sample_spans_are_proportional() {
    let chart = mount(load_fixture("sample.json"));
    let layout = chart.layout().expect("chart mounted");
    let total: f64 = layout.arcs.iter().map(|arc| arc.value).sum();
    let mut sum = 0.0;
    for arc in &layout.arcs {
        assert!((arc.span() - arc.value / total * TAU).abs() < 1e-9);
        sum += arc.span();
    }
    assert!((sum - TAU).abs() < 1e-9);
}

#[test]
fn explicit_colors_reach_the_svg() {
    let chart = mount(load_fixture("series.json5"));
    let svg = render_frame_svg(&chart.frame(2000.0).expect("frame"), chart.theme());
    assert!(svg.contains("fill=\"#1f77b4\""));
    assert!(svg.contains("fill=\"#ff7f0e\""));
    assert!(svg.contains(&format!("fill=\"{}\"", Theme::set3().pie_colors[2])));
}

#[test]
fn single_value_fills_the_ring() {
    let chart = mount(load_fixture("single.json"));
    let frame = chart.frame(2000.0).expect("frame");
    let path = &frame.segments[0].path;
    assert_eq!(path.matches('M').count(), 2, "{path}");
}

#[test]
fn hover_cycle_through_public_api() {
    let mut chart = mount(ChartData::sample());
    assert_eq!(
        chart.pointer_enter(0, 100.0).expect("in range"),
        PointerOutcome::PointerEventsDisabled
    );
    assert!(matches!(
        chart.pointer_enter(0, 2100.0).expect("in range"),
        PointerOutcome::Transitioned(_)
    ));
    let hovered = chart.frame(2400.0).expect("frame");
    assert_eq!(hovered.segments[0].outer_radius, 100.0);

    chart.pointer_leave(0, 2400.0).expect("in range");
    let mid = chart.frame(2500.0).expect("frame").segments[0].outer_radius;
    assert!((90.0..=100.0).contains(&mid));
    let settled = chart.frame(2900.0).expect("frame");
    assert_eq!(settled.segments[0].outer_radius, 90.0);
}
