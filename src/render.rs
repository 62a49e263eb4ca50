use crate::anim::{AnimationConfig, interpolate};
use crate::chart::{ChartFrame, clip_to_sweep};
use crate::config::{ChartConfig, MAX_KEYFRAMES, MIN_KEYFRAMES, RenderConfig};
use crate::layout::{ArcDatum, PieLayout, fmt_coord};
use crate::theme::Theme;
use anyhow::Result;
use std::path::Path;

/// Stand-in path for segments that are not drawn yet; SMIL value lists
/// cannot carry an empty path.
const HIDDEN_PATH: &str = "M0,0";

/// Renders one frame of the chart as a static SVG document.
#[tracing::instrument(skip_all, fields(segments = frame.segments.len()))]
pub fn render_frame_svg(frame: &ChartFrame, theme: &Theme) -> String {
    let mut svg = open_svg(frame.width, frame.height, theme);
    for seg in &frame.segments {
        let cursor = seg
            .cursor
            .as_deref()
            .map(|cursor| format!(" style=\"cursor: {}\"", escape_xml(cursor)))
            .unwrap_or_default();
        let pointer_events = if seg.pointer_events { "auto" } else { "none" };
        svg.push_str(&format!(
            "<path class=\"arc\" d=\"{}\" fill=\"{}\"{} pointer-events=\"{pointer_events}\"{cursor}/>",
            seg.path,
            escape_xml(&seg.fill),
            stroke_attrs(theme),
        ));
    }
    close_svg(&mut svg);
    svg
}

/// Renders a self-animating SVG: SMIL keyframes replay the entry reveal,
/// and mouseover/mouseout restart the hover expand and bounce collapse.
#[tracing::instrument(skip_all, fields(segments = layout.arcs.len()))]
pub fn render_animated_svg(layout: &PieLayout, theme: &Theme, config: &ChartConfig) -> String {
    let mut svg = open_svg(layout.width, layout.height, theme);
    svg.push_str(&format!(
        "<style>path.arc:hover{{cursor:{}}}</style>",
        escape_xml(&theme.hover_cursor)
    ));
    let entry_ms = config.entry.duration_ms.max(0.0);
    let keyframes = config.keyframes.clamp(MIN_KEYFRAMES, MAX_KEYFRAMES);
    let clockwise = layout.end_angle >= layout.start_angle;
    let stroke = stroke_attrs(theme);

    for arc in &layout.arcs {
        let resting = layout.radii.arc().pad_angle(arc.pad_angle);
        let final_path = resting.path(arc.start_angle, arc.end_angle);
        svg.push_str(&format!(
            "<path class=\"arc\" d=\"{final_path}\" fill=\"{}\"{stroke} pointer-events=\"none\">",
            escape_xml(&arc.color),
        ));

        if entry_ms > 0.0 {
            let (key_times, values) = sample_keyframes(keyframes, |t| {
                let progress = config.entry.ease.apply(t);
                let sweep = interpolate(layout.start_angle, layout.end_angle, progress);
                clip_to_sweep(arc, sweep, clockwise)
                    .map(|end| resting.path(arc.start_angle, end))
                    .unwrap_or_else(|| HIDDEN_PATH.to_string())
            });
            svg.push_str(&format!(
                "<animate attributeName=\"d\" begin=\"0ms\" dur=\"{}ms\" fill=\"freeze\" calcMode=\"discrete\" keyTimes=\"{key_times}\" values=\"{values}\"/>",
                fmt_coord(entry_ms)
            ));
        }
        svg.push_str(&format!(
            "<set attributeName=\"pointer-events\" to=\"auto\" begin=\"{}ms\" fill=\"freeze\"/>",
            fmt_coord(entry_ms)
        ));

        let (from, to) = (layout.radii.outer_radius, layout.radii.on_hover_radius);
        svg.push_str(&radius_animation(
            layout,
            arc,
            "mouseover",
            (from, to),
            &config.hover_enter,
            keyframes,
        ));
        svg.push_str(&radius_animation(
            layout,
            arc,
            "mouseout",
            (to, from),
            &config.hover_leave,
            keyframes,
        ));
        svg.push_str("</path>");
    }

    close_svg(&mut svg);
    svg
}

fn radius_animation(
    layout: &PieLayout,
    arc: &ArcDatum,
    begin: &str,
    (from, to): (f64, f64),
    timing: &AnimationConfig,
    keyframes: usize,
) -> String {
    let (key_times, values) = sample_keyframes(keyframes, |t| {
        layout
            .radii
            .arc()
            .outer_radius(interpolate(from, to, timing.ease.apply(t)))
            .pad_angle(arc.pad_angle)
            .path(arc.start_angle, arc.end_angle)
    });
    format!(
        "<animate attributeName=\"d\" begin=\"{begin}\" dur=\"{}ms\" fill=\"freeze\" calcMode=\"discrete\" keyTimes=\"{key_times}\" values=\"{values}\"/>",
        fmt_coord(timing.duration_ms.max(1.0))
    )
}

fn sample_keyframes(count: usize, mut frame_at: impl FnMut(f64) -> String) -> (String, String) {
    let count = count.clamp(MIN_KEYFRAMES, MAX_KEYFRAMES);
    let last = (count - 1) as f64;
    let mut key_times = Vec::with_capacity(count);
    let mut values = Vec::with_capacity(count);
    for step in 0..count {
        let t = step as f64 / last;
        key_times.push(fmt_coord(t));
        values.push(frame_at(t));
    }
    (key_times.join(";"), values.join(";"))
}

fn open_svg(width: f64, height: f64, theme: &Theme) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}px\" height=\"{}px\" viewBox=\"0 0 {} {}\">",
        fmt_coord(width),
        fmt_coord(height),
        fmt_coord(width),
        fmt_coord(height),
    ));
    if theme.background != "none" {
        svg.push_str(&format!(
            "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
            escape_xml(&theme.background)
        ));
    }
    svg.push_str(&format!(
        "<g transform=\"translate({}, {})\">",
        fmt_coord(width / 2.0),
        fmt_coord(height / 2.0)
    ));
    svg
}

fn close_svg(svg: &mut String) {
    svg.push_str("</g></svg>");
}

fn stroke_attrs(theme: &Theme) -> String {
    if theme.stroke_color == "none" || theme.stroke_width <= 0.0 {
        return String::new();
    }
    format!(
        " stroke=\"{}\" stroke-width=\"{}\"",
        escape_xml(&theme.stroke_color),
        fmt_coord(theme.stroke_width)
    )
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, render_cfg: &RenderConfig) -> Result<()> {
    let mut opt = usvg::Options::default();
    if let Some(size) = usvg::Size::from_wh(render_cfg.width, render_cfg.height) {
        opt.default_size = size;
    }

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap.save_png(output)?;
    tracing::debug!(path = %output.display(), "wrote png");
    Ok(())
}

#[cfg(not(feature = "png"))]
pub fn write_output_png(_svg: &str, _output: &Path, _render_cfg: &RenderConfig) -> Result<()> {
    Err(anyhow::anyhow!("PNG output requires the `png` feature"))
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{ChartProps, PieChart};
    use crate::ir::ChartData;

    fn sample_chart() -> PieChart {
        let mut chart = PieChart::new(
            ChartProps::new(ChartData::sample()),
            ChartConfig::default(),
            Theme::set3(),
        );
        chart.init(0.0);
        chart
    }

    #[test]
    fn frame_svg_basic() {
        let chart = sample_chart();
        let svg = render_frame_svg(&chart.frame(2500.0).unwrap(), chart.theme());
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("width=\"200px\" height=\"200px\""));
        assert!(svg.contains("translate(100, 100)"));
        assert_eq!(svg.matches("<path class=\"arc\"").count(), 6);
        assert!(svg.contains("fill=\"#8dd3c7\""));
        assert!(svg.contains("pointer-events=\"auto\""));
        assert!(!svg.contains("<rect"));
        assert!(svg.ends_with("</g></svg>"));
    }

    #[test]
    fn hovered_segment_carries_cursor() {
        let mut chart = sample_chart();
        chart.pointer_enter(3, 2500.0).unwrap();
        let svg = render_frame_svg(&chart.frame(3000.0).unwrap(), chart.theme());
        assert_eq!(svg.matches("style=\"cursor: pointer\"").count(), 1);
        assert!(svg.contains("A100,100"));
    }

    #[test]
    fn animated_svg_has_entry_and_hover_animations() {
        let chart = sample_chart();
        let layout = chart.layout().unwrap();
        let svg = render_animated_svg(layout, chart.theme(), chart.config());
        assert_eq!(svg.matches("begin=\"0ms\" dur=\"2000ms\"").count(), 6);
        assert_eq!(svg.matches("begin=\"mouseover\" dur=\"250ms\"").count(), 6);
        assert_eq!(svg.matches("begin=\"mouseout\" dur=\"500ms\"").count(), 6);
        assert_eq!(svg.matches("to=\"auto\" begin=\"2000ms\"").count(), 6);
        assert!(svg.contains(HIDDEN_PATH));
        assert!(svg.contains("cursor:pointer"));
    }

    #[test]
    fn keyframe_sampling_spans_zero_to_one() {
        let (times, values) = sample_keyframes(3, |t| fmt_coord(t * 10.0));
        assert_eq!(times, "0;0.5;1");
        assert_eq!(values, "0;5;10");
    }

    #[test]
    fn keyframe_count_is_bounded() {
        let (times, _) = sample_keyframes(usize::MAX, fmt_coord);
        assert_eq!(times.split(';').count(), MAX_KEYFRAMES);
        let (times, _) = sample_keyframes(0, fmt_coord);
        assert_eq!(times, "0;1");
    }

    #[test]
    fn counter_clockwise_entry_ends_on_final_paths() {
        let config = ChartConfig {
            end_angle: -std::f64::consts::TAU,
            ..ChartConfig::default()
        };
        let mut chart = PieChart::new(
            ChartProps::new(ChartData::sample()),
            config,
            Theme::set3(),
        );
        let layout = chart.init(0.0).clone();
        let svg = render_animated_svg(&layout, chart.theme(), chart.config());
        let settled: Vec<&str> = svg
            .split("begin=\"0ms\"")
            .skip(1)
            .filter_map(|chunk| chunk.split("\"/>").next()?.rsplit(';').next())
            .collect();
        assert_eq!(settled.len(), layout.arcs.len());
        for (arc, last) in layout.arcs.iter().zip(settled) {
            assert_ne!(last, HIDDEN_PATH, "arc {} hidden after entry", arc.index);
            assert_eq!(last, layout.radii.arc().path(arc.start_angle, arc.end_angle));
        }
        let frame = chart.frame(2000.0).unwrap();
        assert!(frame.segments.iter().all(|seg| seg.end_angle.is_some()));
    }

    #[test]
    fn theme_background_and_stroke() {
        let chart = sample_chart();
        let theme = Theme::paired();
        let svg = render_frame_svg(&chart.frame(2500.0).unwrap(), &theme);
        assert!(svg.contains("<rect width=\"100%\" height=\"100%\" fill=\"#FFFFFF\"/>"));
        assert!(svg.contains("stroke=\"#FFFFFF\" stroke-width=\"1\""));
    }

    #[test]
    fn escapes_attribute_text() {
        assert_eq!(escape_xml("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }
}
