use pie_chart_renderer::config::{MAX_KEYFRAMES, MIN_KEYFRAMES};
use pie_chart_renderer::{
    ChartConfig, ChartProps, PieChart, PointerOutcome, Theme, parse_chart_data,
    render_animated_svg, render_frame_svg,
};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PieChartOptions {
    theme: Option<String>,
    width: Option<f64>,
    height: Option<f64>,
    entry_duration_ms: Option<f64>,
    hover_leave_duration_ms: Option<f64>,
    keyframes: Option<usize>,
}

fn parse_options(options_json: Option<String>) -> Result<PieChartOptions, String> {
    match options_json {
        Some(raw) => serde_json::from_str(&raw).map_err(|error| error.to_string()),
        None => Ok(PieChartOptions::default()),
    }
}

fn build_chart(data: &str, options: PieChartOptions) -> Result<PieChart, String> {
    let data = parse_chart_data(data).map_err(|error| error.to_string())?;
    let theme = options
        .theme
        .as_deref()
        .and_then(Theme::from_name)
        .unwrap_or_default();
    let mut config = ChartConfig::default();
    if let Some(width) = options.width {
        config.width = width;
    }
    if let Some(height) = options.height {
        config.height = height;
    }
    if let Some(duration) = options.entry_duration_ms {
        config.entry.duration_ms = duration;
    }
    if let Some(duration) = options.hover_leave_duration_ms {
        config.hover_leave.duration_ms = duration;
    }
    if let Some(keyframes) = options.keyframes {
        config.keyframes = keyframes.clamp(MIN_KEYFRAMES, MAX_KEYFRAMES);
    }
    let props = ChartProps::from_config(data, &config);
    Ok(PieChart::new(props, config, theme))
}

fn animated_svg(data: &str, options_json: Option<String>) -> Result<String, String> {
    let mut chart = build_chart(data, parse_options(options_json)?)?;
    let layout = chart.init(0.0).clone();
    Ok(render_animated_svg(&layout, chart.theme(), chart.config()))
}

/// Renders a self-animating pie chart SVG for direct insertion into the DOM.
#[wasm_bindgen]
pub fn render_pie_chart_svg(data: &str, options_json: Option<String>) -> Result<String, JsValue> {
    animated_svg(data, options_json).map_err(|error| JsValue::from_str(&error))
}

/// Stateful chart for hosts that drive frames from their own clock
/// (e.g. `requestAnimationFrame` timestamps).
#[wasm_bindgen]
pub struct PieChartHandle {
    chart: PieChart,
}

#[wasm_bindgen]
impl PieChartHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(data: &str, options_json: Option<String>) -> Result<PieChartHandle, JsValue> {
        parse_options(options_json)
            .and_then(|options| build_chart(data, options))
            .map(|chart| PieChartHandle { chart })
            .map_err(|error| JsValue::from_str(&error))
    }

    pub fn mount(&mut self, now_ms: f64) -> usize {
        self.chart.init(now_ms).arcs.len()
    }

    pub fn pointer_enter(&mut self, index: usize, now_ms: f64) -> Result<bool, JsValue> {
        self.chart
            .pointer_enter(index, now_ms)
            .map(|outcome| matches!(outcome, PointerOutcome::Transitioned(_)))
            .map_err(|error| JsValue::from_str(&error.to_string()))
    }

    pub fn pointer_leave(&mut self, index: usize, now_ms: f64) -> Result<bool, JsValue> {
        self.chart
            .pointer_leave(index, now_ms)
            .map(|outcome| matches!(outcome, PointerOutcome::Transitioned(_)))
            .map_err(|error| JsValue::from_str(&error.to_string()))
    }

    pub fn frame_svg(&self, now_ms: f64) -> Result<String, JsValue> {
        self.chart
            .frame(now_ms)
            .map(|frame| render_frame_svg(&frame, self.chart.theme()))
            .map_err(|error| JsValue::from_str(&error.to_string()))
    }
}
