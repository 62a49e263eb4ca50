use crate::anim::{AnimationConfig, Ease};
use crate::theme::Theme;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::path::Path;

/// Bounds on SMIL keyframes sampled per animation.
pub const MIN_KEYFRAMES: usize = 2;
pub const MAX_KEYFRAMES: usize = 600;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub inner_radius_offset: f64,
    pub outer_radius_offset: f64,
    pub hover_radius_offset: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub pad_angle: f64,
    pub keyframes: usize,
    pub entry: AnimationConfig,
    pub hover_enter: AnimationConfig,
    pub hover_leave: AnimationConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 200.0,
            inner_radius_offset: 35.0,
            outer_radius_offset: 10.0,
            hover_radius_offset: 0.0,
            start_angle: 0.0,
            end_angle: TAU,
            pad_angle: 0.0,
            keyframes: 60,
            entry: AnimationConfig::entry(),
            hover_enter: AnimationConfig::hover_enter(),
            hover_leave: AnimationConfig::hover_leave(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub width: f32,
    pub height: f32,
    pub background: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 200.0,
            background: "#FFFFFF".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub theme: Theme,
    pub chart: ChartConfig,
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::set3(),
            chart: ChartConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    background: Option<String>,
    stroke_color: Option<String>,
    stroke_width: Option<f64>,
    cursor: Option<String>,
    pie1: Option<String>,
    pie2: Option<String>,
    pie3: Option<String>,
    pie4: Option<String>,
    pie5: Option<String>,
    pie6: Option<String>,
    pie7: Option<String>,
    pie8: Option<String>,
    pie9: Option<String>,
    pie10: Option<String>,
    pie11: Option<String>,
    pie12: Option<String>,
}

impl ThemeVariables {
    fn palette_overrides(self) -> [Option<String>; 12] {
        [
            self.pie1, self.pie2, self.pie3, self.pie4, self.pie5, self.pie6, self.pie7,
            self.pie8, self.pie9, self.pie10, self.pie11, self.pie12,
        ]
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct AnimationConfigFile {
    duration_ms: Option<f64>,
    ease: Option<Ease>,
}

impl AnimationConfigFile {
    fn apply(self, target: &mut AnimationConfig) {
        if let Some(v) = self.duration_ms {
            target.duration_ms = v;
        }
        if let Some(v) = self.ease {
            target.ease = v;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ChartConfigFile {
    width: Option<f64>,
    height: Option<f64>,
    inner_radius_offset: Option<f64>,
    outer_radius_offset: Option<f64>,
    hover_radius_offset: Option<f64>,
    start_angle: Option<f64>,
    end_angle: Option<f64>,
    pad_angle: Option<f64>,
    keyframes: Option<usize>,
    entry: Option<AnimationConfigFile>,
    hover_enter: Option<AnimationConfigFile>,
    hover_leave: Option<AnimationConfigFile>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RenderConfigFile {
    width: Option<f32>,
    height: Option<f32>,
    background: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    chart: Option<ChartConfigFile>,
    render: Option<RenderConfigFile>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("invalid config {}", path.display()))
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let parsed: ConfigFile = serde_json::from_str(contents)?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        match Theme::from_name(theme_name) {
            Some(theme) => config.theme = theme,
            None => tracing::warn!(theme = theme_name, "unknown theme, keeping default"),
        }
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.background.clone() {
            config.theme.background = v;
        }
        if let Some(v) = vars.stroke_color.clone() {
            config.theme.stroke_color = v;
        }
        if let Some(v) = vars.stroke_width {
            config.theme.stroke_width = v;
        }
        if let Some(v) = vars.cursor.clone() {
            config.theme.hover_cursor = v;
        }
        for (slot, color) in vars.palette_overrides().into_iter().enumerate() {
            if let Some(color) = color {
                config.theme.pie_colors[slot] = color;
            }
        }
    }

    if let Some(chart) = parsed.chart {
        let target = &mut config.chart;
        if let Some(v) = chart.width {
            target.width = v;
        }
        if let Some(v) = chart.height {
            target.height = v;
        }
        if let Some(v) = chart.inner_radius_offset {
            target.inner_radius_offset = v;
        }
        if let Some(v) = chart.outer_radius_offset {
            target.outer_radius_offset = v;
        }
        if let Some(v) = chart.hover_radius_offset {
            target.hover_radius_offset = v;
        }
        if let Some(v) = chart.start_angle {
            target.start_angle = v;
        }
        if let Some(v) = chart.end_angle {
            target.end_angle = v;
        }
        if let Some(v) = chart.pad_angle {
            target.pad_angle = v;
        }
        if let Some(v) = chart.keyframes {
            target.keyframes = v.clamp(MIN_KEYFRAMES, MAX_KEYFRAMES);
        }
        if let Some(v) = chart.entry {
            v.apply(&mut target.entry);
        }
        if let Some(v) = chart.hover_enter {
            v.apply(&mut target.hover_enter);
        }
        if let Some(v) = chart.hover_leave {
            v.apply(&mut target.hover_leave);
        }
    }

    if let Some(render) = parsed.render {
        if let Some(v) = render.width {
            config.render.width = v;
        }
        if let Some(v) = render.height {
            config.render.height = v;
        }
        if let Some(v) = render.background {
            config.render.background = v;
        }
    }

    Ok(config)
}
