mod arc;
mod pie;
mod types;

pub use arc::ArcGenerator;
pub(crate) use arc::fmt_coord;
pub use pie::{PieArc, PieGenerator};
pub use types::{ArcDatum, PieLayout, RadiusConfig};

use crate::config::ChartConfig;
use crate::ir::ChartData;
use crate::theme::Theme;

/// Derives the three ring radii from the chart height.
pub fn compute_radii(height: f64, config: &ChartConfig) -> RadiusConfig {
    let radius = height / 2.0;
    RadiusConfig {
        inner_radius: radius - config.inner_radius_offset,
        outer_radius: radius - config.outer_radius_offset,
        on_hover_radius: radius - config.hover_radius_offset,
    }
}

impl RadiusConfig {
    pub fn arc(&self) -> ArcGenerator {
        ArcGenerator::new()
            .inner_radius(self.inner_radius)
            .outer_radius(self.outer_radius)
    }

    pub fn hover_arc(&self) -> ArcGenerator {
        ArcGenerator::new()
            .inner_radius(self.inner_radius)
            .outer_radius(self.on_hover_radius)
    }
}

impl ChartConfig {
    pub fn pie(&self) -> PieGenerator {
        PieGenerator::new()
            .start_angle(self.start_angle)
            .end_angle(self.end_angle)
            .pad_angle(self.pad_angle)
    }
}

#[tracing::instrument(skip(data, theme, config), fields(segments = data.len()))]
pub fn compute_layout(
    data: &ChartData,
    theme: &Theme,
    config: &ChartConfig,
    width: f64,
    height: f64,
) -> PieLayout {
    if !(width > 0.0) || !(height > 0.0) {
        tracing::warn!(width, height, "non-positive chart dimensions, chart will be degenerate");
    }
    let radii = compute_radii(height, config);
    let pie = config.pie();
    let (start_angle, end_angle) = pie.angle_range();

    let mut scale = theme.color_scale::<usize>();
    let arcs = pie
        .arcs(&data.values())
        .into_iter()
        .zip(&data.series)
        .map(|(arc, series)| {
            let palette_color = scale.resolve(arc.index);
            ArcDatum {
                index: arc.index,
                value: arc.value,
                start_angle: arc.start_angle,
                end_angle: arc.end_angle,
                pad_angle: arc.pad_angle,
                color: series.color.clone().unwrap_or(palette_color),
            }
        })
        .collect();

    PieLayout {
        width,
        height,
        center: (width / 2.0, height / 2.0),
        radii,
        start_angle,
        end_angle,
        arcs,
    }
}
