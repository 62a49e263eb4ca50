use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadiusConfig {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub on_hover_radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArcDatum {
    pub index: usize,
    pub value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub pad_angle: f64,
    pub color: String,
}

impl ArcDatum {
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PieLayout {
    pub width: f64,
    pub height: f64,
    pub center: (f64, f64),
    pub radii: RadiusConfig,
    pub start_angle: f64,
    pub end_angle: f64,
    pub arcs: Vec<ArcDatum>,
}
