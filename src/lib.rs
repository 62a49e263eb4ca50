#[cfg(feature = "cli")]
pub mod cli;
pub mod anim;
pub mod chart;
pub mod config;
pub mod error;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod parser;
pub mod render;
pub mod theme;

pub use anim::{AnimationConfig, Ease, Transition};
pub use chart::{ChartFrame, ChartProps, HoverState, PieChart, PointerOutcome, SegmentFrame};
pub use config::{ChartConfig, Config, RenderConfig, load_config};
pub use error::ChartError;
pub use ir::{ChartData, PieSeries, SAMPLE_VALUES};
pub use layout::{ArcDatum, ArcGenerator, PieLayout, RadiusConfig, compute_layout, compute_radii};
pub use parser::parse_chart_data;
pub use render::{render_animated_svg, render_frame_svg};
pub use theme::Theme;

#[cfg(feature = "cli")]
pub use cli::run;
