//! The chart component: owns the drawing state of one mounted pie chart.
//!
//! The host drives it with its own clock. `init` is the one-shot lifecycle
//! hook that derives the radii and lays out the segments; pointer events
//! and `frame` then take the current time in milliseconds. No timers or
//! threads live here.

mod entry;
mod interaction;

pub use entry::{EntryReveal, clip_to_sweep};
pub use interaction::{HoverState, PointerEvent, SegmentInteraction};

use crate::config::ChartConfig;
use crate::error::{ChartError, ChartResult};
use crate::ir::ChartData;
use crate::layout::{PieLayout, RadiusConfig, compute_layout};
use crate::theme::Theme;

/// The component inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartProps {
    pub data: ChartData,
    pub width: f64,
    pub height: f64,
}

impl Default for ChartProps {
    fn default() -> Self {
        Self {
            data: ChartData::new(),
            width: 200.0,
            height: 200.0,
        }
    }
}

impl ChartProps {
    pub fn new(data: ChartData) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    pub fn from_config(data: ChartData, config: &ChartConfig) -> Self {
        Self {
            data,
            width: config.width,
            height: config.height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    Transitioned(HoverState),
    Unchanged,
    /// The entry reveal is still running; pointer events are off.
    PointerEventsDisabled,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SegmentFrame {
    pub index: usize,
    pub value: f64,
    pub fill: String,
    /// Empty while the entry sweep has not reached the segment.
    pub path: String,
    pub start_angle: f64,
    pub end_angle: Option<f64>,
    pub outer_radius: f64,
    pub hovered: bool,
    pub cursor: Option<String>,
    pub pointer_events: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub center: (f64, f64),
    pub segments: Vec<SegmentFrame>,
}

#[derive(Debug, Clone)]
struct Mounted {
    layout: PieLayout,
    entry: EntryReveal,
    segments: Vec<SegmentInteraction>,
}

#[derive(Debug, Clone)]
pub struct PieChart {
    props: ChartProps,
    config: ChartConfig,
    theme: Theme,
    mounted: Option<Mounted>,
}

impl PieChart {
    pub fn new(props: ChartProps, config: ChartConfig, theme: Theme) -> Self {
        Self {
            props,
            config,
            theme,
            mounted: None,
        }
    }

    pub fn props(&self) -> &ChartProps {
        &self.props
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.mounted.is_some()
    }

    /// Lifecycle hook: computes the radii once, lays out the data and starts
    /// the entry reveal at `now_ms`. Later calls are ignored.
    pub fn init(&mut self, now_ms: f64) -> &PieLayout {
        let config = &self.config;
        let mounted = self.mounted.get_or_insert_with(|| {
            let layout = compute_layout(
                &self.props.data,
                &self.theme,
                config,
                self.props.width,
                self.props.height,
            );
            let entry = EntryReveal::new(
                layout.start_angle,
                layout.end_angle,
                now_ms,
                config.entry,
            );
            let segments = layout
                .arcs
                .iter()
                .map(|_| {
                    SegmentInteraction::new(&layout.radii, config.hover_enter, config.hover_leave)
                })
                .collect();
            tracing::debug!(segments = layout.arcs.len(), now_ms, "pie chart mounted");
            Mounted {
                layout,
                entry,
                segments,
            }
        });
        &mounted.layout
    }

    pub fn layout(&self) -> Option<&PieLayout> {
        self.mounted.as_ref().map(|mounted| &mounted.layout)
    }

    pub fn radii(&self) -> Option<RadiusConfig> {
        self.layout().map(|layout| layout.radii)
    }

    pub fn pointer_events_enabled(&self, now_ms: f64) -> bool {
        self.mounted
            .as_ref()
            .is_some_and(|mounted| mounted.entry.is_finished(now_ms))
    }

    pub fn pointer_enter(&mut self, index: usize, now_ms: f64) -> ChartResult<PointerOutcome> {
        self.pointer(index, PointerEvent::Enter, now_ms)
    }

    pub fn pointer_leave(&mut self, index: usize, now_ms: f64) -> ChartResult<PointerOutcome> {
        self.pointer(index, PointerEvent::Leave, now_ms)
    }

    fn pointer(
        &mut self,
        index: usize,
        event: PointerEvent,
        now_ms: f64,
    ) -> ChartResult<PointerOutcome> {
        let mounted = self.mounted.as_mut().ok_or(ChartError::NotInitialized)?;
        let len = mounted.segments.len();
        let segment = mounted
            .segments
            .get_mut(index)
            .ok_or(ChartError::SegmentOutOfRange { index, len })?;
        if !mounted.entry.is_finished(now_ms) {
            tracing::debug!(index, ?event, now_ms, "pointer event ignored during entry");
            return Ok(PointerOutcome::PointerEventsDisabled);
        }
        if segment.handle(event, now_ms) {
            Ok(PointerOutcome::Transitioned(segment.state()))
        } else {
            Ok(PointerOutcome::Unchanged)
        }
    }

    /// Snapshot of every segment as it should be drawn at `now_ms`.
    pub fn frame(&self, now_ms: f64) -> ChartResult<ChartFrame> {
        let mounted = self.mounted.as_ref().ok_or(ChartError::NotInitialized)?;
        let layout = &mounted.layout;
        let pointer_events = mounted.entry.is_finished(now_ms);
        let segments = layout
            .arcs
            .iter()
            .zip(&mounted.segments)
            .map(|(arc, interaction)| {
                let outer_radius = interaction.outer_radius_at(now_ms);
                let end_angle = mounted.entry.visible_end_angle(arc, now_ms);
                let path = end_angle
                    .map(|end| {
                        layout
                            .radii
                            .arc()
                            .outer_radius(outer_radius)
                            .pad_angle(arc.pad_angle)
                            .path(arc.start_angle, end)
                    })
                    .unwrap_or_default();
                let hovered = interaction.is_hovered();
                SegmentFrame {
                    index: arc.index,
                    value: arc.value,
                    fill: arc.color.clone(),
                    path,
                    start_angle: arc.start_angle,
                    end_angle,
                    outer_radius,
                    hovered,
                    cursor: hovered.then(|| self.theme.hover_cursor.clone()),
                    pointer_events,
                }
            })
            .collect();
        Ok(ChartFrame {
            width: layout.width,
            height: layout.height,
            center: layout.center,
            segments,
        })
    }
}
