use crate::anim::{AnimationConfig, Transition};
use crate::layout::RadiusConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverState {
    #[default]
    Idle,
    Hovered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Enter,
    Leave,
}

/// Hover state of one segment and the outer-radius tween it drives.
#[derive(Debug, Clone)]
pub struct SegmentInteraction {
    state: HoverState,
    resting_radius: f64,
    hover_radius: f64,
    enter: AnimationConfig,
    leave: AnimationConfig,
    transition: Option<Transition>,
}

impl SegmentInteraction {
    pub fn new(radii: &RadiusConfig, enter: AnimationConfig, leave: AnimationConfig) -> Self {
        Self {
            state: HoverState::Idle,
            resting_radius: radii.outer_radius,
            hover_radius: radii.on_hover_radius,
            enter,
            leave,
            transition: None,
        }
    }

    pub fn state(&self) -> HoverState {
        self.state
    }

    pub fn is_hovered(&self) -> bool {
        self.state == HoverState::Hovered
    }

    pub fn outer_radius_at(&self, now_ms: f64) -> f64 {
        match &self.transition {
            Some(transition) => transition.value_at(now_ms),
            None => self.resting_radius,
        }
    }

    /// Applies a pointer event. Returns `false` when the event does not
    /// change state. A new transition starts from the radius shown at
    /// `now_ms`, superseding any tween still in flight.
    pub fn handle(&mut self, event: PointerEvent, now_ms: f64) -> bool {
        let (next, target, timing) = match (self.state, event) {
            (HoverState::Idle, PointerEvent::Enter) => {
                (HoverState::Hovered, self.hover_radius, self.enter)
            }
            (HoverState::Hovered, PointerEvent::Leave) => {
                (HoverState::Idle, self.resting_radius, self.leave)
            }
            _ => return false,
        };
        let from = self.outer_radius_at(now_ms);
        self.transition = Some(Transition::new(from, target, now_ms, timing));
        self.state = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChartConfig;
    use crate::layout::compute_radii;

    fn segment() -> SegmentInteraction {
        let config = ChartConfig::default();
        SegmentInteraction::new(
            &compute_radii(200.0, &config),
            config.hover_enter,
            config.hover_leave,
        )
    }

    #[test]
    fn enter_then_leave_round_trips_the_radius() {
        let mut seg = segment();
        assert_eq!(seg.outer_radius_at(0.0), 90.0);
        assert!(seg.handle(PointerEvent::Enter, 3000.0));
        assert!(seg.is_hovered());
        assert_eq!(seg.outer_radius_at(3000.0), 90.0);
        assert_eq!(seg.outer_radius_at(3250.0), 100.0);
        assert!(seg.handle(PointerEvent::Leave, 4000.0));
        assert_eq!(seg.state(), HoverState::Idle);
        assert_eq!(seg.outer_radius_at(4000.0), 100.0);
        assert_eq!(seg.outer_radius_at(4500.0), 90.0);
    }

    #[test]
    fn repeated_events_are_ignored() {
        let mut seg = segment();
        assert!(!seg.handle(PointerEvent::Leave, 0.0));
        assert!(seg.handle(PointerEvent::Enter, 0.0));
        assert!(!seg.handle(PointerEvent::Enter, 100.0));
    }

    #[test]
    fn leave_mid_expansion_starts_from_shown_radius() {
        let mut seg = segment();
        seg.handle(PointerEvent::Enter, 0.0);
        let shown = seg.outer_radius_at(125.0);
        assert!(shown > 90.0 && shown < 100.0);
        seg.handle(PointerEvent::Leave, 125.0);
        assert_eq!(seg.outer_radius_at(125.0), shown);
        assert_eq!(seg.outer_radius_at(625.0), 90.0);
    }
}
