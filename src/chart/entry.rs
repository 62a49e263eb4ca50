use crate::anim::{AnimationConfig, interpolate};
use crate::layout::ArcDatum;

/// Reveal sweeping from the layout's start angle to its end angle. A
/// decreasing range sweeps counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntryReveal {
    pub start_angle: f64,
    pub end_angle: f64,
    pub started_at: f64,
    pub timing: AnimationConfig,
}

impl EntryReveal {
    pub fn new(start_angle: f64, end_angle: f64, started_at: f64, timing: AnimationConfig) -> Self {
        Self {
            start_angle,
            end_angle,
            started_at,
            timing,
        }
    }

    pub fn finishes_at(&self) -> f64 {
        self.started_at + self.timing.duration_ms.max(0.0)
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        now_ms >= self.finishes_at()
    }

    pub fn is_clockwise(&self) -> bool {
        self.end_angle >= self.start_angle
    }

    pub fn sweep_angle(&self, now_ms: f64) -> f64 {
        let t = self.timing.progress(now_ms - self.started_at);
        interpolate(self.start_angle, self.end_angle, t)
    }

    /// End angle to draw for `arc` at `now_ms`, or `None` while the sweep
    /// has not reached it yet.
    pub fn visible_end_angle(&self, arc: &ArcDatum, now_ms: f64) -> Option<f64> {
        clip_to_sweep(arc, self.sweep_angle(now_ms), self.is_clockwise())
    }
}

/// Clamps `sweep` into `arc`. `None` until the sweep reaches the arc's
/// start angle in the sweep direction.
pub fn clip_to_sweep(arc: &ArcDatum, sweep: f64, clockwise: bool) -> Option<f64> {
    if clockwise {
        (sweep >= arc.start_angle).then(|| sweep.min(arc.end_angle))
    } else {
        (sweep <= arc.start_angle).then(|| sweep.max(arc.end_angle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::Ease;
    use crate::config::ChartConfig;
    use crate::ir::ChartData;
    use crate::layout::compute_layout;
    use crate::theme::Theme;
    use std::f64::consts::TAU;

    fn sample_arcs() -> Vec<ArcDatum> {
        compute_layout(
            &ChartData::sample(),
            &Theme::set3(),
            &ChartConfig::default(),
            200.0,
            200.0,
        )
        .arcs
    }

    #[test]
    fn sweep_covers_the_range() {
        let reveal = EntryReveal::new(0.0, TAU, 100.0, AnimationConfig::entry());
        assert_eq!(reveal.sweep_angle(0.0), 0.0);
        assert_eq!(reveal.sweep_angle(100.0), 0.0);
        assert!((reveal.sweep_angle(1100.0) - TAU / 2.0).abs() < 1e-9);
        assert_eq!(reveal.sweep_angle(2100.0), TAU);
        assert!(reveal.is_finished(2100.0));
        assert!(!reveal.is_finished(2099.0));
    }

    #[test]
    fn later_arcs_stay_hidden_until_reached() {
        let arcs = sample_arcs();
        let reveal = EntryReveal::new(0.0, TAU, 0.0, AnimationConfig::new(2000.0, Ease::Linear));
        assert_eq!(reveal.visible_end_angle(&arcs[0], 0.0), Some(0.0));
        assert_eq!(reveal.visible_end_angle(&arcs[5], 0.0), None);
        assert_eq!(reveal.visible_end_angle(&arcs[5], 2000.0), Some(arcs[5].end_angle));
    }

    #[test]
    fn never_passes_the_final_angle_and_never_shrinks() {
        let arcs = sample_arcs();
        for ease in [Ease::Linear, Ease::CubicInOut] {
            let reveal = EntryReveal::new(0.0, TAU, 0.0, AnimationConfig::new(2000.0, ease));
            let mut previous = vec![None; arcs.len()];
            for step in 0..=400 {
                let now = step as f64 * 5.5;
                for (arc, prev) in arcs.iter().zip(previous.iter_mut()) {
                    let current = reveal.visible_end_angle(arc, now);
                    if let Some(angle) = current {
                        assert!(angle <= arc.end_angle);
                        assert!(angle >= arc.start_angle);
                        if let Some(before) = *prev {
                            assert!(angle >= before);
                        }
                    } else {
                        assert!(prev.is_none(), "arc {} disappeared", arc.index);
                    }
                    *prev = current;
                }
            }
        }
    }

    #[test]
    fn reversed_range_sweeps_counter_clockwise() {
        let config = ChartConfig {
            end_angle: -TAU,
            ..ChartConfig::default()
        };
        let arcs =
            compute_layout(&ChartData::sample(), &Theme::set3(), &config, 200.0, 200.0).arcs;
        assert!(arcs.iter().all(|arc| arc.end_angle <= arc.start_angle));

        let reveal = EntryReveal::new(0.0, -TAU, 0.0, AnimationConfig::new(2000.0, Ease::Linear));
        assert!(!reveal.is_clockwise());
        assert_eq!(reveal.visible_end_angle(&arcs[0], 0.0), Some(0.0));
        assert!(arcs[1..].iter().all(|arc| reveal.visible_end_angle(arc, 0.0).is_none()));

        let mut previous = vec![None; arcs.len()];
        for step in 0..=200 {
            let now = step as f64 * 10.0;
            for (arc, prev) in arcs.iter().zip(previous.iter_mut()) {
                let current = reveal.visible_end_angle(arc, now);
                if let Some(angle) = current {
                    assert!(angle >= arc.end_angle);
                    assert!(angle <= arc.start_angle);
                    if let Some(before) = *prev {
                        assert!(angle <= before);
                    }
                } else {
                    assert!(prev.is_none(), "arc {} disappeared", arc.index);
                }
                *prev = current;
            }
        }
        for arc in &arcs {
            let end = reveal.visible_end_angle(arc, 2000.0).unwrap();
            assert!((end - arc.end_angle).abs() < 1e-9);
        }
    }

    #[test]
    fn bouncy_entry_is_still_clamped() {
        let arcs = sample_arcs();
        let reveal = EntryReveal::new(0.0, TAU, 0.0, AnimationConfig::new(2000.0, Ease::BounceOut));
        for step in 0..=100 {
            for arc in &arcs {
                if let Some(angle) = reveal.visible_end_angle(arc, step as f64 * 20.0) {
                    assert!(angle <= arc.end_angle);
                }
            }
        }
    }
}
