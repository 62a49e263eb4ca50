mod ease;

use serde::{Deserialize, Serialize};

pub use ease::Ease;

pub fn interpolate(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationConfig {
    pub duration_ms: f64,
    pub ease: Ease,
}

impl AnimationConfig {
    pub const fn new(duration_ms: f64, ease: Ease) -> Self {
        Self { duration_ms, ease }
    }

    pub fn entry() -> Self {
        Self::new(2000.0, Ease::CubicInOut)
    }

    pub fn hover_enter() -> Self {
        Self::new(250.0, Ease::CubicInOut)
    }

    pub fn hover_leave() -> Self {
        Self::new(500.0, Ease::BounceOut)
    }

    /// Eased progress at `elapsed_ms` after the animation started.
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 || elapsed_ms >= self.duration_ms {
            return 1.0;
        }
        self.ease.apply(elapsed_ms / self.duration_ms)
    }
}

/// A scalar tween scheduled against the host clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: f64,
    pub to: f64,
    pub start_ms: f64,
    pub timing: AnimationConfig,
}

impl Transition {
    pub fn new(from: f64, to: f64, start_ms: f64, timing: AnimationConfig) -> Self {
        Self {
            from,
            to,
            start_ms,
            timing,
        }
    }

    pub fn end_ms(&self) -> f64 {
        self.start_ms + self.timing.duration_ms.max(0.0)
    }

    pub fn progress(&self, now_ms: f64) -> f64 {
        self.timing.progress(now_ms - self.start_ms)
    }

    pub fn value_at(&self, now_ms: f64) -> f64 {
        if now_ms < self.start_ms {
            return self.from;
        }
        if self.is_finished(now_ms) {
            return self.to;
        }
        interpolate(self.from, self.to, self.progress(now_ms))
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        now_ms >= self.end_ms()
    }
}
