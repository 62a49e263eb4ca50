use std::f64::consts::TAU;

/// Angular extent of one value, before color assignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieArc {
    pub index: usize,
    pub value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub pad_angle: f64,
}

/// Proportional angle layout. Values keep input order; angles run
/// clockwise from 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieGenerator {
    start_angle: f64,
    end_angle: f64,
    pad_angle: f64,
}

impl Default for PieGenerator {
    fn default() -> Self {
        Self {
            start_angle: 0.0,
            end_angle: TAU,
            pad_angle: 0.0,
        }
    }
}

impl PieGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_angle(mut self, angle: f64) -> Self {
        self.start_angle = angle;
        self
    }

    pub fn end_angle(mut self, angle: f64) -> Self {
        self.end_angle = angle;
        self
    }

    pub fn pad_angle(mut self, angle: f64) -> Self {
        self.pad_angle = angle;
        self
    }

    pub fn angle_range(&self) -> (f64, f64) {
        (self.start_angle, self.end_angle)
    }

    pub fn arcs(&self, values: &[f64]) -> Vec<PieArc> {
        let n = values.len();
        if n == 0 {
            return Vec::new();
        }
        let da = (self.end_angle - self.start_angle).clamp(-TAU, TAU);
        let pad = (da.abs() / n as f64).min(self.pad_angle.max(0.0));
        let signed_pad = if da < 0.0 { -pad } else { pad };
        let sum: f64 = values.iter().copied().filter(|v| *v > 0.0).sum();
        let k = if sum > 0.0 {
            (da - n as f64 * signed_pad) / sum
        } else {
            0.0
        };

        let mut arcs = Vec::with_capacity(n);
        let mut a0 = self.start_angle;
        for (index, &value) in values.iter().enumerate() {
            let span = if value > 0.0 { value * k } else { 0.0 };
            let a1 = a0 + span + signed_pad;
            arcs.push(PieArc {
                index,
                value,
                start_angle: a0,
                end_angle: a1,
                pad_angle: pad,
            });
            a0 = a1;
        }
        arcs
    }
}
