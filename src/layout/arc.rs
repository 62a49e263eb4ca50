use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt::Write;

const EPSILON: f64 = 1e-12;

fn clamped_asin(x: f64) -> f64 {
    if x >= 1.0 {
        FRAC_PI_2
    } else if x <= -1.0 {
        -FRAC_PI_2
    } else {
        x.asin()
    }
}

/// Formats a path coordinate with at most three decimals.
pub(crate) fn fmt_coord(value: f64) -> String {
    let mut text = format!("{value:.3}");
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}

/// SVG path builder for annular sectors centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGenerator {
    inner_radius: f64,
    outer_radius: f64,
    pad_angle: f64,
}

impl Default for ArcGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ArcGenerator {
    pub fn new() -> Self {
        Self {
            inner_radius: 0.0,
            outer_radius: 0.0,
            pad_angle: 0.0,
        }
    }

    pub fn inner_radius(mut self, radius: f64) -> Self {
        self.inner_radius = radius;
        self
    }

    pub fn outer_radius(mut self, radius: f64) -> Self {
        self.outer_radius = radius;
        self
    }

    pub fn pad_angle(mut self, angle: f64) -> Self {
        self.pad_angle = angle;
        self
    }

    pub fn centroid(&self, start_angle: f64, end_angle: f64) -> (f64, f64) {
        let r = (self.inner_radius + self.outer_radius) / 2.0;
        let a = (start_angle + end_angle) / 2.0 - FRAC_PI_2;
        (a.cos() * r, a.sin() * r)
    }

    pub fn path(&self, start_angle: f64, end_angle: f64) -> String {
        let (mut r0, mut r1) = (self.inner_radius, self.outer_radius);
        if r1 < r0 {
            std::mem::swap(&mut r0, &mut r1);
        }
        let mut d = String::new();
        if !(r1 > EPSILON) {
            d.push_str("M0,0Z");
            return d;
        }

        let a0 = start_angle - FRAC_PI_2;
        let a1 = end_angle - FRAC_PI_2;
        let da = (a1 - a0).abs();
        let cw = a1 > a0;

        if da > TAU - EPSILON {
            full_ring(&mut d, r0, r1, a0, a1, cw);
            d.push('Z');
            return d;
        }

        let (mut a01, mut a11, mut a00, mut a10) = (a0, a1, a0, a1);
        let (mut da0, mut da1) = (da, da);
        let ap = self.pad_angle / 2.0;
        if ap > EPSILON {
            let rp = (r0 * r0 + r1 * r1).sqrt();
            let direction = if cw { 1.0 } else { -1.0 };
            let p0 = clamped_asin(rp / r0 * ap.sin());
            let p1 = clamped_asin(rp / r1 * ap.sin());
            da0 -= p0 * 2.0;
            if da0 > EPSILON {
                a00 += p0 * direction;
                a10 -= p0 * direction;
            } else {
                da0 = 0.0;
                a00 = (a0 + a1) / 2.0;
                a10 = a00;
            }
            da1 -= p1 * 2.0;
            if da1 > EPSILON {
                a01 += p1 * direction;
                a11 -= p1 * direction;
            } else {
                da1 = 0.0;
                a01 = (a0 + a1) / 2.0;
                a11 = a01;
            }
        }

        move_to(&mut d, r1 * a01.cos(), r1 * a01.sin());
        if da1 > EPSILON {
            arc_to(&mut d, r1, da1 >= PI, cw, r1 * a11.cos(), r1 * a11.sin());
        }

        line_to(&mut d, r0 * a10.cos(), r0 * a10.sin());
        if r0 > EPSILON && da0 > EPSILON {
            arc_to(&mut d, r0, da0 >= PI, !cw, r0 * a00.cos(), r0 * a00.sin());
        }
        d.push('Z');
        d
    }
}

fn full_ring(d: &mut String, r0: f64, r1: f64, a0: f64, a1: f64, cw: bool) {
    circle(d, r1, a0, cw);
    if r0 > EPSILON {
        circle(d, r0, a1, !cw);
    }
}

fn circle(d: &mut String, r: f64, a: f64, sweep: bool) {
    let (x, y) = (r * a.cos(), r * a.sin());
    move_to(d, x, y);
    arc_to(d, r, true, sweep, -x, -y);
    arc_to(d, r, true, sweep, x, y);
}

fn move_to(d: &mut String, x: f64, y: f64) {
    let _ = write!(d, "M{},{}", fmt_coord(x), fmt_coord(y));
}

fn line_to(d: &mut String, x: f64, y: f64) {
    let _ = write!(d, "L{},{}", fmt_coord(x), fmt_coord(y));
}

fn arc_to(d: &mut String, r: f64, large: bool, sweep: bool, x: f64, y: f64) {
    let r = fmt_coord(r);
    let _ = write!(
        d,
        "A{r},{r},0,{},{},{},{}",
        u8::from(large),
        u8::from(sweep),
        fmt_coord(x),
        fmt_coord(y)
    );
}
