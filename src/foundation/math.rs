use std::f64::consts::{PI, TAU};

/// Fold any phase onto `[0, 1)`; the period boundary maps to `0`.
pub(crate) fn wrap_unit(u: f64) -> f64 {
    if !u.is_finite() {
        return 0.0;
    }
    let r = u.rem_euclid(1.0);
    if r >= 1.0 { 0.0 } else { r }
}

/// `0 -> 1 -> 0` over one period.
pub(crate) fn ping_pong(u: f64) -> f64 {
    0.5 * (1.0 - (TAU * u).cos())
}

pub(crate) fn cosine_ease(t: f64) -> f64 {
    0.5 * (1.0 - (PI * t).cos())
}

/// Linear interpolation between two channel values, truncating toward zero.
pub(crate) fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
    let a = f64::from(a);
    let b = f64::from(b);
    (a + (b - a) * t) as u8
}

pub(crate) fn mul_div255(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
