//! Tolerance-parameterized comparison of scalars and angles.

use std::f32::consts::{PI, TAU};

use approx::abs_diff_eq;

/// Returns `true` if `a` and `b` differ by at most `epsilon`.
#[inline]
pub fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
    abs_diff_eq!(a, b, epsilon = epsilon)
}

/// Maps an angle in radians onto the half-open range `(-PI, PI]`.
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;

    // rem_euclid lands on -PI for odd multiples of PI
    if wrapped <= -PI { wrapped + TAU } else { wrapped }
}

/// Compares two angles modulo a full turn.
///
/// `angle_eq(-PI, PI, eps)` and `angle_eq(0.0, TAU, eps)` both hold: the
/// difference is wrapped into `(-PI, PI]` before it is compared against
/// `epsilon`.
pub fn angle_eq(a: f32, b: f32, epsilon: f32) -> bool {
    wrap_angle(a - b).abs() <= epsilon
}
