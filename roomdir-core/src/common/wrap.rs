use std::f64::consts::{PI, TAU};

#[inline]
fn wrap(angle: f64, half_turn: f64, turn: f64) -> f64 {
    // NaN fails both comparisons, so it must be screened before the range check.
    if angle.is_nan() || (angle > -half_turn && angle <= half_turn) {
        return angle;
    }
    let wrapped = angle.rem_euclid(turn);
    if wrapped > half_turn {
        wrapped - turn
    } else {
        wrapped
    }
}

/// Wraps an angle in degree into `(-180, 180]`.
///
/// `-180` is returned as `180`. Values already in range are returned unchanged,
/// and NaN is passed through. Infinite values have no wrapped counterpart and
/// yield NaN.
#[must_use]
pub fn wrap_degrees(angle: f64) -> f64 {
    wrap(angle, 180.0, 360.0)
}

/// Wraps an angle in radian into `(-π, π]`.
///
/// See [`wrap_degrees`].
#[must_use]
pub fn wrap_radians(angle: f64) -> f64 {
    wrap(angle, PI, TAU)
}

/// Wraps every angle in degree of `angles` into `(-180, 180]`, leaving NaN entries untouched.
pub fn wrap_degrees_in_place(angles: &mut [f64]) {
    angles
        .iter_mut()
        .filter(|a| !a.is_nan())
        .for_each(|a| *a = wrap_degrees(*a));
}
