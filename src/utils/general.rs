/// Restricts `value` to `[-max_magnitude, max_magnitude]` while keeping its
/// sign. NaN is treated as zero.
#[inline]
pub(crate) fn clamp_magnitude(value: f32, max_magnitude: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }

    let max_magnitude = max_magnitude.abs();
    if value > 0.0 {
        value.min(max_magnitude)
    } else {
        value.max(-max_magnitude)
    }
}

/// Linearly interpolates from `from` to `to`. `t` is clamped to `[0, 1]`.
#[inline]
pub(crate) fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t.clamp(0.0, 1.0)
}

/// Rounds a float position to a terminal column or row, saturating at the
/// bounds of `i32`.
#[inline]
pub(crate) fn round_to_cell(value: f32) -> i32 {
    if value.is_nan() {
        0
    } else {
        // `as` saturates for out of range floats.
        value.round() as i32
    }
}
