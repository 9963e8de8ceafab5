/// Round `n` up to the nearest power of two.
///
/// `0` and negative inputs map to `0`, so an empty dimension stays empty.
pub fn next_power_of_two(n: i64) -> u64 {
    if n <= 0 {
        return 0;
    }
    (n as u64).next_power_of_two()
}

/// Map `v` from `[min, max]` to `[0, 1]`, clamping values outside the range.
///
/// Returns `None` when the range is empty (`min == max`) so callers pick their own fallback.
pub fn inverse_lerp(min: f32, max: f32, v: f32) -> Option<f32> {
    let span = max - min;
    if span == 0.0 {
        return None;
    }
    Some(((v - min) / span).clamp(0.0, 1.0))
}

/// Quantize a normalized value to an 8-bit channel, rounding to nearest.
pub fn unorm_to_u8(v: f32) -> u8 {
    if v.is_nan() {
        return 0;
    }
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Inverse of [`unorm_to_u8`].
pub fn u8_to_unorm(v: u8) -> f32 {
    f32::from(v) / 255.0
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
