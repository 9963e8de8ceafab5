use crate::foundation::core::TextureDims;
use crate::foundation::error::{VatError, VatResult};
use crate::foundation::math::next_power_of_two;

/// Number of discrete time steps needed to cover `clip_duration` seconds at `sampling_rate`.
///
/// Saturates instead of overflowing for absurd inputs; the planner then rejects the width.
pub fn sample_count(clip_duration: f64, sampling_rate: f64) -> i64 {
    // `as` saturates and maps NaN to 0.
    (clip_duration * sampling_rate).ceil() as i64
}

/// Compute the texture size for a bake.
///
/// - `height` is the vertex count, rounded up to a power of two when requested.
/// - `width` is `ceil(clip_duration * sampling_rate)`, rounded the same way.
///
/// The height limit is checked first since it does not depend on the sampling rate. Inputs are
/// assumed positive; the bake pipeline validates them before calling in.
pub fn plan_dimensions(
    vertex_count: usize,
    clip_duration: f64,
    sampling_rate: f64,
    round_to_power_of_two: bool,
    max_size: u32,
) -> VatResult<TextureDims> {
    let vertices = i64::try_from(vertex_count).unwrap_or(i64::MAX);
    let height = round_dim(vertices, round_to_power_of_two);
    if height > u64::from(max_size) {
        return Err(VatError::VertexCountExceeded {
            vertex_count,
            height,
            max_size,
        });
    }

    let width = round_dim(sample_count(clip_duration, sampling_rate), round_to_power_of_two);
    if width > u64::from(max_size) {
        return Err(VatError::TextureTooLarge {
            width,
            sampling_rate,
            max_size,
        });
    }

    Ok(TextureDims {
        width: width as u32,
        height: height as u32,
    })
}

fn round_dim(n: i64, round_to_power_of_two: bool) -> u64 {
    if round_to_power_of_two {
        next_power_of_two(n)
    } else {
        n.max(0) as u64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plan/dimensions.rs"]
mod tests;
