use crate::bake::target::{AnimationClip, MeshBaker};
use crate::foundation::core::Vec3;
use crate::foundation::error::{VatError, VatResult};

/// Per-vertex offsets from the rest pose at one time step.
pub type Frame = Vec<Vec3>;

/// Clip time of column `step` in a texture `width` columns wide.
///
/// Uses `step / width`, so the last column lands one step before the end of the clip. Shaders
/// wrap when sampling past the last column, which closes the loop.
pub fn sample_time(step: u32, width: u32, duration_secs: f64) -> f64 {
    if width == 0 {
        return 0.0;
    }
    (f64::from(step) / f64::from(width)) * duration_secs
}

/// Drive `clip` and `baker` across `width` time steps and collect one [`Frame`] per step.
///
/// Mutates `object` on every step; callers scope this with a
/// [`PoseGuard`](crate::PoseGuard). Steps run strictly in order since each one relies on the
/// evaluator overwriting the previous pose.
#[tracing::instrument(skip_all, fields(clip = clip.name(), width = width, vertices = rest_pose.len()))]
pub fn sample_frames<O, C, B>(
    rest_pose: &[Vec3],
    clip: &C,
    object: &mut O,
    baker: &mut B,
    width: u32,
) -> VatResult<Vec<Frame>>
where
    O: ?Sized,
    C: AnimationClip<O> + ?Sized,
    B: MeshBaker<O> + ?Sized,
{
    let duration = clip.duration_secs();
    let mut frames = Vec::with_capacity(width as usize);
    let mut posed = Vec::with_capacity(rest_pose.len());

    for x in 0..width {
        let t = sample_time(x, width, duration);

        clip.sample(object, t).map_err(|e| {
            VatError::evaluation(format!("sample clip '{}' at {t:.4}s: {e}", clip.name()))
        })?;

        posed.clear();
        baker
            .bake_positions(object, &mut posed)
            .map_err(|e| VatError::evaluation(format!("bake mesh at {t:.4}s: {e}")))?;

        if posed.len() != rest_pose.len() {
            return Err(VatError::evaluation(format!(
                "baked {} vertex positions at {t:.4}s, rest pose has {}",
                posed.len(),
                rest_pose.len()
            )));
        }

        let frame: Frame = posed
            .iter()
            .zip(rest_pose)
            .map(|(&p, &rest)| p - rest)
            .collect();
        frames.push(frame);
    }

    tracing::debug!(frames = frames.len(), "sampled clip");
    Ok(frames)
}

#[cfg(test)]
#[path = "../../tests/unit/bake/sampler.rs"]
mod tests;
