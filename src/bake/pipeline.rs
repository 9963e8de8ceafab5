use crate::bake::bounds::{Bounds, accumulate_bounds};
use crate::bake::encode::{PixelGrid, encode};
use crate::bake::guard::PoseGuard;
use crate::bake::sampler::sample_frames;
use crate::bake::target::{AnimatedObject, AnimationClip, MeshBaker};
use crate::export::manifest::BakeManifest;
use crate::export::sink::TextureSink;
use crate::foundation::core::{AssetHandle, DEFAULT_MAX_TEXTURE_SIZE, TextureDims};
use crate::foundation::error::{VatError, VatResult};
use crate::plan::dimensions::plan_dimensions;

/// Default sampling rate in frames per second.
pub const DEFAULT_SAMPLING_RATE: f64 = 60.0;

/// Caller-tunable bake parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BakeSettings {
    /// Time steps per second of clip time (`> 0`).
    pub sampling_rate: f64,
    /// Round both texture edges up to powers of two.
    pub power_of_two: bool,
    /// Largest accepted texture edge.
    pub max_texture_size: u32,
}

impl Default for BakeSettings {
    fn default() -> Self {
        Self {
            sampling_rate: DEFAULT_SAMPLING_RATE,
            power_of_two: true,
            max_texture_size: DEFAULT_MAX_TEXTURE_SIZE,
        }
    }
}

impl BakeSettings {
    /// Check settings invariants.
    pub fn validate(&self) -> VatResult<()> {
        if !self.sampling_rate.is_finite() || self.sampling_rate <= 0.0 {
            return Err(VatError::validation(format!(
                "sampling rate must be a positive number, got {}",
                self.sampling_rate
            )));
        }
        if self.max_texture_size == 0 {
            return Err(VatError::validation("max texture size must be non-zero"));
        }
        Ok(())
    }
}

/// Encoded texture plus everything needed to decode it, before export.
#[derive(Clone, Debug)]
pub struct BakedTexture {
    /// Encoded pixels.
    pub grid: PixelGrid,
    /// Value range used for normalization.
    pub bounds: Bounds,
    /// True vertex count (rows below this are data, the rest padding).
    pub vertex_count: usize,
    /// Clip duration in seconds.
    pub duration_secs: f64,
}

impl BakedTexture {
    /// Texture dimensions.
    pub fn dims(&self) -> TextureDims {
        self.grid.dims()
    }
}

/// Summary of a completed and exported bake.
#[derive(Clone, Debug, PartialEq)]
pub struct BakeResult {
    /// Handle returned by the sink.
    pub asset: AssetHandle,
    /// Clip duration in seconds.
    pub duration_secs: f64,
    /// Value range used for normalization.
    pub bounds: Bounds,
    /// Texture dimensions.
    pub dims: TextureDims,
    /// True vertex count.
    pub vertex_count: usize,
    /// Sampling rate the bake was planned with.
    pub sampling_rate: f64,
}

/// Texture name used when the caller does not pick one.
pub fn default_texture_name(clip_name: &str) -> String {
    format!("VATTexture_{clip_name}")
}

/// Plan, sample, normalize and encode `clip` without exporting.
///
/// The object's pose is snapshotted before the first sample and restored before this returns,
/// on success and on failure. Size-limit failures happen before the snapshot is taken and
/// never touch the object.
#[tracing::instrument(skip_all, fields(clip = clip.name()))]
pub fn bake_to_grid<O, C, B>(
    settings: &BakeSettings,
    clip: &C,
    object: &mut O,
    baker: &mut B,
) -> VatResult<BakedTexture>
where
    O: AnimatedObject,
    C: AnimationClip<O> + ?Sized,
    B: MeshBaker<O> + ?Sized,
{
    settings.validate()?;

    let duration_secs = clip.duration_secs();
    if !duration_secs.is_finite() || duration_secs <= 0.0 {
        return Err(VatError::validation(format!(
            "clip '{}' must have a positive duration, got {duration_secs}",
            clip.name()
        )));
    }

    let rest_pose = baker.rest_positions().to_vec();
    if rest_pose.is_empty() {
        return Err(VatError::validation("mesh has no vertices"));
    }

    let dims = plan_dimensions(
        rest_pose.len(),
        duration_secs,
        settings.sampling_rate,
        settings.power_of_two,
        settings.max_texture_size,
    )?;
    tracing::debug!(
        width = dims.width,
        height = dims.height,
        vertices = rest_pose.len(),
        "planned texture"
    );

    let frames = {
        let mut guard = PoseGuard::acquire(object);
        let frames = sample_frames(&rest_pose, clip, &mut *guard, baker, dims.width)?;
        guard.release()?;
        frames
    };

    let bounds = accumulate_bounds(&frames).require_valid()?;
    tracing::debug!(min = bounds.min, max = bounds.max, "accumulated bounds");

    let grid = encode(&frames, bounds, dims.width, dims.height)?;

    Ok(BakedTexture {
        grid,
        bounds,
        vertex_count: rest_pose.len(),
        duration_secs,
    })
}

/// Bake `clip` and hand the texture to `sink`.
///
/// `name` defaults to [`default_texture_name`]. Export only runs once the full grid is
/// encoded.
pub fn bake<O, C, B, S>(
    settings: &BakeSettings,
    clip: &C,
    object: &mut O,
    baker: &mut B,
    sink: &mut S,
    name: Option<&str>,
) -> VatResult<BakeResult>
where
    O: AnimatedObject,
    C: AnimationClip<O> + ?Sized,
    B: MeshBaker<O> + ?Sized,
    S: TextureSink + ?Sized,
{
    let baked = bake_to_grid(settings, clip, object, baker)?;

    let name = name
        .map(str::to_string)
        .unwrap_or_else(|| default_texture_name(clip.name()));
    let manifest = BakeManifest::new(
        name.clone(),
        baked.dims(),
        baked.vertex_count,
        baked.duration_secs,
        settings.sampling_rate,
        settings.power_of_two,
        baked.bounds,
    );
    let asset = sink.export(&baked.grid, &name, &manifest)?;
    tracing::info!(asset = %asset, "baked vertex animation texture");

    Ok(BakeResult {
        asset,
        duration_secs: baked.duration_secs,
        bounds: baked.bounds,
        dims: baked.dims(),
        vertex_count: baked.vertex_count,
        sampling_rate: settings.sampling_rate,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/bake/pipeline.rs"]
mod tests;
