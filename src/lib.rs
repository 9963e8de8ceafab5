//! vatbake bakes mesh animation into vertex animation textures (VATs).
//!
//! A VAT stores per-vertex offsets from the rest pose: each column is a time step, each row a
//! vertex. A shader reconstructs the deformed mesh by sampling the texture at
//! `(time / duration, vertex / height)` and decoding `min + rgb * (max - min)`.
//!
//! # Pipeline overview
//!
//! 1. **Plan**: vertex count + clip duration + sampling rate -> [`TextureDims`]
//! 2. **Sample**: under a [`PoseGuard`], pose the object at each time step and read back vertex
//!    positions as offsets from the rest pose
//! 3. **Bound**: fold every offset component into one scalar [`Bounds`]
//! 4. **Encode**: inverse-lerp each component through the bounds into a [`PixelGrid`]
//! 5. **Export**: hand the grid and its [`BakeManifest`] to a [`TextureSink`]
//!
//! Bounds are global across the whole clip, so every frame is kept in memory until encoding.
//!
//! The animation evaluator, mesh baking backend and exporter are traits
//! ([`AnimationClip`], [`MeshBaker`], [`TextureSink`]). The [`scene`] module provides a
//! bone rig with keyframed clips and linear-blend skinning that implement them.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod bake;
mod export;
mod foundation;
mod plan;

/// Reference rig, clip and skinned mesh implementations.
pub mod scene;

pub use bake::bounds::{Bounds, accumulate_bounds};
pub use bake::encode::{
    FLAT_CHANNEL, OPAQUE_ALPHA, PADDING_RGBA, PixelGrid, encode, encode_offset,
};
pub use bake::guard::PoseGuard;
pub use bake::pipeline::{
    BakeResult, BakeSettings, BakedTexture, DEFAULT_SAMPLING_RATE, bake, bake_to_grid,
    default_texture_name,
};
pub use bake::sampler::{Frame, sample_frames, sample_time};
pub use bake::target::{AnimatedObject, AnimationClip, MeshBaker};
pub use export::manifest::BakeManifest;
pub use export::png::{PngSink, PngSinkOpts, RowOrigin, ensure_dir};
pub use export::sink::{ExportedTexture, InMemorySink, TextureSink};
pub use foundation::core::{
    AssetHandle, DEFAULT_MAX_TEXTURE_SIZE, Mat4, Quat, TextureDims, Vec3,
};
pub use foundation::error::{VatError, VatResult};
pub use foundation::math::{inverse_lerp, next_power_of_two, u8_to_unorm, unorm_to_u8};
pub use plan::dimensions::{plan_dimensions, sample_count};
pub use scene::clip::{BoneChannel, BoneKey, KeyframeClip};
pub use scene::file::SceneFile;
pub use scene::rig::{Bone, Rig};
pub use scene::skinned::{SkinnedMesh, VertexInfluence};
pub use scene::transform::Transform;
