//! Baking stages, leaf-first: guard, sampler, bounds, encoder, and the pipeline that runs them.

/// Scalar bounds accumulation.
pub mod bounds;
/// Offset to RGBA8 encoding.
pub mod encode;
/// Scoped pose snapshot/restore.
pub mod guard;
/// End-to-end bake orchestration.
pub mod pipeline;
/// Time-step sampling of a clip.
pub mod sampler;
/// Collaborator traits the pipeline drives.
pub mod target;

#[cfg(test)]
#[path = "../../tests/unit/bake/testkit.rs"]
pub(crate) mod testkit;
