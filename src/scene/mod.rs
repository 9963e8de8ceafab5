//! Reference collaborators: a bone rig, keyframed clips and a linear-blend skinned mesh.
//!
//! These implement [`AnimatedObject`](crate::AnimatedObject),
//! [`AnimationClip`](crate::AnimationClip) and [`MeshBaker`](crate::MeshBaker) so scenes
//! described in JSON can be baked without a host engine.

/// Keyframed bone clips.
pub mod clip;
/// JSON scene files.
pub mod file;
/// Bone hierarchy and pose.
pub mod rig;
/// Linear-blend skinning.
pub mod skinned;
/// Bone local transforms.
pub mod transform;
