use crate::foundation::core::Vec3;
use crate::foundation::error::VatResult;

/// An object whose pose is mutated by animation sampling and can be snapshotted.
///
/// The snapshot must be sufficient to restore the object exactly, including every transform in
/// its hierarchy that a clip may touch.
pub trait AnimatedObject {
    /// Captured pose state.
    type Pose;

    /// Capture the current pose.
    fn capture_pose(&self) -> Self::Pose;

    /// Restore a pose previously returned by [`AnimatedObject::capture_pose`].
    fn restore_pose(&mut self, pose: Self::Pose) -> VatResult<()>;
}

/// Animation evaluator: deforms a target toward a point in clip time.
pub trait AnimationClip<O: ?Sized> {
    /// Human-readable clip name, used to derive the default texture name.
    fn name(&self) -> &str;

    /// Clip length in seconds.
    fn duration_secs(&self) -> f64;

    /// Pose `object` at `time_secs`. Must be deterministic for a given time.
    fn sample(&self, object: &mut O, time_secs: f64) -> VatResult<()>;
}

/// Baking backend: produces vertex positions for the mesh attached to a posed object.
///
/// Positions from [`MeshBaker::bake_positions`] must be expressed in the same space as
/// [`MeshBaker::rest_positions`].
pub trait MeshBaker<O: ?Sized> {
    /// Vertex positions of the mesh with no animation applied.
    fn rest_positions(&self) -> &[Vec3];

    /// Write the posed vertex positions of `object` into `out`, replacing its contents.
    fn bake_positions(&mut self, object: &O, out: &mut Vec<Vec3>) -> VatResult<()>;
}
