use std::ops::{Deref, DerefMut};

use crate::bake::target::AnimatedObject;
use crate::foundation::error::VatResult;

/// Scoped pose snapshot around the sampling phase.
///
/// Acquiring the guard captures the object's pose; the guard then derefs to the object so the
/// sampler can mutate it. The snapshot is restored exactly once: by [`PoseGuard::release`] on
/// the success path, or on drop for every other exit (early return, `?`, panic unwind).
///
/// A failed restore during drop is logged and swallowed so it never masks the error that
/// caused the early exit.
pub struct PoseGuard<'a, O: AnimatedObject> {
    object: &'a mut O,
    snapshot: Option<O::Pose>,
}

impl<'a, O: AnimatedObject> PoseGuard<'a, O> {
    /// Capture the current pose of `object`.
    pub fn acquire(object: &'a mut O) -> Self {
        let snapshot = object.capture_pose();
        tracing::trace!("pose snapshot captured");
        Self {
            object,
            snapshot: Some(snapshot),
        }
    }

    /// Restore the captured pose and surface any restore failure.
    pub fn release(mut self) -> VatResult<()> {
        match self.snapshot.take() {
            Some(pose) => self.object.restore_pose(pose),
            None => Ok(()),
        }
    }
}

impl<O: AnimatedObject> Deref for PoseGuard<'_, O> {
    type Target = O;

    fn deref(&self) -> &O {
        self.object
    }
}

impl<O: AnimatedObject> DerefMut for PoseGuard<'_, O> {
    fn deref_mut(&mut self) -> &mut O {
        self.object
    }
}

impl<O: AnimatedObject> Drop for PoseGuard<'_, O> {
    fn drop(&mut self) {
        let Some(pose) = self.snapshot.take() else {
            return;
        };
        if let Err(err) = self.object.restore_pose(pose) {
            tracing::error!(error = %err, "failed to restore pose after aborted sampling");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bake/guard.rs"]
mod tests;
