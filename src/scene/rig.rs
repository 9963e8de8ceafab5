use crate::bake::target::AnimatedObject;
use crate::foundation::core::Mat4;
use crate::foundation::error::{VatError, VatResult};
use crate::scene::transform::Transform;

/// One bone of a [`Rig`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Bone {
    /// Unique bone name, referenced by clip channels.
    pub name: String,
    /// Parent bone index; must be smaller than this bone's index.
    #[serde(default)]
    pub parent: Option<usize>,
    /// Local transform in the bind (rest) pose.
    #[serde(default)]
    pub bind: Transform,
}

/// Bone hierarchy with a mutable local pose.
///
/// Bones are stored parents-first, so global matrices resolve in one forward pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Rig {
    bones: Vec<Bone>,
    pose: Vec<Transform>,
}

impl Rig {
    /// Build a rig posed in its bind pose.
    pub fn new(bones: Vec<Bone>) -> VatResult<Self> {
        for (i, bone) in bones.iter().enumerate() {
            if bone.name.trim().is_empty() {
                return Err(VatError::validation(format!("bone {i} has an empty name")));
            }
            if let Some(parent) = bone.parent
                && parent >= i
            {
                return Err(VatError::validation(format!(
                    "bone '{}' must come after its parent (parent index {parent}, bone index {i})",
                    bone.name
                )));
            }
            if bones[..i].iter().any(|b| b.name == bone.name) {
                return Err(VatError::validation(format!(
                    "duplicate bone name '{}'",
                    bone.name
                )));
            }
        }
        let pose = bones.iter().map(|b| b.bind).collect();
        Ok(Self { bones, pose })
    }

    /// Borrow the bones.
    pub fn bones(&self) -> &[Bone] {
        &self.bones
    }

    /// Number of bones.
    pub fn bone_count(&self) -> usize {
        self.bones.len()
    }

    /// Index of the bone named `name`.
    pub fn find_bone(&self, name: &str) -> Option<usize> {
        self.bones.iter().position(|b| b.name == name)
    }

    /// Current local transforms.
    pub fn pose(&self) -> &[Transform] {
        &self.pose
    }

    /// Set the local transform of bone `index`.
    pub fn set_local(&mut self, index: usize, transform: Transform) -> VatResult<()> {
        let slot = self.pose.get_mut(index).ok_or_else(|| {
            VatError::animation(format!("bone index {index} is out of range"))
        })?;
        *slot = transform;
        Ok(())
    }

    /// Put every bone back in its bind transform.
    pub fn reset_to_bind(&mut self) {
        for (slot, bone) in self.pose.iter_mut().zip(&self.bones) {
            *slot = bone.bind;
        }
    }

    /// Model-space matrices of the current pose.
    pub fn global_matrices(&self) -> Vec<Mat4> {
        self.resolve_globals(|i| self.pose[i].to_mat4())
    }

    /// Model-space matrices of the bind pose.
    pub fn bind_global_matrices(&self) -> Vec<Mat4> {
        self.resolve_globals(|i| self.bones[i].bind.to_mat4())
    }

    fn resolve_globals(&self, local: impl Fn(usize) -> Mat4) -> Vec<Mat4> {
        let mut globals: Vec<Mat4> = Vec::with_capacity(self.bones.len());
        for (i, bone) in self.bones.iter().enumerate() {
            let m = match bone.parent {
                Some(p) => globals[p] * local(i),
                None => local(i),
            };
            globals.push(m);
        }
        globals
    }
}

impl AnimatedObject for Rig {
    type Pose = Vec<Transform>;

    fn capture_pose(&self) -> Vec<Transform> {
        self.pose.clone()
    }

    fn restore_pose(&mut self, pose: Vec<Transform>) -> VatResult<()> {
        if pose.len() != self.bones.len() {
            return Err(VatError::validation(format!(
                "pose has {} transforms, rig has {} bones",
                pose.len(),
                self.bones.len()
            )));
        }
        self.pose = pose;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/rig.rs"]
mod tests;
