use crate::foundation::core::{Mat4, Quat, Vec3};

/// Translation, rotation and scale of one bone relative to its parent.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Transform {
    /// Translation.
    pub translation: Vec3,
    /// Rotation as a unit quaternion `[x, y, z, w]`.
    pub rotation: Quat,
    /// Non-uniform scale, default `(1, 1, 1)`.
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// No translation, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Pure translation.
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// Pure rotation.
    pub fn from_rotation(rotation: Quat) -> Self {
        Self {
            rotation,
            ..Self::IDENTITY
        }
    }

    /// Compose as `T * R * S`.
    pub fn to_mat4(self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    /// Interpolate: linear for translation and scale, spherical for rotation.
    pub fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        Self {
            translation: a.translation.lerp(b.translation, t),
            rotation: a.rotation.slerp(b.rotation, t),
            scale: a.scale.lerp(b.scale, t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/transform.rs"]
mod tests;
