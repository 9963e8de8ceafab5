use crate::bake::sampler::Frame;
use crate::foundation::core::Vec3;
use crate::foundation::error::{VatError, VatResult};

/// Scalar value range shared by every offset component of every vertex and frame.
///
/// One range for all three axes keeps the encoding a single affine map, so a shader decodes
/// every channel with the same `min + c * (max - min)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Bounds {
    /// Smallest observed component.
    pub min: f32,
    /// Largest observed component.
    pub max: f32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Bounds {
    /// The empty fold: `(+inf, -inf)`.
    pub const EMPTY: Self = Self {
        min: f32::INFINITY,
        max: f32::NEG_INFINITY,
    };

    /// Widen to include `v`. Non-finite values are ignored.
    pub fn include(&mut self, v: f32) {
        if !v.is_finite() {
            return;
        }
        self.min = self.min.min(v);
        self.max = self.max.max(v);
    }

    /// Widen to include every component of `v`.
    pub fn include_vec3(&mut self, v: Vec3) {
        self.include(v.x);
        self.include(v.y);
        self.include(v.z);
    }

    /// Whether at least one finite value was folded in.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }

    /// Whether the range collapses to a single value (a mesh that never moves).
    pub fn is_flat(&self) -> bool {
        self.is_valid() && self.min == self.max
    }

    /// `max - min`, or `0.0` for an invalid range.
    pub fn span(&self) -> f32 {
        if self.is_valid() {
            self.max - self.min
        } else {
            0.0
        }
    }

    /// Return `self` if valid, otherwise [`VatError::DegenerateBounds`].
    pub fn require_valid(self) -> VatResult<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(VatError::DegenerateBounds {
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Decode a normalized channel value back into an offset component.
    pub fn decode(&self, unorm: f32) -> f32 {
        self.min + unorm * (self.max - self.min)
    }
}

/// Fold every component of every frame into one [`Bounds`].
pub fn accumulate_bounds(frames: &[Frame]) -> Bounds {
    let mut bounds = Bounds::EMPTY;
    for offset in frames.iter().flatten() {
        bounds.include_vec3(*offset);
    }
    bounds
}

#[cfg(test)]
#[path = "../../tests/unit/bake/bounds.rs"]
mod tests;
