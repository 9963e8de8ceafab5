pub use glam::{Mat4, Quat, Vec3};

/// Default maximum texture edge length accepted by the planner.
pub const DEFAULT_MAX_TEXTURE_SIZE: u32 = 4096;

/// Planned texture size: `width` time steps by `height` vertex rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct TextureDims {
    /// Number of time steps (columns).
    pub width: u32,
    /// Number of vertex rows, possibly padded past the true vertex count.
    pub height: u32,
}

impl TextureDims {
    /// Build dimensions from explicit width and height.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total pixel count.
    pub fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Byte length of a tightly packed RGBA8 buffer with these dimensions.
    pub fn rgba8_len(self) -> usize {
        self.pixel_count() * 4
    }

    /// Whether both edges are powers of two.
    pub fn is_power_of_two(self) -> bool {
        self.width.is_power_of_two() && self.height.is_power_of_two()
    }
}

/// Opaque handle to an exported texture asset.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct AssetHandle(pub String);

impl AssetHandle {
    /// Borrow the handle as a string (a file path or a sink-specific URI).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AssetHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
