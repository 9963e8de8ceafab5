use crate::bake::bounds::Bounds;
use crate::foundation::core::TextureDims;
use crate::foundation::error::{VatError, VatResult};
use crate::foundation::math::next_power_of_two;

/// Runtime decode parameters and import hints for a baked texture.
///
/// A shader reconstructs an offset as `bounds_min + texel.rgb * (bounds_max - bounds_min)` at
/// `u = time / duration_secs`, `v = vertex / height`. The texture only decodes correctly when
/// imported as linear color without mipmaps or compression, which the hint fields record.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BakeManifest {
    /// Texture asset name (without extension).
    pub name: String,
    /// Texture width (time steps).
    pub width: u32,
    /// Texture height (vertex rows, possibly padded).
    pub height: u32,
    /// True vertex count; rows at or past this index are padding.
    pub vertex_count: usize,
    /// Clip duration in seconds.
    pub duration_secs: f64,
    /// Requested sampling rate in frames per second.
    pub sampling_rate: f64,
    /// Whether dimensions were rounded to powers of two.
    pub power_of_two: bool,
    /// Smallest encoded offset component.
    pub bounds_min: f32,
    /// Largest encoded offset component.
    pub bounds_max: f32,
    /// Always `"linear"`: channel values are data, not sRGB color.
    pub color_space: String,
    /// Always `false`: mip filtering would blend neighbouring vertices.
    pub mipmaps: bool,
    /// Wrap mode along time, `"repeat"` for looping playback.
    pub wrap: String,
    /// Texture filter, `"bilinear"` to interpolate between time steps.
    pub filter: String,
    /// Max import size that keeps the texture unscaled.
    pub max_texture_size: u64,
}

impl BakeManifest {
    /// Build a manifest for a finished bake.
    pub fn new(
        name: impl Into<String>,
        dims: TextureDims,
        vertex_count: usize,
        duration_secs: f64,
        sampling_rate: f64,
        power_of_two: bool,
        bounds: Bounds,
    ) -> Self {
        let max_texture_size = next_power_of_two(i64::from(dims.width))
            .max(next_power_of_two(i64::from(dims.height)));
        Self {
            name: name.into(),
            width: dims.width,
            height: dims.height,
            vertex_count,
            duration_secs,
            sampling_rate,
            power_of_two,
            bounds_min: bounds.min,
            bounds_max: bounds.max,
            color_space: "linear".to_string(),
            mipmaps: false,
            wrap: "repeat".to_string(),
            filter: "bilinear".to_string(),
            max_texture_size,
        }
    }

    /// Texture dimensions.
    pub fn dims(&self) -> TextureDims {
        TextureDims::new(self.width, self.height)
    }

    /// Encoded value range.
    pub fn bounds(&self) -> Bounds {
        Bounds {
            min: self.bounds_min,
            max: self.bounds_max,
        }
    }

    /// Serialize as pretty JSON.
    pub fn to_json(&self) -> VatResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| VatError::serde(format!("serialize bake manifest: {e}")))
    }

    /// Parse a manifest from JSON.
    pub fn from_json(s: &str) -> VatResult<Self> {
        serde_json::from_str(s).map_err(|e| VatError::serde(format!("parse bake manifest: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/manifest.rs"]
mod tests;
