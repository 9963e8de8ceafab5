use crate::bake::bounds::Bounds;
use crate::bake::sampler::Frame;
use crate::foundation::core::{TextureDims, Vec3};
use crate::foundation::error::{VatError, VatResult};
use crate::foundation::math::{inverse_lerp, unorm_to_u8};

/// Normalized value written to every channel when the bounds collapse to a single value.
pub const FLAT_CHANNEL: f32 = 0.5;

/// Alpha written for every encoded pixel.
pub const OPAQUE_ALPHA: u8 = 255;

/// Color of rows past the true vertex count.
pub const PADDING_RGBA: [u8; 4] = [0, 0, 0, 0];

/// Straight-alpha RGBA8 image: column = time step, row = vertex index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    /// Grid width in pixels (time steps).
    pub width: u32,
    /// Grid height in pixels (vertex rows).
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major, vertex 0 in the first row.
    pub data: Vec<u8>,
}

impl PixelGrid {
    /// Allocate a grid filled with [`PADDING_RGBA`].
    pub fn new(dims: TextureDims) -> Self {
        Self {
            width: dims.width,
            height: dims.height,
            data: vec![0u8; dims.rgba8_len()],
        }
    }

    /// Grid dimensions.
    pub fn dims(&self) -> TextureDims {
        TextureDims::new(self.width, self.height)
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }

    /// Read the pixel at column `x`, row `y`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let i = self.offset(x, y)?;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.data[i..i + 4]);
        Some(px)
    }

    /// Write the pixel at column `x`, row `y`. Out-of-range writes are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if let Some(i) = self.offset(x, y) {
            self.data[i..i + 4].copy_from_slice(&rgba);
        }
    }

    /// Copy of the grid with rows in reverse order (vertex 0 in the last row).
    pub fn flipped_rows(&self) -> Self {
        let row_len = self.width as usize * 4;
        let mut data = Vec::with_capacity(self.data.len());
        if row_len > 0 {
            for row in self.data.chunks_exact(row_len).rev() {
                data.extend_from_slice(row);
            }
        }
        Self {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

/// Encode one offset through `bounds` into an RGBA8 pixel.
pub fn encode_offset(offset: Vec3, bounds: Bounds) -> [u8; 4] {
    let channel = |c: f32| {
        let unorm = inverse_lerp(bounds.min, bounds.max, c).unwrap_or(FLAT_CHANNEL);
        unorm_to_u8(unorm)
    };
    [
        channel(offset.x),
        channel(offset.y),
        channel(offset.z),
        OPAQUE_ALPHA,
    ]
}

/// Encode sampled frames into a [`PixelGrid`] of `width × height`.
///
/// `frames[x][y]` lands at column `x`, row `y`. Rows past a frame's vertex count keep
/// [`PADDING_RGBA`]. Bounds must come from [`accumulate_bounds`](crate::accumulate_bounds) over
/// the same frames; a range that never saw a finite value is rejected.
#[tracing::instrument(skip(frames), fields(frames = frames.len()))]
pub fn encode(frames: &[Frame], bounds: Bounds, width: u32, height: u32) -> VatResult<PixelGrid> {
    let bounds = bounds.require_valid()?;

    if frames.len() != width as usize {
        return Err(VatError::validation(format!(
            "encode expects one frame per column: got {} frames for width {width}",
            frames.len()
        )));
    }
    if let Some(frame) = frames.iter().find(|f| f.len() > height as usize) {
        return Err(VatError::validation(format!(
            "frame has {} vertices, texture height is {height}",
            frame.len()
        )));
    }

    if bounds.is_flat() {
        tracing::debug!(value = bounds.min, "flat bounds, encoding constant mid value");
    }

    let mut grid = PixelGrid::new(TextureDims::new(width, height));
    for (x, frame) in frames.iter().enumerate() {
        for (y, offset) in frame.iter().enumerate() {
            grid.set_pixel(x as u32, y as u32, encode_offset(*offset, bounds));
        }
    }
    Ok(grid)
}

#[cfg(test)]
#[path = "../../tests/unit/bake/encode.rs"]
mod tests;
