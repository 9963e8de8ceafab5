use std::path::{Path, PathBuf};

use crate::bake::encode::PixelGrid;
use crate::export::manifest::BakeManifest;
use crate::export::sink::TextureSink;
use crate::foundation::core::AssetHandle;
use crate::foundation::error::{VatError, VatResult};

/// Which image row holds vertex 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowOrigin {
    /// Vertex 0 is the first (top) row of the PNG.
    #[default]
    Top,
    /// Vertex 0 is the last (bottom) row, for engines whose texture `v` starts at the bottom.
    Bottom,
}

/// Options for [`PngSink`].
#[derive(Clone, Debug)]
pub struct PngSinkOpts {
    /// Directory that receives `<name>.png` (and `<name>.json`).
    pub out_dir: PathBuf,
    /// Overwrite existing files.
    pub overwrite: bool,
    /// Write the [`BakeManifest`] sidecar next to the PNG.
    pub write_manifest: bool,
    /// Row layout of the written image.
    pub row_origin: RowOrigin,
}

impl PngSinkOpts {
    /// Options for writing into `out_dir` with overwrite and manifest enabled.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            overwrite: true,
            write_manifest: true,
            row_origin: RowOrigin::Top,
        }
    }
}

/// Sink that writes an RGBA8 PNG via the `image` crate.
#[derive(Clone, Debug)]
pub struct PngSink {
    opts: PngSinkOpts,
}

impl PngSink {
    /// Create a sink with the given options.
    pub fn new(opts: PngSinkOpts) -> Self {
        Self { opts }
    }

    /// Path the PNG for `name` will be written to.
    pub fn png_path(&self, name: &str) -> PathBuf {
        self.opts.out_dir.join(format!("{name}.png"))
    }

    /// Path the manifest sidecar for `name` will be written to.
    pub fn manifest_path(&self, name: &str) -> PathBuf {
        self.opts.out_dir.join(format!("{name}.json"))
    }

    fn check_destination(&self, name: &str) -> VatResult<()> {
        if name.trim().is_empty() {
            return Err(VatError::invalid_destination("texture name is empty"));
        }
        if name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(VatError::invalid_destination(format!(
                "texture name '{name}' must be a plain file stem"
            )));
        }
        if self.opts.out_dir.exists() && !self.opts.out_dir.is_dir() {
            return Err(VatError::invalid_destination(format!(
                "output path '{}' is not a directory",
                self.opts.out_dir.display()
            )));
        }
        if !self.opts.overwrite {
            let png = self.png_path(name);
            if png.exists() {
                return Err(VatError::invalid_destination(format!(
                    "output file '{}' already exists",
                    png.display()
                )));
            }
        }
        Ok(())
    }
}

/// Create `dir` (and parents) if needed.
pub fn ensure_dir(dir: &Path) -> VatResult<()> {
    std::fs::create_dir_all(dir).map_err(|e| {
        VatError::export_failed(format!(
            "failed to create output directory '{}': {e}",
            dir.display()
        ))
    })
}

impl TextureSink for PngSink {
    #[tracing::instrument(skip(self, grid, manifest), fields(out_dir = %self.opts.out_dir.display()))]
    fn export(
        &mut self,
        grid: &PixelGrid,
        suggested_name: &str,
        manifest: &BakeManifest,
    ) -> VatResult<AssetHandle> {
        self.check_destination(suggested_name)?;
        if grid.width == 0 || grid.height == 0 {
            return Err(VatError::validation("png width/height must be non-zero"));
        }
        if grid.data.len() != grid.dims().rgba8_len() {
            return Err(VatError::validation(
                "grid.data size mismatch with width*height*4",
            ));
        }
        ensure_dir(&self.opts.out_dir)?;

        let flipped;
        let pixels = match self.opts.row_origin {
            RowOrigin::Top => grid,
            RowOrigin::Bottom => {
                flipped = grid.flipped_rows();
                &flipped
            }
        };

        let png_path = self.png_path(suggested_name);
        image::save_buffer_with_format(
            &png_path,
            &pixels.data,
            pixels.width,
            pixels.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| {
            VatError::export_failed(format!("write png '{}': {e}", png_path.display()))
        })?;

        if self.opts.write_manifest {
            let manifest_path = self.manifest_path(suggested_name);
            std::fs::write(&manifest_path, manifest.to_json()?).map_err(|e| {
                VatError::export_failed(format!(
                    "write manifest '{}': {e}",
                    manifest_path.display()
                ))
            })?;
        }

        tracing::debug!(path = %png_path.display(), "exported texture");
        Ok(AssetHandle(png_path.to_string_lossy().into_owned()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/png.rs"]
mod tests;
