use crate::bake::encode::PixelGrid;
use crate::export::manifest::BakeManifest;
use crate::foundation::core::AssetHandle;
use crate::foundation::error::{VatError, VatResult};

/// Export adapter contract: persist a fully encoded grid and report where it went.
///
/// Sinks are only called after every pixel is encoded, so a failed bake never leaves a partial
/// texture behind. Implementations report I/O failures as [`VatError::ExportFailed`] and
/// unusable destinations as [`VatError::InvalidDestination`].
pub trait TextureSink {
    /// Persist `grid` under `suggested_name`, alongside its decode `manifest`.
    fn export(
        &mut self,
        grid: &PixelGrid,
        suggested_name: &str,
        manifest: &BakeManifest,
    ) -> VatResult<AssetHandle>;
}

/// One texture captured by [`InMemorySink`].
#[derive(Clone, Debug)]
pub struct ExportedTexture {
    /// Handle returned to the caller.
    pub handle: AssetHandle,
    /// Exported pixels.
    pub grid: PixelGrid,
    /// Exported manifest.
    pub manifest: BakeManifest,
}

/// In-memory sink for tests and tooling.
#[derive(Debug, Default)]
pub struct InMemorySink {
    exported: Vec<ExportedTexture>,
}

impl InMemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the exported textures in export order.
    pub fn exported(&self) -> &[ExportedTexture] {
        &self.exported
    }

    /// The most recently exported texture, if any.
    pub fn last(&self) -> Option<&ExportedTexture> {
        self.exported.last()
    }
}

impl TextureSink for InMemorySink {
    fn export(
        &mut self,
        grid: &PixelGrid,
        suggested_name: &str,
        manifest: &BakeManifest,
    ) -> VatResult<AssetHandle> {
        if suggested_name.trim().is_empty() {
            return Err(VatError::invalid_destination("texture name is empty"));
        }
        let handle = AssetHandle(format!("memory://{suggested_name}"));
        self.exported.push(ExportedTexture {
            handle: handle.clone(),
            grid: grid.clone(),
            manifest: manifest.clone(),
        });
        Ok(handle)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/sink.rs"]
mod tests;
