//! Export adapters.
//!
//! The bake pipeline hands a fully encoded [`PixelGrid`](crate::PixelGrid) to a
//! [`TextureSink`](sink::TextureSink) together with its [`BakeManifest`](manifest::BakeManifest).

/// Decode parameters and import hints written next to a texture.
pub mod manifest;
/// PNG file sink.
pub mod png;
/// Sink trait and the in-memory sink.
pub mod sink;
