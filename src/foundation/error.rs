/// Convenience result type used across vatbake.
pub type VatResult<T> = Result<T, VatError>;

/// Top-level error taxonomy used by baking APIs.
#[derive(thiserror::Error, Debug)]
pub enum VatError {
    /// Invalid caller-provided input (settings, clip, mesh), detected before any pose mutation.
    #[error("validation error: {0}")]
    Validation(String),

    /// The (possibly rounded) vertex count does not fit in a texture column.
    #[error(
        "vertex count {vertex_count} needs a texture height of {height}, which exceeds the max texture size ({max_size})"
    )]
    VertexCountExceeded {
        /// Vertex count of the rest pose.
        vertex_count: usize,
        /// Planned texture height.
        height: u64,
        /// Maximum texture edge length.
        max_size: u32,
    },

    /// The clip is too long to be sampled at the requested rate.
    #[error(
        "animation clip is too long to be sampled at {sampling_rate}FPS for a max texture size of {max_size} (needs width {width})"
    )]
    TextureTooLarge {
        /// Planned texture width.
        width: u64,
        /// Effective sampling rate in frames per second.
        sampling_rate: f64,
        /// Maximum texture edge length.
        max_size: u32,
    },

    /// Errors while validating or sampling animation clips.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors from the animation evaluator or the mesh baking backend during sampling.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// No finite offset component was observed, so there is no range to normalize into.
    #[error("degenerate bounds: min {min}, max {max}")]
    DegenerateBounds {
        /// Accumulated minimum.
        min: f32,
        /// Accumulated maximum.
        max: f32,
    },

    /// The export adapter failed to persist the texture.
    #[error("export failed: {0}")]
    ExportFailed(String),

    /// The export destination cannot be used.
    #[error("invalid destination: {0}")]
    InvalidDestination(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VatError {
    /// Build a [`VatError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`VatError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`VatError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`VatError::ExportFailed`] value.
    pub fn export_failed(msg: impl Into<String>) -> Self {
        Self::ExportFailed(msg.into())
    }

    /// Build a [`VatError::InvalidDestination`] value.
    pub fn invalid_destination(msg: impl Into<String>) -> Self {
        Self::InvalidDestination(msg.into())
    }

    /// Build a [`VatError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Whether the failure happened while planning texture dimensions.
    ///
    /// These are recoverable by lowering the sampling rate or disabling power-of-two rounding.
    pub fn is_size_limit(&self) -> bool {
        matches!(
            self,
            Self::VertexCountExceeded { .. } | Self::TextureTooLarge { .. }
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
