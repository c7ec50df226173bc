/// Convenience result type used across galton.
pub type GaltonResult<T> = Result<T, GaltonError>;

/// Top-level error taxonomy used by the public API.
///
/// The animator itself never fails; errors come from the edges (configuration, colour parsing,
/// surface allocation and encoding).
#[derive(thiserror::Error, Debug)]
pub enum GaltonError {
    /// Invalid user-provided configuration or arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// Raster surface allocation or pixel-buffer errors.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while writing frames to a sink.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GaltonError {
    /// Build a [`GaltonError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GaltonError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`GaltonError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`GaltonError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
