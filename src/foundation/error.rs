/// Convenience result type used across the crate.
pub type BorderResult<T> = Result<T, BorderError>;

/// Top-level error taxonomy.
///
/// The path pipeline itself is total; errors only surface at the edges (configuration and
/// raster surfaces).
#[derive(thiserror::Error, Debug)]
pub enum BorderError {
    /// Invalid user-provided values.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed configuration (bad colors, unknown values).
    #[error("config error: {0}")]
    Config(String),

    /// Errors while rasterizing a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl BorderError {
    /// Build a [`BorderError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BorderError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`BorderError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`BorderError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
