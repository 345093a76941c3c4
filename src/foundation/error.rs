/// Convenience result type used across slidecraft.
pub type SlideResult<T> = Result<T, SlideError>;

/// Top-level error taxonomy used by the assembly and composition APIs.
///
/// Only batch-level problems surface here. Content and geometry problems inside an
/// otherwise valid slide degrade to placeholders or defaults and are reported as
/// [`crate::LayoutWarning`] values instead.
#[derive(thiserror::Error, Debug)]
pub enum SlideError {
    /// Invalid deck configuration (slide count, required fields, format tag).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while composing render units (bad slide index, worker pool setup).
    #[error("composition error: {0}")]
    Composition(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SlideError {
    /// Build a [`SlideError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SlideError::Composition`] value.
    pub fn composition(msg: impl Into<String>) -> Self {
        Self::Composition(msg.into())
    }

    /// Build a [`SlideError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Whether this error was raised by configuration validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<serde_json::Error> for SlideError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
