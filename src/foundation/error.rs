/// Convenience result type used across glyphcast.
pub type GlyphcastResult<T> = Result<T, GlyphcastError>;

/// Top-level error taxonomy used by the conversion core.
#[derive(thiserror::Error, Debug)]
pub enum GlyphcastError {
    /// Missing or mistyped input files, or an uncreatable output directory.
    #[error("validation error: {0}")]
    Validation(String),

    /// Map-file content that matches neither supported structural shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// A malformed codepoint escape sequence.
    #[error("decode error: {0}")]
    Decode(String),

    /// A color or file-format argument outside its closed enumeration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Failure reported by the external rasterizer or post-processor.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlyphcastError {
    /// Build a [`GlyphcastError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GlyphcastError::Parse`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`GlyphcastError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`GlyphcastError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`GlyphcastError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
