use crate::foundation::error::{GlyphcastError, GlyphcastResult};

/// Fill colors the rasterizer accepts.
pub const AVAILABLE_COLORS: [&str; 5] = ["black", "white", "red", "green", "blue"];

/// Image file formats the rasterizer can produce.
pub const AVAILABLE_FILE_FORMATS: [&str; 2] = ["gif", "png"];

/// Immutable description of one conversion run.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ConversionRequest {
    /// Glyph fill color, one of [`AVAILABLE_COLORS`].
    pub color: String,
    /// Font point size passed to the rasterizer.
    pub point_size: u32,
    /// Edge of the square canvas in pixels, before any post-processing.
    pub image_size: u32,
    /// Output image format, one of [`AVAILABLE_FILE_FORMATS`].
    pub file_format: String,
    /// Trim transparent padding after all elements have rendered.
    #[serde(default)]
    pub trim: bool,
    /// Scale all outputs to this dimension after rendering.
    #[serde(default)]
    pub resize_to: Option<u32>,
    /// Resize against the target width instead of the target height.
    #[serde(default)]
    pub resize_by_width: bool,
}

impl Default for ConversionRequest {
    fn default() -> Self {
        Self {
            color: "black".to_string(),
            point_size: 50,
            image_size: 72,
            file_format: "gif".to_string(),
            trim: false,
            resize_to: None,
            resize_by_width: false,
        }
    }
}

impl ConversionRequest {
    /// Check the request against its closed enumerations and size bounds.
    ///
    /// Called by the renderer before the first element is touched, so a bad
    /// value never produces partial output.
    pub fn validate(&self) -> GlyphcastResult<()> {
        if !AVAILABLE_COLORS.contains(&self.color.as_str()) {
            return Err(GlyphcastError::configuration(format!(
                "color should be in {} (got: {})",
                AVAILABLE_COLORS.join(","),
                self.color
            )));
        }
        if !AVAILABLE_FILE_FORMATS.contains(&self.file_format.as_str()) {
            return Err(GlyphcastError::configuration(format!(
                "file format should be in {} (got: {})",
                AVAILABLE_FILE_FORMATS.join(","),
                self.file_format
            )));
        }
        if self.point_size == 0 {
            return Err(GlyphcastError::configuration("point size must be non-zero"));
        }
        if self.image_size == 0 {
            return Err(GlyphcastError::configuration("image size must be non-zero"));
        }
        if self.resize_to == Some(0) {
            return Err(GlyphcastError::configuration("resize target must be non-zero"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/convert/request.rs"]
mod tests;
