use std::path::Path;

use crate::foundation::error::GlyphcastResult;

/// One glyph rasterization request.
///
/// Describes a single element's output image: the glyph drawn centered, in
/// `fill_color`, on a transparent square canvas.
#[derive(Clone, Copy, Debug)]
pub struct GlyphJob<'a> {
    /// TrueType font file containing the glyph.
    pub font_path: &'a Path,
    /// Fill color name.
    pub fill_color: &'a str,
    /// Font point size.
    pub point_size: u32,
    /// Edge of the square canvas in pixels.
    pub canvas_size: u32,
    /// The glyph to draw, as its bare literal character.
    pub glyph: &'a str,
    /// Destination image file.
    pub output_path: &'a Path,
}

/// External rasterization capability.
///
/// Invoked once per element and once per whole-directory post-processing
/// pass; success or failure is the only signal required back. Every call
/// blocks until the external work has completed.
pub trait Rasterizer {
    /// Rasterize a single glyph onto its output image.
    fn rasterize(&mut self, job: &GlyphJob<'_>) -> GlyphcastResult<()>;

    /// Scale every image in `dir` to `target` pixels of height (or width
    /// when `by_width` is set), preserving aspect ratio.
    fn resize(&mut self, dir: &Path, target: u32, by_width: bool) -> GlyphcastResult<()>;

    /// Remove transparent padding around every image in `dir`.
    fn trim(&mut self, dir: &Path) -> GlyphcastResult<()>;
}
