//! Rasterization boundary.
//!
//! The core never touches pixels itself; it describes one glyph per element
//! and hands the work to an external capability behind [`backend::Rasterizer`].

/// Rasterizer trait and the per-glyph job description.
pub mod backend;
/// ImageMagick-backed rasterizer (`convert` / `mogrify`).
pub mod magick;
