//! Glyphcast turns named glyphs of a TrueType icon font into individual
//! raster images.
//!
//! A map file associates element names (ship and pilot identifiers, for
//! example) with the font codepoints of their glyphs. Glyphcast parses the
//! map and drives one rasterizer invocation per element, plus optional
//! whole-directory resize and trim passes afterwards.
//!
//! # Pipeline overview
//!
//! 1. **Validate**: input files exist with the right extensions; the output
//!    directory is created if missing
//! 2. **Parse**: map file (JSON or legacy stylesheet) -> [`ElementMap`]
//! 3. **Render**: one rasterization per element, in ascending name order,
//!    fail-fast on the first error
//! 4. **Post-process** (optional): whole-directory resize, then trim
//!
//! Control flow is strictly linear, single-threaded, and fully synchronous;
//! no stage calls back into an earlier one. Rasterization itself is external:
//! the core builds [`GlyphJob`] values and hands them to a [`Rasterizer`],
//! with [`MagickRasterizer`] as the ImageMagick-backed implementation.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod convert;
mod foundation;
mod mapfile;
mod raster;

pub use convert::engine::ConversionEngine;
pub use convert::render::render_all;
pub use convert::request::{AVAILABLE_COLORS, AVAILABLE_FILE_FORMATS, ConversionRequest};
pub use convert::validate::validate;
pub use foundation::error::{GlyphcastError, GlyphcastResult};
pub use mapfile::decode::{decode_codepoint, quote_literal, unquote_literal};
pub use mapfile::parse::{ElementMap, MapFormat, parse_map};
pub use raster::backend::{GlyphJob, Rasterizer};
pub use raster::magick::{MagickRasterizer, is_magick_on_path};
