use std::path::Path;

use crate::convert::request::ConversionRequest;
use crate::foundation::error::GlyphcastResult;
use crate::mapfile::decode::unquote_literal;
use crate::mapfile::parse::ElementMap;
use crate::raster::backend::{GlyphJob, Rasterizer};

/// Render every element of `map` through `rasterizer`, in ascending name
/// order.
///
/// The request is validated against its closed enumerations before the first
/// element is touched. The batch is fail-fast: the first rasterizer failure
/// aborts the run, leaving earlier artifacts on disk and later elements
/// unattempted, so any error means the output set is incomplete.
pub fn render_all<R: Rasterizer>(
    map: &ElementMap,
    request: &ConversionRequest,
    font_path: &Path,
    output_dir: &Path,
    rasterizer: &mut R,
) -> GlyphcastResult<()> {
    request.validate()?;

    for (element, literal) in map {
        tracing::info!(element = %element, keycode = %literal, "processing element");

        let output_path = output_dir.join(format!(
            "{element}-{}.{}",
            request.color, request.file_format
        ));
        let job = GlyphJob {
            font_path,
            fill_color: &request.color,
            point_size: request.point_size,
            canvas_size: request.image_size,
            glyph: unquote_literal(literal),
            output_path: &output_path,
        };
        rasterizer.rasterize(&job)?;
    }
    Ok(())
}
