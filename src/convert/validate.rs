use std::fs;
use std::path::Path;

use crate::foundation::error::{GlyphcastError, GlyphcastResult};
use crate::mapfile::parse::MapFormat;

fn check_file(path: &Path, expected_ext: &str) -> bool {
    let ext_ok = path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(expected_ext));
    let ok = path.is_file() && ext_ok;
    if !ok {
        tracing::error!(
            path = %path.display(),
            expected = expected_ext,
            "input file does not exist or is not a '{expected_ext}' file"
        );
    }
    ok
}

/// Validate run inputs and prepare the output directory.
///
/// The map file must exist with the extension of the active format, the font
/// file must exist with a `.ttf` extension. Both checks are evaluated
/// independently and logged individually, so one pass reports every problem;
/// the result is `true` only when both passed.
///
/// The output directory is created if missing, including intermediate
/// directories; a pre-existing directory is not an error. An uncreatable
/// output path is a hard [`Validation`](GlyphcastError::Validation) error.
pub fn validate(
    map_path: &Path,
    font_path: &Path,
    output_dir: &Path,
    format: MapFormat,
) -> GlyphcastResult<bool> {
    let map_ok = check_file(map_path, format.expected_extension());
    let font_ok = check_file(font_path, "ttf");

    fs::create_dir_all(output_dir).map_err(|e| {
        GlyphcastError::validation(format!(
            "cannot create output directory '{}': {e}",
            output_dir.display()
        ))
    })?;
    // Renders must never start against a path that is not a directory.
    if !output_dir.is_dir() {
        return Err(GlyphcastError::validation(format!(
            "output path '{}' is not a directory",
            output_dir.display()
        )));
    }

    Ok(map_ok && font_ok)
}

#[cfg(test)]
#[path = "../../tests/unit/convert/validate.rs"]
mod tests;
