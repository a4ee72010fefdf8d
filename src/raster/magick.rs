use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::foundation::error::{GlyphcastError, GlyphcastResult};
use crate::raster::backend::{GlyphJob, Rasterizer};

/// Rasterizer backend driving the system ImageMagick binaries.
///
/// Per-element rendering spawns `convert`; the whole-directory resize and
/// trim passes spawn `mogrify` over an explicit, sorted file list. Every
/// logical parameter travels as a discrete process argument; no shell is
/// involved, so glyphs need no quoting or locale-dependent encoding.
#[derive(Clone, Copy, Debug, Default)]
pub struct MagickRasterizer;

impl Rasterizer for MagickRasterizer {
    fn rasterize(&mut self, job: &GlyphJob<'_>) -> GlyphcastResult<()> {
        run_magick(convert_command(job))
    }

    fn resize(&mut self, dir: &Path, target: u32, by_width: bool) -> GlyphcastResult<()> {
        let files = dir_images(dir)?;
        if files.is_empty() {
            tracing::debug!(dir = %dir.display(), "no images to resize");
            return Ok(());
        }
        run_magick(mogrify_resize_command(&files, target, by_width))
    }

    fn trim(&mut self, dir: &Path) -> GlyphcastResult<()> {
        let files = dir_images(dir)?;
        if files.is_empty() {
            tracing::debug!(dir = %dir.display(), "no images to trim");
            return Ok(());
        }
        run_magick(mogrify_trim_command(&files))
    }
}

/// Return `true` when ImageMagick's `convert` can be invoked from `PATH`.
pub fn is_magick_on_path() -> bool {
    Command::new("convert")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

fn convert_command(job: &GlyphJob<'_>) -> Command {
    let mut cmd = Command::new("convert");
    cmd.arg("-font")
        .arg(job.font_path)
        .args(["-background", "none"])
        .args(["-fill", job.fill_color])
        .args(["-gravity", "center"])
        .args(["-pointsize", &job.point_size.to_string()])
        .args(["-size", &format!("{0}x{0}", job.canvas_size)])
        .arg(format!("caption:{}", job.glyph))
        .arg(job.output_path);
    cmd
}

fn mogrify_resize_command(files: &[PathBuf], target: u32, by_width: bool) -> Command {
    // `x<N>` fits the height, `<N>x` the width; both preserve aspect ratio.
    let geometry = if by_width {
        format!("{target}x")
    } else {
        format!("x{target}")
    };
    let mut cmd = Command::new("mogrify");
    cmd.args(["-unsharp", "0x1"]).args(["-resize", &geometry]);
    cmd.args(files);
    cmd
}

fn mogrify_trim_command(files: &[PathBuf]) -> Command {
    let mut cmd = Command::new("mogrify");
    cmd.arg("-trim");
    cmd.args(files);
    cmd
}

fn dir_images(dir: &Path) -> GlyphcastResult<Vec<PathBuf>> {
    let rd = std::fs::read_dir(dir).map_err(|e| {
        GlyphcastError::render(format!("read output directory '{}': {e}", dir.display()))
    })?;
    let mut files: Vec<PathBuf> = rd
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.is_file().then_some(path)
        })
        .collect();
    files.sort();
    Ok(files)
}

fn run_magick(mut cmd: Command) -> GlyphcastResult<()> {
    let program = cmd.get_program().to_string_lossy().into_owned();
    tracing::debug!(command = ?cmd, "invoking imagemagick");

    let output = cmd
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| {
            GlyphcastError::render(format!(
                "failed to spawn {program} (is ImageMagick installed and on PATH?): {e}"
            ))
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GlyphcastError::render(format!(
            "{program} exited with status {}: {}",
            output.status,
            stderr.trim()
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/raster/magick.rs"]
mod tests;
