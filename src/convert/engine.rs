use std::fs;
use std::path::PathBuf;

use anyhow::Context as _;

use crate::convert::render::render_all;
use crate::convert::request::ConversionRequest;
use crate::convert::validate::validate;
use crate::foundation::error::GlyphcastResult;
use crate::mapfile::parse::{ElementMap, MapFormat, parse_map};
use crate::raster::backend::Rasterizer;

/// Drives one conversion run: validate → parse → render → post-process.
///
/// The engine owns the run inputs, the map parsed from them, and the injected
/// rasterizer. Control flow is strictly linear; no stage calls back into an
/// earlier one, and the map is never mutated after parsing.
pub struct ConversionEngine<R: Rasterizer> {
    map_path: PathBuf,
    font_path: PathBuf,
    output_dir: PathBuf,
    format: MapFormat,
    element_map: ElementMap,
    rasterizer: R,
}

impl<R: Rasterizer> ConversionEngine<R> {
    /// Create an engine over the given run inputs.
    ///
    /// The map format is selected from the map file's extension.
    pub fn new(
        map_path: impl Into<PathBuf>,
        font_path: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        rasterizer: R,
    ) -> Self {
        let map_path = map_path.into();
        let format = MapFormat::from_path(&map_path);
        Self {
            map_path,
            font_path: font_path.into(),
            output_dir: output_dir.into(),
            format,
            element_map: ElementMap::new(),
            rasterizer,
        }
    }

    /// The parsed element map; empty until [`run`](Self::run) has parsed it.
    pub fn element_map(&self) -> &ElementMap {
        &self.element_map
    }

    /// Map format selected for this run.
    pub fn format(&self) -> MapFormat {
        self.format
    }

    /// The injected rasterizer.
    pub fn rasterizer(&self) -> &R {
        &self.rasterizer
    }

    /// Execute the full run.
    ///
    /// Returns `Ok(false)` without touching the map file when input
    /// validation fails; any later stage failure is an error. Resize runs
    /// before trim when both are requested.
    #[tracing::instrument(skip(self, request), fields(map = %self.map_path.display()))]
    pub fn run(&mut self, request: &ConversionRequest) -> GlyphcastResult<bool> {
        if !validate(&self.map_path, &self.font_path, &self.output_dir, self.format)? {
            return Ok(false);
        }

        let raw = fs::read_to_string(&self.map_path)
            .with_context(|| format!("read map file '{}'", self.map_path.display()))?;
        self.element_map = parse_map(&raw, self.format)?;
        if self.element_map.is_empty() {
            tracing::warn!("map file yielded no elements; nothing to render");
        }

        render_all(
            &self.element_map,
            request,
            &self.font_path,
            &self.output_dir,
            &mut self.rasterizer,
        )?;

        if let Some(target) = request.resize_to {
            self.rasterizer
                .resize(&self.output_dir, target, request.resize_by_width)?;
        }
        if request.trim {
            self.rasterizer.trim(&self.output_dir)?;
        }
        Ok(true)
    }
}
