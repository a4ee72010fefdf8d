use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::foundation::error::{GlyphcastError, GlyphcastResult};
use crate::mapfile::decode::{decode_codepoint, quote_literal};

/// Element name → quote-wrapped glyph literal.
///
/// `BTreeMap` iteration gives the ascending name order the renderer relies on
/// for reproducible output sets.
pub type ElementMap = BTreeMap<String, String>;

/// Escape prefix of the bundled third-party icon range that sometimes appears
/// in legacy stylesheets; the font under conversion does not contain those
/// glyphs, so matching entries are skipped.
const FOREIGN_ESCAPE_PREFIX: &str = "\\f";

/// Supported map-file formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MapFormat {
    /// Line-oriented stylesheet entries of the form `name: "code",`.
    Legacy,
    /// JSON document with a nested `name: code` object.
    Json,
}

impl MapFormat {
    /// Select the format from a map file's extension: `.json` is JSON,
    /// everything else is the legacy stylesheet form.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Legacy,
        }
    }

    /// Map-file extension expected for this format.
    pub fn expected_extension(self) -> &'static str {
        match self {
            Self::Legacy => "scss",
            Self::Json => "json",
        }
    }
}

fn legacy_entry() -> &'static Regex {
    static LEGACY_ENTRY: OnceLock<Regex> = OnceLock::new();
    LEGACY_ENTRY
        .get_or_init(|| Regex::new(r#"(?m)^(.*?):\s*"([^"\n]*)","#).expect("legacy entry pattern"))
}

/// Parse raw map-file contents into an [`ElementMap`].
///
/// Pure with respect to its arguments: the same input always yields the same
/// map. A structurally valid source with zero entries parses to an empty map;
/// only content that matches neither structural shape is a parse error.
pub fn parse_map(raw: &str, format: MapFormat) -> GlyphcastResult<ElementMap> {
    match format {
        MapFormat::Json => parse_json(raw),
        MapFormat::Legacy => parse_legacy(raw),
    }
}

fn parse_json(raw: &str) -> GlyphcastResult<ElementMap> {
    let doc: serde_json::Value = serde_json::from_str(raw)
        .map_err(|e| GlyphcastError::parse(format!("map file is not valid JSON: {e}")))?;
    let serde_json::Value::Object(root) = &doc else {
        return Err(GlyphcastError::parse("JSON map root is not an object"));
    };

    let icons = match root.get("icons") {
        Some(serde_json::Value::Object(icons)) => icons,
        Some(_) => {
            return Err(GlyphcastError::parse("'icons' field is not an object"));
        }
        None => root
            .values()
            .find_map(|v| v.as_object())
            .ok_or_else(|| GlyphcastError::parse("JSON map contains no nested icon object"))?,
    };

    let mut map = ElementMap::new();
    for (name, code) in icons {
        let code = code.as_str().ok_or_else(|| {
            GlyphcastError::parse(format!("icon '{name}' has a non-string codepoint"))
        })?;
        let ch = decode_codepoint(code)?;
        map.insert(name.clone(), quote_literal(ch));
    }
    Ok(map)
}

fn parse_legacy(raw: &str) -> GlyphcastResult<ElementMap> {
    let mut map = ElementMap::new();
    for caps in legacy_entry().captures_iter(raw) {
        let name = caps[1].trim_start();
        let code = caps[2].trim_start();
        if name.is_empty() {
            continue;
        }
        if code.starts_with(FOREIGN_ESCAPE_PREFIX) {
            tracing::debug!(name, code, "skipping foreign icon-range entry");
            continue;
        }
        let ch = decode_codepoint(code)?;
        map.insert(name.to_string(), quote_literal(ch));
    }
    Ok(map)
}

#[cfg(test)]
#[path = "../../tests/unit/mapfile/parse.rs"]
mod tests;
