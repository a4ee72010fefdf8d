use crate::foundation::error::{GlyphcastError, GlyphcastResult};

/// Decode a raw map-file codepoint value into its literal character.
///
/// Map files carry codepoints either as a literal character or in the
/// stylesheet escape form `\<hex>` (`\011E` decodes to `Ğ`). A backslash
/// escape whose payload is not hexadecimal, names no Unicode scalar, or a
/// raw value that is not exactly one character, is a decode error.
pub fn decode_codepoint(raw: &str) -> GlyphcastResult<char> {
    if let Some(hex) = raw.strip_prefix('\\') {
        if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(GlyphcastError::decode(format!(
                "'{raw}' is not a hexadecimal escape sequence"
            )));
        }
        let scalar = u32::from_str_radix(hex, 16).map_err(|e| {
            GlyphcastError::decode(format!("escape '{raw}' does not fit a codepoint: {e}"))
        })?;
        return char::from_u32(scalar).ok_or_else(|| {
            GlyphcastError::decode(format!(
                "escape '{raw}' names no Unicode scalar (U+{scalar:04X})"
            ))
        });
    }

    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(GlyphcastError::decode(format!(
            "'{raw}' is neither a single character nor an escape sequence"
        ))),
    }
}

/// Wrap a decoded glyph in its shell-literal quoting style.
///
/// A single-quote glyph is wrapped in double quotes; every other glyph is
/// wrapped in single quotes. Stored map values keep this form so they can be
/// pasted verbatim onto a text command line.
pub fn quote_literal(ch: char) -> String {
    if ch == '\'' {
        format!("\"{ch}\"")
    } else {
        format!("'{ch}'")
    }
}

/// Strip the quote pair added by [`quote_literal`].
///
/// The structured process invocation passes the bare glyph as a discrete
/// argument, so the stored quoting is removed again at the rasterizer
/// boundary.
pub fn unquote_literal(literal: &str) -> &str {
    literal
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .or_else(|| {
            literal
                .strip_prefix('"')
                .and_then(|s| s.strip_suffix('"'))
        })
        .unwrap_or(literal)
}

#[cfg(test)]
#[path = "../../tests/unit/mapfile/decode.rs"]
mod tests;
