use super::*;

#[test]
fn hex_escape_decodes_to_its_scalar() {
    assert_eq!(decode_codepoint(r"\0041").unwrap(), 'A');
    assert_eq!(decode_codepoint(r"\011E").unwrap(), 'Ğ');
    assert_eq!(decode_codepoint(r"\e900").unwrap(), '\u{e900}');
}

#[test]
fn literal_character_passes_through() {
    assert_eq!(decode_codepoint("Ø").unwrap(), 'Ø');
    assert_eq!(decode_codepoint("'").unwrap(), '\'');
}

#[test]
fn malformed_value_is_a_decode_error() {
    for raw in [r"\", r"\zz", r"\01g4", "", "ab"] {
        assert!(
            matches!(decode_codepoint(raw), Err(GlyphcastError::Decode(_))),
            "expected decode error for {raw:?}"
        );
    }
}

#[test]
fn escape_outside_unicode_is_a_decode_error() {
    // Beyond U+10FFFF, a surrogate, and a payload that overflows u32.
    for raw in [r"\110000", r"\d800", r"\fffffffff"] {
        assert!(
            matches!(decode_codepoint(raw), Err(GlyphcastError::Decode(_))),
            "expected decode error for {raw:?}"
        );
    }
}

#[test]
fn decode_errors_name_the_offending_value() {
    let err = decode_codepoint(r"\zz").unwrap_err();
    assert!(err.to_string().contains(r"\zz"));
}

#[test]
fn single_quote_is_wrapped_in_double_quotes() {
    assert_eq!(quote_literal('\''), "\"'\"");
}

#[test]
fn every_other_glyph_is_wrapped_in_single_quotes() {
    assert_eq!(quote_literal('A'), "'A'");
    assert_eq!(quote_literal('Ğ'), "'Ğ'");
    assert_eq!(quote_literal('"'), "'\"'");
}

#[test]
fn unquote_strips_exactly_the_stored_pair() {
    assert_eq!(unquote_literal("'A'"), "A");
    assert_eq!(unquote_literal("\"'\""), "'");
    assert_eq!(unquote_literal("'Ğ'"), "Ğ");
}
