use super::*;

const LEGACY_SAMPLE: &str = r#"
$ship-icons: (
  x-wing: "\0058",
    tie-fighter: "\0074",
  hutt: "Ø",
  quote: "'",
  external-badge: "\f005",
);
"#;

#[test]
fn legacy_parses_entries_and_applies_quoting() {
    let map = parse_map(LEGACY_SAMPLE, MapFormat::Legacy).unwrap();
    assert_eq!(map.get("x-wing").unwrap(), "'X'");
    assert_eq!(map.get("tie-fighter").unwrap(), "'t'");
    assert_eq!(map.get("hutt").unwrap(), "'Ø'");
    assert_eq!(map.get("quote").unwrap(), "\"'\"");
}

#[test]
fn legacy_skips_foreign_icon_range_entries() {
    let map = parse_map(LEGACY_SAMPLE, MapFormat::Legacy).unwrap();
    assert!(!map.contains_key("external-badge"));
    assert_eq!(map.len(), 4);
}

#[test]
fn legacy_with_no_entries_is_an_empty_map() {
    let map = parse_map("// nothing here\n", MapFormat::Legacy).unwrap();
    assert!(map.is_empty());
}

#[test]
fn json_takes_entries_from_the_icons_field() {
    let map = parse_map(r#"{"icons": {"x-wing": "\\0041"}}"#, MapFormat::Json).unwrap();
    assert_eq!(map.get("x-wing").unwrap(), "'A'");
}

#[test]
fn json_falls_back_to_the_first_nested_object() {
    let raw = r#"{"meta": 3, "ships": {"y-wing": "\\0059"}}"#;
    let map = parse_map(raw, MapFormat::Json).unwrap();
    assert_eq!(map.get("y-wing").unwrap(), "'Y'");
}

#[test]
fn json_with_empty_icons_is_an_empty_map() {
    let map = parse_map(r#"{"icons": {}}"#, MapFormat::Json).unwrap();
    assert!(map.is_empty());
}

#[test]
fn invalid_json_is_a_parse_error() {
    assert!(matches!(
        parse_map("not json at all {{{", MapFormat::Json),
        Err(GlyphcastError::Parse(_))
    ));
}

#[test]
fn non_object_json_root_is_a_parse_error() {
    assert!(matches!(
        parse_map("[1, 2, 3]", MapFormat::Json),
        Err(GlyphcastError::Parse(_))
    ));
}

#[test]
fn json_without_a_nested_object_is_a_parse_error() {
    assert!(matches!(
        parse_map(r#"{"a": 1, "b": "x"}"#, MapFormat::Json),
        Err(GlyphcastError::Parse(_))
    ));
}

#[test]
fn non_string_codepoint_is_a_parse_error() {
    let err = parse_map(r#"{"icons": {"x-wing": 65}}"#, MapFormat::Json).unwrap_err();
    assert!(matches!(&err, GlyphcastError::Parse(_)));
    assert!(err.to_string().contains("x-wing"));
}

#[test]
fn malformed_escape_surfaces_as_a_decode_error() {
    assert!(matches!(
        parse_map(r#"{"icons": {"bad": "\\xyz"}}"#, MapFormat::Json),
        Err(GlyphcastError::Decode(_))
    ));
}

#[test]
fn parsing_is_deterministic() {
    let first = parse_map(LEGACY_SAMPLE, MapFormat::Legacy).unwrap();
    let second = parse_map(LEGACY_SAMPLE, MapFormat::Legacy).unwrap();
    assert_eq!(first, second);
}

#[test]
fn format_is_selected_by_extension() {
    use std::path::Path;

    assert_eq!(MapFormat::from_path(Path::new("ships-map.json")), MapFormat::Json);
    assert_eq!(MapFormat::from_path(Path::new("ships-map.JSON")), MapFormat::Json);
    assert_eq!(MapFormat::from_path(Path::new("ships-map.scss")), MapFormat::Legacy);
    assert_eq!(MapFormat::from_path(Path::new("ships-map")), MapFormat::Legacy);
}
