//! Tests for `GraphQLParseError` rendering.

use std::path::Path;

use crate::parse_document;

#[test]
fn format_oneline_uses_file_path_and_one_based_position() {
    let result = parse_document("type Q {", Some(Path::new("schema.graphql")));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(
        result.errors[0].format_oneline(),
        "schema.graphql:1:9: error: unclosed `{`",
    );
}

#[test]
fn format_oneline_without_file_path() {
    let result = parse_document("type Q { f Int }", None);
    assert_eq!(
        result.errors[0].format_oneline(),
        "<input>:1:12: error: expected `:`, found `Int`",
    );
}

#[test]
fn format_detailed_includes_snippet_and_notes() {
    let source = "type Q {\n  f: Int\n";
    let result = parse_document(source, None);
    let detailed = result.errors[0].format_detailed(Some(source));

    assert!(detailed.starts_with("error: unclosed `{`\n"), "{detailed}");
    assert!(detailed.contains("  --> <input>:2:9\n"), "{detailed}");
    assert!(detailed.contains(" 2 |   f: Int\n"), "{detailed}");
    assert!(
        detailed.contains("   = note: opening `{` in object type definition here\n"),
        "{detailed}",
    );
    assert!(detailed.contains(" 1 | type Q {\n"), "{detailed}");
}

#[test]
fn format_detailed_without_source_omits_snippets() {
    let result = parse_document("enum E { A true }", None);
    let detailed = result.errors[0].format_detailed(None);
    assert!(!detailed.contains(" | "), "{detailed}");
    assert!(detailed.contains("= spec: "), "{detailed}");
}

#[test]
fn lexer_error_notes_are_rendered() {
    let result = parse_document("type Q { f: Int = 012 }", None);
    let detailed = result.errors[0].format_detailed(None);
    assert!(detailed.contains("leading zeros"), "{detailed}");
    assert!(detailed.contains("= spec: https://spec.graphql.org/"), "{detailed}");
}
