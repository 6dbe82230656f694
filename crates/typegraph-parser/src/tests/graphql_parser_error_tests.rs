//! Tests for error reporting and recovery.

use crate::ast;
use crate::tests::utils::parse_errors;
use crate::GraphQLParseErrorKind;
use crate::GraphQLParser;

#[test]
fn unclosed_brace_points_at_opening_delimiter() {
    let errors = parse_errors("type Query {\n  f: Int\n");
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].kind(),
        &GraphQLParseErrorKind::UnclosedDelimiter {
            delimiter: "{".to_string(),
        },
    );
    let note = &errors[0].notes()[0];
    assert_eq!(note.message, "opening `{` in object type definition here");
    let note_span = note.span.as_ref().map(|span| span.start_inclusive.col_utf8());
    assert_eq!(note_span, Some(11));
}

#[test]
fn unexpected_token_names_what_was_found() {
    let errors = parse_errors("type Query { f Int }");
    assert_eq!(errors[0].message(), "expected `:`, found `Int`");
    assert!(matches!(
        errors[0].kind(),
        GraphQLParseErrorKind::UnexpectedToken { found, .. } if found == "Int"
    ));
}

#[test]
fn unexpected_end_of_input() {
    let errors = parse_errors("type Query { f: }");
    assert!(matches!(errors[0].kind(), GraphQLParseErrorKind::UnexpectedToken { .. }));

    let errors = parse_errors("type Query { f:");
    assert!(matches!(errors[0].kind(), GraphQLParseErrorKind::UnexpectedEof { .. }));
}

/// A broken definition does not hide the ones after it.
#[test]
fn recovers_at_next_definition() {
    let result = GraphQLParser::new("type A { f: }\ntype B { g: Int }\nscalar C").parse_document();
    assert_eq!(result.errors.len(), 1);

    let Some(doc) = result.ast() else {
        panic!("expected a recovered document");
    };
    let names: Vec<&str> = doc
        .definitions
        .iter()
        .filter_map(ast::Definition::type_name)
        .map(ast::Name::as_str)
        .collect();
    assert_eq!(names, vec!["B", "C"]);
}

#[test]
fn reports_errors_in_several_definitions() {
    let errors = parse_errors("type A { f: }\ntype B { g Int }\nenum C { }");
    assert_eq!(errors.len(), 3);
    assert!(matches!(
        errors[2].kind(),
        GraphQLParseErrorKind::InvalidEmptyConstruct { construct } if construct == "enum definition"
    ));
}

#[test]
fn lexer_errors_pass_through() {
    let errors = parse_errors("type Query { f: Int ? }");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind(), &GraphQLParseErrorKind::LexerError);
    assert_eq!(errors[0].message(), "Unexpected character `?`");
}

#[test]
fn field_named_type_is_not_a_recovery_point() {
    let result = GraphQLParser::new("type A {\n  x Int\n  type: String\n}\ntype B { f: Int }")
        .parse_document();
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.ast().map(|doc| doc.definitions.len()), Some(1));
}

#[test]
fn deep_nesting_is_rejected() {
    let depth = 200;
    let source = format!("{{ f(a: {}{}) }}", "[".repeat(depth), "]".repeat(depth));
    let errors = parse_errors(&source);
    assert!(
        errors
            .iter()
            .any(|error| error.message() == "maximum nesting depth exceeded"),
        "{errors:?}",
    );
}

#[test]
fn recovered_ast_is_not_valid() {
    let result = GraphQLParser::new("type A {").parse_document();
    assert!(!result.is_ok());
    assert!(result.valid_ast().is_none());
    assert!(result.ast().is_some());
}
