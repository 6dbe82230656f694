//! Helpers shared by the parser tests.

use crate::ast;
use crate::token::GraphQLTokenKind;
use crate::token_source::StrGraphQLTokenSource;
use crate::GraphQLParseError;
use crate::GraphQLParser;

/// Parses `source`, panicking with the rendered errors if there were any.
pub fn parse_ok(source: &str) -> ast::Document {
    let result = GraphQLParser::new(source).parse_document();
    if result.has_errors() {
        panic!("unexpected parse errors:\n{}", result.format_errors(Some(source)));
    }
    result.into_ast().unwrap_or_default()
}

/// Parses `source` and returns its errors, panicking if there were none.
pub fn parse_errors(source: &str) -> Vec<GraphQLParseError> {
    let result = GraphQLParser::new(source).parse_document();
    assert!(result.has_errors(), "expected parse errors for:\n{source}");
    result.errors
}

pub fn token_kinds(source: &str) -> Vec<GraphQLTokenKind<'_>> {
    StrGraphQLTokenSource::new(source).map(|token| token.kind).collect()
}

pub fn only_object_type(doc: &ast::Document) -> &ast::ObjectTypeDefinition {
    match doc.definitions.as_slice() {
        [ast::Definition::ObjectType(def)] => def,
        other => panic!("expected a single object type definition, got {other:?}"),
    }
}
