//! A GraphQL parser for schema documents, executable documents, and
//! documents that mix both.
//!
//! Comments are kept as trivia on the token that follows them, which lets the
//! parser recover comment-style descriptions (`# ...` lines directly above a
//! definition) alongside string-literal descriptions.
//!
//! ```
//! use typegraph_parser::ast;
//!
//! let result = typegraph_parser::parse_document(
//!     "# The root query type.\ntype Query { hello: String }",
//!     None,
//! );
//! let doc = result.valid_ast().unwrap();
//! let ast::Definition::ObjectType(query) = &doc.definitions[0] else {
//!     panic!("expected an object type");
//! };
//! assert_eq!(query.description.as_deref(), Some("The root query type."));
//! ```

pub mod ast;
mod graphql_error_note;
mod graphql_error_note_kind;
mod graphql_parse_error;
mod graphql_parse_error_kind;
mod graphql_parser;
mod graphql_source_span;
mod graphql_string_parsing_error;
mod graphql_token_stream;
mod parse_result;
mod source_position;
pub mod token;
pub mod token_source;

pub use graphql_error_note::GraphQLErrorNote;
pub use graphql_error_note::GraphQLErrorNotes;
pub use graphql_error_note_kind::GraphQLErrorNoteKind;
pub use graphql_parse_error::GraphQLParseError;
pub use graphql_parse_error_kind::GraphQLParseErrorKind;
pub use graphql_parser::GraphQLParser;
pub use graphql_source_span::GraphQLSourceSpan;
pub use graphql_string_parsing_error::GraphQLStringParsingError;
pub use graphql_token_stream::GraphQLTokenStream;
pub use parse_result::ParseResult;
pub use smallvec::smallvec;
pub use smallvec::SmallVec;
pub use source_position::SourcePosition;

use std::path::Path;

/// Parses `source` into a [`ast::Document`]. When `file_path` is given, every
/// span and error is tagged with it.
pub fn parse_document(source: &str, file_path: Option<&Path>) -> ParseResult<ast::Document> {
    match file_path {
        Some(path) => GraphQLParser::with_file_path(source, path).parse_document(),
        None => GraphQLParser::new(source).parse_document(),
    }
}

#[cfg(test)]
mod tests;
