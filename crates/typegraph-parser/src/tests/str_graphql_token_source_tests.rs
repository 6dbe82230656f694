//! Tests for `StrGraphQLTokenSource`.

use crate::tests::utils::token_kinds;
use crate::token::GraphQLTokenKind;
use crate::token::GraphQLTriviaToken;
use crate::token_source::StrGraphQLTokenSource;
use std::borrow::Cow;
use std::path::Path;

#[test]
fn lexes_punctuators_and_names() {
    assert_eq!(
        token_kinds("{ user(id: $id) @live { ...F } }"),
        vec![
            GraphQLTokenKind::CurlyBraceOpen,
            GraphQLTokenKind::name_borrowed("user"),
            GraphQLTokenKind::ParenOpen,
            GraphQLTokenKind::name_borrowed("id"),
            GraphQLTokenKind::Colon,
            GraphQLTokenKind::Dollar,
            GraphQLTokenKind::name_borrowed("id"),
            GraphQLTokenKind::ParenClose,
            GraphQLTokenKind::At,
            GraphQLTokenKind::name_borrowed("live"),
            GraphQLTokenKind::CurlyBraceOpen,
            GraphQLTokenKind::Ellipsis,
            GraphQLTokenKind::name_borrowed("F"),
            GraphQLTokenKind::CurlyBraceClose,
            GraphQLTokenKind::CurlyBraceClose,
            GraphQLTokenKind::Eof,
        ],
    );
}

#[test]
fn lexes_keyword_literals_distinctly() {
    assert_eq!(
        token_kinds("true false null trueish"),
        vec![
            GraphQLTokenKind::True,
            GraphQLTokenKind::False,
            GraphQLTokenKind::Null,
            GraphQLTokenKind::name_borrowed("trueish"),
            GraphQLTokenKind::Eof,
        ],
    );
}

#[test]
fn lexes_numbers() {
    assert_eq!(
        token_kinds("0 -12 3.5 1e10 -2.5E-3"),
        vec![
            GraphQLTokenKind::IntValue(Cow::Borrowed("0")),
            GraphQLTokenKind::IntValue(Cow::Borrowed("-12")),
            GraphQLTokenKind::FloatValue(Cow::Borrowed("3.5")),
            GraphQLTokenKind::FloatValue(Cow::Borrowed("1e10")),
            GraphQLTokenKind::FloatValue(Cow::Borrowed("-2.5E-3")),
            GraphQLTokenKind::Eof,
        ],
    );
}

/// <https://spec.graphql.org/October2021/#sec-Int-Value>
#[test]
fn rejects_leading_zeros() {
    let kinds = token_kinds("012");
    let GraphQLTokenKind::Error { message, error_notes } = &kinds[0] else {
        panic!("expected an error token, got {:?}", kinds[0]);
    };
    assert!(message.contains("leading zeros"), "{message}");
    assert_eq!(error_notes.len(), 1);
}

#[test]
fn rejects_name_directly_after_number() {
    let kinds = token_kinds("123abc");
    assert!(kinds[0].is_error());
    assert_eq!(kinds[1], GraphQLTokenKind::Eof);
}

#[test]
fn rejects_exponent_without_digits() {
    assert!(token_kinds("1e")[0].is_error());
}

#[test]
fn lexes_strings_and_block_strings_raw() {
    assert_eq!(
        token_kinds(r#""a\"b" """block "" text""""#),
        vec![
            GraphQLTokenKind::StringValue(Cow::Borrowed(r#""a\"b""#)),
            GraphQLTokenKind::StringValue(Cow::Borrowed(r#""""block "" text""""#)),
            GraphQLTokenKind::Eof,
        ],
    );
}

#[test]
fn unterminated_string_is_an_error() {
    let kinds = token_kinds("\"abc");
    let GraphQLTokenKind::Error { message, .. } = &kinds[0] else {
        panic!("expected an error token");
    };
    assert_eq!(message, "Unterminated string literal");
}

#[test]
fn newline_in_single_line_string_is_an_error() {
    let kinds = token_kinds("\"abc\ndef\"");
    assert!(kinds[0].is_error());
}

#[test]
fn unterminated_block_string_is_an_error() {
    let kinds = token_kinds("\"\"\"abc");
    let GraphQLTokenKind::Error { message, .. } = &kinds[0] else {
        panic!("expected an error token");
    };
    assert_eq!(message, "Unterminated block string");
}

#[test]
fn dots() {
    assert!(token_kinds(".")[0].is_error());
    assert!(token_kinds("..")[0].is_error());
    assert_eq!(token_kinds("...")[0], GraphQLTokenKind::Ellipsis);
}

#[test]
fn invalid_character() {
    let kinds = token_kinds("?");
    let GraphQLTokenKind::Error { message, .. } = &kinds[0] else {
        panic!("expected an error token");
    };
    assert_eq!(message, "Unexpected character `?`");
}

#[test]
fn invisible_character_is_described_by_code_point() {
    let kinds = token_kinds("\u{7}");
    let GraphQLTokenKind::Error { message, .. } = &kinds[0] else {
        panic!("expected an error token");
    };
    assert!(message.contains("U+0007"), "{message}");
}

#[test]
fn comments_and_commas_are_trivia() {
    let tokens: Vec<_> = StrGraphQLTokenSource::new("a, # note\nb").collect();
    assert_eq!(tokens.len(), 3);

    let trivia = &tokens[1].preceding_trivia;
    assert!(matches!(trivia[0], GraphQLTriviaToken::Comma { .. }));
    let GraphQLTriviaToken::Comment { value, span } = &trivia[1] else {
        panic!("expected a comment");
    };
    assert_eq!(value, " note");
    assert_eq!(span.start_inclusive.line(), 0);
    assert_eq!(span.start_inclusive.col_utf8(), 3);
}

/// Trivia before EOF lands on the `Eof` token.
#[test]
fn trailing_comment_attaches_to_eof() {
    let tokens: Vec<_> = StrGraphQLTokenSource::new("a # trailing").collect();
    assert_eq!(tokens[1].kind, GraphQLTokenKind::Eof);
    assert_eq!(tokens[1].preceding_comments().count(), 1);
}

#[test]
fn tracks_lines_across_line_terminators() {
    let tokens: Vec<_> = StrGraphQLTokenSource::new("a\r\nb\rc\nd").collect();
    let lines: Vec<usize> = tokens
        .iter()
        .map(|token| token.span.start_inclusive.line())
        .collect();
    assert_eq!(lines, vec![0, 1, 2, 3, 3]);
    assert_eq!(tokens[3].span.start_inclusive.col_utf8(), 0);
}

#[test]
fn tracks_utf8_and_utf16_columns() {
    let tokens: Vec<_> = StrGraphQLTokenSource::new("\"\u{1F600}\" x").collect();
    let x_start = &tokens[1].span.start_inclusive;
    assert_eq!(x_start.col_utf8(), 4);
    assert_eq!(x_start.col_utf16(), Some(5));
    assert_eq!(x_start.byte_offset(), 7);
}

#[test]
fn skips_byte_order_mark() {
    assert_eq!(
        token_kinds("\u{FEFF}type"),
        vec![GraphQLTokenKind::name_borrowed("type"), GraphQLTokenKind::Eof],
    );
}

#[test]
fn stops_after_eof() {
    let mut source = StrGraphQLTokenSource::new("");
    assert!(matches!(source.next().map(|t| t.kind), Some(GraphQLTokenKind::Eof)));
    assert!(source.next().is_none());
}

#[test]
fn spans_carry_file_path() {
    let path = Path::new("schema.graphql");
    let tokens: Vec<_> = StrGraphQLTokenSource::with_file_path("type", path).collect();
    assert_eq!(tokens[0].span.file_path(), Some(path));
}
