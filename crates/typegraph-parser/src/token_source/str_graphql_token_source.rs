//! A [`GraphQLTokenSource`](crate::token_source::GraphQLTokenSource) that
//! lexes from a `&str` input.
//!
//! Names, numbers, strings and comments borrow directly from the source
//! text. Positions are tracked as 0-based lines plus both UTF-8 character
//! and UTF-16 code unit columns. Invalid input produces `Error` tokens so
//! the parser can keep going and report more than one problem.
//!
//! ```rust
//! use typegraph_parser::token::GraphQLTokenKind;
//! use typegraph_parser::token_source::StrGraphQLTokenSource;
//!
//! let kinds: Vec<_> = StrGraphQLTokenSource::new("{ name }")
//!     .map(|token| token.kind)
//!     .collect();
//! assert_eq!(kinds, vec![
//!     GraphQLTokenKind::CurlyBraceOpen,
//!     GraphQLTokenKind::name_borrowed("name"),
//!     GraphQLTokenKind::CurlyBraceClose,
//!     GraphQLTokenKind::Eof,
//! ]);
//! ```

use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token::GraphQLTriviaToken;
use crate::token::GraphQLTriviaTokenVec;
use crate::GraphQLErrorNote;
use crate::GraphQLErrorNotes;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;
use smallvec::smallvec;
use std::borrow::Cow;
use std::path::Path;

pub struct StrGraphQLTokenSource<'src> {
    source: &'src str,

    /// The remaining text to lex is `&source[curr_byte_offset..]`.
    curr_byte_offset: usize,

    curr_line: usize,
    curr_col_utf8: usize,
    curr_col_utf16: usize,

    /// Set after a `\r` so that a following `\n` does not count as a second
    /// line break.
    last_char_was_cr: bool,

    /// Comments and commas seen since the last emitted token.
    pending_trivia: GraphQLTriviaTokenVec<'src>,

    finished: bool,
    file_path: Option<&'src Path>,
}

impl<'src> StrGraphQLTokenSource<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 0,
            curr_col_utf8: 0,
            curr_col_utf16: 0,
            last_char_was_cr: false,
            pending_trivia: smallvec![],
            finished: false,
            file_path: None,
        }
    }

    /// Creates a token source whose spans all carry `path`.
    pub fn with_file_path(source: &'src str, path: &'src Path) -> Self {
        Self {
            file_path: Some(path),
            ..Self::new(source)
        }
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(
            self.curr_line,
            self.curr_col_utf8,
            Some(self.curr_col_utf16),
            self.curr_byte_offset,
        )
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn peek_char_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes one character, updating line and column tracking. `\n`,
    /// `\r` and `\r\n` each count as a single line break.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        match ch {
            '\n' if self.last_char_was_cr => {
                self.last_char_was_cr = false;
            },
            '\n' | '\r' => {
                self.curr_line += 1;
                self.curr_col_utf8 = 0;
                self.curr_col_utf16 = 0;
                self.last_char_was_cr = ch == '\r';
            },
            _ => {
                self.curr_col_utf8 += 1;
                self.curr_col_utf16 += ch.len_utf16();
                self.last_char_was_cr = false;
            },
        }
        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    fn consume_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.peek_char() {
            if !pred(ch) {
                break;
            }
            self.consume();
        }
    }

    fn make_span(&self, start: SourcePosition) -> GraphQLSourceSpan {
        let end = self.curr_position();
        match self.file_path {
            Some(path) => GraphQLSourceSpan::with_file(start, end, path.to_path_buf()),
            None => GraphQLSourceSpan::new(start, end),
        }
    }

    // =========================================================================
    // Token creation helpers
    // =========================================================================

    fn make_token(
        &mut self,
        kind: GraphQLTokenKind<'src>,
        span: GraphQLSourceSpan,
    ) -> GraphQLToken<'src> {
        GraphQLToken {
            kind,
            preceding_trivia: std::mem::take(&mut self.pending_trivia),
            span,
        }
    }

    fn make_error_token(
        &mut self,
        start: SourcePosition,
        message: impl Into<String>,
        error_notes: GraphQLErrorNotes,
    ) -> GraphQLToken<'src> {
        let span = self.make_span(start);
        self.make_token(GraphQLTokenKind::error(message, error_notes), span)
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    fn next_token(&mut self) -> GraphQLToken<'src> {
        loop {
            self.consume_while(|ch| matches!(ch, ' ' | '\t' | '\n' | '\r' | '\u{FEFF}'));
            let start = self.curr_position();

            let Some(ch) = self.peek_char() else {
                let span = self.make_span(start);
                return self.make_token(GraphQLTokenKind::Eof, span);
            };

            if let Some(kind) = punctuator_kind(ch) {
                self.consume();
                let span = self.make_span(start);
                return self.make_token(kind, span);
            }

            match ch {
                '#' => self.lex_comment(start),
                ',' => {
                    self.consume();
                    let span = self.make_span(start);
                    self.pending_trivia.push(GraphQLTriviaToken::Comma { span });
                },
                '.' => return self.lex_ellipsis(start),
                '"' => return self.lex_string(start),
                c if is_name_start(c) => return self.lex_name(start),
                c if c == '-' || c.is_ascii_digit() => return self.lex_number(start),
                _ => return self.lex_invalid_character(start),
            }
        }
    }

    /// A comment runs from `#` to the end of the line and is queued as
    /// trivia for the next token.
    fn lex_comment(&mut self, start: SourcePosition) {
        self.consume();
        let content_start = self.curr_byte_offset;
        let content_len =
            memchr::memchr2(b'\n', b'\r', self.remaining().as_bytes())
                .unwrap_or(self.remaining().len());
        let content = &self.source[content_start..content_start + content_len];

        // Comments never contain line breaks, so the columns can be advanced
        // in one step.
        self.curr_col_utf8 += content.chars().count();
        self.curr_col_utf16 += content.encode_utf16().count();
        self.curr_byte_offset += content_len;
        self.last_char_was_cr = false;

        let span = self.make_span(start);
        self.pending_trivia.push(GraphQLTriviaToken::Comment {
            value: Cow::Borrowed(content),
            span,
        });
    }

    fn lex_ellipsis(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        if self.remaining().starts_with("...") {
            self.consume();
            self.consume();
            self.consume();
            let span = self.make_span(start);
            return self.make_token(GraphQLTokenKind::Ellipsis, span);
        }

        if self.remaining().starts_with("..") {
            self.consume();
            self.consume();
            return self.make_error_token(
                start,
                "Unexpected `..` (use `...` for spread operator)",
                smallvec![GraphQLErrorNote::help(
                    "Add one more `.` to form the spread operator `...`",
                )],
            );
        }

        self.consume();
        self.make_error_token(start, "Unexpected `.`", smallvec![])
    }

    /// Names match `/[_A-Za-z][_0-9A-Za-z]*/`. `true`, `false` and `null`
    /// get their own token kinds.
    fn lex_name(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let name_start = self.curr_byte_offset;
        self.consume_while(is_name_continue);
        let name = &self.source[name_start..self.curr_byte_offset];
        let span = self.make_span(start);

        let kind = match name {
            "true" => GraphQLTokenKind::True,
            "false" => GraphQLTokenKind::False,
            "null" => GraphQLTokenKind::Null,
            _ => GraphQLTokenKind::name_borrowed(name),
        };
        self.make_token(kind, span)
    }

    /// `-? (0 | [1-9][0-9]*) (\.[0-9]+)? ([eE][+-]?[0-9]+)?`
    fn lex_number(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let num_start = self.curr_byte_offset;
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.consume();
        }

        match self.peek_char() {
            Some('0') => {
                self.consume();
                if self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
                    return self.lex_number_error(
                        start,
                        num_start,
                        "Invalid number: leading zeros are not allowed",
                        "https://spec.graphql.org/October2021/#sec-Int-Value",
                    );
                }
            },
            Some(ch) if ch.is_ascii_digit() => {
                self.consume_while(|ch| ch.is_ascii_digit());
            },
            _ => return self.make_error_token(start, "Unexpected `-`", smallvec![]),
        }

        if self.peek_char() == Some('.')
            && self.peek_char_nth(1).is_some_and(|ch| ch.is_ascii_digit()) {
            is_float = true;
            self.consume();
            self.consume_while(|ch| ch.is_ascii_digit());
        }

        if matches!(self.peek_char(), Some('e' | 'E')) {
            is_float = true;
            self.consume();
            if matches!(self.peek_char(), Some('+' | '-')) {
                self.consume();
            }
            if !self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
                return self.lex_number_error(
                    start,
                    num_start,
                    "Invalid number: exponent must have at least one digit",
                    "https://spec.graphql.org/October2021/#sec-Float-Value",
                );
            }
            self.consume_while(|ch| ch.is_ascii_digit());
        }

        // A number may not be directly followed by a name character or `.`
        // (e.g. `123abc`, `1.`).
        if self.peek_char().is_some_and(|ch| ch == '.' || is_name_start(ch)) {
            return self.lex_number_error(
                start,
                num_start,
                "Invalid number: unexpected character after numeric literal",
                "https://spec.graphql.org/October2021/#sec-Int-Value",
            );
        }

        let num_text = &self.source[num_start..self.curr_byte_offset];
        let span = self.make_span(start);
        let kind =
            if is_float {
                GraphQLTokenKind::FloatValue(Cow::Borrowed(num_text))
            } else {
                GraphQLTokenKind::IntValue(Cow::Borrowed(num_text))
            };
        self.make_token(kind, span)
    }

    fn lex_number_error(
        &mut self,
        start: SourcePosition,
        num_start: usize,
        message: &str,
        spec_url: &str,
    ) -> GraphQLToken<'src> {
        self.consume_while(|ch| {
            ch.is_ascii_alphanumeric() || matches!(ch, '.' | '+' | '-' | '_')
        });
        let invalid_text = &self.source[num_start..self.curr_byte_offset];
        self.make_error_token(
            start,
            format!("{message}: `{invalid_text}`"),
            smallvec![GraphQLErrorNote::spec(spec_url)],
        )
    }

    fn lex_string(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let str_start = self.curr_byte_offset;
        if self.remaining().starts_with("\"\"\"") {
            return self.lex_block_string(start, str_start);
        }

        self.consume();
        loop {
            match self.peek_char() {
                None => {
                    let opening_span = self.make_span(start.clone());
                    return self.make_error_token(
                        start,
                        "Unterminated string literal",
                        smallvec![
                            GraphQLErrorNote::general_with_span(
                                "String started here",
                                opening_span,
                            ),
                            GraphQLErrorNote::help("Add closing `\"`"),
                        ],
                    );
                },
                Some('\n' | '\r') => {
                    return self.make_error_token(
                        start,
                        "Unterminated string literal",
                        smallvec![
                            GraphQLErrorNote::general(
                                "Single-line strings cannot contain unescaped newlines",
                            ),
                            GraphQLErrorNote::help(
                                "Use a block string (triple quotes) for multi-line \
                                strings, or escape the newline with `\\n`",
                            ),
                        ],
                    );
                },
                Some('"') => {
                    self.consume();
                    break;
                },
                Some('\\') => {
                    self.consume();
                    if self.peek_char().is_some_and(|ch| ch != '\n' && ch != '\r') {
                        self.consume();
                    }
                },
                Some(_) => {
                    self.consume();
                },
            }
        }

        let string_text = &self.source[str_start..self.curr_byte_offset];
        let span = self.make_span(start);
        self.make_token(GraphQLTokenKind::StringValue(Cow::Borrowed(string_text)), span)
    }

    fn lex_block_string(
        &mut self,
        start: SourcePosition,
        str_start: usize,
    ) -> GraphQLToken<'src> {
        self.consume();
        self.consume();
        self.consume();

        loop {
            if self.remaining().starts_with("\\\"\"\"") {
                for _ in 0..4 {
                    self.consume();
                }
                continue;
            }
            if self.remaining().starts_with("\"\"\"") {
                self.consume();
                self.consume();
                self.consume();
                break;
            }
            if self.consume().is_none() {
                let opening_span = self.make_span(start.clone());
                return self.make_error_token(
                    start,
                    "Unterminated block string",
                    smallvec![
                        GraphQLErrorNote::general_with_span(
                            "Block string started here",
                            opening_span,
                        ),
                        GraphQLErrorNote::help("Add closing `\"\"\"`"),
                    ],
                );
            }
        }

        let string_text = &self.source[str_start..self.curr_byte_offset];
        let span = self.make_span(start);
        self.make_token(GraphQLTokenKind::StringValue(Cow::Borrowed(string_text)), span)
    }

    fn lex_invalid_character(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let description = self.consume().map(describe_char).unwrap_or_default();
        self.make_error_token(
            start,
            format!("Unexpected character {description}"),
            smallvec![],
        )
    }
}

impl<'src> Iterator for StrGraphQLTokenSource<'src> {
    type Item = GraphQLToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if matches!(token.kind, GraphQLTokenKind::Eof) {
            self.finished = true;
        }
        Some(token)
    }
}

fn punctuator_kind(ch: char) -> Option<GraphQLTokenKind<'static>> {
    Some(match ch {
        '!' => GraphQLTokenKind::Bang,
        '$' => GraphQLTokenKind::Dollar,
        '&' => GraphQLTokenKind::Ampersand,
        '(' => GraphQLTokenKind::ParenOpen,
        ')' => GraphQLTokenKind::ParenClose,
        ':' => GraphQLTokenKind::Colon,
        '=' => GraphQLTokenKind::Equals,
        '@' => GraphQLTokenKind::At,
        '[' => GraphQLTokenKind::SquareBracketOpen,
        ']' => GraphQLTokenKind::SquareBracketClose,
        '{' => GraphQLTokenKind::CurlyBraceOpen,
        '}' => GraphQLTokenKind::CurlyBraceClose,
        '|' => GraphQLTokenKind::Pipe,
        _ => return None,
    })
}

/// <https://spec.graphql.org/October2021/#NameStart>
fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

/// <https://spec.graphql.org/October2021/#NameContinue>
fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

/// Printable characters render as `` `c` ``; invisible ones also get their
/// code point so the user can find them.
fn describe_char(ch: char) -> String {
    if ch.is_control() || (ch.is_whitespace() && ch != ' ') || ch == '\u{200B}' {
        format!("`{}` (U+{:04X})", ch.escape_debug(), ch as u32)
    } else {
        format!("`{ch}`")
    }
}
