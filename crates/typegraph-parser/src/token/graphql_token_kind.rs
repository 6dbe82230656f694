use crate::GraphQLErrorNotes;
use crate::GraphQLStringParsingError;
use std::borrow::Cow;
use std::num::ParseFloatError;
use std::num::ParseIntError;

/// The kind of a GraphQL token.
///
/// Literal values keep their raw source text (borrowed from the input where
/// possible); the `parse_*_value()` methods convert them on demand.
/// Negative numbers lex as a single token (`IntValue("-123")`).
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLTokenKind<'src> {
    /// `&`
    Ampersand,
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `...`
    Ellipsis,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `|`
    Pipe,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    Name(Cow<'src, str>),
    IntValue(Cow<'src, str>),
    FloatValue(Cow<'src, str>),
    /// Raw source text including the quotes (`"\"a\\n\""`, `"\"\"\"b\"\"\""`).
    StringValue(Cow<'src, str>),

    True,
    False,
    Null,

    /// End of input. The token may carry trailing trivia.
    Eof,

    /// A lexer error. Emitting these as tokens lets the parser record the
    /// error and keep going.
    Error {
        message: String,
        error_notes: GraphQLErrorNotes,
    },
}

impl<'src> GraphQLTokenKind<'src> {
    pub fn name_borrowed(s: &'src str) -> Self {
        GraphQLTokenKind::Name(Cow::Borrowed(s))
    }

    pub fn name_owned(s: String) -> Self {
        GraphQLTokenKind::Name(Cow::Owned(s))
    }

    pub fn error(message: impl Into<String>, error_notes: GraphQLErrorNotes) -> Self {
        GraphQLTokenKind::Error {
            message: message.into(),
            error_notes,
        }
    }

    /// Returns the source text of this token if it is a punctuator.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            GraphQLTokenKind::Ampersand => Some("&"),
            GraphQLTokenKind::At => Some("@"),
            GraphQLTokenKind::Bang => Some("!"),
            GraphQLTokenKind::Colon => Some(":"),
            GraphQLTokenKind::CurlyBraceClose => Some("}"),
            GraphQLTokenKind::CurlyBraceOpen => Some("{"),
            GraphQLTokenKind::Dollar => Some("$"),
            GraphQLTokenKind::Ellipsis => Some("..."),
            GraphQLTokenKind::Equals => Some("="),
            GraphQLTokenKind::ParenClose => Some(")"),
            GraphQLTokenKind::ParenOpen => Some("("),
            GraphQLTokenKind::Pipe => Some("|"),
            GraphQLTokenKind::SquareBracketClose => Some("]"),
            GraphQLTokenKind::SquareBracketOpen => Some("["),

            GraphQLTokenKind::Name(_)
            | GraphQLTokenKind::IntValue(_)
            | GraphQLTokenKind::FloatValue(_)
            | GraphQLTokenKind::StringValue(_)
            | GraphQLTokenKind::True
            | GraphQLTokenKind::False
            | GraphQLTokenKind::Null
            | GraphQLTokenKind::Eof
            | GraphQLTokenKind::Error { .. } => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, GraphQLTokenKind::Error { .. })
    }

    pub fn is_punctuator(&self) -> bool {
        self.as_punctuator_str().is_some()
    }

    /// Returns `None` if this is not an `IntValue`.
    pub fn parse_int_value(&self) -> Option<Result<i64, ParseIntError>> {
        match self {
            GraphQLTokenKind::IntValue(raw) => Some(raw.parse()),
            _ => None,
        }
    }

    /// Returns `None` if this is not a `FloatValue`.
    pub fn parse_float_value(&self) -> Option<Result<f64, ParseFloatError>> {
        match self {
            GraphQLTokenKind::FloatValue(raw) => Some(raw.parse()),
            _ => None,
        }
    }

    /// Unescapes a `StringValue`'s raw text.
    ///
    /// Single-line strings process `\n`, `\r`, `\t`, `\\`, `\"`, `\/`, `\b`,
    /// `\f`, `\uXXXX` and `\u{X...}`. Block strings get the common
    /// indentation stripped, leading/trailing blank lines removed, and only
    /// `\"""` unescaped.
    ///
    /// Returns `None` if this is not a `StringValue`.
    pub fn parse_string_value(&self) -> Option<Result<String, GraphQLStringParsingError>> {
        match self {
            GraphQLTokenKind::StringValue(raw) => Some(
                if raw.starts_with("\"\"\"") {
                    parse_block_string(raw)
                } else {
                    parse_single_line_string(raw)
                }
            ),
            _ => None,
        }
    }
}

fn parse_single_line_string(raw: &str) -> Result<String, GraphQLStringParsingError> {
    let content = raw
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .ok_or(GraphQLStringParsingError::UnterminatedString)?;

    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            Some('/') => result.push('/'),
            Some('b') => result.push('\u{0008}'),
            Some('f') => result.push('\u{000C}'),
            Some('u') => result.push(parse_unicode_escape(&mut chars)?),
            Some(other) => return Err(
                GraphQLStringParsingError::InvalidEscapeSequence(format!("\\{other}"))
            ),
            None => return Err(
                GraphQLStringParsingError::InvalidEscapeSequence("\\".to_string())
            ),
        }
    }
    Ok(result)
}

/// Parses the hex digits following `\u`, in either the fixed `XXXX` or the
/// braced `{X...}` form.
fn parse_unicode_escape(
    chars: &mut std::iter::Peekable<std::str::Chars>,
) -> Result<char, GraphQLStringParsingError> {
    let mut hex = String::new();
    let braced = chars.peek() == Some(&'{');
    if braced {
        chars.next();
        loop {
            match chars.next() {
                Some('}') => break,
                Some(c) if c.is_ascii_hexdigit() => hex.push(c),
                _ => return Err(GraphQLStringParsingError::InvalidUnicodeEscape(
                    format!("\\u{{{hex}"),
                )),
            }
        }
    } else {
        for _ in 0..4 {
            match chars.next() {
                Some(c) if c.is_ascii_hexdigit() => hex.push(c),
                _ => return Err(GraphQLStringParsingError::InvalidUnicodeEscape(
                    format!("\\u{hex}"),
                )),
            }
        }
    }

    let invalid = || GraphQLStringParsingError::InvalidUnicodeEscape(
        if braced { format!("\\u{{{hex}}}") } else { format!("\\u{hex}") },
    );
    if hex.is_empty() {
        return Err(invalid());
    }
    u32::from_str_radix(&hex, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(invalid)
}

fn parse_block_string(raw: &str) -> Result<String, GraphQLStringParsingError> {
    let content = raw
        .strip_prefix("\"\"\"")
        .and_then(|s| s.strip_suffix("\"\"\""))
        .ok_or(GraphQLStringParsingError::UnterminatedString)?;
    let content = content.replace("\\\"\"\"", "\"\"\"");
    let lines: Vec<&str> = content.lines().collect();

    let common_indent = lines
        .iter()
        .skip(1)
        .filter(|line| !is_blank(line))
        .map(|line| line.len() - line.trim_start_matches([' ', '\t']).len())
        .min()
        .unwrap_or(0);

    let mut result_lines: Vec<&str> = lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            if i > 0 {
                line.get(common_indent..).unwrap_or("")
            } else {
                line
            }
        })
        .collect();

    while result_lines.first().is_some_and(|l| is_blank(l)) {
        result_lines.remove(0);
    }
    while result_lines.last().is_some_and(|l| is_blank(l)) {
        result_lines.pop();
    }

    Ok(result_lines.join("\n"))
}

fn is_blank(line: &str) -> bool {
    line.trim_matches([' ', '\t']).is_empty()
}
