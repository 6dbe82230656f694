//! Recursive descent parser for GraphQL documents.
//!
//! [`GraphQLParser`] works with any token source implementing
//! [`GraphQLTokenSource`] and produces a single [`ast::Document`] that may
//! mix type-system and executable definitions.
//!
//! # Error Recovery
//!
//! Most grammar rules have a `parse_*` method returning `Result<T, ()>`.
//! `Err(())` means an error has already been recorded; the document loop
//! then skips ahead to the next token that looks like the start of a
//! definition and carries on, so a single pass can report several errors.

use crate::ast;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token::GraphQLTriviaToken;
use crate::token_source::GraphQLTokenSource;
use crate::token_source::StrGraphQLTokenSource;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;
use crate::GraphQLTokenStream;
use crate::ParseResult;
use crate::SourcePosition;
use smallvec::SmallVec;
use std::path::Path;
use std::path::PathBuf;

// =============================================================================
// Delimiter tracking for error recovery
// =============================================================================

/// Where a delimiter was opened, for "unclosed `{`" notes.
#[derive(Clone, Copy, Debug)]
enum DelimiterContext {
    ArgumentDefinitions,
    DirectiveArguments,
    EnumDefinition,
    FieldArguments,
    InputObjectDefinition,
    InterfaceDefinition,
    ListType,
    ListValue,
    ObjectTypeDefinition,
    ObjectValue,
    SchemaDefinition,
    SelectionSet,
    VariableDefinitions,
}

impl DelimiterContext {
    fn description(&self) -> &'static str {
        match self {
            DelimiterContext::ArgumentDefinitions => "argument definitions",
            DelimiterContext::DirectiveArguments => "directive arguments",
            DelimiterContext::EnumDefinition => "enum definition",
            DelimiterContext::FieldArguments => "field arguments",
            DelimiterContext::InputObjectDefinition => "input object definition",
            DelimiterContext::InterfaceDefinition => "interface definition",
            DelimiterContext::ListType => "list type annotation",
            DelimiterContext::ListValue => "list value",
            DelimiterContext::ObjectTypeDefinition => "object type definition",
            DelimiterContext::ObjectValue => "object value",
            DelimiterContext::SchemaDefinition => "schema definition",
            DelimiterContext::SelectionSet => "selection set",
            DelimiterContext::VariableDefinitions => "variable definitions",
        }
    }
}

#[derive(Clone, Debug)]
struct OpenDelimiter {
    span: GraphQLSourceSpan,
    context: DelimiterContext,
}

/// Computed from a peeked token so the borrow on the token stream can end
/// before recovery consumes anything.
enum RecoveryAction {
    Stop,
    Skip,
    CheckKeyword(String),
    CheckDescription,
}

/// Whether `$variables` may appear in the value being parsed.
#[derive(Clone, Copy, Debug)]
enum ConstContext {
    AllowVariables,
    DirectiveArgument,
    InputDefaultValue,
    VariableDefaultValue,
}

impl ConstContext {
    /// Describes the constant context for error messages, or `None` when
    /// variables are allowed.
    fn const_description(&self) -> Option<&'static str> {
        match self {
            ConstContext::AllowVariables => None,
            ConstContext::DirectiveArgument => Some("type system directive arguments"),
            ConstContext::InputDefaultValue => Some("default values"),
            ConstContext::VariableDefaultValue => Some("variable default values"),
        }
    }
}

const DEFINITION_KEYWORDS: &[&str] = &[
    "directive",
    "enum",
    "input",
    "interface",
    "scalar",
    "schema",
    "type",
    "union",
];

// =============================================================================
// Main parser struct
// =============================================================================

/// A recursive descent parser for GraphQL documents.
///
/// ```
/// use typegraph_parser::ast;
/// use typegraph_parser::GraphQLParser;
///
/// let result = GraphQLParser::new("type Query { hello: String }").parse_document();
/// let doc = result.valid_ast().unwrap();
/// assert!(matches!(doc.definitions[0], ast::Definition::ObjectType(_)));
/// ```
pub struct GraphQLParser<'src, TTokenSource: GraphQLTokenSource<'src>> {
    token_stream: GraphQLTokenStream<'src, TTokenSource>,

    errors: Vec<GraphQLParseError>,

    delimiter_stack: SmallVec<[OpenDelimiter; 8]>,

    /// Shared depth counter for values, selection sets and type
    /// annotations.
    recursion_depth: usize,

    /// End of the most recently consumed token. Anchors EOF errors and
    /// decides whether a comment trails the previous token.
    last_end_position: Option<SourcePosition>,

    tokens_consumed: usize,

    file_path: Option<PathBuf>,
}

impl<'src> GraphQLParser<'src, StrGraphQLTokenSource<'src>> {
    pub fn new(source: &'src str) -> Self {
        Self::from_token_source(StrGraphQLTokenSource::new(source))
    }

    /// Like [`new()`](Self::new), but every span (and every error) carries
    /// `path`.
    pub fn with_file_path(source: &'src str, path: &'src Path) -> Self {
        let mut parser =
            Self::from_token_source(StrGraphQLTokenSource::with_file_path(source, path));
        parser.file_path = Some(path.to_path_buf());
        parser
    }
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLParser<'src, TTokenSource> {
    /// Deep enough for any realistic document while keeping adversarial
    /// input like `[[[[[...` from overflowing the stack.
    const MAX_RECURSION_DEPTH: usize = 64;

    pub fn from_token_source(token_source: TTokenSource) -> Self {
        Self {
            token_stream: GraphQLTokenStream::new(token_source),
            errors: Vec::new(),
            delimiter_stack: SmallVec::new(),
            recursion_depth: 0,
            last_end_position: None,
            tokens_consumed: 0,
            file_path: None,
        }
    }

    /// Parses the whole input as a document of mixed type-system and
    /// executable definitions.
    pub fn parse_document(mut self) -> ParseResult<ast::Document> {
        let mut definitions = Vec::new();

        while !self.token_stream.is_at_end() {
            let consumed_before = self.tokens_consumed;
            match self.parse_definition() {
                Ok(def) => definitions.push(def),
                Err(()) => self.recover_to_next_definition(),
            }
            if self.tokens_consumed == consumed_before {
                self.consume_token();
            }
        }

        let document = ast::Document { definitions };
        if self.errors.is_empty() {
            ParseResult::ok(document)
        } else {
            ParseResult::recovered(document, self.errors)
        }
    }

    // =========================================================================
    // Error recording and recovery
    // =========================================================================

    fn record_error(&mut self, error: GraphQLParseError) {
        self.errors.push(error);
    }

    fn push_delimiter(&mut self, span: GraphQLSourceSpan, context: DelimiterContext) {
        self.delimiter_stack.push(OpenDelimiter { span, context });
    }

    fn pop_delimiter(&mut self) -> Option<OpenDelimiter> {
        self.delimiter_stack.pop()
    }

    /// Skips tokens until something that looks like the start of a new
    /// definition (or EOF).
    fn recover_to_next_definition(&mut self) {
        loop {
            let action = match self.token_stream.peek() {
                None => RecoveryAction::Stop,
                Some(token) => match &token.kind {
                    GraphQLTokenKind::Eof | GraphQLTokenKind::CurlyBraceOpen => {
                        RecoveryAction::Stop
                    },
                    GraphQLTokenKind::Name(name) => RecoveryAction::CheckKeyword(name.to_string()),
                    GraphQLTokenKind::StringValue(_) => RecoveryAction::CheckDescription,
                    _ => RecoveryAction::Skip,
                },
            };

            match action {
                RecoveryAction::Stop => break,
                RecoveryAction::Skip => {
                    self.consume_token();
                },
                RecoveryAction::CheckKeyword(keyword) => {
                    if self.looks_like_definition_start(&keyword) {
                        break;
                    }
                    self.consume_token();
                },
                RecoveryAction::CheckDescription => {
                    let is_description_for_def =
                        if let Some(next) = self.token_stream.peek_nth(1)
                            && let GraphQLTokenKind::Name(name) = &next.kind {
                            DEFINITION_KEYWORDS.contains(&name.as_ref())
                        } else {
                            false
                        };
                    if is_description_for_def {
                        break;
                    }
                    self.consume_token();
                },
            }
        }
        self.delimiter_stack.clear();
    }

    /// Peeks past `keyword` to avoid treating e.g. a field named `type`
    /// (`type: String`) as a recovery point.
    fn looks_like_definition_start(&mut self, keyword: &str) -> bool {
        let next = self.token_stream.peek_nth(1).map(|token| &token.kind);
        match keyword {
            "type" | "interface" | "union" | "enum" | "scalar" | "input" => matches!(
                next,
                Some(
                    GraphQLTokenKind::Name(_)
                    | GraphQLTokenKind::True
                    | GraphQLTokenKind::False
                    | GraphQLTokenKind::Null
                )
            ),
            "directive" => matches!(next, Some(GraphQLTokenKind::At)),
            "schema" => matches!(
                next,
                Some(GraphQLTokenKind::CurlyBraceOpen | GraphQLTokenKind::At)
            ),
            "query" | "mutation" | "subscription" => matches!(
                next,
                None
                | Some(
                    GraphQLTokenKind::Name(_)
                    | GraphQLTokenKind::CurlyBraceOpen
                    | GraphQLTokenKind::ParenOpen
                    | GraphQLTokenKind::At
                )
            ),
            "fragment" => match next {
                Some(GraphQLTokenKind::Name(name)) => name.as_ref() != "on",
                _ => false,
            },
            _ => false,
        }
    }

    fn handle_unclosed_delimiter(&mut self, delimiter: &str) {
        let span = self.eof_span();
        let open_delim = self.pop_delimiter();
        let mut error = GraphQLParseError::new(
            format!("unclosed `{delimiter}`"),
            span,
            GraphQLParseErrorKind::UnclosedDelimiter {
                delimiter: delimiter.to_string(),
            },
        );
        if let Some(delim) = open_delim {
            error.add_note_with_span(
                format!("opening `{delimiter}` in {} here", delim.context.description()),
                delim.span,
            );
        }
        self.record_error(error);
    }

    fn handle_lexer_error(&mut self, token: &GraphQLToken<'src>) {
        if let GraphQLTokenKind::Error { message, error_notes } = &token.kind {
            self.record_error(GraphQLParseError::from_lexer_error(
                message.clone(),
                token.span.clone(),
                error_notes.clone(),
            ));
        }
    }

    /// Records an error describing the next token as unexpected and returns
    /// `Err(())`. Lexer error tokens are reported as themselves (and
    /// consumed) rather than as "unexpected".
    fn unexpected<T>(&mut self, expected_desc: &str, expected: &[&str]) -> Result<T, ()> {
        let expected: Vec<String> = expected.iter().map(|e| e.to_string()).collect();
        let peeked = self.token_stream.peek().map(|token| {
            (token.kind.is_error(), matches!(token.kind, GraphQLTokenKind::Eof))
        });

        match peeked {
            None | Some((_, true)) => {
                let span = self.eof_span();
                self.record_error(GraphQLParseError::new(
                    format!("expected {expected_desc}, found end of input"),
                    span,
                    GraphQLParseErrorKind::UnexpectedEof { expected },
                ));
            },
            Some((true, _)) => {
                if let Some(token) = self.consume_token() {
                    self.handle_lexer_error(&token);
                }
            },
            Some((false, false)) => {
                let (span, found) = match self.token_stream.peek() {
                    Some(token) => (token.span.clone(), Self::token_kind_display(&token.kind)),
                    None => (self.eof_span(), "end of input".to_string()),
                };
                self.record_error(GraphQLParseError::new(
                    format!("expected {expected_desc}, found `{found}`"),
                    span,
                    GraphQLParseErrorKind::UnexpectedToken { expected, found },
                ));
            },
        }
        Err(())
    }

    // =========================================================================
    // Token expectation helpers
    // =========================================================================

    fn expect(&mut self, expected_kind: &GraphQLTokenKind<'_>) -> Result<GraphQLToken<'src>, ()> {
        if self.peek_is(expected_kind) {
            return self.consume_token().ok_or(());
        }
        let display = Self::token_kind_display(expected_kind);
        self.unexpected(&format!("`{display}`"), &[display.as_str()])
    }

    /// Expects a name. `true`, `false` and `null` match the Name grammar and
    /// are accepted here even though the lexer gives them their own kinds.
    fn expect_name(&mut self) -> Result<ast::Name, ()> {
        let value = match self.token_stream.peek().map(|token| &token.kind) {
            Some(GraphQLTokenKind::Name(name)) => Some(name.to_string()),
            Some(GraphQLTokenKind::True) => Some("true".to_string()),
            Some(GraphQLTokenKind::False) => Some("false".to_string()),
            Some(GraphQLTokenKind::Null) => Some("null".to_string()),
            _ => None,
        };
        let Some(value) = value else {
            return self.unexpected("name", &["name"]);
        };
        let Some(token) = self.consume_token() else {
            return Err(());
        };
        Ok(ast::Name {
            span: token.span,
            value,
        })
    }

    /// Only matches `Name` tokens, so `expect_keyword("true")` never matches
    /// a `True` token.
    fn expect_keyword(&mut self, keyword: &str) -> Result<GraphQLSourceSpan, ()> {
        if !self.peek_is_keyword(keyword) {
            return self.unexpected(&format!("`{keyword}`"), &[keyword]);
        }
        let Some(token) = self.consume_token() else {
            return Err(());
        };
        Ok(token.span)
    }

    fn peek_is_keyword(&mut self, keyword: &str) -> bool {
        self.peek_name() == Some(keyword)
    }

    fn peek_name(&mut self) -> Option<&str> {
        match self.token_stream.peek().map(|token| &token.kind) {
            Some(GraphQLTokenKind::Name(name)) => Some(name.as_ref()),
            _ => None,
        }
    }

    /// True if the next token can be read by [`expect_name()`](Self::expect_name).
    fn peek_is_name(&mut self) -> bool {
        matches!(
            self.token_stream.peek().map(|token| &token.kind),
            Some(
                GraphQLTokenKind::Name(_)
                | GraphQLTokenKind::True
                | GraphQLTokenKind::False
                | GraphQLTokenKind::Null
            )
        )
    }

    fn peek_is(&mut self, kind: &GraphQLTokenKind<'_>) -> bool {
        match self.token_stream.peek() {
            Some(token) => Self::token_kinds_match(&token.kind, kind),
            None => false,
        }
    }

    fn peek_span(&mut self) -> GraphQLSourceSpan {
        match self.token_stream.peek() {
            Some(token) => token.span.clone(),
            None => self.eof_span(),
        }
    }

    // =========================================================================
    // Helper methods
    // =========================================================================

    fn consume_token(&mut self) -> Option<GraphQLToken<'src>> {
        let token = self.token_stream.consume();
        if let Some(ref t) = token {
            self.last_end_position = Some(t.span.end_exclusive.clone());
            self.tokens_consumed += 1;
        }
        token
    }

    /// A zero-width span at the end of the last consumed token.
    fn eof_span(&self) -> GraphQLSourceSpan {
        let pos = self
            .last_end_position
            .clone()
            .unwrap_or_else(|| SourcePosition::new(0, 0, Some(0), 0));
        GraphQLSourceSpan {
            start_inclusive: pos.clone(),
            end_exclusive: pos,
            file_path: self.file_path.clone(),
        }
    }

    /// A span from the start of `start` to the end of the last consumed
    /// token.
    fn make_span(&self, start: &GraphQLSourceSpan) -> GraphQLSourceSpan {
        let end = self
            .last_end_position
            .clone()
            .unwrap_or_else(|| start.end_exclusive.clone());
        GraphQLSourceSpan {
            start_inclusive: start.start_inclusive.clone(),
            end_exclusive: end,
            file_path: start.file_path.clone(),
        }
    }

    fn token_kind_display(kind: &GraphQLTokenKind<'_>) -> String {
        match kind {
            GraphQLTokenKind::Name(s)
            | GraphQLTokenKind::IntValue(s)
            | GraphQLTokenKind::FloatValue(s) => s.to_string(),
            GraphQLTokenKind::StringValue(_) => "string".to_string(),
            GraphQLTokenKind::True => "true".to_string(),
            GraphQLTokenKind::False => "false".to_string(),
            GraphQLTokenKind::Null => "null".to_string(),
            GraphQLTokenKind::Eof => "end of input".to_string(),
            GraphQLTokenKind::Error { message, .. } => format!("tokenization error: {message}"),
            punctuator => punctuator.as_punctuator_str().unwrap_or_default().to_string(),
        }
    }

    /// Compares variants, ignoring payloads. Deliberately exhaustive over
    /// `actual` so a new token kind fails to compile here.
    fn token_kinds_match(actual: &GraphQLTokenKind<'_>, expected: &GraphQLTokenKind<'_>) -> bool {
        match actual {
            GraphQLTokenKind::Name(_) => matches!(expected, GraphQLTokenKind::Name(_)),
            GraphQLTokenKind::IntValue(_) => matches!(expected, GraphQLTokenKind::IntValue(_)),
            GraphQLTokenKind::FloatValue(_) => matches!(expected, GraphQLTokenKind::FloatValue(_)),
            GraphQLTokenKind::StringValue(_) => {
                matches!(expected, GraphQLTokenKind::StringValue(_))
            },
            GraphQLTokenKind::Error { .. } => matches!(expected, GraphQLTokenKind::Error { .. }),
            GraphQLTokenKind::Ampersand
            | GraphQLTokenKind::At
            | GraphQLTokenKind::Bang
            | GraphQLTokenKind::Colon
            | GraphQLTokenKind::CurlyBraceClose
            | GraphQLTokenKind::CurlyBraceOpen
            | GraphQLTokenKind::Dollar
            | GraphQLTokenKind::Ellipsis
            | GraphQLTokenKind::Equals
            | GraphQLTokenKind::ParenClose
            | GraphQLTokenKind::ParenOpen
            | GraphQLTokenKind::Pipe
            | GraphQLTokenKind::SquareBracketClose
            | GraphQLTokenKind::SquareBracketOpen
            | GraphQLTokenKind::True
            | GraphQLTokenKind::False
            | GraphQLTokenKind::Null
            | GraphQLTokenKind::Eof => actual == expected,
        }
    }

    fn enter_recursion(&mut self) -> Result<(), ()> {
        self.recursion_depth += 1;
        if self.recursion_depth > Self::MAX_RECURSION_DEPTH {
            let span = self.peek_span();
            self.consume_token();
            self.record_error(GraphQLParseError::new(
                "maximum nesting depth exceeded",
                span,
                GraphQLParseErrorKind::InvalidSyntax,
            ));
            self.recursion_depth -= 1;
            return Err(());
        }
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    /// Parses `open item* close`, recording an `InvalidEmptyConstruct` error
    /// for an empty list when `empty_construct` names the construct.
    fn parse_delimited<T>(
        &mut self,
        open: GraphQLTokenKind<'static>,
        close: GraphQLTokenKind<'static>,
        context: DelimiterContext,
        empty_construct: Option<&str>,
        mut parse_item: impl FnMut(&mut Self) -> Result<T, ()>,
    ) -> Result<Vec<T>, ()> {
        let open_token = self.expect(&open)?;
        let open_str = open.as_punctuator_str().unwrap_or_default();
        self.push_delimiter(open_token.span.clone(), context);

        if let Some(construct) = empty_construct
            && self.peek_is(&close) {
            self.record_error(GraphQLParseError::new(
                format!("{construct} cannot be empty"),
                open_token.span,
                GraphQLParseErrorKind::InvalidEmptyConstruct {
                    construct: construct.to_string(),
                },
            ));
        }

        let mut items = Vec::new();
        loop {
            if self.peek_is(&close) {
                break;
            }
            if self.token_stream.is_at_end() {
                self.handle_unclosed_delimiter(open_str);
                return Err(());
            }
            items.push(parse_item(self)?);
        }

        self.expect(&close)?;
        self.pop_delimiter();
        Ok(items)
    }

    // =========================================================================
    // Descriptions
    // =========================================================================

    /// Reads the description of the item starting at the next token: a
    /// string literal if there is one (consumed), otherwise the block of
    /// `#` comments directly above the token (not consumed).
    fn parse_description(&mut self) -> Option<String> {
        let prev_token_line = self.last_end_position.as_ref().map(SourcePosition::line);
        let token = self.token_stream.peek()?;
        if !matches!(token.kind, GraphQLTokenKind::StringValue(_)) {
            return comment_description(token, prev_token_line);
        }

        let token = self.consume_token()?;
        match token.kind.parse_string_value() {
            Some(Ok(value)) => string_description(&value),
            Some(Err(err)) => {
                self.record_error(GraphQLParseError::new(
                    format!("invalid string: {err}"),
                    token.span,
                    GraphQLParseErrorKind::InvalidValue {
                        message: err.to_string(),
                    },
                ));
                None
            },
            None => None,
        }
    }

    // =========================================================================
    // Values
    // =========================================================================

    fn parse_value(&mut self, context: ConstContext) -> Result<ast::Value, ()> {
        self.enter_recursion()?;
        let result = self.parse_value_impl(context);
        self.exit_recursion();
        result
    }

    fn parse_value_impl(&mut self, context: ConstContext) -> Result<ast::Value, ()> {
        let Some(kind) = self.token_stream.peek().map(|token| token.kind.clone()) else {
            return self.unexpected("value", &["value"]);
        };

        match kind {
            GraphQLTokenKind::Dollar => {
                let Some(dollar) = self.consume_token() else {
                    return Err(());
                };
                let name = self.expect_name()?;
                if let Some(const_desc) = context.const_description() {
                    let span = self.make_span(&dollar.span);
                    let mut error = GraphQLParseError::new(
                        format!("variables are not allowed in {const_desc}"),
                        span,
                        GraphQLParseErrorKind::VariableInConstContext,
                    );
                    error.add_help("replace the variable with a literal value");
                    self.record_error(error);
                    return Err(());
                }
                Ok(ast::Value::Variable(name.value))
            },

            GraphQLTokenKind::IntValue(ref raw) => {
                let Some(token) = self.consume_token() else {
                    return Err(());
                };
                match kind.parse_int_value() {
                    Some(Ok(value)) => Ok(ast::Value::Int(value)),
                    _ => {
                        self.record_error(GraphQLParseError::new(
                            format!("integer `{raw}` is out of range"),
                            token.span,
                            GraphQLParseErrorKind::InvalidValue {
                                message: format!("integer `{raw}` does not fit in 64 bits"),
                            },
                        ));
                        Err(())
                    },
                }
            },

            GraphQLTokenKind::FloatValue(ref raw) => {
                let Some(token) = self.consume_token() else {
                    return Err(());
                };
                match kind.parse_float_value() {
                    Some(Ok(value)) if value.is_finite() => Ok(ast::Value::Float(value)),
                    _ => {
                        self.record_error(GraphQLParseError::new(
                            format!("float `{raw}` is out of range"),
                            token.span,
                            GraphQLParseErrorKind::InvalidValue {
                                message: format!("float `{raw}` is not finite"),
                            },
                        ));
                        Err(())
                    },
                }
            },

            GraphQLTokenKind::StringValue(_) => {
                let Some(token) = self.consume_token() else {
                    return Err(());
                };
                match kind.parse_string_value() {
                    Some(Ok(value)) => Ok(ast::Value::String(value)),
                    Some(Err(err)) => {
                        self.record_error(GraphQLParseError::new(
                            format!("invalid string: {err}"),
                            token.span,
                            GraphQLParseErrorKind::InvalidValue {
                                message: err.to_string(),
                            },
                        ));
                        Err(())
                    },
                    None => Err(()),
                }
            },

            GraphQLTokenKind::True | GraphQLTokenKind::False | GraphQLTokenKind::Null => {
                self.consume_token();
                Ok(match kind {
                    GraphQLTokenKind::True => ast::Value::Boolean(true),
                    GraphQLTokenKind::False => ast::Value::Boolean(false),
                    _ => ast::Value::Null,
                })
            },

            GraphQLTokenKind::Name(name) => {
                self.consume_token();
                Ok(ast::Value::Enum(name.to_string()))
            },

            GraphQLTokenKind::SquareBracketOpen => {
                let items = self.parse_delimited(
                    GraphQLTokenKind::SquareBracketOpen,
                    GraphQLTokenKind::SquareBracketClose,
                    DelimiterContext::ListValue,
                    None,
                    |parser| parser.parse_value(context),
                )?;
                Ok(ast::Value::List(items))
            },

            GraphQLTokenKind::CurlyBraceOpen => {
                let fields = self.parse_delimited(
                    GraphQLTokenKind::CurlyBraceOpen,
                    GraphQLTokenKind::CurlyBraceClose,
                    DelimiterContext::ObjectValue,
                    None,
                    |parser| {
                        let name = parser.expect_name()?;
                        parser.expect(&GraphQLTokenKind::Colon)?;
                        let value = parser.parse_value(context)?;
                        Ok((name.value, value))
                    },
                )?;
                Ok(ast::Value::Object(fields))
            },

            _ => self.unexpected("value", &["value"]),
        }
    }

    // =========================================================================
    // Type annotations
    // =========================================================================

    fn parse_type_annotation(&mut self) -> Result<ast::TypeAnnotation, ()> {
        self.enter_recursion()?;
        let result = self.parse_type_annotation_impl();
        self.exit_recursion();
        result
    }

    fn parse_type_annotation_impl(&mut self) -> Result<ast::TypeAnnotation, ()> {
        let start = self.peek_span();
        let base =
            if self.peek_is(&GraphQLTokenKind::SquareBracketOpen) {
                let open_token = self.expect(&GraphQLTokenKind::SquareBracketOpen)?;
                self.push_delimiter(open_token.span, DelimiterContext::ListType);
                let inner = self.parse_type_annotation()?;
                if self.token_stream.is_at_end() {
                    self.handle_unclosed_delimiter("[");
                    return Err(());
                }
                self.expect(&GraphQLTokenKind::SquareBracketClose)?;
                self.pop_delimiter();
                ast::TypeAnnotation::List {
                    span: self.make_span(&start),
                    inner: Box::new(inner),
                }
            } else {
                ast::TypeAnnotation::Named(self.expect_name()?)
            };

        if self.peek_is(&GraphQLTokenKind::Bang) {
            self.consume_token();
            return Ok(ast::TypeAnnotation::NonNull {
                span: self.make_span(&start),
                inner: Box::new(base),
            });
        }
        Ok(base)
    }

    // =========================================================================
    // Directives and arguments
    // =========================================================================

    fn parse_directive_annotations(
        &mut self,
        context: ConstContext,
    ) -> Result<Vec<ast::DirectiveAnnotation>, ()> {
        let mut directives = Vec::new();
        while self.peek_is(&GraphQLTokenKind::At) {
            let Some(at) = self.consume_token() else {
                return Err(());
            };
            let name = self.expect_name()?;
            let arguments =
                if self.peek_is(&GraphQLTokenKind::ParenOpen) {
                    self.parse_arguments(DelimiterContext::DirectiveArguments, context)?
                } else {
                    Vec::new()
                };
            directives.push(ast::DirectiveAnnotation {
                span: self.make_span(&at.span),
                name,
                arguments,
            });
        }
        Ok(directives)
    }

    fn parse_arguments(
        &mut self,
        delimiter_context: DelimiterContext,
        context: ConstContext,
    ) -> Result<Vec<ast::Argument>, ()> {
        self.parse_delimited(
            GraphQLTokenKind::ParenOpen,
            GraphQLTokenKind::ParenClose,
            delimiter_context,
            Some("argument list"),
            |parser| {
                let name = parser.expect_name()?;
                parser.expect(&GraphQLTokenKind::Colon)?;
                let value = parser.parse_value(context)?;
                Ok(ast::Argument {
                    span: parser.make_span(&name.span),
                    name,
                    value,
                })
            },
        )
    }

    // =========================================================================
    // Executable definitions
    // =========================================================================

    fn parse_selection_set(&mut self) -> Result<ast::SelectionSet, ()> {
        self.enter_recursion()?;
        let start = self.peek_span();
        let result = self.parse_delimited(
            GraphQLTokenKind::CurlyBraceOpen,
            GraphQLTokenKind::CurlyBraceClose,
            DelimiterContext::SelectionSet,
            Some("selection set"),
            Self::parse_selection,
        );
        self.exit_recursion();
        Ok(ast::SelectionSet {
            selections: result?,
            span: self.make_span(&start),
        })
    }

    fn parse_selection(&mut self) -> Result<ast::Selection, ()> {
        if !self.peek_is(&GraphQLTokenKind::Ellipsis) {
            return Ok(ast::Selection::Field(self.parse_field()?));
        }

        let ellipsis = self.expect(&GraphQLTokenKind::Ellipsis)?;
        if self.peek_is_keyword("on") {
            self.consume_token();
            let type_condition = Some(self.expect_name()?);
            return self.parse_inline_fragment(ellipsis.span, type_condition);
        }
        if self.peek_is_name() {
            let name = self.expect_name()?;
            let directives = self.parse_directive_annotations(ConstContext::AllowVariables)?;
            return Ok(ast::Selection::FragmentSpread(ast::FragmentSpread {
                span: self.make_span(&ellipsis.span),
                name,
                directives,
            }));
        }
        self.parse_inline_fragment(ellipsis.span, None)
    }

    fn parse_inline_fragment(
        &mut self,
        start: GraphQLSourceSpan,
        type_condition: Option<ast::Name>,
    ) -> Result<ast::Selection, ()> {
        let directives = self.parse_directive_annotations(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;
        Ok(ast::Selection::InlineFragment(ast::InlineFragment {
            span: self.make_span(&start),
            type_condition,
            directives,
            selection_set,
        }))
    }

    fn parse_field(&mut self) -> Result<ast::Field, ()> {
        let first_name = self.expect_name()?;
        let (alias, name) =
            if self.peek_is(&GraphQLTokenKind::Colon) {
                self.consume_token();
                (Some(first_name), self.expect_name()?)
            } else {
                (None, first_name)
            };
        let start = alias.as_ref().map_or(&name.span, |alias| &alias.span).clone();

        let arguments =
            if self.peek_is(&GraphQLTokenKind::ParenOpen) {
                self.parse_arguments(DelimiterContext::FieldArguments, ConstContext::AllowVariables)?
            } else {
                Vec::new()
            };
        let directives = self.parse_directive_annotations(ConstContext::AllowVariables)?;
        let selection_set =
            if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
                Some(self.parse_selection_set()?)
            } else {
                None
            };

        Ok(ast::Field {
            span: self.make_span(&start),
            alias,
            name,
            arguments,
            directives,
            selection_set,
        })
    }

    fn parse_operation_definition(&mut self) -> Result<ast::OperationDefinition, ()> {
        let start = self.peek_span();

        // `{ ... }` shorthand for an anonymous query.
        if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            let selection_set = self.parse_selection_set()?;
            return Ok(ast::OperationDefinition {
                span: self.make_span(&start),
                operation_kind: ast::OperationKind::Query,
                name: None,
                variable_definitions: Vec::new(),
                directives: Vec::new(),
                selection_set,
            });
        }

        let Some(operation_kind) = self.peek_name().and_then(ast::OperationKind::from_keyword) else {
            return self.unexpected(
                "`query`, `mutation` or `subscription`",
                &["query", "mutation", "subscription"],
            );
        };
        self.consume_token();

        let name =
            if self.peek_is_name() {
                Some(self.expect_name()?)
            } else {
                None
            };
        let variable_definitions =
            if self.peek_is(&GraphQLTokenKind::ParenOpen) {
                self.parse_delimited(
                    GraphQLTokenKind::ParenOpen,
                    GraphQLTokenKind::ParenClose,
                    DelimiterContext::VariableDefinitions,
                    Some("variable definitions"),
                    Self::parse_variable_definition,
                )?
            } else {
                Vec::new()
            };
        let directives = self.parse_directive_annotations(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;

        Ok(ast::OperationDefinition {
            span: self.make_span(&start),
            operation_kind,
            name,
            variable_definitions,
            directives,
            selection_set,
        })
    }

    fn parse_variable_definition(&mut self) -> Result<ast::VariableDefinition, ()> {
        let dollar = self.expect(&GraphQLTokenKind::Dollar)?;
        let name = self.expect_name()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let var_type = self.parse_type_annotation()?;
        let default_value =
            if self.peek_is(&GraphQLTokenKind::Equals) {
                self.consume_token();
                Some(self.parse_value(ConstContext::VariableDefaultValue)?)
            } else {
                None
            };
        let directives = self.parse_directive_annotations(ConstContext::DirectiveArgument)?;

        Ok(ast::VariableDefinition {
            span: self.make_span(&dollar.span),
            name,
            var_type,
            default_value,
            directives,
        })
    }

    fn parse_fragment_definition(&mut self) -> Result<ast::FragmentDefinition, ()> {
        let start = self.expect_keyword("fragment")?;
        let name = self.expect_name()?;
        if name.value == "on" {
            self.record_error(GraphQLParseError::new(
                "fragment name cannot be `on`",
                name.span,
                GraphQLParseErrorKind::InvalidSyntax,
            ));
            return Err(());
        }
        self.expect_keyword("on")?;
        let type_condition = self.expect_name()?;
        let directives = self.parse_directive_annotations(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;

        Ok(ast::FragmentDefinition {
            span: self.make_span(&start),
            name,
            type_condition,
            directives,
            selection_set,
        })
    }

    // =========================================================================
    // Type system definitions
    // =========================================================================

    fn parse_schema_definition(&mut self) -> Result<ast::SchemaDefinition, ()> {
        let start = self.expect_keyword("schema")?;
        let directives = self.parse_directive_annotations(ConstContext::DirectiveArgument)?;
        let root_operations = self.parse_delimited(
            GraphQLTokenKind::CurlyBraceOpen,
            GraphQLTokenKind::CurlyBraceClose,
            DelimiterContext::SchemaDefinition,
            Some("schema definition"),
            Self::parse_root_operation_type_definition,
        )?;

        Ok(ast::SchemaDefinition {
            span: self.make_span(&start),
            directives,
            root_operations,
        })
    }

    fn parse_root_operation_type_definition(
        &mut self,
    ) -> Result<ast::RootOperationTypeDefinition, ()> {
        let Some(operation_kind) = self.peek_name().and_then(ast::OperationKind::from_keyword) else {
            return self.unexpected(
                "`query`, `mutation` or `subscription`",
                &["query", "mutation", "subscription"],
            );
        };
        let Some(keyword) = self.consume_token() else {
            return Err(());
        };
        self.expect(&GraphQLTokenKind::Colon)?;
        let named_type = self.expect_name()?;

        Ok(ast::RootOperationTypeDefinition {
            span: self.make_span(&keyword.span),
            operation_kind,
            named_type,
        })
    }

    fn parse_scalar_type_definition(
        &mut self,
        description: Option<String>,
    ) -> Result<ast::ScalarTypeDefinition, ()> {
        let start = self.expect_keyword("scalar")?;
        let name = self.expect_name()?;
        let directives = self.parse_directive_annotations(ConstContext::DirectiveArgument)?;

        Ok(ast::ScalarTypeDefinition {
            span: self.make_span(&start),
            description,
            name,
            directives,
        })
    }

    fn parse_object_type_definition(
        &mut self,
        description: Option<String>,
    ) -> Result<ast::ObjectTypeDefinition, ()> {
        let start = self.expect_keyword("type")?;
        let name = self.expect_name()?;
        let implements = self.parse_implements_interfaces()?;
        let directives = self.parse_directive_annotations(ConstContext::DirectiveArgument)?;
        let fields = self.parse_optional_fields_definition(DelimiterContext::ObjectTypeDefinition)?;

        Ok(ast::ObjectTypeDefinition {
            span: self.make_span(&start),
            description,
            name,
            implements,
            directives,
            fields,
        })
    }

    fn parse_interface_type_definition(
        &mut self,
        description: Option<String>,
    ) -> Result<ast::InterfaceTypeDefinition, ()> {
        let start = self.expect_keyword("interface")?;
        let name = self.expect_name()?;
        let implements = self.parse_implements_interfaces()?;
        let directives = self.parse_directive_annotations(ConstContext::DirectiveArgument)?;
        let fields = self.parse_optional_fields_definition(DelimiterContext::InterfaceDefinition)?;

        Ok(ast::InterfaceTypeDefinition {
            span: self.make_span(&start),
            description,
            name,
            implements,
            directives,
            fields,
        })
    }

    fn parse_union_type_definition(
        &mut self,
        description: Option<String>,
    ) -> Result<ast::UnionTypeDefinition, ()> {
        let start = self.expect_keyword("union")?;
        let name = self.expect_name()?;
        let directives = self.parse_directive_annotations(ConstContext::DirectiveArgument)?;

        let mut members = Vec::new();
        if self.peek_is(&GraphQLTokenKind::Equals) {
            self.consume_token();
            if self.peek_is(&GraphQLTokenKind::Pipe) {
                self.consume_token();
            }
            members.push(self.expect_name()?);
            while self.peek_is(&GraphQLTokenKind::Pipe) {
                self.consume_token();
                members.push(self.expect_name()?);
            }
        }

        Ok(ast::UnionTypeDefinition {
            span: self.make_span(&start),
            description,
            name,
            directives,
            members,
        })
    }

    fn parse_enum_type_definition(
        &mut self,
        description: Option<String>,
    ) -> Result<ast::EnumTypeDefinition, ()> {
        let start = self.expect_keyword("enum")?;
        let name = self.expect_name()?;
        let directives = self.parse_directive_annotations(ConstContext::DirectiveArgument)?;
        let values =
            if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
                self.parse_delimited(
                    GraphQLTokenKind::CurlyBraceOpen,
                    GraphQLTokenKind::CurlyBraceClose,
                    DelimiterContext::EnumDefinition,
                    Some("enum definition"),
                    Self::parse_enum_value_definition,
                )?
            } else {
                Vec::new()
            };

        Ok(ast::EnumTypeDefinition {
            span: self.make_span(&start),
            description,
            name,
            directives,
            values,
        })
    }

    fn parse_enum_value_definition(&mut self) -> Result<ast::EnumValueDefinition, ()> {
        let description = self.parse_description();
        if let Some(token) = self.token_stream.peek()
            && matches!(
                token.kind,
                GraphQLTokenKind::True | GraphQLTokenKind::False | GraphQLTokenKind::Null
            ) {
            let span = token.span.clone();
            let found = Self::token_kind_display(&token.kind);
            self.consume_token();
            let mut error = GraphQLParseError::new(
                format!("enum value cannot be named `{found}`"),
                span,
                GraphQLParseErrorKind::InvalidSyntax,
            );
            error.add_spec("https://spec.graphql.org/October2021/#EnumValue");
            self.record_error(error);
            return Err(());
        }

        let name = self.expect_name()?;
        let directives = self.parse_directive_annotations(ConstContext::DirectiveArgument)?;
        Ok(ast::EnumValueDefinition {
            span: self.make_span(&name.span),
            description,
            name,
            directives,
        })
    }

    fn parse_input_object_type_definition(
        &mut self,
        description: Option<String>,
    ) -> Result<ast::InputObjectTypeDefinition, ()> {
        let start = self.expect_keyword("input")?;
        let name = self.expect_name()?;
        let directives = self.parse_directive_annotations(ConstContext::DirectiveArgument)?;
        let fields =
            if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
                self.parse_delimited(
                    GraphQLTokenKind::CurlyBraceOpen,
                    GraphQLTokenKind::CurlyBraceClose,
                    DelimiterContext::InputObjectDefinition,
                    Some("input object definition"),
                    Self::parse_input_value_definition,
                )?
            } else {
                Vec::new()
            };

        Ok(ast::InputObjectTypeDefinition {
            span: self.make_span(&start),
            description,
            name,
            directives,
            fields,
        })
    }

    fn parse_directive_definition(
        &mut self,
        description: Option<String>,
    ) -> Result<ast::DirectiveDefinition, ()> {
        let start = self.expect_keyword("directive")?;
        self.expect(&GraphQLTokenKind::At)?;
        let name = self.expect_name()?;
        let arguments = self.parse_optional_arguments_definition()?;
        let repeatable = self.peek_is_keyword("repeatable");
        if repeatable {
            self.consume_token();
        }
        self.expect_keyword("on")?;
        let locations = self.parse_directive_locations()?;

        Ok(ast::DirectiveDefinition {
            span: self.make_span(&start),
            description,
            name,
            arguments,
            repeatable,
            locations,
        })
    }

    /// `implements A & B`, with an optional leading `&`. The legacy
    /// comma-separated form (`implements A, B`) is accepted too; because
    /// commas are trivia, a bare name only continues the list when a comma
    /// precedes it.
    fn parse_implements_interfaces(&mut self) -> Result<Vec<ast::Name>, ()> {
        if !self.peek_is_keyword("implements") {
            return Ok(Vec::new());
        }
        self.consume_token();
        if self.peek_is(&GraphQLTokenKind::Ampersand) {
            self.consume_token();
        }

        let mut interfaces = vec![self.expect_name()?];
        loop {
            if self.peek_is(&GraphQLTokenKind::Ampersand) {
                self.consume_token();
                interfaces.push(self.expect_name()?);
            } else if self.peek_is_comma_separated_name() {
                interfaces.push(self.expect_name()?);
            } else {
                break;
            }
        }
        Ok(interfaces)
    }

    fn peek_is_comma_separated_name(&mut self) -> bool {
        match self.token_stream.peek() {
            Some(token) if matches!(token.kind, GraphQLTokenKind::Name(_)) => {
                token.preceding_trivia.iter().any(|trivia| {
                    matches!(trivia, GraphQLTriviaToken::Comma { .. })
                })
            },
            _ => false,
        }
    }

    fn parse_optional_fields_definition(
        &mut self,
        context: DelimiterContext,
    ) -> Result<Vec<ast::FieldDefinition>, ()> {
        if !self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            return Ok(Vec::new());
        }
        self.parse_delimited(
            GraphQLTokenKind::CurlyBraceOpen,
            GraphQLTokenKind::CurlyBraceClose,
            context,
            Some(context.description()),
            Self::parse_field_definition,
        )
    }

    fn parse_field_definition(&mut self) -> Result<ast::FieldDefinition, ()> {
        let description = self.parse_description();
        let name = self.expect_name()?;
        let arguments = self.parse_optional_arguments_definition()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let field_type = self.parse_type_annotation()?;
        let directives = self.parse_directive_annotations(ConstContext::DirectiveArgument)?;

        Ok(ast::FieldDefinition {
            span: self.make_span(&name.span),
            description,
            name,
            arguments,
            field_type,
            directives,
        })
    }

    fn parse_optional_arguments_definition(
        &mut self,
    ) -> Result<Vec<ast::InputValueDefinition>, ()> {
        if !self.peek_is(&GraphQLTokenKind::ParenOpen) {
            return Ok(Vec::new());
        }
        self.parse_delimited(
            GraphQLTokenKind::ParenOpen,
            GraphQLTokenKind::ParenClose,
            DelimiterContext::ArgumentDefinitions,
            Some("argument definitions"),
            Self::parse_input_value_definition,
        )
    }

    fn parse_input_value_definition(&mut self) -> Result<ast::InputValueDefinition, ()> {
        let description = self.parse_description();
        let name = self.expect_name()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let value_type = self.parse_type_annotation()?;
        let default_value =
            if self.peek_is(&GraphQLTokenKind::Equals) {
                self.consume_token();
                Some(self.parse_value(ConstContext::InputDefaultValue)?)
            } else {
                None
            };
        let directives = self.parse_directive_annotations(ConstContext::DirectiveArgument)?;

        Ok(ast::InputValueDefinition {
            span: self.make_span(&name.span),
            description,
            name,
            value_type,
            default_value,
            directives,
        })
    }

    fn parse_directive_locations(&mut self) -> Result<Vec<ast::DirectiveLocation>, ()> {
        if self.peek_is(&GraphQLTokenKind::Pipe) {
            self.consume_token();
        }

        let mut locations = vec![self.parse_directive_location()?];
        while self.peek_is(&GraphQLTokenKind::Pipe) {
            self.consume_token();
            locations.push(self.parse_directive_location()?);
        }
        Ok(locations)
    }

    fn parse_directive_location(&mut self) -> Result<ast::DirectiveLocation, ()> {
        let name = self.expect_name()?;
        if let Some(location) = ast::DirectiveLocation::from_name(&name.value) {
            return Ok(location);
        }

        let mut error = GraphQLParseError::new(
            format!("unknown directive location `{}`", name.value),
            name.span,
            GraphQLParseErrorKind::InvalidSyntax,
        );
        if let Some(suggestion) = suggest_directive_location(&name.value) {
            error.add_help(format!("did you mean `{suggestion}`?"));
        }
        self.record_error(error);
        Err(())
    }

    // =========================================================================
    // Document-level dispatch
    // =========================================================================

    fn parse_definition(&mut self) -> Result<ast::Definition, ()> {
        if let Some(token) = self.token_stream.peek()
            && token.kind.is_error() {
            let token = token.clone();
            self.handle_lexer_error(&token);
            self.consume_token();
            return Err(());
        }

        let description = self.parse_description();
        let keyword = self.peek_name().map(str::to_owned);

        match keyword.as_deref() {
            Some("schema") => Ok(ast::Definition::Schema(self.parse_schema_definition()?)),
            Some("scalar") => Ok(ast::Definition::ScalarType(
                self.parse_scalar_type_definition(description)?,
            )),
            Some("type") => Ok(ast::Definition::ObjectType(
                self.parse_object_type_definition(description)?,
            )),
            Some("interface") => Ok(ast::Definition::InterfaceType(
                self.parse_interface_type_definition(description)?,
            )),
            Some("union") => Ok(ast::Definition::UnionType(
                self.parse_union_type_definition(description)?,
            )),
            Some("enum") => Ok(ast::Definition::EnumType(
                self.parse_enum_type_definition(description)?,
            )),
            Some("input") => Ok(ast::Definition::InputObjectType(
                self.parse_input_object_type_definition(description)?,
            )),
            Some("directive") => Ok(ast::Definition::Directive(
                self.parse_directive_definition(description)?,
            )),
            Some("query" | "mutation" | "subscription") => Ok(ast::Definition::Operation(
                self.parse_operation_definition()?,
            )),
            Some("fragment") => Ok(ast::Definition::Fragment(
                self.parse_fragment_definition()?,
            )),
            Some("extend") => {
                let span = self.peek_span();
                self.consume_token();
                let mut error = GraphQLParseError::new(
                    "type extensions are not supported",
                    span,
                    GraphQLParseErrorKind::InvalidSyntax,
                );
                error.add_help("merge the extension into the original type definition");
                self.record_error(error);
                Err(())
            },
            _ if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) => Ok(
                ast::Definition::Operation(self.parse_operation_definition()?),
            ),
            _ => {
                let result = self.unexpected(
                    "definition",
                    &["type", "interface", "union", "enum", "scalar", "input",
                      "directive", "schema", "query", "fragment"],
                );
                // Consume so recovery always makes progress.
                self.consume_token();
                result
            },
        }
    }
}

/// The legacy comment-description rule: the run of `#` comments directly
/// above `token`, each on the line right before the next, stopping at a
/// comment that shares a line with the previous token.
fn comment_description(
    token: &GraphQLToken<'_>,
    prev_token_line: Option<usize>,
) -> Option<String> {
    let comments: Vec<(&str, &GraphQLSourceSpan)> = token.preceding_comments().collect();
    let mut next_line = token.span.start_inclusive.line();
    let mut lines = Vec::new();

    for (value, span) in comments.into_iter().rev() {
        let line = span.start_inclusive.line();
        if line + 1 != next_line || prev_token_line == Some(line) {
            break;
        }
        lines.push(value);
        next_line = line;
    }
    if lines.is_empty() {
        return None;
    }
    lines.reverse();
    dedent_comment_lines(&lines)
}

/// String descriptions are held to the same shape as comment descriptions so
/// that either form prints and re-parses to the same text.
fn string_description(value: &str) -> Option<String> {
    let normalized = value.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<&str> = normalized.split('\n').collect();
    dedent_comment_lines(&lines)
}

/// Strips the indentation common to all non-blank lines, then drops leading
/// and trailing blank lines. All-blank input yields `None`.
fn dedent_comment_lines(lines: &[&str]) -> Option<String> {
    let common_indent = lines
        .iter()
        .filter(|line| !is_blank(line))
        .map(|line| line.len() - line.trim_start_matches([' ', '\t']).len())
        .min()
        .unwrap_or(0);

    let dedented: Vec<&str> = lines
        .iter()
        .map(|line| line.get(common_indent..).unwrap_or(""))
        .collect();
    let first = dedented.iter().position(|line| !is_blank(line))?;
    let last = dedented.iter().rposition(|line| !is_blank(line))?;
    Some(dedented[first..=last].join("\n"))
}

fn is_blank(line: &str) -> bool {
    line.trim_matches([' ', '\t']).is_empty()
}

fn suggest_directive_location(input: &str) -> Option<&'static str> {
    let input_upper = input.to_uppercase();
    ast::DirectiveLocation::ALL
        .iter()
        .map(|location| (location.as_str(), edit_distance(&input_upper, location.as_str())))
        .filter(|(_, distance)| *distance <= 3)
        .min_by_key(|(_, distance)| *distance)
        .map(|(name, _)| name)
}

/// Levenshtein distance.
fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, a_char) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b_chars.len()]
}
