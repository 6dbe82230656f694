use crate::token::GraphQLToken;

/// Marker trait for lexers: iterators that produce [`GraphQLToken`]s.
///
/// Implementors skip whitespace, attach comments and commas to the next
/// token as trivia, emit [`GraphQLTokenKind::Error`] tokens instead of
/// failing, and finish with a single
/// [`GraphQLTokenKind::Eof`](crate::token::GraphQLTokenKind::Eof) token.
/// Lookahead and buffering live in
/// [`GraphQLTokenStream`](crate::GraphQLTokenStream).
///
/// [`GraphQLTokenKind::Error`]: crate::token::GraphQLTokenKind::Error
pub trait GraphQLTokenSource<'src>: Iterator<Item = GraphQLToken<'src>> {}

impl<'src, T> GraphQLTokenSource<'src> for T where T: Iterator<Item = GraphQLToken<'src>> {}
