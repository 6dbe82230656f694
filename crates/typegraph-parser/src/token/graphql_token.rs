use crate::token::GraphQLTokenKind;
use crate::token::GraphQLTriviaToken;
use crate::GraphQLSourceSpan;
use smallvec::SmallVec;

/// Most tokens are preceded by zero to two trivia items.
pub type GraphQLTriviaTokenVec<'src> = SmallVec<[GraphQLTriviaToken<'src>; 2]>;

/// A GraphQL token with its span and the trivia (comments, commas) that
/// preceded it.
///
/// Trivia is attached to the *following* token so the parser can `peek()`
/// and `consume()` without skipping anything, while still being able to
/// recover the comments that sit directly above a definition.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLToken<'src> {
    pub kind: GraphQLTokenKind<'src>,
    pub preceding_trivia: GraphQLTriviaTokenVec<'src>,
    pub span: GraphQLSourceSpan,
}

impl<'src> GraphQLToken<'src> {
    /// The `#` comments in this token's preceding trivia, in source order.
    pub fn preceding_comments(&self) -> impl Iterator<Item = (&str, &GraphQLSourceSpan)> {
        self.preceding_trivia.iter().filter_map(|trivia| match trivia {
            GraphQLTriviaToken::Comment { value, span } => Some((value.as_ref(), span)),
            GraphQLTriviaToken::Comma { .. } => None,
        })
    }
}
