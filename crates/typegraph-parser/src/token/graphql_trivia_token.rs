use crate::GraphQLSourceSpan;
use std::borrow::Cow;

/// A token that does not affect parsing but is preserved on the following
/// token's `preceding_trivia`.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLTriviaToken<'src> {
    /// A `#` comment running to the end of the line.
    Comment {
        /// The comment text, excluding the leading `#`.
        value: Cow<'src, str>,
        span: GraphQLSourceSpan,
    },

    /// Commas are insignificant in GraphQL.
    Comma {
        span: GraphQLSourceSpan,
    },
}
