use crate::GraphQLErrorNoteKind;
use crate::GraphQLSourceSpan;
use smallvec::SmallVec;

/// Extra context attached to a lexer or parser error: an explanation, a
/// suggested fix, or a reference into the GraphQL specification. A note may
/// point at a related location (e.g. where an unclosed `{` was opened).
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLErrorNote {
    pub kind: GraphQLErrorNoteKind,
    pub message: String,
    pub span: Option<GraphQLSourceSpan>,
}

impl GraphQLErrorNote {
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::General,
            message: message.into(),
            span: None,
        }
    }

    pub fn general_with_span(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
    ) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::General,
            message: message.into(),
            span: Some(span),
        }
    }

    pub fn help(message: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::Help,
            message: message.into(),
            span: None,
        }
    }

    pub fn spec(url: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::Spec,
            message: url.into(),
            span: None,
        }
    }
}

/// Most errors carry zero to two notes.
pub type GraphQLErrorNotes = SmallVec<[GraphQLErrorNote; 2]>;
