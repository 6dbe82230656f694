/// Categorizes a [`GraphQLParseError`](crate::GraphQLParseError) so tools
/// can match on the failure without inspecting the message text.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GraphQLParseErrorKind {
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        expected: Vec<String>,
        found: String,
    },

    #[error("unexpected end of input")]
    UnexpectedEof {
        expected: Vec<String>,
    },

    /// The lexer produced an error token (bad character, unterminated
    /// string, malformed number).
    #[error("lexer error")]
    LexerError,

    #[error("unclosed delimiter: `{delimiter}`")]
    UnclosedDelimiter {
        delimiter: String,
    },

    /// A literal was lexically valid but could not be converted (e.g. an
    /// integer that overflows `i64`, a bad string escape).
    #[error("invalid value: {message}")]
    InvalidValue {
        message: String,
    },

    /// A `$variable` appeared where only constant values are allowed.
    #[error("variable in constant context")]
    VariableInConstContext,

    /// A construct that must contain at least one item was empty (e.g.
    /// `union U =`).
    #[error("invalid empty construct: `{construct}`")]
    InvalidEmptyConstruct {
        construct: String,
    },

    #[error("invalid syntax")]
    InvalidSyntax,
}
