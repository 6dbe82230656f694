use std::path::PathBuf;
use typegraph_parser::GraphQLSourceSpan;

/// A 1-based line and column within a schema source, plus the file it came
/// from (if it came from a file).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct FilePosition {
    pub col: usize,
    pub file: Option<PathBuf>,
    pub line: usize,
}
impl FilePosition {
    pub(crate) fn from_span(span: &GraphQLSourceSpan) -> Self {
        Self {
            col: span.start_inclusive.col_utf8() + 1,
            file: span.file_path.to_owned(),
            line: span.start_inclusive.line() + 1,
        }
    }
}
impl std::fmt::Display for FilePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:{}:{}", file.display(), self.line, self.col),
            None => write!(f, "{}:{}", self.line, self.col),
        }
    }
}

/// Where something in a [`Schema`](crate::Schema) was defined.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum SourceLocation {
    /// Implicitly defined by GraphQL itself (built-in scalars and
    /// directives).
    GraphQLBuiltIn,
    Schema(FilePosition),
}
impl SourceLocation {
    pub(crate) fn from_span(span: &GraphQLSourceSpan) -> Self {
        Self::Schema(FilePosition::from_span(span))
    }

    pub fn file_position(&self) -> Option<&FilePosition> {
        match self {
            Self::GraphQLBuiltIn => None,
            Self::Schema(pos) => Some(pos),
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::GraphQLBuiltIn)
    }
}
impl std::convert::From<FilePosition> for SourceLocation {
    fn from(value: FilePosition) -> Self {
        Self::Schema(value)
    }
}
impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GraphQLBuiltIn => f.write_str("<graphql built-in>"),
            Self::Schema(pos) => pos.fmt(f),
        }
    }
}
