use crate::GraphQLSourceSpan;

/// Implemented by every AST node that occupies a region of source text.
pub trait AstNode {
    fn span(&self) -> &GraphQLSourceSpan;

    /// Appends the source text this node was parsed from to `sink`.
    fn append_source(&self, sink: &mut String, source: &str) {
        let span = self.span();
        let start = span.start_inclusive.byte_offset();
        let end = span.end_exclusive.byte_offset();
        if let Some(slice) = source.get(start..end) {
            sink.push_str(slice);
        }
    }
}
