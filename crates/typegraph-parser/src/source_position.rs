/// A position within GraphQL source text.
///
/// All values are 0-based. `col_utf8` counts characters (not bytes) from the
/// start of the line, `col_utf16` counts UTF-16 code units (which is what
/// LSP-speaking editors report), and `byte_offset` is relative to the start
/// of the whole document.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourcePosition {
    line: usize,
    col_utf8: usize,
    col_utf16: Option<usize>,
    byte_offset: usize,
}

impl SourcePosition {
    pub fn new(
        line: usize,
        col_utf8: usize,
        col_utf16: Option<usize>,
        byte_offset: usize,
    ) -> Self {
        Self {
            line,
            col_utf8,
            col_utf16,
            byte_offset,
        }
    }

    /// The 0-based byte offset from the start of the document.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// The 0-based character column within the current line.
    pub fn col_utf8(&self) -> usize {
        self.col_utf8
    }

    /// The 0-based UTF-16 code unit column within the current line, if the
    /// token source tracked it.
    pub fn col_utf16(&self) -> Option<usize> {
        self.col_utf16
    }

    /// The 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }
}
