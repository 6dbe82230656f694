use crate::GraphQLErrorNote;
use crate::GraphQLErrorNoteKind;
use crate::GraphQLErrorNotes;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;

/// A parse error with location information and contextual notes.
///
/// `Display` renders the compact [`format_oneline()`](Self::format_oneline)
/// form; [`format_detailed()`](Self::format_detailed) renders a multi-line
/// diagnostic with a source snippet.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct GraphQLParseError {
    message: String,
    span: GraphQLSourceSpan,
    kind: GraphQLParseErrorKind,
    notes: GraphQLErrorNotes,
}

impl GraphQLParseError {
    pub fn new(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        kind: GraphQLParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes: GraphQLErrorNotes::new(),
        }
    }

    /// Converts a lexer error token's message and notes into a parse error.
    pub fn from_lexer_error(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        lexer_notes: GraphQLErrorNotes,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind: GraphQLParseErrorKind::LexerError,
            notes: lexer_notes,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }

    pub fn kind(&self) -> &GraphQLParseErrorKind {
        &self.kind
    }

    pub fn notes(&self) -> &GraphQLErrorNotes {
        &self.notes
    }

    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::help(message));
    }

    pub fn add_note(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::general(message));
    }

    pub fn add_note_with_span(
        &mut self,
        message: impl Into<String>,
        span: GraphQLSourceSpan,
    ) {
        self.notes.push(GraphQLErrorNote::general_with_span(message, span));
    }

    pub fn add_spec(&mut self, url: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::spec(url));
    }

    /// Formats this error as a rustc-style diagnostic:
    ///
    /// ```text
    /// error: expected `:`, found `String`
    ///   --> schema.graphql:5:14
    ///    |
    ///  5 |     userName String
    ///    |              ^^^^^^
    ///    = help: ...
    /// ```
    ///
    /// Snippets are omitted when `source` is `None`.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let mut output = String::new();
        output.push_str("error: ");
        output.push_str(&self.message);
        output.push('\n');
        output.push_str(&format!("  --> {}\n", self.location_label()));

        if let Some(src) = source
            && let Some(snippet) = format_snippet(src, &self.span, '^')
        {
            output.push_str(&snippet);
        }

        for note in &self.notes {
            let prefix = match note.kind {
                GraphQLErrorNoteKind::General => "note",
                GraphQLErrorNoteKind::Help => "help",
                GraphQLErrorNoteKind::Spec => "spec",
            };
            output.push_str(&format!("   = {prefix}: {}\n", note.message));
            if let (Some(note_span), Some(src)) = (&note.span, source)
                && let Some(snippet) = format_snippet(src, note_span, '-')
            {
                output.push_str(&snippet);
            }
        }

        output
    }

    /// Formats this error as `file:line:col: error: message`, using
    /// `<input>` when the source has no file path.
    pub fn format_oneline(&self) -> String {
        format!("{}: error: {}", self.location_label(), self.message)
    }

    fn location_label(&self) -> String {
        let file_name = self
            .span
            .file_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<input>".to_string());
        let line = self.span.start_inclusive.line() + 1;
        let column = self.span.start_inclusive.col_utf8() + 1;
        format!("{file_name}:{line}:{column}")
    }
}

fn format_snippet(
    source: &str,
    span: &GraphQLSourceSpan,
    marker: char,
) -> Option<String> {
    let line_num = span.start_inclusive.line();
    let line_content = source.lines().nth(line_num)?;
    let display_line_num = line_num + 1;
    let width = display_line_num.to_string().len().max(2);

    let col_start = span.start_inclusive.col_utf8();
    let underline_len =
        if span.end_exclusive.line() == line_num
            && span.end_exclusive.col_utf8() > col_start {
            span.end_exclusive.col_utf8() - col_start
        } else {
            1
        };

    let mut output = String::new();
    output.push_str(&format!("{:>width$} |\n", ""));
    output.push_str(&format!("{display_line_num:>width$} | {line_content}\n"));
    output.push_str(&format!(
        "{:>width$} | {:>col_start$}{}\n",
        "",
        "",
        marker.to_string().repeat(underline_len),
    ));
    Some(output)
}
