//! Result type for parsing operations that may produce partial results.

use crate::GraphQLParseError;

/// The outcome of a parse: the (possibly error-recovered) AST plus every
/// error recorded along the way.
///
/// When `errors` is non-empty the AST is still available via
/// [`ast()`](Self::ast) for tooling, but [`valid_ast()`](Self::valid_ast)
/// returns `None`.
#[derive(Debug)]
pub struct ParseResult<TAst> {
    ast: Option<TAst>,
    pub errors: Vec<GraphQLParseError>,
}

impl<TAst> ParseResult<TAst> {
    pub(crate) fn ok(ast: TAst) -> Self {
        Self {
            ast: Some(ast),
            errors: Vec::new(),
        }
    }

    pub(crate) fn recovered(ast: TAst, errors: Vec<GraphQLParseError>) -> Self {
        Self {
            ast: Some(ast),
            errors,
        }
    }

    pub fn ast(&self) -> Option<&TAst> {
        self.ast.as_ref()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn into_ast(self) -> Option<TAst> {
        self.ast
    }

    pub fn into_valid_ast(self) -> Option<TAst> {
        if self.errors.is_empty() {
            self.ast
        } else {
            None
        }
    }

    pub fn is_ok(&self) -> bool {
        self.ast.is_some() && self.errors.is_empty()
    }

    pub fn valid_ast(&self) -> Option<&TAst> {
        if self.errors.is_empty() {
            self.ast.as_ref()
        } else {
            None
        }
    }

    /// Renders every error with [`GraphQLParseError::format_detailed()`].
    pub fn format_errors(&self, source: Option<&str>) -> String {
        self.errors
            .iter()
            .map(|e| e.format_detailed(source))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<TAst> From<ParseResult<TAst>> for Result<TAst, Vec<GraphQLParseError>> {
    fn from(result: ParseResult<TAst>) -> Self {
        if result.errors.is_empty() {
            match result.ast {
                Some(ast) => Ok(ast),
                None => Err(Vec::new()),
            }
        } else {
            Err(result.errors)
        }
    }
}
