use crate::ast::AstNode;
use crate::ast::Name;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A type reference as written in source: `T`, `[T]` or `T!`, nested
/// arbitrarily (`[[T!]]!`).
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation {
    Named(Name),
    List {
        span: GraphQLSourceSpan,
        inner: Box<TypeAnnotation>,
    },
    NonNull {
        span: GraphQLSourceSpan,
        inner: Box<TypeAnnotation>,
    },
}

impl TypeAnnotation {
    /// The name of the named type at the bottom of any list/non-null
    /// wrappers.
    pub fn innermost_name(&self) -> &Name {
        match self {
            TypeAnnotation::Named(name) => name,
            TypeAnnotation::List { inner, .. }
            | TypeAnnotation::NonNull { inner, .. } => inner.innermost_name(),
        }
    }
}

#[inherent]
impl AstNode for TypeAnnotation {
    pub fn span(&self) -> &GraphQLSourceSpan {
        match self {
            TypeAnnotation::Named(name) => &name.span,
            TypeAnnotation::List { span, .. }
            | TypeAnnotation::NonNull { span, .. } => span,
        }
    }
}

impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeAnnotation::Named(name) => f.write_str(&name.value),
            TypeAnnotation::List { inner, .. } => write!(f, "[{inner}]"),
            TypeAnnotation::NonNull { inner, .. } => write!(f, "{inner}!"),
        }
    }
}
