use crate::ast::AstNode;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A GraphQL name (`/[_A-Za-z][_0-9A-Za-z]*/`) and where it appeared.
#[derive(Clone, Debug, PartialEq)]
pub struct Name {
    pub span: GraphQLSourceSpan,
    pub value: String,
}

impl Name {
    pub fn as_str(&self) -> &str {
        self.value.as_str()
    }
}

#[inherent]
impl AstNode for Name {
    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }
}
