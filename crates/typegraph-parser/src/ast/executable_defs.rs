use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::DirectiveAnnotation;
use crate::ast::Name;
use crate::ast::OperationKind;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A query, mutation or subscription. The `{ ... }` shorthand parses as an
/// anonymous query.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition {
    pub span: GraphQLSourceSpan,
    pub operation_kind: OperationKind,
    pub name: Option<Name>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub directives: Vec<DirectiveAnnotation>,
    pub selection_set: SelectionSet,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    pub span: GraphQLSourceSpan,
    pub name: Name,
    pub var_type: TypeAnnotation,
    pub default_value: Option<Value>,
    pub directives: Vec<DirectiveAnnotation>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition {
    pub span: GraphQLSourceSpan,
    pub name: Name,
    pub type_condition: Name,
    pub directives: Vec<DirectiveAnnotation>,
    pub selection_set: SelectionSet,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet {
    pub span: GraphQLSourceSpan,
    pub selections: Vec<Selection>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub span: GraphQLSourceSpan,
    pub alias: Option<Name>,
    pub name: Name,
    pub arguments: Vec<Argument>,
    pub directives: Vec<DirectiveAnnotation>,
    pub selection_set: Option<SelectionSet>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub span: GraphQLSourceSpan,
    pub name: Name,
    pub directives: Vec<DirectiveAnnotation>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub span: GraphQLSourceSpan,
    pub type_condition: Option<Name>,
    pub directives: Vec<DirectiveAnnotation>,
    pub selection_set: SelectionSet,
}

#[inherent]
impl AstNode for Selection {
    pub fn span(&self) -> &GraphQLSourceSpan {
        match self {
            Selection::Field(field) => &field.span,
            Selection::FragmentSpread(spread) => &spread.span,
            Selection::InlineFragment(fragment) => &fragment.span,
        }
    }
}

macro_rules! impl_ast_node {
    ($($node:ty),* $(,)?) => {
        $(
            #[inherent]
            impl AstNode for $node {
                pub fn span(&self) -> &GraphQLSourceSpan {
                    &self.span
                }
            }
        )*
    };
}

impl_ast_node!(
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    OperationDefinition,
    SelectionSet,
    VariableDefinition,
);
