use crate::ast::AstNode;
use crate::ast::DirectiveLocation;
use crate::ast::Name;
use crate::ast::OperationKind;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// `schema @dirs { query: Q mutation: M }`
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDefinition {
    pub span: GraphQLSourceSpan,
    pub directives: Vec<DirectiveAnnotation>,
    pub root_operations: Vec<RootOperationTypeDefinition>,
}

/// One `query: Q` entry of a [`SchemaDefinition`].
#[derive(Clone, Debug, PartialEq)]
pub struct RootOperationTypeDefinition {
    pub span: GraphQLSourceSpan,
    pub operation_kind: OperationKind,
    pub named_type: Name,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeDefinition {
    pub span: GraphQLSourceSpan,
    pub description: Option<String>,
    pub name: Name,
    pub implements: Vec<Name>,
    pub directives: Vec<DirectiveAnnotation>,
    pub fields: Vec<FieldDefinition>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeDefinition {
    pub span: GraphQLSourceSpan,
    pub description: Option<String>,
    pub name: Name,
    pub implements: Vec<Name>,
    pub directives: Vec<DirectiveAnnotation>,
    pub fields: Vec<FieldDefinition>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeDefinition {
    pub span: GraphQLSourceSpan,
    pub description: Option<String>,
    pub name: Name,
    pub directives: Vec<DirectiveAnnotation>,
    pub members: Vec<Name>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeDefinition {
    pub span: GraphQLSourceSpan,
    pub description: Option<String>,
    pub name: Name,
    pub directives: Vec<DirectiveAnnotation>,
    pub values: Vec<EnumValueDefinition>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDefinition {
    pub span: GraphQLSourceSpan,
    pub description: Option<String>,
    pub name: Name,
    pub directives: Vec<DirectiveAnnotation>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeDefinition {
    pub span: GraphQLSourceSpan,
    pub description: Option<String>,
    pub name: Name,
    pub directives: Vec<DirectiveAnnotation>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeDefinition {
    pub span: GraphQLSourceSpan,
    pub description: Option<String>,
    pub name: Name,
    pub directives: Vec<DirectiveAnnotation>,
    pub fields: Vec<InputValueDefinition>,
}

/// A field of an object or interface type.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition {
    pub span: GraphQLSourceSpan,
    pub description: Option<String>,
    pub name: Name,
    pub arguments: Vec<InputValueDefinition>,
    pub field_type: TypeAnnotation,
    pub directives: Vec<DirectiveAnnotation>,
}

/// An argument definition or an input object field.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition {
    pub span: GraphQLSourceSpan,
    pub description: Option<String>,
    pub name: Name,
    pub value_type: TypeAnnotation,
    pub default_value: Option<Value>,
    pub directives: Vec<DirectiveAnnotation>,
}

/// `directive @name(args) repeatable? on LOC | LOC`
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition {
    pub span: GraphQLSourceSpan,
    pub description: Option<String>,
    pub name: Name,
    pub arguments: Vec<InputValueDefinition>,
    pub repeatable: bool,
    pub locations: Vec<DirectiveLocation>,
}

/// A directive applied somewhere (`@deprecated(reason: "x")`).
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub span: GraphQLSourceSpan,
    pub name: Name,
    pub arguments: Vec<Argument>,
}

impl DirectiveAnnotation {
    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments
            .iter()
            .find(|arg| arg.name.value == name)
            .map(|arg| &arg.value)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub span: GraphQLSourceSpan,
    pub name: Name,
    pub value: Value,
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
    Argument,
    DirectiveAnnotation,
    DirectiveDefinition,
    EnumTypeDefinition,
    EnumValueDefinition,
    FieldDefinition,
    InputObjectTypeDefinition,
    InputValueDefinition,
    InterfaceTypeDefinition,
    ObjectTypeDefinition,
    RootOperationTypeDefinition,
    ScalarTypeDefinition,
    SchemaDefinition,
    UnionTypeDefinition,
);
