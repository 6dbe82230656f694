//! Owned AST types for parsed GraphQL documents.
//!
//! Every node carries a [`GraphQLSourceSpan`](crate::GraphQLSourceSpan).
//! Strings are owned so a [`Document`] can outlive the source text it was
//! parsed from (the schema builder keeps the document around).

mod ast_node;
mod directive_location;
mod document;
mod executable_defs;
mod name;
mod operation_kind;
mod type_annotation;
mod type_system_defs;
mod value;

pub use ast_node::AstNode;
pub use directive_location::DirectiveLocation;
pub use document::Definition;
pub use document::Document;
pub use executable_defs::Field;
pub use executable_defs::FragmentDefinition;
pub use executable_defs::FragmentSpread;
pub use executable_defs::InlineFragment;
pub use executable_defs::OperationDefinition;
pub use executable_defs::Selection;
pub use executable_defs::SelectionSet;
pub use executable_defs::VariableDefinition;
pub use name::Name;
pub use operation_kind::OperationKind;
pub use type_annotation::TypeAnnotation;
pub use type_system_defs::Argument;
pub use type_system_defs::DirectiveAnnotation;
pub use type_system_defs::DirectiveDefinition;
pub use type_system_defs::EnumTypeDefinition;
pub use type_system_defs::EnumValueDefinition;
pub use type_system_defs::FieldDefinition;
pub use type_system_defs::InputObjectTypeDefinition;
pub use type_system_defs::InputValueDefinition;
pub use type_system_defs::InterfaceTypeDefinition;
pub use type_system_defs::ObjectTypeDefinition;
pub use type_system_defs::RootOperationTypeDefinition;
pub use type_system_defs::ScalarTypeDefinition;
pub use type_system_defs::SchemaDefinition;
pub use type_system_defs::UnionTypeDefinition;
pub use value::Value;
