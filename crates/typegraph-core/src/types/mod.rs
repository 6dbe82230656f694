mod deprecation_state;
mod directive;
mod directive_builder;
mod enum_type;
mod enum_type_builder;
mod enum_value;
mod field;
mod graphql_type;
mod graphql_type_kind;
mod input_field;
mod input_object_type;
mod input_object_type_builder;
mod input_object_type_validator;
mod interface_type;
mod interface_type_builder;
mod list_type_annotation;
mod named_type_annotation;
mod object_or_interface_type_data;
mod object_or_interface_type_trait;
mod object_or_interface_type_validator;
mod object_type;
mod object_type_builder;
mod parameter;
mod parameters_validator;
mod scalar_type;
mod scalar_type_builder;
mod type_annotation;
mod type_builder;
mod types_map_builder;
mod union_type;
mod union_type_builder;
mod union_type_validator;

pub use deprecation_state::DEFAULT_DEPRECATION_REASON;
pub use deprecation_state::DeprecationState;
pub use directive::Directive;
pub use directive::NamedDirectiveRef;
pub(crate) use directive_builder::DirectiveBuilder;
pub use enum_type::EnumType;
pub(crate) use enum_type_builder::EnumTypeBuilder;
pub use enum_value::EnumValue;
pub use field::Field;
pub use graphql_type::GraphQLType;
pub use graphql_type::NamedGraphQLTypeRef;
pub use graphql_type_kind::GraphQLTypeKind;
pub use input_field::InputField;
pub use input_object_type::InputObjectType;
pub(crate) use input_object_type_builder::InputObjectTypeBuilder;
use input_object_type_validator::InputObjectTypeValidator;
pub use interface_type::InterfaceType;
pub(crate) use interface_type_builder::InterfaceTypeBuilder;
pub use list_type_annotation::ListTypeAnnotation;
pub use named_type_annotation::NamedTypeAnnotation;
pub(crate) use object_or_interface_type_data::ObjectOrInterfaceTypeData;
pub use object_or_interface_type_trait::ObjectOrInterfaceTypeTrait;
use object_or_interface_type_validator::ObjectOrInterfaceTypeValidator;
pub use object_type::ObjectType;
pub(crate) use object_type_builder::ObjectTypeBuilder;
pub use parameter::Parameter;
pub(crate) use parameters_validator::ParametersValidator;
pub use scalar_type::ScalarType;
pub(crate) use scalar_type_builder::ScalarTypeBuilder;
pub use type_annotation::TypeAnnotation;
pub(crate) use type_builder::TypeBuilder;
use type_builder::TypeBuilderHelpers;
pub(crate) use types_map_builder::TypesMapBuilder;
pub use union_type::UnionType;
pub(crate) use union_type_builder::UnionTypeBuilder;
use union_type_validator::UnionTypeValidator;

#[cfg(test)]
mod tests;
