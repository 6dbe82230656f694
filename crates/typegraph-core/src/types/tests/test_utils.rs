use crate::ast;
use crate::schema::SchemaBuildError;
use crate::types::EnumType;
use crate::types::EnumTypeBuilder;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InputObjectTypeBuilder;
use crate::types::InterfaceTypeBuilder;
use crate::types::ObjectType;
use crate::types::ObjectTypeBuilder;
use crate::types::ScalarTypeBuilder;
use crate::types::TypeBuilder;
use crate::types::TypesMapBuilder;
use crate::types::UnionType;
use crate::types::UnionTypeBuilder;

pub fn parse_document(sdl: &str) -> ast::Document {
    let result = typegraph_parser::parse_document(sdl, None);
    if result.has_errors() {
        panic!("unexpected parse errors:\n{}", result.format_errors(Some(sdl)));
    }
    result.into_ast().unwrap_or_default()
}

/// Runs every type definition in `sdl` through its builder, without
/// resolving or validating any references.
pub fn visit_type_defs(sdl: &str) -> Result<TypesMapBuilder, SchemaBuildError> {
    let document = parse_document(sdl);
    let mut types_map_builder = TypesMapBuilder::new();
    for def in &document.definitions {
        match def {
            ast::Definition::EnumType(def) =>
                EnumTypeBuilder.visit_type_def(&mut types_map_builder, def)?,
            ast::Definition::InputObjectType(def) =>
                InputObjectTypeBuilder.visit_type_def(&mut types_map_builder, def)?,
            ast::Definition::InterfaceType(def) =>
                InterfaceTypeBuilder.visit_type_def(&mut types_map_builder, def)?,
            ast::Definition::ObjectType(def) =>
                ObjectTypeBuilder.visit_type_def(&mut types_map_builder, def)?,
            ast::Definition::ScalarType(def) =>
                ScalarTypeBuilder.visit_type_def(&mut types_map_builder, def)?,
            ast::Definition::UnionType(def) =>
                UnionTypeBuilder.visit_type_def(&mut types_map_builder, def)?,
            _ => (),
        }
    }
    Ok(types_map_builder)
}

pub fn get_enum_type<'a>(
    types_map_builder: &'a TypesMapBuilder,
    type_name: &str,
) -> &'a EnumType {
    match types_map_builder.get_type(type_name) {
        Some(GraphQLType::Enum(enum_type)) => enum_type,
        other => panic!("expected `{type_name}` to be an enum type, found {other:?}"),
    }
}

pub fn get_input_object_type<'a>(
    types_map_builder: &'a TypesMapBuilder,
    type_name: &str,
) -> &'a InputObjectType {
    match types_map_builder.get_type(type_name) {
        Some(GraphQLType::InputObject(inputobj_type)) => inputobj_type,
        other => panic!("expected `{type_name}` to be an input object type, found {other:?}"),
    }
}

pub fn get_object_type<'a>(
    types_map_builder: &'a TypesMapBuilder,
    type_name: &str,
) -> &'a ObjectType {
    match types_map_builder.get_type(type_name) {
        Some(GraphQLType::Object(obj_type)) => obj_type,
        other => panic!("expected `{type_name}` to be an object type, found {other:?}"),
    }
}

pub fn get_union_type<'a>(
    types_map_builder: &'a TypesMapBuilder,
    type_name: &str,
) -> &'a UnionType {
    match types_map_builder.get_type(type_name) {
        Some(GraphQLType::Union(union_type)) => union_type,
        other => panic!("expected `{type_name}` to be a union type, found {other:?}"),
    }
}
