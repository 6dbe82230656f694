use crate::ast;
use crate::directive_annotation_builder::DirectiveAnnotationBuilder;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::Field;
use crate::types::InputField;
use crate::types::NamedGraphQLTypeRef;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use crate::types::TypesMapBuilder;
use crate::Value;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Builds one kind of named type from its AST definition and registers it
/// with a [`TypesMapBuilder`].
pub(crate) trait TypeBuilder {
    type AstTypeDef;

    fn visit_type_def(
        &self,
        types_map_builder: &mut TypesMapBuilder,
        def: &Self::AstTypeDef,
    ) -> Result<()>;
}

pub(crate) struct TypeBuilderHelpers;
impl TypeBuilderHelpers {
    pub fn inputobject_fields_from_ast(
        type_name: &str,
        input_fields: &[ast::InputValueDefinition],
    ) -> Result<IndexMap<String, InputField>> {
        let mut field_map: IndexMap<String, InputField> = IndexMap::new();
        for field in input_fields {
            let fielddef_srcloc = loc::SourceLocation::from_span(&field.span);
            if let Some(existing_field) = field_map.get(field.name.as_str()) {
                return Err(SchemaBuildError::DuplicateMemberDefinition {
                    def1: existing_field.def_location.to_owned(),
                    def2: fielddef_srcloc,
                    member_kind: "Input field",
                    member_name: field.name.value.to_string(),
                    parent_name: type_name.to_string(),
                });
            }

            field_map.insert(field.name.value.to_string(), InputField {
                default_value: field.default_value.as_ref().map(Value::from_ast),
                description: field.description.to_owned(),
                directives: DirectiveAnnotationBuilder::from_ast(&field.directives),
                name: field.name.value.to_string(),
                parent_type: NamedGraphQLTypeRef::new(
                    type_name,
                    fielddef_srcloc.to_owned(),
                ),
                type_annotation: TypeAnnotation::from_ast_type(&field.value_type),
                def_location: fielddef_srcloc,
            });
        }
        Ok(field_map)
    }

    pub fn interfaces_from_ast(
        type_name: &str,
        implements: &[ast::Name],
    ) -> Result<Vec<NamedGraphQLTypeRef>> {
        let mut interface_refs: Vec<NamedGraphQLTypeRef> = vec![];
        for iface_name in implements {
            let ref_location = loc::SourceLocation::from_span(&iface_name.span);

            // https://spec.graphql.org/October2021/#sel-HAHZhCFFABABsCqgY
            if let Some(existing_ref) = interface_refs
                .iter()
                .find(|iface_ref| iface_ref.name() == iface_name.as_str()) {
                return Err(SchemaBuildError::DuplicateMemberDefinition {
                    def1: existing_ref.ref_location().to_owned(),
                    def2: ref_location,
                    member_kind: "Implemented interface",
                    member_name: iface_name.value.to_string(),
                    parent_name: type_name.to_string(),
                });
            }
            interface_refs.push(NamedGraphQLTypeRef::new(
                iface_name.as_str(),
                ref_location,
            ));
        }
        Ok(interface_refs)
    }

    pub fn object_fielddefs_from_ast(
        type_name: &str,
        fields: &[ast::FieldDefinition],
    ) -> Result<IndexMap<String, Field>> {
        let mut field_map: IndexMap<String, Field> = IndexMap::new();
        for field in fields {
            let fielddef_srcloc = loc::SourceLocation::from_span(&field.span);
            if let Some(existing_field) = field_map.get(field.name.as_str()) {
                return Err(SchemaBuildError::DuplicateMemberDefinition {
                    def1: existing_field.def_location.to_owned(),
                    def2: fielddef_srcloc,
                    member_kind: "Field",
                    member_name: field.name.value.to_string(),
                    parent_name: type_name.to_string(),
                });
            }

            let params = Self::parameters_from_ast(
                format!("{type_name}.{}", field.name.value).as_str(),
                &field.arguments,
            )?;

            field_map.insert(field.name.value.to_string(), Field {
                description: field.description.to_owned(),
                directives: DirectiveAnnotationBuilder::from_ast(&field.directives),
                name: field.name.value.to_string(),
                parameters: params,
                parent_type: NamedGraphQLTypeRef::new(
                    type_name,
                    fielddef_srcloc.to_owned(),
                ),
                type_annotation: TypeAnnotation::from_ast_type(&field.field_type),
                def_location: fielddef_srcloc,
            });
        }
        Ok(field_map)
    }

    /// Builds the parameters of a field or a directive definition.
    /// `owner_name` names the owner in error messages (`Query.user`,
    /// `@cache`).
    pub fn parameters_from_ast(
        owner_name: &str,
        arguments: &[ast::InputValueDefinition],
    ) -> Result<IndexMap<String, Parameter>> {
        let mut params: IndexMap<String, Parameter> = IndexMap::new();
        for arg in arguments {
            let param = Parameter::from_ast(arg);
            if let Some(existing_param) = params.get(param.name()) {
                return Err(SchemaBuildError::DuplicateMemberDefinition {
                    def1: existing_param.def_location.to_owned(),
                    def2: param.def_location,
                    member_kind: "Argument",
                    member_name: param.name,
                    parent_name: owner_name.to_string(),
                });
            }
            params.insert(param.name.to_owned(), param);
        }
        Ok(params)
    }
}
