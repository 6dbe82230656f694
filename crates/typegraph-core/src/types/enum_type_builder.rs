use crate::ast;
use crate::directive_annotation_builder::DirectiveAnnotationBuilder;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::GraphQLType;
use crate::types::TypeBuilder;
use crate::types::TypesMapBuilder;
use indexmap::IndexMap;
use inherent::inherent;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub(crate) struct EnumTypeBuilder;

#[inherent]
impl TypeBuilder for EnumTypeBuilder {
    type AstTypeDef = ast::EnumTypeDefinition;

    pub(crate) fn visit_type_def(
        &self,
        types_map_builder: &mut TypesMapBuilder,
        def: &<Self as TypeBuilder>::AstTypeDef,
    ) -> Result<()> {
        let type_name = def.name.as_str();
        let mut values: IndexMap<String, EnumValue> = IndexMap::new();
        for value_def in &def.values {
            let value_srcloc = loc::SourceLocation::from_span(&value_def.span);
            if let Some(existing_value) = values.get(value_def.name.as_str()) {
                return Err(SchemaBuildError::DuplicateMemberDefinition {
                    def1: existing_value.def_location.to_owned(),
                    def2: value_srcloc,
                    member_kind: "Enum value",
                    member_name: value_def.name.value.to_string(),
                    parent_name: type_name.to_string(),
                });
            }
            values.insert(value_def.name.value.to_string(), EnumValue {
                def_location: value_srcloc,
                description: value_def.description.to_owned(),
                directives: DirectiveAnnotationBuilder::from_ast(&value_def.directives),
                name: value_def.name.value.to_string(),
                type_name: type_name.to_string(),
            });
        }

        types_map_builder.add_new_type(
            type_name,
            GraphQLType::Enum(EnumType {
                def_location: loc::SourceLocation::from_span(&def.span),
                description: def.description.to_owned(),
                directives: DirectiveAnnotationBuilder::from_ast(&def.directives),
                name: type_name.to_string(),
                values,
            }.into()),
        )
    }
}
