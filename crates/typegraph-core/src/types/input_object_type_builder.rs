use crate::ast;
use crate::directive_annotation_builder::DirectiveAnnotationBuilder;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::TypeBuilder;
use crate::types::TypeBuilderHelpers;
use crate::types::TypesMapBuilder;
use inherent::inherent;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub(crate) struct InputObjectTypeBuilder;

#[inherent]
impl TypeBuilder for InputObjectTypeBuilder {
    type AstTypeDef = ast::InputObjectTypeDefinition;

    pub(crate) fn visit_type_def(
        &self,
        types_map_builder: &mut TypesMapBuilder,
        def: &<Self as TypeBuilder>::AstTypeDef,
    ) -> Result<()> {
        let fields = TypeBuilderHelpers::inputobject_fields_from_ast(
            def.name.as_str(),
            &def.fields,
        )?;

        types_map_builder.add_new_type(
            def.name.as_str(),
            GraphQLType::InputObject(InputObjectType {
                def_location: loc::SourceLocation::from_span(&def.span),
                description: def.description.to_owned(),
                directives: DirectiveAnnotationBuilder::from_ast(&def.directives),
                fields,
                name: def.name.value.to_string(),
            }.into()),
        )
    }
}
