use crate::ast;
use crate::directive_annotation_builder::DirectiveAnnotationBuilder;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::ScalarType;
use crate::types::TypeBuilder;
use crate::types::TypesMapBuilder;
use inherent::inherent;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub(crate) struct ScalarTypeBuilder;

#[inherent]
impl TypeBuilder for ScalarTypeBuilder {
    type AstTypeDef = ast::ScalarTypeDefinition;

    pub(crate) fn visit_type_def(
        &self,
        types_map_builder: &mut TypesMapBuilder,
        def: &<Self as TypeBuilder>::AstTypeDef,
    ) -> Result<()> {
        types_map_builder.add_new_type(
            def.name.as_str(),
            GraphQLType::Scalar(ScalarType {
                def_location: loc::SourceLocation::from_span(&def.span),
                description: def.description.to_owned(),
                directives: DirectiveAnnotationBuilder::from_ast(&def.directives),
                name: def.name.value.to_string(),
            }.into()),
        )
    }
}
