use crate::ast;
use crate::directive_annotation_builder::DirectiveAnnotationBuilder;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::TypeBuilder;
use crate::types::TypeBuilderHelpers;
use crate::types::TypesMapBuilder;
use inherent::inherent;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub(crate) struct ObjectTypeBuilder;

#[inherent]
impl TypeBuilder for ObjectTypeBuilder {
    type AstTypeDef = ast::ObjectTypeDefinition;

    pub(crate) fn visit_type_def(
        &self,
        types_map_builder: &mut TypesMapBuilder,
        def: &<Self as TypeBuilder>::AstTypeDef,
    ) -> Result<()> {
        let type_name = def.name.as_str();
        let interfaces = TypeBuilderHelpers::interfaces_from_ast(
            type_name,
            &def.implements,
        )?;
        let fields = TypeBuilderHelpers::object_fielddefs_from_ast(
            type_name,
            &def.fields,
        )?;

        types_map_builder.add_new_type(
            type_name,
            GraphQLType::Object(ObjectType(ObjectOrInterfaceTypeData {
                def_location: loc::SourceLocation::from_span(&def.span),
                description: def.description.to_owned(),
                directives: DirectiveAnnotationBuilder::from_ast(&def.directives),
                fields,
                interfaces,
                name: type_name.to_string(),
            }).into()),
        )
    }
}
