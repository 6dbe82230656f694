use crate::ast;
use crate::directive_annotation_builder::DirectiveAnnotationBuilder;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::TypeBuilder;
use crate::types::TypeBuilderHelpers;
use crate::types::TypesMapBuilder;
use inherent::inherent;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub(crate) struct InterfaceTypeBuilder;

#[inherent]
impl TypeBuilder for InterfaceTypeBuilder {
    type AstTypeDef = ast::InterfaceTypeDefinition;

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

        // https://spec.graphql.org/October2021/#sel-GAHbhBDABAB_E-0b
        if let Some(self_ref) = interfaces
            .iter()
            .find(|iface_ref| iface_ref.name() == type_name) {
            return Err(SchemaBuildError::InvalidSelfImplementingInterface {
                interface_name: type_name.to_string(),
                ref_location: self_ref.ref_location().to_owned(),
            });
        }
        let fields = TypeBuilderHelpers::object_fielddefs_from_ast(
            type_name,
            &def.fields,
        )?;

        types_map_builder.add_new_type(
            type_name,
            GraphQLType::Interface(InterfaceType(ObjectOrInterfaceTypeData {
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
