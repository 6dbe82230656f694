use crate::ast;
use crate::directive_annotation_builder::DirectiveAnnotationBuilder;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::TypeBuilder;
use crate::types::TypesMapBuilder;
use crate::types::UnionType;
use indexmap::IndexMap;
use inherent::inherent;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub(crate) struct UnionTypeBuilder;

#[inherent]
impl TypeBuilder for UnionTypeBuilder {
    type AstTypeDef = ast::UnionTypeDefinition;

    pub(crate) fn visit_type_def(
        &self,
        types_map_builder: &mut TypesMapBuilder,
        def: &<Self as TypeBuilder>::AstTypeDef,
    ) -> Result<()> {
        let mut members: IndexMap<String, NamedGraphQLTypeRef> = IndexMap::new();
        for member_name in &def.members {
            let member_srcloc = loc::SourceLocation::from_span(&member_name.span);
            if let Some(existing_member) = members.get(member_name.as_str()) {
                return Err(SchemaBuildError::DuplicateMemberDefinition {
                    def1: existing_member.ref_location().to_owned(),
                    def2: member_srcloc,
                    member_kind: "Union member",
                    member_name: member_name.value.to_string(),
                    parent_name: def.name.value.to_string(),
                });
            }
            members.insert(member_name.value.to_string(), NamedGraphQLTypeRef::new(
                member_name.as_str(),
                member_srcloc,
            ));
        }

        types_map_builder.add_new_type(
            def.name.as_str(),
            GraphQLType::Union(UnionType {
                def_location: loc::SourceLocation::from_span(&def.span),
                description: def.description.to_owned(),
                directives: DirectiveAnnotationBuilder::from_ast(&def.directives),
                members,
                name: def.name.value.to_string(),
            }.into()),
        )
    }
}
