use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::UnionType;
use indexmap::IndexMap;

pub(crate) struct UnionTypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    type_: &'a UnionType,
    types_map: &'a IndexMap<String, GraphQLType>,
}
impl<'a> UnionTypeValidator<'a> {
    pub fn new(
        type_: &'a UnionType,
        types_map: &'a IndexMap<String, GraphQLType>,
    ) -> Self {
        Self {
            errors: vec![],
            type_,
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        for (member_type_name, member_type_ref) in &self.type_.members {
            // Member types of a union type can only be object types.
            // https://spec.graphql.org/October2021/#sel-HAHdfFDABABlG3ib
            let Some(member_type) = self.types_map.get(member_type_name) else {
                continue;
            };
            if !matches!(member_type, GraphQLType::Object(_)) {
                self.errors.push(TypeValidationError::InvalidUnionMemberTypeKind {
                    member_type_kind: member_type.kind(),
                    member_type_name: member_type_name.to_string(),
                    ref_location: member_type_ref.ref_location().to_owned(),
                    union_type_name: self.type_.name().to_string(),
                });
            }
        }

        self.errors
    }
}
