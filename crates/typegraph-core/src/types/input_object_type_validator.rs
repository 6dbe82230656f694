use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use indexmap::IndexMap;

pub(crate) struct InputObjectTypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    type_: &'a InputObjectType,
    types_map: &'a IndexMap<String, GraphQLType>,
}
impl<'a> InputObjectTypeValidator<'a> {
    pub fn new(
        type_: &'a InputObjectType,
        types_map: &'a IndexMap<String, GraphQLType>,
    ) -> Self {
        Self {
            errors: vec![],
            type_,
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        for (field_name, field) in self.type_.fields() {
            // https://spec.graphql.org/October2021/#sel-IAHhBXDDBFCAACEB4iG
            let type_ref = field.type_annotation().inner_named_type_ref();
            let Some(field_type) = self.types_map.get(type_ref.name()) else {
                continue;
            };
            if !field_type.is_input_type() {
                self.errors.push(TypeValidationError::InvalidInputFieldWithOutputType {
                    field_name: field_name.to_string(),
                    invalid_type_kind: field_type.kind(),
                    invalid_type_name: field_type.name().to_string(),
                    parent_type_name: self.type_.name().to_string(),
                    ref_location: type_ref.ref_location().to_owned(),
                });
            }
        }

        self.errors
    }
}
