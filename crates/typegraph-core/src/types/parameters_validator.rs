use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::Parameter;
use indexmap::IndexMap;

/// Checks that each parameter is declared with an input type.
///
/// <https://spec.graphql.org/October2021/#sel-KAHZhCFDBHBDCAACEB6yD>
pub(crate) struct ParametersValidator<'a> {
    owner_name: String,
    params: &'a IndexMap<String, Parameter>,
    types_map: &'a IndexMap<String, GraphQLType>,
}
impl<'a> ParametersValidator<'a> {
    pub fn new(
        owner_name: impl Into<String>,
        params: &'a IndexMap<String, Parameter>,
        types_map: &'a IndexMap<String, GraphQLType>,
    ) -> Self {
        Self {
            owner_name: owner_name.into(),
            params,
            types_map,
        }
    }

    pub fn validate(self) -> Vec<TypeValidationError> {
        let mut errors = vec![];
        for param in self.params.values() {
            let type_ref = param.type_annotation().inner_named_type_ref();
            let Some(param_type) = self.types_map.get(type_ref.name()) else {
                continue;
            };
            if !param_type.is_input_type() {
                errors.push(TypeValidationError::InvalidParameterWithOutputOnlyType {
                    outputonly_type_kind: param_type.kind(),
                    outputonly_type_name: param_type.name().to_string(),
                    owner_name: self.owner_name.to_owned(),
                    parameter_name: param.name().to_string(),
                    ref_location: type_ref.ref_location().to_owned(),
                });
            }
        }
        errors
    }
}
