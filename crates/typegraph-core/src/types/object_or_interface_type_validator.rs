use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ParametersValidator;
use indexmap::IndexMap;

pub(crate) struct ObjectOrInterfaceTypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    type_: &'a ObjectOrInterfaceTypeData,
    types_map: &'a IndexMap<String, GraphQLType>,
}
impl<'a> ObjectOrInterfaceTypeValidator<'a> {
    pub fn new(
        type_: &'a ObjectOrInterfaceTypeData,
        types_map: &'a IndexMap<String, GraphQLType>,
    ) -> Self {
        Self {
            errors: vec![],
            type_,
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        let type_name = self.type_.name();

        for iface_ref in &self.type_.interfaces {
            let Some(iface_type) = self.types_map.get(iface_ref.name()) else {
                continue;
            };
            if iface_type.as_interface().is_none() {
                self.errors.push(TypeValidationError::ImplementsNonInterfaceType {
                    non_interface_type_kind: iface_type.kind(),
                    non_interface_type_name: iface_type.name().to_string(),
                    ref_location: iface_ref.ref_location().to_owned(),
                    type_name: type_name.to_string(),
                });
            }
        }

        for (field_name, field) in self.type_.fields() {
            // https://spec.graphql.org/October2021/#sel-IAHZhCHCDEBFAAACGi7G
            let type_ref = field.type_annotation().inner_named_type_ref();
            if let Some(field_type) = self.types_map.get(type_ref.name())
                && !field_type.is_output_type() {
                self.errors.push(TypeValidationError::InvalidOutputFieldWithInputType {
                    field_name: field_name.to_string(),
                    input_type_name: field_type.name().to_string(),
                    parent_type_name: type_name.to_string(),
                    ref_location: type_ref.ref_location().to_owned(),
                });
            }

            self.errors.append(&mut ParametersValidator::new(
                format!("{type_name}.{field_name}"),
                field.parameters(),
                self.types_map,
            ).validate());
        }

        self.errors
    }
}
