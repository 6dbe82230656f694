use crate::schema::SchemaBuildError;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputObjectTypeValidator;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceTypeValidator;
use crate::types::UnionTypeValidator;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Accumulates a schema's named types, starting from the five built-in
/// scalars.
#[derive(Debug)]
pub(crate) struct TypesMapBuilder {
    types: IndexMap<String, GraphQLType>,
}
impl TypesMapBuilder {
    pub fn new() -> Self {
        Self {
            types: IndexMap::from([
                ("Boolean".to_string(), GraphQLType::Bool),
                ("Float".to_string(), GraphQLType::Float),
                ("ID".to_string(), GraphQLType::ID),
                ("Int".to_string(), GraphQLType::Int),
                ("String".to_string(), GraphQLType::String),
            ]),
        }
    }

    /// Registers `type_`. A `scalar` named like a built-in scalar replaces
    /// that scalar; any other name collision is an error.
    pub fn add_new_type(
        &mut self,
        type_name: &str,
        type_: GraphQLType,
    ) -> Result<()> {
        if let Some(conflicting_type) = self.types.get(type_name)
            && !(conflicting_type.is_builtin() && matches!(type_, GraphQLType::Scalar(_))) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                def1: conflicting_type.def_location().to_owned(),
                def2: type_.def_location().to_owned(),
                type_name: type_name.to_string(),
            });
        }

        log::trace!("registered type `{type_name}` ({})", type_.kind().name());
        self.types.insert(type_name.to_string(), type_);
        Ok(())
    }

    /// Checks that every type reference held by a registered type names a
    /// registered type. References are checked in registration order, and
    /// within each type: interfaces, union members, then each field's type
    /// followed by its parameters' types, then input field types.
    pub fn check_type_refs(&self) -> Result<()> {
        for type_ in self.types.values() {
            match type_ {
                GraphQLType::Bool
                | GraphQLType::Enum(_)
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::Scalar(_)
                | GraphQLType::String
                    => (),

                GraphQLType::InputObject(inputobj_type) => {
                    for field in inputobj_type.fields.values() {
                        self.check_type_ref(field.type_annotation.inner_named_type_ref())?;
                    }
                },

                GraphQLType::Interface(iface_type) => {
                    for iface_ref in &iface_type.0.interfaces {
                        self.check_type_ref(iface_ref)?;
                    }
                    self.check_field_type_refs(iface_type.fields())?;
                },

                GraphQLType::Object(obj_type) => {
                    for iface_ref in &obj_type.0.interfaces {
                        self.check_type_ref(iface_ref)?;
                    }
                    self.check_field_type_refs(obj_type.fields())?;
                },

                GraphQLType::Union(union_type) => {
                    for member_ref in union_type.members.values() {
                        self.check_type_ref(member_ref)?;
                    }
                },
            }
        }
        Ok(())
    }

    fn check_field_type_refs(
        &self,
        fields: &IndexMap<String, Field>,
    ) -> Result<()> {
        for field in fields.values() {
            self.check_type_ref(field.type_annotation.inner_named_type_ref())?;
            for param in field.parameters.values() {
                self.check_type_ref(param.type_annotation.inner_named_type_ref())?;
            }
        }
        Ok(())
    }

    pub fn check_type_ref(&self, type_ref: &NamedGraphQLTypeRef) -> Result<()> {
        if self.types.contains_key(type_ref.name()) {
            Ok(())
        } else {
            Err(SchemaBuildError::UndefinedTypeReference {
                ref_location: type_ref.ref_location().to_owned(),
                type_name: type_ref.name().to_string(),
            })
        }
    }

    pub fn get_type(&self, type_name: &str) -> Option<&GraphQLType> {
        self.types.get(type_name)
    }

    /// Checks that every type reference names a type of a kind allowed where
    /// it appears. Must only be called once
    /// [`TypesMapBuilder::check_type_refs()`] has passed.
    pub fn validate_types(&self) -> Result<()> {
        for type_ in self.types.values() {
            let errors = match type_ {
                GraphQLType::Bool
                | GraphQLType::Enum(_)
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::Scalar(_)
                | GraphQLType::String
                    => vec![],

                GraphQLType::InputObject(inputobj_type) =>
                    InputObjectTypeValidator::new(inputobj_type, &self.types)
                        .validate(),

                GraphQLType::Interface(iface_type) =>
                    ObjectOrInterfaceTypeValidator::new(&iface_type.0, &self.types)
                        .validate(),

                GraphQLType::Object(obj_type) =>
                    ObjectOrInterfaceTypeValidator::new(&obj_type.0, &self.types)
                        .validate(),

                GraphQLType::Union(union_type) =>
                    UnionTypeValidator::new(union_type, &self.types)
                        .validate(),
            };

            if let Some(err) = errors.into_iter().next() {
                return Err(err.into());
            }
        }
        Ok(())
    }

    pub fn types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    pub fn into_types_map(self) -> IndexMap<String, GraphQLType> {
        self.types
    }
}
