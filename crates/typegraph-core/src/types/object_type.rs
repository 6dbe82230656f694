use crate::DirectiveAnnotation;
use crate::loc;
use crate::schema::Schema;
use crate::types::DeprecationState;
use crate::types::Field;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [object type](https://spec.graphql.org/October2021/#sec-Objects)
/// defined within some [`Schema`].
///
/// The query, mutation and subscription roots of a [`Schema`] are always
/// [`ObjectType`]s.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectType(pub(crate) ObjectOrInterfaceTypeData);

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectType {
    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`ObjectType`] was defined within the schema.
    pub fn def_location(&self) -> &loc::SourceLocation {
        self.0.def_location()
    }

    /// The [`DeprecationState`] of this [`ObjectType`] as indicated by the
    /// presence of a `@deprecated` annotation.
    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        self.0.deprecation_state()
    }

    pub fn description(&self) -> Option<&str> {
        self.0.description()
    }

    /// The [`DirectiveAnnotation`]s applied to this [`ObjectType`], in the
    /// order they were written on its definition.
    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        self.0.directives()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.0.field(name)
    }

    /// A map from field name to [`Field`] for every field defined on this
    /// [`ObjectType`], in declaration order.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.0.fields()
    }

    /// The [`InterfaceType`]s this type implements, in the order they were
    /// listed after `implements`.
    pub fn interfaces<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Vec<&'schema InterfaceType> {
        self.0.interfaces(schema)
    }

    /// The names of the interfaces this type implements. Useful when the
    /// [`Schema`] is not at hand.
    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }
}

impl ObjectType {
    /// Whether `interface_name` appears in this type's `implements` list.
    pub fn implements_interface(&self, interface_name: &str) -> bool {
        self.0.interfaces
            .iter()
            .any(|iface_ref| iface_ref.name() == interface_name)
    }
}
