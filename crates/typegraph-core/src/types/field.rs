use crate::DirectiveAnnotation;
use crate::loc;
use crate::schema::Schema;
use crate::types::DeprecationState;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// Represents a field defined on an [`ObjectType`](crate::types::ObjectType)
/// or an [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, Parameter>,
    pub(crate) parent_type: NamedGraphQLTypeRef,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Field {
    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`Field`] was defined within the schema.
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    /// The [`DeprecationState`] of this [`Field`] as indicated by the
    /// presence of a `@deprecated` annotation.
    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        (&self.directives).into()
    }

    /// The description of this [`Field`] as defined in the schema (either a
    /// string literal or a run of `#` comments directly above the field).
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The [`DirectiveAnnotation`]s applied to this [`Field`], in the order
    /// they were written.
    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The field's arguments, keyed by name in declaration order.
    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }

    /// The object or interface type this [`Field`] is defined on.
    pub fn parent_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> &'schema GraphQLType {
        self.parent_type
            .deref(schema)
            .expect("type is present in schema")
    }

    pub fn parent_type_name(&self) -> &str {
        self.parent_type.name()
    }

    /// The [`TypeAnnotation`] specifying the type of this [`Field`].
    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
