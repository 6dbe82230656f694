use crate::DirectiveAnnotation;
use crate::loc;
use crate::types::DeprecationState;

/// One value of an [`EnumType`](crate::types::EnumType).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) type_name: String,
}
impl EnumValue {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        (&self.directives).into()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The name of the [`EnumType`](crate::types::EnumType) this value
    /// belongs to.
    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }

    /// The runtime value of this enum value. GraphQL enum values are
    /// represented by their names.
    pub fn value(&self) -> &str {
        self.name.as_str()
    }
}
