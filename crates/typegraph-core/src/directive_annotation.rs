use crate::loc;
use crate::schema::Schema;
use crate::types::Directive;
use crate::types::NamedDirectiveRef;
use crate::Value;
use indexmap::IndexMap;

/// A directive applied to some element of a schema (`@deprecated(reason:
/// "...")`).
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub(crate) args: IndexMap<String, Value>,
    pub(crate) directive_ref: NamedDirectiveRef,
}
impl DirectiveAnnotation {
    /// The arguments passed to the directive, in the order they were
    /// written.
    pub fn args(&self) -> &IndexMap<String, Value> {
        &self.args
    }

    /// The [`Directive`] definition this annotation refers to, if the schema
    /// defines one with this name.
    pub fn directive<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Option<&'schema Directive> {
        self.directive_ref.deref(schema).ok()
    }

    pub fn directive_name(&self) -> &str {
        self.directive_ref.name()
    }

    pub fn ref_location(&self) -> &loc::SourceLocation {
        self.directive_ref.ref_location()
    }
}
