use crate::ast;
use crate::directive_annotation_builder::DirectiveAnnotationBuilder;
use crate::DirectiveAnnotation;
use crate::loc;
use crate::types::DeprecationState;
use crate::types::TypeAnnotation;
use crate::Value;

/// Represents an argument of a [`Field`](crate::types::Field) or of a
/// [`Directive`](crate::types::Directive) definition.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) default_value: Option<Value>,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Parameter {
    pub(crate) fn from_ast(def: &ast::InputValueDefinition) -> Self {
        Self {
            def_location: loc::SourceLocation::from_span(&def.span),
            default_value: def.default_value.as_ref().map(Value::from_ast),
            description: def.description.to_owned(),
            directives: DirectiveAnnotationBuilder::from_ast(&def.directives),
            name: def.name.value.to_string(),
            type_annotation: TypeAnnotation::from_ast_type(&def.value_type),
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    /// The literal written after `=` in the parameter's definition, if any.
    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
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

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
