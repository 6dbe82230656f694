use crate::ast;
use crate::DirectiveAnnotation;
use crate::loc;
use crate::types::Directive;
use crate::named_ref::DerefByName;
use crate::Value;

pub(crate) struct DirectiveAnnotationBuilder;
impl DirectiveAnnotationBuilder {
    pub fn from_ast(
        annotations: &[ast::DirectiveAnnotation],
    ) -> Vec<DirectiveAnnotation> {
        annotations.iter().map(|annot| DirectiveAnnotation {
            args: annot.arguments.iter().map(|arg| (
                arg.name.value.to_string(),
                Value::from_ast(&arg.value),
            )).collect(),
            directive_ref: Directive::named_ref(
                annot.name.as_str(),
                loc::SourceLocation::from_span(&annot.span),
            ),
        }).collect()
    }
}
