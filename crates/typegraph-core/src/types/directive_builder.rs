use crate::ast;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::Directive;
use crate::types::TypeBuilderHelpers;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Assembles a schema's directive table: the built-in directives, replaced
/// or extended by the directive definitions in the document.
#[derive(Debug)]
pub(crate) struct DirectiveBuilder {
    directive_defs: IndexMap<String, Directive>,
}
impl DirectiveBuilder {
    pub fn new() -> Self {
        Self {
            directive_defs: Directive::builtins()
                .into_iter()
                .map(|directive| (directive.name.to_owned(), directive))
                .collect(),
        }
    }

    pub fn into_directive_defs(self) -> IndexMap<String, Directive> {
        self.directive_defs
    }

    pub fn visit_directive_def(
        &mut self,
        def: &ast::DirectiveDefinition,
    ) -> Result<()> {
        let directive_name = def.name.as_str();
        let def_location = loc::SourceLocation::from_span(&def.span);

        if let Some(existing_def) = self.directive_defs.get(directive_name)
            && !existing_def.is_builtin() {
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                def1: existing_def.def_location.to_owned(),
                def2: def_location,
                directive_name: directive_name.to_string(),
            });
        }

        let parameters = TypeBuilderHelpers::parameters_from_ast(
            format!("@{directive_name}").as_str(),
            &def.arguments,
        )?;

        // A definition named like a built-in replaces it where it stands.
        self.directive_defs.insert(directive_name.to_string(), Directive {
            def_location,
            description: def.description.to_owned(),
            locations: def.locations.to_owned(),
            name: directive_name.to_string(),
            parameters,
            repeatable: def.repeatable,
        });

        Ok(())
    }
}
