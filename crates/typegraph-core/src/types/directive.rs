use crate::ast::DirectiveLocation;
use crate::loc;
use crate::named_ref::DerefByName;
use crate::named_ref::NamedRef;
use crate::schema::Schema;
use crate::types::DEFAULT_DEPRECATION_REASON;
use crate::types::NamedGraphQLTypeRef;
use crate::types::NamedTypeAnnotation;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use crate::Value;
use indexmap::IndexMap;

/// Represents a
/// [directive definition](https://spec.graphql.org/October2021/#sec-Type-System.Directives),
/// either one of the built-ins ([`Directive::skip()`],
/// [`Directive::include()`], [`Directive::deprecated()`]) or one declared in
/// a schema document.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) locations: Vec<DirectiveLocation>,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, Parameter>,
    pub(crate) repeatable: bool,
}
impl Directive {
    /// The built-in `@deprecated` directive:
    ///
    /// ```graphql
    /// directive @deprecated(reason: String = "No longer supported") on FIELD_DEFINITION | ENUM_VALUE
    /// ```
    pub fn deprecated() -> Self {
        Self {
            def_location: loc::SourceLocation::GraphQLBuiltIn,
            description: Some(
                "Marks an element of a GraphQL schema as no longer supported.".to_string(),
            ),
            locations: vec![
                DirectiveLocation::FieldDefinition,
                DirectiveLocation::EnumValue,
            ],
            name: "deprecated".to_string(),
            parameters: IndexMap::from([(
                "reason".to_string(),
                builtin_parameter(
                    "reason",
                    "String",
                    /* nullable = */ true,
                    Some(Value::String(DEFAULT_DEPRECATION_REASON.to_string())),
                ),
            )]),
            repeatable: false,
        }
    }

    /// The built-in `@include` directive:
    ///
    /// ```graphql
    /// directive @include(if: Boolean!) on FIELD | FRAGMENT_SPREAD | INLINE_FRAGMENT
    /// ```
    pub fn include() -> Self {
        Self::skip_or_include(
            "include",
            "Directs the executor to include this field or fragment only when the `if` argument is true.",
        )
    }

    /// The built-in `@skip` directive:
    ///
    /// ```graphql
    /// directive @skip(if: Boolean!) on FIELD | FRAGMENT_SPREAD | INLINE_FRAGMENT
    /// ```
    pub fn skip() -> Self {
        Self::skip_or_include(
            "skip",
            "Directs the executor to skip this field or fragment when the `if` argument is true.",
        )
    }

    fn skip_or_include(name: &str, description: &str) -> Self {
        Self {
            def_location: loc::SourceLocation::GraphQLBuiltIn,
            description: Some(description.to_string()),
            locations: vec![
                DirectiveLocation::Field,
                DirectiveLocation::FragmentSpread,
                DirectiveLocation::InlineFragment,
            ],
            name: name.to_string(),
            parameters: IndexMap::from([(
                "if".to_string(),
                builtin_parameter("if", "Boolean", /* nullable = */ false, None),
            )]),
            repeatable: false,
        }
    }

    /// The built-in directives, in the order a [`Schema`] lists them.
    pub fn builtins() -> [Directive; 3] {
        [Self::skip(), Self::include(), Self::deprecated()]
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// True only for the unmodified built-in definitions. A built-in that a
    /// schema document redefines is not built-in.
    pub fn is_builtin(&self) -> bool {
        self.def_location.is_builtin()
    }

    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }

    /// The locations this directive may be applied to, in declaration order.
    pub fn locations(&self) -> &[DirectiveLocation] {
        &self.locations
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }
}
impl DerefByName for Directive {
    type Source = Schema;
    type RefLocation = loc::SourceLocation;

    fn slot_of(schema: &Schema, name: &str) -> Option<usize> {
        schema.directive_defs.get_index_of(name)
    }

    fn deref_slot<'a>(
        schema: &'a Schema,
        slot: usize,
        name: &str,
    ) -> Option<&'a Self> {
        schema.directive_defs
            .get_index(slot)
            .filter(|(directive_name, _)| directive_name.as_str() == name)
            .map(|(_, directive)| directive)
    }
}

pub type NamedDirectiveRef = NamedRef<Schema, loc::SourceLocation, Directive>;

fn builtin_parameter(
    name: &str,
    type_name: &str,
    nullable: bool,
    default_value: Option<Value>,
) -> Parameter {
    Parameter {
        def_location: loc::SourceLocation::GraphQLBuiltIn,
        default_value,
        description: None,
        directives: vec![],
        name: name.to_string(),
        type_annotation: TypeAnnotation::Named(NamedTypeAnnotation {
            nullable,
            type_ref: NamedGraphQLTypeRef::new(
                type_name,
                loc::SourceLocation::GraphQLBuiltIn,
            ),
        }),
    }
}
