use crate::ast;
use crate::schema::SchemaBuilder;
use crate::types::Directive;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectType;
use indexmap::IndexMap;

/// Represents a fully validated and immutable GraphQL schema.
///
/// A [`Schema`] owns every type and directive it defines; cross-type
/// references are resolved by name against the schema on access. Once
/// built it is never mutated, so it can be shared freely across threads.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) directive_defs: IndexMap<String, Directive>,
    pub(crate) document: ast::Document,
    pub(crate) mutation_type: Option<NamedGraphQLTypeRef>,
    pub(crate) query_type: NamedGraphQLTypeRef,
    pub(crate) subscription_type: Option<NamedGraphQLTypeRef>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Looks up a directive definition by name (without the `@`).
    pub fn directive(&self, name: &str) -> Option<&Directive> {
        self.directive_defs.get(name)
    }

    /// Every directive defined in this [`Schema`], one per name: the
    /// built-ins (`@skip`, `@include`, `@deprecated`) first, in that order,
    /// followed by the document's own directives in declaration order. A
    /// built-in that the document redefines keeps its position but reflects
    /// the document's definition.
    pub fn directives(&self) -> Vec<&Directive> {
        self.directive_defs.values().collect()
    }

    /// The merged document this [`Schema`] was built from.
    pub fn document(&self) -> &ast::Document {
        &self.document
    }

    pub fn get_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    /// Whether the source document contained an explicit
    /// `schema { ... }` definition.
    pub fn has_schema_definition(&self) -> bool {
        self.document.definitions
            .iter()
            .any(|def| matches!(def, ast::Definition::Schema(_)))
    }

    /// Returns this [`Schema`]'s Mutation root operation type (if one was
    /// defined).
    ///
    /// This is either the type named by `mutation:` in the document's
    /// `schema` definition or, absent a `schema` definition, an object type
    /// named `Mutation`.
    pub fn mutation_type(&self) -> Option<&ObjectType> {
        self.mutation_type.as_ref().map(|named_ref| self.root_object_type(named_ref))
    }

    /// Returns this [`Schema`]'s Query root operation type.
    ///
    /// GraphQL [defines an object type named "Query" as the _default_ Query
    /// type](https://spec.graphql.org/October2021/#sec-Root-Operation-Types.Default-Root-Operation-Type-Names),
    /// but a `schema` definition may name a different type instead.
    /// [`Schema::query_type()`] factors in any such override.
    pub fn query_type(&self) -> &ObjectType {
        self.root_object_type(&self.query_type)
    }

    /// Returns this [`Schema`]'s Subscription root operation type (if one
    /// was defined).
    pub fn subscription_type(&self) -> Option<&ObjectType> {
        self.subscription_type.as_ref().map(|named_ref| self.root_object_type(named_ref))
    }

    /// Every type in this [`Schema`], keyed by name: the five built-in
    /// scalars first, followed by the document's types in declaration order.
    /// A built-in scalar that the document redefines keeps its position.
    pub fn types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    fn root_object_type(&self, named_ref: &NamedGraphQLTypeRef) -> &ObjectType {
        named_ref.deref(self)
            .ok()
            .and_then(GraphQLType::as_object)
            .expect("root operation type is an object type present in schema")
    }
}
