use crate::loc;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;

/// A type annotation naming a type directly (`User`, `User!`).
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeAnnotation {
    pub(crate) nullable: bool,
    pub(crate) type_ref: NamedGraphQLTypeRef,
}

impl NamedTypeAnnotation {
    /// Resolves the annotated type against `schema`.
    ///
    /// Every annotation in a successfully built [`Schema`] resolves, so this
    /// only returns `None` when given some other schema.
    pub fn graphql_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Option<&'schema GraphQLType> {
        self.type_ref.deref(schema).ok()
    }

    pub fn graphql_type_name(&self) -> &str {
        self.type_ref.name()
    }

    /// Same type name and same nullability; locations are ignored.
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        self.nullable == other.nullable
            && self.type_ref.name() == other.type_ref.name()
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn ref_location(&self) -> &loc::SourceLocation {
        self.type_ref.ref_location()
    }

    pub(crate) fn type_ref(&self) -> &NamedGraphQLTypeRef {
        &self.type_ref
    }
}
