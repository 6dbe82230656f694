use crate::ast::AstNode;
use crate::ast::DirectiveDefinition;
use crate::ast::EnumTypeDefinition;
use crate::ast::FragmentDefinition;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::Name;
use crate::ast::ObjectTypeDefinition;
use crate::ast::OperationDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::UnionTypeDefinition;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A parsed GraphQL document. Type-system and executable definitions may be
/// mixed; consumers pick out what they care about.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    pub definitions: Vec<Definition>,
}

impl Document {
    /// Appends the definitions of `other` after this document's own.
    pub fn extend(&mut self, other: Document) {
        self.definitions.extend(other.definitions);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    Directive(DirectiveDefinition),
    EnumType(EnumTypeDefinition),
    Fragment(FragmentDefinition),
    InputObjectType(InputObjectTypeDefinition),
    InterfaceType(InterfaceTypeDefinition),
    ObjectType(ObjectTypeDefinition),
    Operation(OperationDefinition),
    ScalarType(ScalarTypeDefinition),
    Schema(SchemaDefinition),
    UnionType(UnionTypeDefinition),
}

impl Definition {
    /// The defined type's name, if this is a type definition.
    pub fn type_name(&self) -> Option<&Name> {
        match self {
            Definition::EnumType(def) => Some(&def.name),
            Definition::InputObjectType(def) => Some(&def.name),
            Definition::InterfaceType(def) => Some(&def.name),
            Definition::ObjectType(def) => Some(&def.name),
            Definition::ScalarType(def) => Some(&def.name),
            Definition::UnionType(def) => Some(&def.name),

            Definition::Directive(_)
            | Definition::Fragment(_)
            | Definition::Operation(_)
            | Definition::Schema(_) => None,
        }
    }
}

#[inherent]
impl AstNode for Definition {
    pub fn span(&self) -> &GraphQLSourceSpan {
        match self {
            Definition::Directive(def) => &def.span,
            Definition::EnumType(def) => &def.span,
            Definition::Fragment(def) => &def.span,
            Definition::InputObjectType(def) => &def.span,
            Definition::InterfaceType(def) => &def.span,
            Definition::ObjectType(def) => &def.span,
            Definition::Operation(def) => &def.span,
            Definition::ScalarType(def) => &def.span,
            Definition::Schema(def) => &def.span,
            Definition::UnionType(def) => &def.span,
        }
    }
}
