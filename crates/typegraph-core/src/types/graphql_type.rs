use crate::DirectiveAnnotation;
use crate::loc;
use crate::named_ref::DerefByName;
use crate::named_ref::NamedRef;
use crate::schema::Schema;
use crate::types::EnumType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;

const BUILTIN_LOCATION: &loc::SourceLocation = &loc::SourceLocation::GraphQLBuiltIn;

/// Represents a defined GraphQL type.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLType {
    Bool,
    Enum(Box<EnumType>),
    Float,
    ID,
    InputObject(Box<InputObjectType>),
    Int,
    Interface(Box<InterfaceType>),
    Object(Box<ObjectType>),
    Scalar(Box<ScalarType>),
    String,
    Union(Box<UnionType>),
}
impl GraphQLType {
    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        if let Self::Scalar(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// type was defined. Built-in scalars report
    /// [`loc::SourceLocation::GraphQLBuiltIn`].
    pub fn def_location(&self) -> &loc::SourceLocation {
        match self {
            GraphQLType::Bool
            | GraphQLType::Float
            | GraphQLType::ID
            | GraphQLType::Int
            | GraphQLType::String => BUILTIN_LOCATION,
            GraphQLType::Enum(t) => t.def_location(),
            GraphQLType::InputObject(t) => t.def_location(),
            GraphQLType::Interface(t) => t.def_location(),
            GraphQLType::Object(t) => t.def_location(),
            GraphQLType::Scalar(t) => t.def_location(),
            GraphQLType::Union(t) => t.def_location(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            GraphQLType::Bool
            | GraphQLType::Float
            | GraphQLType::ID
            | GraphQLType::Int
            | GraphQLType::String => None,
            GraphQLType::Enum(t) => t.description(),
            GraphQLType::InputObject(t) => t.description(),
            GraphQLType::Interface(t) => t.description(),
            GraphQLType::Object(t) => t.description(),
            GraphQLType::Scalar(t) => t.description(),
            GraphQLType::Union(t) => t.description(),
        }
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        match self {
            GraphQLType::Bool
            | GraphQLType::Float
            | GraphQLType::ID
            | GraphQLType::Int
            | GraphQLType::String => &[],
            GraphQLType::Enum(t) => t.directives(),
            GraphQLType::InputObject(t) => t.directives(),
            GraphQLType::Interface(t) => t.directives(),
            GraphQLType::Object(t) => t.directives(),
            GraphQLType::Scalar(t) => t.directives(),
            GraphQLType::Union(t) => t.directives(),
        }
    }

    /// True for the five scalars GraphQL defines implicitly (`Boolean`,
    /// `Float`, `ID`, `Int`, `String`).
    pub fn is_builtin(&self) -> bool {
        matches!(
            self,
            GraphQLType::Bool
            | GraphQLType::Float
            | GraphQLType::ID
            | GraphQLType::Int
            | GraphQLType::String
        )
    }

    /// Whether this type may be used for arguments and input fields.
    ///
    /// <https://spec.graphql.org/October2021/#IsInputType()>
    pub fn is_input_type(&self) -> bool {
        !matches!(
            self,
            GraphQLType::Interface(_)
            | GraphQLType::Object(_)
            | GraphQLType::Union(_)
        )
    }

    /// Whether this type may be used for the result of a field.
    ///
    /// <https://spec.graphql.org/October2021/#IsOutputType()>
    pub fn is_output_type(&self) -> bool {
        !matches!(self, GraphQLType::InputObject(_))
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        self.into()
    }

    pub fn name(&self) -> &str {
        match self {
            GraphQLType::Bool => "Boolean",
            GraphQLType::Float => "Float",
            GraphQLType::ID => "ID",
            GraphQLType::Int => "Int",
            GraphQLType::String => "String",
            GraphQLType::Enum(t) => t.name(),
            GraphQLType::InputObject(t) => t.name(),
            GraphQLType::Interface(t) => t.name(),
            GraphQLType::Object(t) => t.name(),
            GraphQLType::Scalar(t) => t.name(),
            GraphQLType::Union(t) => t.name(),
        }
    }
}
impl DerefByName for GraphQLType {
    type Source = Schema;
    type RefLocation = loc::SourceLocation;

    fn slot_of(schema: &Schema, name: &str) -> Option<usize> {
        schema.types.get_index_of(name)
    }

    fn deref_slot<'a>(
        schema: &'a Schema,
        slot: usize,
        name: &str,
    ) -> Option<&'a Self> {
        schema.types
            .get_index(slot)
            .filter(|(type_name, _)| type_name.as_str() == name)
            .map(|(_, type_)| type_)
    }
}

pub type NamedGraphQLTypeRef = NamedRef<Schema, loc::SourceLocation, GraphQLType>;
