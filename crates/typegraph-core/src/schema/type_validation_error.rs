use crate::loc;
use crate::types::GraphQLTypeKind;
use thiserror::Error;

/// A type reference that resolves, but to a type of the wrong kind for the
/// position it appears in.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error(
        "Type \"{type_name}\" must only implement interfaces, but \
        \"{non_interface_type_name}\" is {non_interface_type_kind}."
    )]
    ImplementsNonInterfaceType {
        non_interface_type_kind: GraphQLTypeKind,
        non_interface_type_name: String,
        ref_location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "The type of \"{parent_type_name}.{field_name}\" must be an input \
        type, but \"{invalid_type_name}\" is {invalid_type_kind}."
    )]
    InvalidInputFieldWithOutputType {
        field_name: String,
        invalid_type_kind: GraphQLTypeKind,
        invalid_type_name: String,
        parent_type_name: String,
        ref_location: loc::SourceLocation,
    },

    #[error(
        "The type of \"{parent_type_name}.{field_name}\" must be an output \
        type, but \"{input_type_name}\" is an input object type."
    )]
    InvalidOutputFieldWithInputType {
        field_name: String,
        input_type_name: String,
        parent_type_name: String,
        ref_location: loc::SourceLocation,
    },

    #[error(
        "The type of \"{owner_name}({parameter_name}:)\" must be an input \
        type, but \"{outputonly_type_name}\" is {outputonly_type_kind}."
    )]
    InvalidParameterWithOutputOnlyType {
        outputonly_type_kind: GraphQLTypeKind,
        outputonly_type_name: String,
        owner_name: String,
        parameter_name: String,
        ref_location: loc::SourceLocation,
    },

    #[error(
        "Union type \"{union_type_name}\" can only include object types, but \
        \"{member_type_name}\" is {member_type_kind}."
    )]
    InvalidUnionMemberTypeKind {
        member_type_kind: GraphQLTypeKind,
        member_type_name: String,
        ref_location: loc::SourceLocation,
        union_type_name: String,
    },
}
impl TypeValidationError {
    /// Where the offending type reference was written.
    pub fn ref_location(&self) -> &loc::SourceLocation {
        match self {
            Self::ImplementsNonInterfaceType { ref_location, .. }
            | Self::InvalidInputFieldWithOutputType { ref_location, .. }
            | Self::InvalidOutputFieldWithInputType { ref_location, .. }
            | Self::InvalidParameterWithOutputOnlyType { ref_location, .. }
            | Self::InvalidUnionMemberTypeKind { ref_location, .. }
                => ref_location,
        }
    }
}
