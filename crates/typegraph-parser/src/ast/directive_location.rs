/// A location where a directive may be applied.
///
/// See
/// [Directive Locations](https://spec.graphql.org/October2021/#DirectiveLocations).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DirectiveLocation {
    ArgumentDefinition,
    Enum,
    EnumValue,
    Field,
    FieldDefinition,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    InputFieldDefinition,
    InputObject,
    Interface,
    Mutation,
    Object,
    Query,
    Scalar,
    Schema,
    Subscription,
    Union,
    VariableDefinition,
}

impl DirectiveLocation {
    pub const ALL: [DirectiveLocation; 19] = [
        DirectiveLocation::ArgumentDefinition,
        DirectiveLocation::Enum,
        DirectiveLocation::EnumValue,
        DirectiveLocation::Field,
        DirectiveLocation::FieldDefinition,
        DirectiveLocation::FragmentDefinition,
        DirectiveLocation::FragmentSpread,
        DirectiveLocation::InlineFragment,
        DirectiveLocation::InputFieldDefinition,
        DirectiveLocation::InputObject,
        DirectiveLocation::Interface,
        DirectiveLocation::Mutation,
        DirectiveLocation::Object,
        DirectiveLocation::Query,
        DirectiveLocation::Scalar,
        DirectiveLocation::Schema,
        DirectiveLocation::Subscription,
        DirectiveLocation::Union,
        DirectiveLocation::VariableDefinition,
    ];

    /// The name as written in SDL (e.g. `FIELD_DEFINITION`).
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectiveLocation::ArgumentDefinition => "ARGUMENT_DEFINITION",
            DirectiveLocation::Enum => "ENUM",
            DirectiveLocation::EnumValue => "ENUM_VALUE",
            DirectiveLocation::Field => "FIELD",
            DirectiveLocation::FieldDefinition => "FIELD_DEFINITION",
            DirectiveLocation::FragmentDefinition => "FRAGMENT_DEFINITION",
            DirectiveLocation::FragmentSpread => "FRAGMENT_SPREAD",
            DirectiveLocation::InlineFragment => "INLINE_FRAGMENT",
            DirectiveLocation::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
            DirectiveLocation::InputObject => "INPUT_OBJECT",
            DirectiveLocation::Interface => "INTERFACE",
            DirectiveLocation::Mutation => "MUTATION",
            DirectiveLocation::Object => "OBJECT",
            DirectiveLocation::Query => "QUERY",
            DirectiveLocation::Scalar => "SCALAR",
            DirectiveLocation::Schema => "SCHEMA",
            DirectiveLocation::Subscription => "SUBSCRIPTION",
            DirectiveLocation::Union => "UNION",
            DirectiveLocation::VariableDefinition => "VARIABLE_DEFINITION",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|loc| loc.as_str() == name)
    }
}

impl std::fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
