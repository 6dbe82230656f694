/// Determines how a [`GraphQLErrorNote`](crate::GraphQLErrorNote) is
/// rendered.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GraphQLErrorNoteKind {
    /// Rendered as `= note: ...`.
    General,

    /// An actionable suggestion. Rendered as `= help: ...`.
    Help,

    /// A link into the GraphQL specification. Rendered as `= spec: ...`.
    Spec,
}
