use crate::ast;
use crate::file_reader;
use crate::loc;
use crate::schema::Schema;
use crate::schema::TypeValidationError;
use crate::types::DirectiveBuilder;
use crate::types::EnumTypeBuilder;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectTypeBuilder;
use crate::types::InterfaceTypeBuilder;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectTypeBuilder;
use crate::types::ParametersValidator;
use crate::types::ScalarTypeBuilder;
use crate::types::TypeBuilder;
use crate::types::TypesMapBuilder;
use crate::types::UnionTypeBuilder;
use indexmap::IndexMap;
use inherent::inherent;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use typegraph_parser::GraphQLParseError;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Utility for building a [`Schema`].
///
/// Documents are accumulated with the `load_*` methods (their definitions
/// are concatenated in load order) and nothing is validated until
/// [`SchemaBuilder::build()`] runs. The build stops at the first problem it
/// finds and reports it as a [`SchemaBuildError`].
///
/// ```
/// use typegraph_core::SchemaBuilder;
///
/// let schema = SchemaBuilder::new()
///     .load_str(None, "type Query { hello: String }")?
///     .build()?;
/// assert_eq!(schema.query_type().name(), "Query");
/// # Ok::<(), typegraph_core::SchemaBuildError>(())
/// ```
#[derive(Debug)]
pub struct SchemaBuilder {
    document: ast::Document,
}
impl SchemaBuilder {
    pub fn build(self) -> Result<Schema> {
        let document = self.document;
        log::debug!(
            "building schema from {} definition(s)",
            document.definitions.len(),
        );

        let roots = RootOperationTypes::from_document(&document)?;
        log::debug!(
            "resolved root operation types (query: `{}`)",
            roots.query.name(),
        );

        let mut types_map_builder = TypesMapBuilder::new();
        let mut directive_builder = DirectiveBuilder::new();
        for def in &document.definitions {
            match def {
                ast::Definition::Directive(directive_def) =>
                    directive_builder.visit_directive_def(directive_def)?,

                ast::Definition::EnumType(enum_def) =>
                    EnumTypeBuilder.visit_type_def(&mut types_map_builder, enum_def)?,

                ast::Definition::InputObjectType(inputobj_def) =>
                    InputObjectTypeBuilder.visit_type_def(&mut types_map_builder, inputobj_def)?,

                ast::Definition::InterfaceType(iface_def) =>
                    InterfaceTypeBuilder.visit_type_def(&mut types_map_builder, iface_def)?,

                ast::Definition::ObjectType(obj_def) =>
                    ObjectTypeBuilder.visit_type_def(&mut types_map_builder, obj_def)?,

                ast::Definition::ScalarType(scalar_def) =>
                    ScalarTypeBuilder.visit_type_def(&mut types_map_builder, scalar_def)?,

                ast::Definition::UnionType(union_def) =>
                    UnionTypeBuilder.visit_type_def(&mut types_map_builder, union_def)?,

                ast::Definition::Fragment(_)
                | ast::Definition::Operation(_)
                | ast::Definition::Schema(_)
                    => (),
            }
        }
        let directive_defs = directive_builder.into_directive_defs();
        log::debug!(
            "built {} type(s) and {} directive(s)",
            types_map_builder.types().len(),
            directive_defs.len(),
        );

        types_map_builder.check_type_refs()?;
        for directive in directive_defs.values() {
            for param in directive.parameters.values() {
                types_map_builder.check_type_ref(
                    param.type_annotation.inner_named_type_ref(),
                )?;
            }
        }
        log::debug!("all type references resolve");

        types_map_builder.validate_types()?;
        for directive in directive_defs.values() {
            let errors = ParametersValidator::new(
                format!("@{}", directive.name),
                &directive.parameters,
                types_map_builder.types(),
            ).validate();
            if let Some(err) = errors.into_iter().next() {
                return Err(err.into());
            }
        }

        Ok(Schema {
            directive_defs,
            document,
            mutation_type: roots.mutation,
            query_type: roots.query,
            subscription_type: roots.subscription,
            types: types_map_builder.into_types_map(),
        })
    }

    /// Creates a builder and loads every file in `file_paths` into it.
    pub fn from_files<P: AsRef<Path>>(
        file_paths: impl IntoIterator<Item = P>,
    ) -> Result<Self> {
        Self::new().load_files(file_paths)
    }

    pub fn from_document(document: ast::Document) -> Self {
        Self::new().load_document(document)
    }

    /// Appends the definitions of an already-parsed document.
    pub fn load_document(mut self, document: ast::Document) -> Self {
        log::trace!("loading {} definition(s)", document.definitions.len());
        self.document.extend(document);
        self
    }

    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        self.load_files([file_path])
    }

    pub fn load_files<P: AsRef<Path>>(
        mut self,
        file_paths: impl IntoIterator<Item = P>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            log::debug!("loading schema file `{}`", file_path.display());
            let file_content = file_reader::read_content(file_path)?;
            self = self.load_str(Some(file_path), file_content.as_str())?;
        }
        Ok(self)
    }

    /// Parses `content` and appends its definitions. When `file_path` is
    /// given, locations reported for these definitions point into that file.
    ///
    /// Fails with [`SchemaBuildError::Syntax`] carrying the first parse error
    /// if `content` does not parse cleanly.
    pub fn load_str(
        self,
        file_path: Option<&Path>,
        content: &str,
    ) -> Result<Self> {
        let parse_result = typegraph_parser::parse_document(content, file_path);
        if let Some(err) = parse_result.errors.first() {
            return Err(SchemaBuildError::Syntax(err.to_owned()));
        }
        Ok(self.load_document(parse_result.into_ast().unwrap_or_default()))
    }

    pub fn new() -> Self {
        Self {
            document: ast::Document::default(),
        }
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}
#[inherent]
impl FromStr for SchemaBuilder {
    type Err = SchemaBuildError;

    /// Creates a builder from a single schema source string.
    pub fn from_str(content: &str) -> Result<Self> {
        Self::new().load_str(None, content)
    }
}

/// The query, mutation and subscription root types of a schema.
struct RootOperationTypes {
    mutation: Option<NamedGraphQLTypeRef>,
    query: NamedGraphQLTypeRef,
    subscription: Option<NamedGraphQLTypeRef>,
}
impl RootOperationTypes {
    /// Determines the root types either from the document's single `schema`
    /// definition or, absent one, from types named `Query`, `Mutation` and
    /// `Subscription`.
    fn from_document(document: &ast::Document) -> Result<Self> {
        let mut schema_defs = document.definitions.iter().filter_map(|def| match def {
            ast::Definition::Schema(schema_def) => Some(schema_def),
            _ => None,
        });
        let schema_def = schema_defs.next();
        if let (Some(first_def), Some(second_def)) = (schema_def, schema_defs.next()) {
            return Err(SchemaBuildError::MultipleSchemaDefinitions {
                def1: loc::SourceLocation::from_span(&first_def.span),
                def2: loc::SourceLocation::from_span(&second_def.span),
            });
        }

        // Only the first definition of each name counts; later duplicates
        // are reported once types are built.
        let mut type_kinds: IndexMap<&str, (GraphQLTypeKind, &ast::Name)> = IndexMap::new();
        for def in &document.definitions {
            let kind = match def {
                ast::Definition::EnumType(_) => GraphQLTypeKind::Enum,
                ast::Definition::InputObjectType(_) => GraphQLTypeKind::InputObject,
                ast::Definition::InterfaceType(_) => GraphQLTypeKind::Interface,
                ast::Definition::ObjectType(_) => GraphQLTypeKind::Object,
                ast::Definition::ScalarType(_) => GraphQLTypeKind::Scalar,
                ast::Definition::UnionType(_) => GraphQLTypeKind::Union,

                ast::Definition::Directive(_)
                | ast::Definition::Fragment(_)
                | ast::Definition::Operation(_)
                | ast::Definition::Schema(_)
                    => continue,
            };
            if let Some(type_name) = def.type_name() {
                type_kinds.entry(type_name.as_str()).or_insert((kind, type_name));
            }
        }

        match schema_def {
            Some(schema_def) => Self::from_schema_def(schema_def, &type_kinds),
            None => Self::from_conventional_names(&type_kinds),
        }
    }

    fn from_conventional_names(
        type_kinds: &IndexMap<&str, (GraphQLTypeKind, &ast::Name)>,
    ) -> Result<Self> {
        let Some((query_kind, query_name)) = type_kinds.get("Query") else {
            return Err(SchemaBuildError::NoQueryOperationTypeDefined);
        };
        if *query_kind != GraphQLTypeKind::Object {
            return Err(SchemaBuildError::RootOperationTypeNotObject {
                operation: ast::OperationKind::Query,
                ref_location: loc::SourceLocation::from_span(&query_name.span),
                type_kind: *query_kind,
                type_name: query_name.value.to_string(),
            });
        }

        let object_type_named = |type_name: &str| match type_kinds.get(type_name) {
            Some((GraphQLTypeKind::Object, name)) => Some(NamedGraphQLTypeRef::new(
                name.as_str(),
                loc::SourceLocation::from_span(&name.span),
            )),
            _ => None,
        };

        Ok(Self {
            mutation: object_type_named("Mutation"),
            query: NamedGraphQLTypeRef::new(
                query_name.as_str(),
                loc::SourceLocation::from_span(&query_name.span),
            ),
            subscription: object_type_named("Subscription"),
        })
    }

    fn from_schema_def(
        schema_def: &ast::SchemaDefinition,
        type_kinds: &IndexMap<&str, (GraphQLTypeKind, &ast::Name)>,
    ) -> Result<Self> {
        let mut query: Option<&ast::RootOperationTypeDefinition> = None;
        let mut mutation: Option<&ast::RootOperationTypeDefinition> = None;
        let mut subscription: Option<&ast::RootOperationTypeDefinition> = None;
        for root_op in &schema_def.root_operations {
            let slot = match root_op.operation_kind {
                ast::OperationKind::Query => &mut query,
                ast::OperationKind::Mutation => &mut mutation,
                ast::OperationKind::Subscription => &mut subscription,
            };
            if let Some(existing_root_op) = slot {
                return Err(SchemaBuildError::DuplicateRootOperationType {
                    def1: loc::SourceLocation::from_span(&existing_root_op.span),
                    def2: loc::SourceLocation::from_span(&root_op.span),
                    operation: root_op.operation_kind,
                });
            }
            *slot = Some(root_op);
        }

        let Some(query) = query else {
            return Err(SchemaBuildError::NoQueryOperationTypeDefined);
        };

        Ok(Self {
            query: Self::root_type_ref(query, type_kinds)?,
            mutation: mutation
                .map(|root_op| Self::root_type_ref(root_op, type_kinds))
                .transpose()?,
            subscription: subscription
                .map(|root_op| Self::root_type_ref(root_op, type_kinds))
                .transpose()?,
        })
    }

    fn root_type_ref(
        root_op: &ast::RootOperationTypeDefinition,
        type_kinds: &IndexMap<&str, (GraphQLTypeKind, &ast::Name)>,
    ) -> Result<NamedGraphQLTypeRef> {
        let type_name = root_op.named_type.as_str();
        let ref_location = loc::SourceLocation::from_span(&root_op.named_type.span);
        match type_kinds.get(type_name) {
            Some((GraphQLTypeKind::Object, _)) =>
                Ok(NamedGraphQLTypeRef::new(type_name, ref_location)),

            Some((type_kind, _)) =>
                Err(SchemaBuildError::RootOperationTypeNotObject {
                    operation: root_op.operation_kind,
                    ref_location,
                    type_kind: *type_kind,
                    type_name: type_name.to_string(),
                }),

            None =>
                Err(SchemaBuildError::RootOperationTypeNotFound {
                    operation: root_op.operation_kind,
                    ref_location,
                    type_name: type_name.to_string(),
                }),
        }
    }
}

fn capitalized_operation(operation: &ast::OperationKind) -> &'static str {
    match operation {
        ast::OperationKind::Query => "Query",
        ast::OperationKind::Mutation => "Mutation",
        ast::OperationKind::Subscription => "Subscription",
    }
}

/// The broad category of a [`SchemaBuildError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SchemaBuildErrorKind {
    DuplicateDefinition,
    Io,
    SchemaStructure,
    Syntax,
    TypeValidation,
    UnresolvedReference,
}

#[derive(Debug, Error)]
pub enum SchemaBuildError {
    #[error("Directive \"@{directive_name}\" was defined more than once.")]
    DuplicateDirectiveDefinition {
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
        directive_name: String,
    },

    /// A field, argument, input field, enum value, union member or
    /// implemented interface listed twice within one definition.
    #[error("{member_kind} \"{member_name}\" was defined more than once on \"{parent_name}\".")]
    DuplicateMemberDefinition {
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
        member_kind: &'static str,
        member_name: String,
        parent_name: String,
    },

    #[error("Must provide only one {operation} type in schema.")]
    DuplicateRootOperationType {
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
        operation: ast::OperationKind,
    },

    #[error("Type \"{type_name}\" was defined more than once.")]
    DuplicateTypeDefinition {
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
        type_name: String,
    },

    #[error("Interface \"{interface_name}\" cannot implement itself.")]
    InvalidSelfImplementingInterface {
        interface_name: String,
        ref_location: loc::SourceLocation,
    },

    #[error("Must provide only one schema definition.")]
    MultipleSchemaDefinitions {
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
    },

    #[error("Must provide schema definition with query type or a type named Query.")]
    NoQueryOperationTypeDefined,

    #[error("Specified {operation} type \"{type_name}\" not found in document.")]
    RootOperationTypeNotFound {
        operation: ast::OperationKind,
        ref_location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "{} root type \"{type_name}\" must be an object type.",
        capitalized_operation(operation),
    )]
    RootOperationTypeNotObject {
        operation: ast::OperationKind,
        ref_location: loc::SourceLocation,
        type_kind: GraphQLTypeKind,
        type_name: String,
    },

    #[error(transparent)]
    SchemaFileReadError(#[from] file_reader::ReadContentError),

    #[error(transparent)]
    Syntax(#[from] GraphQLParseError),

    #[error(transparent)]
    TypeValidation(#[from] TypeValidationError),

    #[error("Type \"{type_name}\" not found in document.")]
    UndefinedTypeReference {
        ref_location: loc::SourceLocation,
        type_name: String,
    },
}
impl SchemaBuildError {
    pub fn kind(&self) -> SchemaBuildErrorKind {
        match self {
            Self::DuplicateDirectiveDefinition { .. }
            | Self::DuplicateMemberDefinition { .. }
            | Self::DuplicateTypeDefinition { .. }
                => SchemaBuildErrorKind::DuplicateDefinition,

            Self::DuplicateRootOperationType { .. }
            | Self::MultipleSchemaDefinitions { .. }
            | Self::NoQueryOperationTypeDefined
            | Self::RootOperationTypeNotObject { .. }
                => SchemaBuildErrorKind::SchemaStructure,

            Self::InvalidSelfImplementingInterface { .. }
            | Self::TypeValidation(_)
                => SchemaBuildErrorKind::TypeValidation,

            Self::RootOperationTypeNotFound { .. }
            | Self::UndefinedTypeReference { .. }
                => SchemaBuildErrorKind::UnresolvedReference,

            Self::SchemaFileReadError(_) => SchemaBuildErrorKind::Io,
            Self::Syntax(_) => SchemaBuildErrorKind::Syntax,
        }
    }

    /// The location most relevant to this error: the second definition for
    /// duplicates, the offending reference for unresolved or invalid
    /// references.
    pub fn location(&self) -> Option<&loc::SourceLocation> {
        match self {
            Self::DuplicateDirectiveDefinition { def2, .. }
            | Self::DuplicateMemberDefinition { def2, .. }
            | Self::DuplicateRootOperationType { def2, .. }
            | Self::DuplicateTypeDefinition { def2, .. }
            | Self::MultipleSchemaDefinitions { def2, .. }
                => Some(def2),

            Self::InvalidSelfImplementingInterface { ref_location, .. }
            | Self::RootOperationTypeNotFound { ref_location, .. }
            | Self::RootOperationTypeNotObject { ref_location, .. }
            | Self::UndefinedTypeReference { ref_location, .. }
                => Some(ref_location),

            Self::TypeValidation(err) => Some(err.ref_location()),

            Self::NoQueryOperationTypeDefined
            | Self::SchemaFileReadError(_)
            | Self::Syntax(_)
                => None,
        }
    }
}
