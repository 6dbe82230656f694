use crate::loc;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuildErrorKind;
use crate::schema::TypeValidationError;
use crate::types::Directive;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn build_err(sdl: &str) -> SchemaBuildError {
    SchemaBuilder::from_str(sdl)
        .and_then(SchemaBuilder::build)
        .expect_err("schema build should fail")
}

mod basics {
    use super::*;

    #[test]
    fn build_without_load() {
        let err = SchemaBuilder::new()
            .build()
            .expect_err("an empty document has no Query type");

        assert!(matches!(err, SchemaBuildError::NoQueryOperationTypeDefined));
        assert_eq!(err.kind(), SchemaBuildErrorKind::SchemaStructure);
        assert_eq!(
            err.to_string(),
            "Must provide schema definition with query type or a type named Query.",
        );
    }

    #[test]
    fn load_single_scalar_field_query() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query { hello: String }")?
            .build()?;

        let query_type = schema.query_type();
        assert_eq!(query_type.name(), "Query");
        assert_eq!(
            query_type.fields().keys().collect::<Vec<_>>(),
            vec!["hello"],
        );
        let hello_type = query_type.field("hello")
            .and_then(|field| field.type_annotation().as_named_annotation())
            .and_then(|annot| annot.graphql_type(&schema));
        assert_eq!(hello_type, Some(&GraphQLType::String));
        assert!(schema.mutation_type().is_none());
        assert!(schema.subscription_type().is_none());
        assert!(!schema.has_schema_definition());

        Ok(())
    }

    #[test]
    fn types_start_with_builtin_scalars() -> Result<()> {
        let schema = SchemaBuilder::from_str("type Query { a: Int }\nscalar Date")?
            .build()?;

        assert_eq!(
            schema.types().keys().collect::<Vec<_>>(),
            vec!["Boolean", "Float", "ID", "Int", "String", "Query", "Date"],
        );
        assert!(schema.get_type("Date").and_then(GraphQLType::as_scalar).is_some());
        assert!(schema.get_type("Missing").is_none());

        Ok(())
    }

    #[test]
    fn unreferenced_types_are_still_built() -> Result<()> {
        let schema = SchemaBuilder::from_str(concat!(
            "type Query { a: Int }\n",
            "type Orphan { b: Orphan }\n",
            "enum Lonely { ONE }\n",
            "input Unused { c: Int }",
        ))?.build()?;

        assert_eq!(
            schema.get_type("Orphan").map(GraphQLType::kind),
            Some(GraphQLTypeKind::Object),
        );
        assert_eq!(
            schema.get_type("Lonely").map(GraphQLType::kind),
            Some(GraphQLTypeKind::Enum),
        );
        assert_eq!(
            schema.get_type("Unused").map(GraphQLType::kind),
            Some(GraphQLTypeKind::InputObject),
        );

        Ok(())
    }

    #[test]
    fn recursive_types_resolve() -> Result<()> {
        let schema = SchemaBuilder::from_str(concat!(
            "type Query { me: User }\n",
            "type User { friends: [User!]! best: Friendship }\n",
            "type Friendship { a: User b: User }",
        ))?.build()?;

        let user_type = schema.get_type("User")
            .and_then(GraphQLType::as_object)
            .expect("User is an object type");
        let friends_type = user_type.field("friends")
            .map(|field| field.type_annotation().innermost_named_type_annotation())
            .and_then(|annot| annot.graphql_type(&schema))
            .and_then(GraphQLType::as_object);
        assert_eq!(friends_type.map(|obj_type| obj_type.name()), Some("User"));

        let friendship_a = schema.get_type("Friendship")
            .and_then(GraphQLType::as_object)
            .and_then(|obj_type| obj_type.field("a"))
            .and_then(|field| field.type_annotation().as_named_annotation())
            .and_then(|annot| annot.graphql_type(&schema));
        assert_eq!(friendship_a.map(GraphQLType::name), Some("User"));

        Ok(())
    }

    #[test]
    fn interfaces_and_unions_resolve() -> Result<()> {
        let schema = SchemaBuilder::from_str(concat!(
            "type Query { node: Node pet: Pet }\n",
            "interface Node { id: ID! }\n",
            "type Cat implements Node { id: ID! }\n",
            "type Dog implements Node { id: ID! }\n",
            "union Pet = Cat | Dog",
        ))?.build()?;

        let cat_type = schema.get_type("Cat")
            .and_then(GraphQLType::as_object)
            .expect("Cat is an object type");
        let cat_ifaces: Vec<&str> = cat_type.interfaces(&schema)
            .into_iter()
            .map(|iface| iface.name())
            .collect();
        assert_eq!(cat_ifaces, vec!["Node"]);

        let pet_type = schema.get_type("Pet")
            .and_then(GraphQLType::as_union)
            .expect("Pet is a union type");
        let members: Vec<&str> = pet_type.member_types(&schema)
            .into_iter()
            .map(|member| member.name())
            .collect();
        assert_eq!(members, vec!["Cat", "Dog"]);

        Ok(())
    }

    #[test]
    fn definitions_from_multiple_sources_concatenate() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query { user: User }")?
            .load_str(Some(Path::new("user.graphql")), "type User { id: ID }")?
            .build()?;

        let user_type = schema.get_type("User").expect("User is defined");
        assert_eq!(
            user_type.def_location(),
            &loc::SourceLocation::Schema(loc::FilePosition {
                col: 1,
                file: Some(Path::new("user.graphql").to_path_buf()),
                line: 1,
            }),
        );
        assert_eq!(schema.document().definitions.len(), 2);

        Ok(())
    }

    #[test]
    fn repeated_builds_fail_identically() {
        let sdl = "type Query { a: Missing }";
        assert_eq!(build_err(sdl).to_string(), build_err(sdl).to_string());
    }
}

mod directives {
    use super::*;

    #[test]
    fn builtin_directives_are_present() -> Result<()> {
        let schema = SchemaBuilder::from_str("type Query { a: Int }")?.build()?;

        let directives = schema.directives();
        assert_eq!(directives.len(), 3);
        assert_eq!(directives[0], &Directive::skip());
        assert_eq!(directives[1], &Directive::include());
        assert_eq!(directives[2], &Directive::deprecated());
        assert!(directives.iter().all(|directive| directive.is_builtin()));

        Ok(())
    }

    #[test]
    fn builtin_directives_can_be_overridden() -> Result<()> {
        let schema = SchemaBuilder::from_str(concat!(
            "type Query { a: Int }\n",
            "directive @skip(if: Boolean!, why: String) on FIELD\n",
            "directive @include(if: Boolean!) repeatable on FIELD\n",
            "directive @deprecated on FIELD_DEFINITION",
        ))?.build()?;

        let directives = schema.directives();
        assert_eq!(directives.len(), 3);
        assert_ne!(directives[0], &Directive::skip());
        assert_ne!(directives[1], &Directive::include());
        assert_ne!(directives[2], &Directive::deprecated());
        assert_eq!(directives[0].name(), "skip");
        assert!(directives[1].is_repeatable());
        assert!(directives[2].parameters().is_empty());
        assert!(!directives[2].is_builtin());

        Ok(())
    }

    #[test]
    fn custom_directive_follows_builtins() -> Result<()> {
        let schema = SchemaBuilder::from_str(concat!(
            "type Query { a: Int }\n",
            "# Caches a field.\n",
            "directive @cache(ttl: Int = 60) repeatable on FIELD_DEFINITION | OBJECT",
        ))?.build()?;

        let cache = schema.directive("cache").expect("@cache is defined");
        assert_eq!(schema.directives().len(), 4);
        assert_eq!(cache.description(), Some("Caches a field."));
        assert_eq!(cache.locations().len(), 2);
        assert_eq!(
            cache.parameters()["ttl"].default_value(),
            Some(&crate::Value::Int(60)),
        );

        Ok(())
    }

    #[test]
    fn duplicate_directive_definition() {
        let err = build_err(concat!(
            "type Query { a: Int }\n",
            "directive @a on FIELD\n",
            "directive @a on OBJECT",
        ));

        assert_eq!(err.kind(), SchemaBuildErrorKind::DuplicateDefinition);
        assert_eq!(err.to_string(), "Directive \"@a\" was defined more than once.");
        assert_eq!(err.location().and_then(|loc| loc.file_position()).map(|pos| pos.line), Some(3));
    }

    #[test]
    fn directive_parameter_must_resolve() {
        let err = build_err("type Query { a: Int }\ndirective @a(x: Missing) on FIELD");

        assert_eq!(err.kind(), SchemaBuildErrorKind::UnresolvedReference);
        assert_eq!(err.to_string(), "Type \"Missing\" not found in document.");
    }

    #[test]
    fn directive_parameter_must_be_input_type() {
        let err = build_err("type Query { a: Int }\ndirective @a(x: Query) on FIELD");

        assert!(matches!(
            &err,
            SchemaBuildError::TypeValidation(
                TypeValidationError::InvalidParameterWithOutputOnlyType { owner_name, .. },
            ) if owner_name == "@a",
        ));
        assert_eq!(
            err.to_string(),
            "The type of \"@a(x:)\" must be an input type, but \"Query\" is an object type.",
        );
    }
}

mod deprecation {
    use super::*;

    #[test]
    fn deprecation_defaults_and_reasons() -> Result<()> {
        let schema = SchemaBuilder::from_str(concat!(
            "type Query { old: Int @deprecated older: Int @deprecated(reason: \"Gone.\") new: Int }\n",
            "enum E { A @deprecated B @deprecated(reason: \"Use A.\") C }",
        ))?.build()?;

        let query_type = schema.query_type();
        let field_reasons: Vec<Option<&str>> = query_type.fields()
            .values()
            .map(|field| field.deprecation_state().reason())
            .collect();
        assert_eq!(field_reasons, vec![Some("No longer supported"), Some("Gone."), None]);

        let enum_type = schema.get_type("E")
            .and_then(GraphQLType::as_enum)
            .expect("E is an enum type");
        let value_reasons: Vec<Option<&str>> = enum_type.values()
            .values()
            .map(|value| value.deprecation_state().reason())
            .collect();
        assert_eq!(value_reasons, vec![Some("No longer supported"), Some("Use A."), None]);

        Ok(())
    }
}

mod errors {
    use super::*;

    #[test]
    fn undefined_field_type() {
        let err = build_err("type Query { user: User }");

        assert_eq!(err.kind(), SchemaBuildErrorKind::UnresolvedReference);
        assert_eq!(err.to_string(), "Type \"User\" not found in document.");
        assert_eq!(
            err.location().and_then(|loc| loc.file_position()).map(|pos| (pos.line, pos.col)),
            Some((1, 20)),
        );
    }

    #[test]
    fn undefined_argument_type() {
        let err = build_err("type Query { user(filter: Filter): Int }");
        assert_eq!(err.to_string(), "Type \"Filter\" not found in document.");
    }

    #[test]
    fn undefined_interface() {
        let err = build_err("type Query implements Node { a: Int }");
        assert_eq!(err.to_string(), "Type \"Node\" not found in document.");
    }

    #[test]
    fn undefined_union_member() {
        let err = build_err("type Query { a: Int }\nunion U = Query | Ghost");
        assert_eq!(err.to_string(), "Type \"Ghost\" not found in document.");
    }

    #[test]
    fn duplicate_type() {
        let err = build_err("type Query { a: Int }\ntype Query { b: Int }");

        assert_eq!(err.kind(), SchemaBuildErrorKind::DuplicateDefinition);
        assert_eq!(err.to_string(), "Type \"Query\" was defined more than once.");
    }

    /// Only a `scalar` may stand in for a built-in scalar. Anything else is
    /// reported against the user's definition, not a built-in directive.
    #[test]
    fn object_named_like_builtin_scalar() {
        let err = build_err("type String { a: Int }\ntype Query { s: String }");

        assert_eq!(err.kind(), SchemaBuildErrorKind::DuplicateDefinition);
        assert_eq!(err.to_string(), "Type \"String\" was defined more than once.");
        assert_eq!(
            err.location().and_then(|loc| loc.file_position()).map(|pos| (pos.line, pos.col)),
            Some((1, 1)),
        );
    }

    #[test]
    fn implements_non_interface() {
        let err = build_err("type Query implements Other { a: Int }\ntype Other { b: Int }");

        assert_eq!(err.kind(), SchemaBuildErrorKind::TypeValidation);
        assert_eq!(
            err.to_string(),
            "Type \"Query\" must only implement interfaces, but \"Other\" is an object type.",
        );
    }

    #[test]
    fn output_field_with_input_type() {
        let err = build_err("type Query { a: In }\ninput In { b: Int }");

        assert_eq!(
            err.to_string(),
            "The type of \"Query.a\" must be an output type, but \"In\" is an input object type.",
        );
    }

    #[test]
    fn argument_with_output_type() {
        let err = build_err("type Query { a(b: Query): Int }");

        assert_eq!(
            err.to_string(),
            "The type of \"Query.a(b:)\" must be an input type, but \"Query\" is an object type.",
        );
    }

    #[test]
    fn syntax_errors_pass_through() {
        let sdl = "type Query { a: }";
        let parse_error = typegraph_parser::parse_document(sdl, None)
            .errors
            .into_iter()
            .next()
            .expect("document has a syntax error");

        let err = SchemaBuilder::from_str(sdl).expect_err("syntax error is reported");
        assert_eq!(err.kind(), SchemaBuildErrorKind::Syntax);
        assert!(err.location().is_none());
        assert_eq!(err.to_string(), parse_error.to_string());
        assert!(matches!(err, SchemaBuildError::Syntax(inner) if inner == parse_error));
    }
}

mod files {
    use super::*;
    use std::fs;

    #[test]
    fn load_file_reads_and_tags_locations() -> Result<()> {
        let file_path = std::env::temp_dir().join(format!(
            "typegraph-load-file-{}.graphql",
            std::process::id(),
        ));
        fs::write(&file_path, "type Query {\n  a: Missing\n}\n")
            .expect("write temporary schema file");

        let err = SchemaBuilder::new()
            .load_file(&file_path)?
            .build()
            .expect_err("Missing is undefined");
        let _ = fs::remove_file(&file_path);

        let position = err.location()
            .and_then(|loc| loc.file_position())
            .expect("error has a file position");
        assert_eq!(position.file.as_deref(), Some(file_path.as_path()));
        assert_eq!((position.line, position.col), (2, 6));

        Ok(())
    }

    #[test]
    fn load_missing_file() {
        let err = SchemaBuilder::from_files(["/nonexistent/typegraph/schema.graphql"])
            .expect_err("missing file is reported");

        assert_eq!(err.kind(), SchemaBuildErrorKind::Io);
        assert!(matches!(err, SchemaBuildError::SchemaFileReadError(_)));
    }
}
