use crate::ast;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuildErrorKind;
use crate::types::GraphQLTypeKind;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn build_err(sdl: &str) -> SchemaBuildError {
    SchemaBuilder::from_str(sdl)
        .and_then(SchemaBuilder::build)
        .expect_err("schema build should fail")
}

mod conventional_names {
    use super::*;

    #[test]
    fn all_three_conventional_roots() -> Result<()> {
        let schema = SchemaBuilder::from_str(concat!(
            "type Mutation\n",
            "type Query\n",
            "type Subscription",
        ))?.build()?;

        assert_eq!(schema.query_type().name(), "Query");
        assert_eq!(schema.mutation_type().map(|obj_type| obj_type.name()), Some("Mutation"));
        assert_eq!(
            schema.subscription_type().map(|obj_type| obj_type.name()),
            Some("Subscription"),
        );
        assert!(schema.query_type().fields().is_empty());

        Ok(())
    }

    #[test]
    fn non_object_mutation_is_not_a_root() -> Result<()> {
        let schema = SchemaBuilder::from_str("type Query { a: Int }\nenum Mutation { A }")?
            .build()?;
        assert!(schema.mutation_type().is_none());

        Ok(())
    }

    #[test]
    fn non_object_query_is_rejected() {
        let err = build_err("enum Query { A }");

        assert!(matches!(
            &err,
            SchemaBuildError::RootOperationTypeNotObject {
                type_kind: GraphQLTypeKind::Enum,
                ..
            },
        ));
        assert_eq!(err.to_string(), "Query root type \"Query\" must be an object type.");
    }

    #[test]
    fn operations_and_fragments_named_query_do_not_count() {
        let err = build_err(concat!(
            "type Foo { a: Int }\n",
            "query Query { a }\n",
            "fragment Query on Foo { a }",
        ));
        assert!(matches!(err, SchemaBuildError::NoQueryOperationTypeDefined));
    }

    #[test]
    fn executable_definitions_are_ignored() -> Result<()> {
        let schema = SchemaBuilder::from_str(concat!(
            "type Query { a: Int }\n",
            "query GetA { a }\n",
            "fragment F on Query { a }",
        ))?.build()?;

        assert_eq!(schema.query_type().name(), "Query");
        assert_eq!(schema.document().definitions.len(), 3);

        Ok(())
    }
}

mod schema_definition {
    use super::*;

    #[test]
    fn custom_root_names() -> Result<()> {
        let schema = SchemaBuilder::from_str(concat!(
            "schema { query: Root mutation: Change }\n",
            "type Root { a: Int }\n",
            "type Change { b: Int }\n",
            "type Query { c: Int }\n",
            "type Subscription { d: Int }",
        ))?.build()?;

        assert!(schema.has_schema_definition());
        assert_eq!(schema.query_type().name(), "Root");
        assert_eq!(schema.mutation_type().map(|obj_type| obj_type.name()), Some("Change"));
        assert!(schema.subscription_type().is_none());

        Ok(())
    }

    #[test]
    fn schema_definition_without_query() {
        let err = build_err("schema { mutation: M }\ntype M { a: Int }\ntype Query { a: Int }");
        assert!(matches!(err, SchemaBuildError::NoQueryOperationTypeDefined));
    }

    #[test]
    fn multiple_schema_definitions() {
        let err = build_err(concat!(
            "schema { query: Q }\n",
            "schema { query: Q }\n",
            "type Q { a: Int }",
        ));

        assert_eq!(err.kind(), SchemaBuildErrorKind::SchemaStructure);
        assert_eq!(err.to_string(), "Must provide only one schema definition.");
    }

    #[test]
    fn duplicate_root_operation_slots() {
        let cases = [
            ("query", "schema { query: A query: B }"),
            ("mutation", "schema { query: A mutation: A mutation: B }"),
            ("subscription", "schema { query: A subscription: A subscription: B }"),
        ];
        for (operation, schema_def) in cases {
            let err = build_err(format!("{schema_def}\ntype A {{ a: Int }}\ntype B {{ b: Int }}").as_str());

            assert!(
                matches!(err, SchemaBuildError::DuplicateRootOperationType { .. }),
                "unexpected error for {operation}: {err:?}",
            );
            assert_eq!(
                err.to_string(),
                format!("Must provide only one {operation} type in schema."),
            );
        }
    }

    #[test]
    fn root_type_not_found() {
        let err = build_err("schema { query: Q mutation: Missing }\ntype Q { a: Int }");

        assert!(matches!(
            &err,
            SchemaBuildError::RootOperationTypeNotFound {
                operation: ast::OperationKind::Mutation,
                ..
            },
        ));
        assert_eq!(err.kind(), SchemaBuildErrorKind::UnresolvedReference);
        assert_eq!(
            err.to_string(),
            "Specified mutation type \"Missing\" not found in document.",
        );
    }

    #[test]
    fn operations_and_fragments_do_not_satisfy_named_root() {
        let cases = [
            "schema { query: Foo }\nquery Foo { field }",
            "schema { query: Foo }\nfragment Foo on Type { field }",
        ];
        for sdl in cases {
            let err = build_err(sdl);

            assert!(
                matches!(
                    &err,
                    SchemaBuildError::RootOperationTypeNotFound {
                        operation: ast::OperationKind::Query,
                        ..
                    },
                ),
                "unexpected error for {sdl:?}: {err:?}",
            );
            assert_eq!(
                err.to_string(),
                "Specified query type \"Foo\" not found in document.",
            );
        }
    }

    #[test]
    fn root_type_must_be_object() {
        let err = build_err("schema { query: Q subscription: S }\ntype Q { a: Int }\nunion S = Q");

        assert_eq!(err.kind(), SchemaBuildErrorKind::SchemaStructure);
        assert_eq!(
            err.to_string(),
            "Subscription root type \"S\" must be an object type.",
        );
    }
}
