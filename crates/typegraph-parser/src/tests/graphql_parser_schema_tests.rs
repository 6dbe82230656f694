//! Tests for parsing type-system definitions.

use crate::ast;
use crate::tests::utils::only_object_type;
use crate::tests::utils::parse_errors;
use crate::tests::utils::parse_ok;
use crate::GraphQLParseErrorKind;

fn names(list: &[ast::Name]) -> Vec<&str> {
    list.iter().map(ast::Name::as_str).collect()
}

#[test]
fn object_type_with_fields_and_arguments() {
    let doc = parse_ok("type Query { user(id: ID!, limit: Int = 10): User hello: String }");
    let query = only_object_type(&doc);

    assert_eq!(query.name.value, "Query");
    assert_eq!(query.fields.len(), 2);

    let user = &query.fields[0];
    assert_eq!(user.name.value, "user");
    assert_eq!(user.field_type.to_string(), "User");
    assert_eq!(user.arguments.len(), 2);
    assert_eq!(user.arguments[0].value_type.to_string(), "ID!");
    assert_eq!(user.arguments[1].default_value, Some(ast::Value::Int(10)));
}

#[test]
fn implements_with_ampersands() {
    let doc = parse_ok("type A implements & B & C { f: Int }");
    assert_eq!(names(&only_object_type(&doc).implements), vec!["B", "C"]);
}

#[test]
fn implements_legacy_comma_form() {
    let doc = parse_ok("type A implements B, C { f: Int }");
    assert_eq!(names(&only_object_type(&doc).implements), vec!["B", "C"]);
}

/// Without a comma, a bare name after the interface list starts the next
/// definition.
#[test]
fn fieldless_implementing_type_followed_by_definition() {
    let doc = parse_ok("type A implements B\ntype C { f: Int }");
    assert_eq!(doc.definitions.len(), 2);
    let ast::Definition::ObjectType(a) = &doc.definitions[0] else {
        panic!("expected an object type");
    };
    assert_eq!(names(&a.implements), vec!["B"]);
    assert!(a.fields.is_empty());
}

#[test]
fn interface_implementing_interface() {
    let doc = parse_ok("interface Node { id: ID! } interface Named implements Node { id: ID! name: String }");
    let ast::Definition::InterfaceType(named) = &doc.definitions[1] else {
        panic!("expected an interface");
    };
    assert_eq!(names(&named.implements), vec!["Node"]);
    assert_eq!(named.fields.len(), 2);
}

#[test]
fn union_members() {
    let doc = parse_ok("union U = | A | B\nunion Single = A\nunion Empty");
    let members: Vec<Vec<&str>> = doc
        .definitions
        .iter()
        .map(|def| match def {
            ast::Definition::UnionType(union_def) => names(&union_def.members),
            other => panic!("expected a union, got {other:?}"),
        })
        .collect();
    assert_eq!(members, vec![vec!["A", "B"], vec!["A"], vec![]]);
}

#[test]
fn enum_values_with_directives() {
    let doc = parse_ok("enum Color { RED GREEN @deprecated(reason: \"use RED\") BLUE }");
    let ast::Definition::EnumType(color) = &doc.definitions[0] else {
        panic!("expected an enum");
    };
    let value_names: Vec<&str> = color.values.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(value_names, vec!["RED", "GREEN", "BLUE"]);

    let deprecated = &color.values[1].directives[0];
    assert_eq!(deprecated.name.value, "deprecated");
    assert_eq!(
        deprecated.argument("reason"),
        Some(&ast::Value::String("use RED".to_string())),
    );
}

/// <https://spec.graphql.org/October2021/#EnumValue>
#[test]
fn enum_value_cannot_be_true_false_or_null() {
    let errors = parse_errors("enum E { A true }");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message(), "enum value cannot be named `true`");
}

#[test]
fn scalar_and_input_object() {
    let doc = parse_ok(
        "scalar DateTime @specifiedBy(url: \"https://example.com\")\n\
         input Filter { after: DateTime tags: [String!] = [\"a\", \"b\"] nested: Filter = {after: null} }",
    );
    let ast::Definition::ScalarType(scalar) = &doc.definitions[0] else {
        panic!("expected a scalar");
    };
    assert_eq!(scalar.name.value, "DateTime");
    assert_eq!(scalar.directives.len(), 1);

    let ast::Definition::InputObjectType(filter) = &doc.definitions[1] else {
        panic!("expected an input object");
    };
    assert_eq!(filter.fields.len(), 3);
    assert_eq!(
        filter.fields[1].default_value,
        Some(ast::Value::List(vec![
            ast::Value::String("a".to_string()),
            ast::Value::String("b".to_string()),
        ])),
    );
    assert_eq!(
        filter.fields[2].default_value,
        Some(ast::Value::Object(vec![("after".to_string(), ast::Value::Null)])),
    );
}

#[test]
fn directive_definition() {
    let doc = parse_ok(
        "directive @cache(ttl: Int = 60, scope: Scope = PUBLIC) repeatable on | FIELD_DEFINITION | OBJECT",
    );
    let ast::Definition::Directive(cache) = &doc.definitions[0] else {
        panic!("expected a directive definition");
    };
    assert_eq!(cache.name.value, "cache");
    assert!(cache.repeatable);
    assert_eq!(
        cache.locations,
        vec![ast::DirectiveLocation::FieldDefinition, ast::DirectiveLocation::Object],
    );
    assert_eq!(cache.arguments[1].default_value, Some(ast::Value::Enum("PUBLIC".to_string())));
}

#[test]
fn unknown_directive_location_suggests_closest() {
    let errors = parse_errors("directive @a on FEILD");
    assert_eq!(errors[0].message(), "unknown directive location `FEILD`");
    assert_eq!(errors[0].notes()[0].message, "did you mean `FIELD`?");
}

#[test]
fn schema_definition_root_operations() {
    let doc = parse_ok("schema @a { query: Q mutation: M subscription: S }");
    let ast::Definition::Schema(schema) = &doc.definitions[0] else {
        panic!("expected a schema definition");
    };
    let roots: Vec<(ast::OperationKind, &str)> = schema
        .root_operations
        .iter()
        .map(|root| (root.operation_kind, root.named_type.as_str()))
        .collect();
    assert_eq!(
        roots,
        vec![
            (ast::OperationKind::Query, "Q"),
            (ast::OperationKind::Mutation, "M"),
            (ast::OperationKind::Subscription, "S"),
        ],
    );
    assert_eq!(schema.directives.len(), 1);
}

/// Duplicate slots are representable so the schema builder can report them.
#[test]
fn schema_definition_keeps_duplicate_slots() {
    let doc = parse_ok("schema { query: A query: B }");
    let ast::Definition::Schema(schema) = &doc.definitions[0] else {
        panic!("expected a schema definition");
    };
    assert_eq!(schema.root_operations.len(), 2);
}

#[test]
fn type_annotation_nesting() {
    let doc = parse_ok("type T { a: Int b: Int! c: [Int] d: [Int!] e: [Int]! f: [[Int!]]! }");
    let printed: Vec<String> = only_object_type(&doc)
        .fields
        .iter()
        .map(|field| field.field_type.to_string())
        .collect();
    assert_eq!(printed, vec!["Int", "Int!", "[Int]", "[Int!]", "[Int]!", "[[Int!]]!"]);
}

#[test]
fn field_may_be_named_like_a_keyword() {
    let doc = parse_ok("type T { type: String query: String true: Boolean }");
    let field_names: Vec<&str> = only_object_type(&doc)
        .fields
        .iter()
        .map(|field| field.name.as_str())
        .collect();
    assert_eq!(field_names, vec!["type", "query", "true"]);
}

#[test]
fn variables_rejected_in_default_values() {
    let errors = parse_errors("type Q { f(a: Int = $x): Int }");
    assert_eq!(errors[0].kind(), &GraphQLParseErrorKind::VariableInConstContext);
    assert_eq!(errors[0].message(), "variables are not allowed in default values");
}

#[test]
fn variables_rejected_in_type_system_directives() {
    let errors = parse_errors("type Q @key(fields: $f) { id: ID }");
    assert_eq!(errors[0].kind(), &GraphQLParseErrorKind::VariableInConstContext);
}

#[test]
fn type_extensions_are_rejected() {
    let errors = parse_errors("extend type Q { b: Int }");
    assert_eq!(errors[0].message(), "type extensions are not supported");
}
