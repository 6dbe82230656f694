use crate::DerefByNameError;
use crate::SchemaBuilder;
use crate::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn me_field_type_ref(schema: &crate::Schema) -> NamedGraphQLTypeRef {
    schema.query_type()
        .field("me")
        .map(|field| field.type_annotation().inner_named_type_ref().clone())
        .expect("Query.me exists")
}

#[test]
fn first_deref_memoizes_slot() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, "type Query { me: User }\ntype User { id: ID }")?
        .build()?;
    let user_ref = me_field_type_ref(&schema);

    assert!(!user_ref.is_resolved());
    let user_type = user_ref.deref(&schema).expect("User resolves");
    assert_eq!(user_type.name(), "User");
    assert!(user_ref.is_resolved());

    let again = user_ref.deref(&schema).expect("User still resolves");
    assert!(std::ptr::eq(user_type, again));

    Ok(())
}

#[test]
fn memoized_slot_is_rechecked_against_other_schemas() -> Result<()> {
    let schema1 = SchemaBuilder::new()
        .load_str(None, "type Query { me: User }\ntype User { id: ID }")?
        .build()?;
    let schema2 = SchemaBuilder::new()
        .load_str(None, "type Query { me: User }\ntype Extra { a: Int }\ntype User { name: String }")?
        .build()?;
    let user_ref = me_field_type_ref(&schema1);
    user_ref.deref(&schema1).expect("User resolves in schema1");

    let user_type = user_ref.deref(&schema2)
        .ok()
        .and_then(GraphQLType::as_object)
        .expect("User resolves in schema2");
    assert!(user_type.field("name").is_some());

    Ok(())
}

#[test]
fn dangling_reference() -> Result<()> {
    let schema1 = SchemaBuilder::new()
        .load_str(None, "type Query { me: User }\ntype User { id: ID }")?
        .build()?;
    let schema2 = SchemaBuilder::new()
        .load_str(None, "type Query { me: Int }")?
        .build()?;
    let user_ref = me_field_type_ref(&schema1);

    assert_eq!(
        user_ref.deref(&schema2).map(GraphQLType::name),
        Err(DerefByNameError::DanglingReference("User".to_string())),
    );

    Ok(())
}
