use crate::print_schema;
use crate::Schema;
use crate::SchemaBuilder;
use crate::SchemaBuildError;
use crate::types::GraphQLType;
use rayon::prelude::*;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

const SDL: &str = concat!(
    "type Query {\n",
    "  node(id: ID!): Node\n",
    "  users: [User!]!\n",
    "}\n",
    "\n",
    "interface Node {\n",
    "  id: ID!\n",
    "}\n",
    "\n",
    "type User implements Node {\n",
    "  id: ID!\n",
    "  friends: [User!]!\n",
    "}\n",
);

#[test]
fn schema_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Schema>();
}

#[test]
fn shared_schema_reads_concurrently() -> Result<()> {
    let schema = Arc::new(SchemaBuilder::new().load_str(None, SDL)?.build()?);

    let results: Vec<(String, Vec<String>)> = (0..64)
        .into_par_iter()
        .map(|_| {
            let schema = Arc::clone(&schema);
            let friend_type_names = schema.get_type("User")
                .and_then(GraphQLType::as_object)
                .map(|user_type| {
                    user_type.fields()
                        .values()
                        .filter_map(|field| {
                            field.type_annotation()
                                .innermost_named_type_annotation()
                                .graphql_type(&schema)
                        })
                        .map(|type_| type_.name().to_string())
                        .collect()
                })
                .unwrap_or_default();
            (print_schema(&schema), friend_type_names)
        })
        .collect();

    for (printed, friend_type_names) in &results {
        assert_eq!(printed, SDL);
        assert_eq!(friend_type_names, &vec!["ID".to_string(), "User".to_string()]);
    }

    Ok(())
}
