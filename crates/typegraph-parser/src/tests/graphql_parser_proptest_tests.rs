//! Property tests: the parser returns for any input.

use proptest::prelude::*;

use crate::GraphQLParser;

proptest! {
    #[test]
    fn never_panics_on_arbitrary_input(source in "\\PC{0,64}") {
        let _ = GraphQLParser::new(&source).parse_document();
    }

    #[test]
    fn never_panics_on_graphql_like_input(
        source in "(type|enum|union|input|schema|directive|query|fragment|extend| |[A-Za-z_]{1,4}|[{}()\\[\\]:=@$!|&,.#\n\"]|\"\"\"|-?[0-9]{1,3}){0,40}",
    ) {
        let result = GraphQLParser::new(&source).parse_document();
        prop_assert!(result.ast().is_some());
    }

    #[test]
    fn valid_object_types_parse_cleanly(
        type_name in "[A-Z][a-zA-Z]{0,8}",
        field_names in proptest::collection::vec("[a-z][a-zA-Z0-9]{0,8}", 1..6),
    ) {
        let fields: Vec<String> = field_names.iter().map(|name| format!("{name}: Int")).collect();
        let source = format!("type {type_name} {{ {} }}", fields.join(" "));
        let result = GraphQLParser::new(&source).parse_document();
        prop_assert!(result.is_ok(), "{}", result.format_errors(Some(&source)));
    }
}
