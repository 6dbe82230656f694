mod graphql_parse_error_tests;
mod graphql_parser_error_tests;
mod graphql_parser_proptest_tests;
mod graphql_parser_schema_tests;
mod str_graphql_token_source_tests;
mod utils;
