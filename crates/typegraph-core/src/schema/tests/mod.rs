mod root_operation_tests;
mod schema_builder_tests;
