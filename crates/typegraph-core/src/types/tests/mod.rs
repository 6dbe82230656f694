mod input_object_type_validator_tests;
mod test_utils;
mod union_type_validator_tests;
