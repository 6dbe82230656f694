use crate::schema::SchemaBuildError;
use crate::schema::TypeValidationError;
use crate::types::InputObjectTypeValidator;
use crate::types::tests::test_utils;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[test]
fn input_object_with_input_typed_fields_validates() -> Result<()> {
    let types_map_builder = test_utils::visit_type_defs(concat!(
        "scalar DateTime\n",
        "enum Order { ASC DESC }\n",
        "input Range { from: DateTime to: DateTime }\n",
        "input Filter { range: Range! order: [Order!] = [ASC] self: Filter }",
    ))?;
    let filter_type = test_utils::get_input_object_type(&types_map_builder, "Filter");
    let errors = InputObjectTypeValidator::new(filter_type, types_map_builder.types())
        .validate();

    assert_eq!(errors, vec![]);

    Ok(())
}

#[test]
fn input_object_with_object_typed_field_is_invalid() -> Result<()> {
    let types_map_builder = test_utils::visit_type_defs(concat!(
        "type User { id: ID }\n",
        "input Filter { ok: Int user: [User!] }",
    ))?;
    let filter_type = test_utils::get_input_object_type(&types_map_builder, "Filter");
    let errors = InputObjectTypeValidator::new(filter_type, types_map_builder.types())
        .validate();

    assert_eq!(errors.len(), 1);
    assert!(matches!(
        &errors[0],
        TypeValidationError::InvalidInputFieldWithOutputType { field_name, .. }
            if field_name == "user",
    ));
    assert_eq!(
        errors[0].to_string(),
        "The type of \"Filter.user\" must be an input type, but \"User\" is an object type.",
    );

    Ok(())
}

#[test]
fn unresolved_field_types_are_left_to_reference_checks() -> Result<()> {
    let types_map_builder = test_utils::visit_type_defs("input Filter { missing: Missing }")?;
    let filter_type = test_utils::get_input_object_type(&types_map_builder, "Filter");

    assert!(InputObjectTypeValidator::new(filter_type, types_map_builder.types())
        .validate()
        .is_empty());
    assert_eq!(
        types_map_builder.check_type_refs().map_err(|err| err.to_string()),
        Err("Type \"Missing\" not found in document.".to_string()),
    );

    Ok(())
}
