use crate::schema::SchemaBuildError;
use crate::schema::TypeValidationError;
use crate::types::UnionTypeValidator;
use crate::types::tests::test_utils;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[test]
fn union_of_object_types_validates() -> Result<()> {
    let types_map_builder = test_utils::visit_type_defs(concat!(
        "type Cat { meows: Boolean }\n",
        "type Dog { barks: Boolean }\n",
        "union Pet = Cat | Dog",
    ))?;
    let pet_type = test_utils::get_union_type(&types_map_builder, "Pet");

    assert_eq!(pet_type.member_type_names(), vec!["Cat", "Dog"]);
    assert!(UnionTypeValidator::new(pet_type, types_map_builder.types())
        .validate()
        .is_empty());

    Ok(())
}

#[test]
fn union_of_non_object_types_is_invalid() -> Result<()> {
    let types_map_builder = test_utils::visit_type_defs(concat!(
        "type Cat { meows: Boolean }\n",
        "interface Named { name: String }\n",
        "union Pet = Cat | Named | Int",
    ))?;
    let pet_type = test_utils::get_union_type(&types_map_builder, "Pet");
    let errors = UnionTypeValidator::new(pet_type, types_map_builder.types())
        .validate();

    let invalid_members: Vec<&str> = errors
        .iter()
        .filter_map(|err| match err {
            TypeValidationError::InvalidUnionMemberTypeKind { member_type_name, .. } =>
                Some(member_type_name.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(invalid_members, vec!["Named", "Int"]);
    assert_eq!(
        errors[0].to_string(),
        "Union type \"Pet\" can only include object types, but \"Named\" is an interface type.",
    );

    Ok(())
}

#[test]
fn duplicate_union_member() {
    let err = test_utils::visit_type_defs("type A { a: Int }\nunion U = A | A")
        .expect_err("duplicate member is rejected");

    assert_eq!(err.to_string(), "Union member \"A\" was defined more than once on \"U\".");
}
