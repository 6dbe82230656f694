use crate::print_schema;
use crate::SchemaBuilder;
use proptest::prelude::*;
use proptest::sample::Index;
use std::collections::BTreeMap;

const BUILTIN_SCALARS: [&str; 5] = ["Boolean", "Float", "ID", "Int", "String"];

/// A field's type: the named type to use, whether that named type is
/// non-null, and one non-null flag per list wrapper (innermost first).
type TypeRefShape = (Index, bool, Vec<bool>);

fn type_ref_shape() -> impl Strategy<Value = TypeRefShape> {
    (any::<Index>(), any::<bool>(), prop::collection::vec(any::<bool>(), 0..3))
}

fn render_type_ref(
    (base_index, named_non_null, list_non_nulls): &TypeRefShape,
    type_names: &[&str],
) -> String {
    let mut rendered = base_index.get(type_names).to_string();
    if *named_non_null {
        rendered.push('!');
    }
    for list_non_null in list_non_nulls {
        rendered = format!("[{rendered}]");
        if *list_non_null {
            rendered.push('!');
        }
    }
    rendered
}

fn render_object_type(
    type_name: &str,
    fields: &BTreeMap<String, TypeRefShape>,
    type_names: &[&str],
) -> String {
    let mut rendered = format!("type {type_name} {{\n");
    for (field_name, shape) in fields {
        rendered.push_str(&format!("  {field_name}: {}\n", render_type_ref(shape, type_names)));
    }
    rendered.push_str("}\n");
    rendered
}

/// Canonical SDL for a `Query` type plus a handful of object types whose
/// fields point at built-in scalars and at each other.
fn canonical_object_types_sdl() -> impl Strategy<Value = String> {
    prop::collection::btree_set("T[a-z0-9]{0,6}", 1..5)
        .prop_flat_map(|type_names| {
            let object_types = prop::collection::vec(
                prop::collection::btree_map("[a-z][a-zA-Z0-9_]{0,8}", type_ref_shape(), 1..5),
                type_names.len() + 1,
            );
            (Just(type_names.into_iter().collect::<Vec<_>>()), object_types)
        })
        .prop_map(|(type_names, object_types)| {
            let mut all_type_names: Vec<&str> = BUILTIN_SCALARS.to_vec();
            all_type_names.push("Query");
            all_type_names.extend(type_names.iter().map(String::as_str));

            let definition_names = std::iter::once("Query")
                .chain(type_names.iter().map(String::as_str));
            definition_names
                .zip(&object_types)
                .map(|(type_name, fields)| render_object_type(type_name, fields, &all_type_names))
                .collect::<Vec<_>>()
                .join("\n")
        })
}

proptest! {
    #[test]
    fn object_types_round_trip(sdl in canonical_object_types_sdl()) {
        let schema = SchemaBuilder::new()
            .load_str(None, &sdl)
            .and_then(SchemaBuilder::build);
        prop_assert!(schema.is_ok(), "failed to build:\n{sdl}\n{schema:?}");
        if let Ok(schema) = schema {
            prop_assert_eq!(print_schema(&schema), sdl);
        }
    }
}
