//! Renders a [`Schema`] as canonical SDL.
//!
//! The output lists the `schema` definition (only when the source document
//! had one), then every directive the document defined, then every type the
//! document defined, each group in declaration order. Descriptions are
//! written as `#` comments, so printing a schema built from printed output
//! reproduces that output exactly.

mod display_utils;

use crate::ast;
use crate::directive_annotation_builder::DirectiveAnnotationBuilder;
use crate::schema::Schema;
use crate::types::Directive;
use crate::types::EnumType;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::ObjectOrInterfaceTypeTrait;
use crate::types::ScalarType;
use crate::types::UnionType;
use display_utils::DefaultValue;
use display_utils::Description;
use display_utils::DirectiveAnnotations;
use display_utils::INDENT;
use display_utils::Parameters;
use display_utils::write_block;
use display_utils::write_member_description;
use std::fmt;
use std::fmt::Display;
use std::fmt::Write as _;

/// Renders `schema` as SDL text ending in a single newline.
pub fn print_schema(schema: &Schema) -> String {
    Renderer { schema }.to_string()
}

struct Renderer<'a> {
    schema: &'a Schema,
}

impl fmt::Display for Renderer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Renderer { schema } = self;
        let mut write_leading_whitespace = {
            let mut first_block = true;
            move |f: &mut fmt::Formatter<'_>| {
                if first_block {
                    first_block = false;
                    Ok(())
                } else {
                    f.write_char('\n')
                }
            }
        };

        let definitions = &schema.document().definitions;

        if let Some(schema_def) = definitions.iter().find_map(|def| match def {
            ast::Definition::Schema(schema_def) => Some(schema_def),
            _ => None,
        }) {
            write_leading_whitespace(f)?;
            write_schema_def(f, schema, schema_def)?;
            f.write_char('\n')?;
        }

        for def in definitions {
            let ast::Definition::Directive(directive_def) = def else {
                continue;
            };
            let Some(directive) = schema.directive(directive_def.name.as_str()) else {
                continue;
            };
            write_leading_whitespace(f)?;
            write_directive_def(f, directive)?;
            f.write_char('\n')?;
        }

        for def in definitions {
            let Some(type_) = def.type_name().and_then(|name| schema.get_type(name.as_str())) else {
                continue;
            };
            write_leading_whitespace(f)?;
            match type_ {
                GraphQLType::Enum(enum_type) => write_enum_type(f, enum_type)?,
                GraphQLType::InputObject(inputobj_type) => write_input_object_type(f, inputobj_type)?,
                GraphQLType::Interface(iface_type) =>
                    write_object_or_interface_type(f, "interface", &**iface_type)?,
                GraphQLType::Object(obj_type) =>
                    write_object_or_interface_type(f, "type", &**obj_type)?,
                GraphQLType::Scalar(scalar_type) => write_scalar_type(f, scalar_type)?,
                GraphQLType::Union(union_type) => write_union_type(f, union_type)?,

                // Built-in scalars never appear in a document's definitions.
                GraphQLType::Bool
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::String
                    => write!(f, "scalar {}", type_.name())?,
            }
            f.write_char('\n')?;
        }

        Ok(())
    }
}

fn write_schema_def(
    f: &mut fmt::Formatter<'_>,
    schema: &Schema,
    schema_def: &ast::SchemaDefinition,
) -> fmt::Result {
    let directives = DirectiveAnnotationBuilder::from_ast(&schema_def.directives);
    write!(f, "schema{}", DirectiveAnnotations(&directives))?;
    write_block(f, |f| {
        writeln!(f, "{INDENT}query: {}", schema.query_type().name())?;
        if let Some(mutation_type) = schema.mutation_type() {
            writeln!(f, "{INDENT}mutation: {}", mutation_type.name())?;
        }
        if let Some(subscription_type) = schema.subscription_type() {
            writeln!(f, "{INDENT}subscription: {}", subscription_type.name())?;
        }
        Ok(())
    })
}

fn write_directive_def(f: &mut fmt::Formatter<'_>, directive: &Directive) -> fmt::Result {
    if let Some(description) = directive.description() {
        Description(description, "").fmt(f)?;
    }
    write!(
        f,
        "directive @{}{}",
        directive.name(),
        Parameters(directive.parameters(), ""),
    )?;
    if directive.is_repeatable() {
        f.write_str(" repeatable")?;
    }
    let locations = directive.locations()
        .iter()
        .map(|location| location.as_str())
        .collect::<Vec<_>>()
        .join(" | ");
    write!(f, " on {locations}")
}

fn write_enum_type(f: &mut fmt::Formatter<'_>, enum_type: &EnumType) -> fmt::Result {
    if let Some(description) = enum_type.description() {
        Description(description, "").fmt(f)?;
    }
    write!(
        f,
        "enum {}{}",
        enum_type.name(),
        DirectiveAnnotations(enum_type.directives()),
    )?;
    if enum_type.values().is_empty() {
        return Ok(());
    }
    write_block(f, |f| {
        for (index, value) in enum_type.values().values().enumerate() {
            write_member_description(f, index, value.description(), INDENT)?;
            writeln!(
                f,
                "{INDENT}{}{}",
                value.name(),
                DirectiveAnnotations(value.directives()),
            )?;
        }
        Ok(())
    })
}

fn write_input_object_type(
    f: &mut fmt::Formatter<'_>,
    inputobj_type: &InputObjectType,
) -> fmt::Result {
    if let Some(description) = inputobj_type.description() {
        Description(description, "").fmt(f)?;
    }
    write!(
        f,
        "input {}{}",
        inputobj_type.name(),
        DirectiveAnnotations(inputobj_type.directives()),
    )?;
    if inputobj_type.fields().is_empty() {
        return Ok(());
    }
    write_block(f, |f| {
        for (index, field) in inputobj_type.fields().values().enumerate() {
            write_member_description(f, index, field.description(), INDENT)?;
            writeln!(
                f,
                "{INDENT}{}: {}{}{}",
                field.name(),
                field.type_annotation(),
                DefaultValue(field.default_value()),
                DirectiveAnnotations(field.directives()),
            )?;
        }
        Ok(())
    })
}

fn write_object_or_interface_type(
    f: &mut fmt::Formatter<'_>,
    keyword: &str,
    type_: &impl ObjectOrInterfaceTypeTrait,
) -> fmt::Result {
    if let Some(description) = type_.description() {
        Description(description, "").fmt(f)?;
    }
    write!(f, "{keyword} {}", type_.name())?;
    let interface_names = type_.interface_names();
    if !interface_names.is_empty() {
        write!(f, " implements {}", interface_names.join(" & "))?;
    }
    DirectiveAnnotations(type_.directives()).fmt(f)?;
    if type_.fields().is_empty() {
        return Ok(());
    }
    write_block(f, |f| {
        for (index, field) in type_.fields().values().enumerate() {
            write_member_description(f, index, field.description(), INDENT)?;
            writeln!(
                f,
                "{INDENT}{}{}: {}{}",
                field.name(),
                Parameters(field.parameters(), INDENT),
                field.type_annotation(),
                DirectiveAnnotations(field.directives()),
            )?;
        }
        Ok(())
    })
}

fn write_scalar_type(f: &mut fmt::Formatter<'_>, scalar_type: &ScalarType) -> fmt::Result {
    if let Some(description) = scalar_type.description() {
        Description(description, "").fmt(f)?;
    }
    write!(
        f,
        "scalar {}{}",
        scalar_type.name(),
        DirectiveAnnotations(scalar_type.directives()),
    )
}

fn write_union_type(f: &mut fmt::Formatter<'_>, union_type: &UnionType) -> fmt::Result {
    if let Some(description) = union_type.description() {
        Description(description, "").fmt(f)?;
    }
    write!(
        f,
        "union {}{}",
        union_type.name(),
        DirectiveAnnotations(union_type.directives()),
    )?;
    let member_names = union_type.member_type_names();
    if !member_names.is_empty() {
        write!(f, " = {}", member_names.join(" | "))?;
    }
    Ok(())
}

