use crate::ast;
use indexmap::IndexMap;
use std::fmt;
use std::fmt::Write;

/// A literal value as captured from a schema document (argument defaults,
/// input field defaults and directive arguments).
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Enum(String),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Null,
    Object(IndexMap<String, Value>),
    String(String),
    VarRef(String),
}
impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    pub(crate) fn from_ast(ast_value: &ast::Value) -> Self {
        match ast_value {
            ast::Value::Variable(var_name) =>
                Value::VarRef(var_name.clone()),

            ast::Value::Int(value) =>
                Value::Int(*value),

            ast::Value::Float(value) =>
                Value::Float(*value),

            ast::Value::String(value) =>
                Value::String(value.clone()),

            ast::Value::Boolean(value) =>
                Value::Bool(*value),

            ast::Value::Null =>
                Value::Null,

            ast::Value::Enum(value) =>
                Value::Enum(value.clone()),

            ast::Value::List(values) =>
                Value::List(values.iter().map(Value::from_ast).collect()),

            ast::Value::Object(entries) =>
                Value::Object(entries.iter().map(|(key, ast_value)|
                    (key.clone(), Value::from_ast(ast_value))
                ).collect()),
        }
    }
}

/// Renders the value as a GraphQL literal: `"x"`, `1.5`, `[1, 2]`,
/// `{a: 1, b: "x"}`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(true) => f.write_str("true"),
            Value::Bool(false) => f.write_str("false"),
            Value::Enum(value) => f.write_str(value),
            Value::Float(value) => {
                let formatted = value.to_string();
                if formatted.contains(['.', 'e', 'E', 'N', 'i']) {
                    f.write_str(&formatted)
                } else {
                    write!(f, "{formatted}.0")
                }
            },
            Value::Int(value) => fmt::Display::fmt(value, f),
            Value::List(values) => {
                f.write_char('[')?;
                let mut values = values.iter().peekable();
                while let Some(value) = values.next() {
                    value.fmt(f)?;
                    if values.peek().is_some() {
                        f.write_str(", ")?;
                    }
                }
                f.write_char(']')
            },
            Value::Null => f.write_str("null"),
            Value::Object(entries) => {
                f.write_char('{')?;
                let mut entries = entries.iter().peekable();
                while let Some((key, value)) = entries.next() {
                    write!(f, "{key}: {value}")?;
                    if entries.peek().is_some() {
                        f.write_str(", ")?;
                    }
                }
                f.write_char('}')
            },
            Value::String(value) => write_quoted(f, value),
            Value::VarRef(var_name) => write!(f, "${var_name}"),
        }
    }
}

pub(crate) fn write_quoted(out: &mut impl Write, s: &str) -> fmt::Result {
    out.write_char('"')?;
    for c in s.chars() {
        match c {
            '\u{8}' => out.write_str("\\b"),
            '\u{c}' => out.write_str("\\f"),
            '\r' => out.write_str("\\r"),
            '\n' => out.write_str("\\n"),
            '\t' => out.write_str("\\t"),
            '\\' => out.write_str("\\\\"),
            '"' => out.write_str("\\\""),
            c if c.is_control() => write!(out, "\\u{:04X}", c as u32),
            c => out.write_char(c),
        }?
    }
    out.write_char('"')
}
