use crate::DirectiveAnnotation;
use crate::types::DEFAULT_DEPRECATION_REASON;
use crate::types::Parameter;
use crate::Value;
use indexmap::IndexMap;
use std::fmt;
use std::fmt::Display;
use std::fmt::Write;

pub(super) const INDENT: &str = "  ";

pub(super) fn write_block(
    f: &mut fmt::Formatter<'_>,
    inner: impl FnOnce(&mut fmt::Formatter<'_>) -> fmt::Result,
) -> fmt::Result {
    f.write_str(" {\n")?;
    inner(f)?;
    f.write_char('}')
}

/// Writes a block member's description as `#` comment lines. Every
/// described member except the first is set off by a blank line.
pub(super) fn write_member_description(
    f: &mut fmt::Formatter<'_>,
    member_index: usize,
    description: Option<&str>,
    indentation: &str,
) -> fmt::Result {
    let Some(description) = description else {
        return Ok(());
    };
    if member_index > 0 {
        f.write_char('\n')?;
    }
    Description(description, indentation).fmt(f)
}

/// A description rendered as `# line` comments, one per line.
pub(super) struct Description<'a>(pub &'a str, pub &'a str);

impl Display for Description<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Description(description, indentation) = self;
        for line in description.split('\n') {
            if line.is_empty() {
                writeln!(f, "{indentation}#")?;
            } else {
                writeln!(f, "{indentation}# {line}")?;
            }
        }
        Ok(())
    }
}

/// Applied directives, each preceded by a space: ` @a @b(x: 1)`.
///
/// A `@deprecated` whose reason is the default one prints bare.
pub(super) struct DirectiveAnnotations<'a>(pub &'a [DirectiveAnnotation]);

impl Display for DirectiveAnnotations<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for annot in self.0 {
            write!(f, " @{}", annot.directive_name())?;

            let args = annot.args();
            let has_default_reason_only = annot.directive_name() == "deprecated"
                && args.len() == 1
                && args.get("reason").and_then(Value::as_str) == Some(DEFAULT_DEPRECATION_REASON);
            if args.is_empty() || has_default_reason_only {
                continue;
            }

            f.write_char('(')?;
            let mut args = args.iter().peekable();
            while let Some((name, value)) = args.next() {
                write!(f, "{name}: {value}")?;
                if args.peek().is_some() {
                    f.write_str(", ")?;
                }
            }
            f.write_char(')')?;
        }
        Ok(())
    }
}

/// ` = <literal>` when a default value is present.
pub(super) struct DefaultValue<'a>(pub Option<&'a Value>);

impl Display for DefaultValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, " = {value}"),
            None => Ok(()),
        }
    }
}

/// A field's or directive's parameter list: nothing when empty, inline
/// `(a: Int = 2, b: String)` when no parameter has a description, and one
/// parameter per line otherwise. `indentation` is the owner's own.
pub(super) struct Parameters<'a>(pub &'a IndexMap<String, Parameter>, pub &'a str);

impl Display for Parameters<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Parameters(params, indentation) = self;
        if params.is_empty() {
            return Ok(());
        }

        if params.values().all(|param| param.description().is_none()) {
            f.write_char('(')?;
            let mut params = params.values().peekable();
            while let Some(param) = params.next() {
                write_parameter(f, param)?;
                if params.peek().is_some() {
                    f.write_str(", ")?;
                }
            }
            return f.write_char(')');
        }

        let param_indentation = format!("{indentation}{INDENT}");
        f.write_str("(\n")?;
        for (index, param) in params.values().enumerate() {
            write_member_description(f, index, param.description(), &param_indentation)?;
            f.write_str(&param_indentation)?;
            write_parameter(f, param)?;
            f.write_char('\n')?;
        }
        write!(f, "{indentation})")
    }
}

fn write_parameter(f: &mut fmt::Formatter<'_>, param: &Parameter) -> fmt::Result {
    write!(
        f,
        "{}: {}{}{}",
        param.name(),
        param.type_annotation(),
        DefaultValue(param.default_value()),
        DirectiveAnnotations(param.directives()),
    )
}
