use std::fmt::{Error, Result, Write as _};

use super::Schema;
use crate::descriptor::Descriptor;

/// Format a schema in a readable outline:
/// leaf descriptors are rendered in one line, compound descriptors (objects,
/// arrays and builders) are pretty-printed. Nested fields follow the same rule.
pub fn format_schema(schema: &Schema) -> std::result::Result<String, Error> {
    let mut out = String::new();
    format_fields(schema, 0, &mut out)?;
    Ok(out)
}

fn format_fields(schema: &Schema, indent: usize, out: &mut String) -> Result {
    for (name, descriptor) in schema.iter() {
        format_labeled(name, descriptor, indent, out)?;
    }
    Ok(())
}

fn format_labeled(label: &str, descriptor: &Descriptor, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    match descriptor {
        Descriptor::Literal(value) => {
            writeln!(out, "{pad}{label}: {{ type: literal, value: {value} }}")
        }
        Descriptor::OneOf(candidates) => writeln!(
            out,
            "{pad}{label}: {{ type: one_of, first: {}, candidates: {} }}",
            candidates.first(),
            candidates.count()
        ),
        leaf if !leaf.is_compound() => {
            writeln!(out, "{pad}{label}: {{ type: {} }}", leaf.type_name())
        }
        compound => {
            writeln!(out, "{pad}{label}:")?;
            format_compound(compound, indent + 4, out)
        }
    }
}

fn format_compound(descriptor: &Descriptor, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    writeln!(out, "{pad}type: {}", descriptor.type_name())?;

    match descriptor {
        Descriptor::Object(schema) => format_nested_fields(schema, indent, out),
        Descriptor::Builder(builder) => format_nested_fields(&builder.schema(), indent, out),
        Descriptor::ArrayOf(element) => format_labeled("item", element, indent, out),
        _ => Ok(()),
    }
}

fn format_nested_fields(schema: &Schema, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    if schema.is_empty() {
        return writeln!(out, "{pad}fields: {{}}");
    }
    writeln!(out, "{pad}fields:")?;
    format_fields(schema, indent + 4, out)
}
