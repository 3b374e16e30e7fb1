use std::fmt::{Display, Formatter, Result};

use crate::value::Value;

/// Placeholder used for unset string fields.
pub const DEFAULT_STRING: &str = "ZAHA_DEFAULT_STRING";
/// Placeholder used for unset integer fields.
pub const DEFAULT_INT: i64 = 123;
/// Placeholder used for unset floating-point fields.
pub const DEFAULT_NUMBER: f64 = 123.456;
/// Placeholder used for unset boolean fields.
pub const DEFAULT_BOOLEAN: bool = true;

/// Primitive type tag with a fixed canonical default.
///
/// Variant names mirror the scalar variants of [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    String,
    Int,
    Number,
    Boolean,
}

impl TypeKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            TypeKind::String => "string",
            TypeKind::Int => "int",
            TypeKind::Number => "number",
            TypeKind::Boolean => "boolean",
        }
    }

    /// The canonical default for this kind. Identical on every call.
    pub fn default_value(&self) -> Value {
        match self {
            TypeKind::String => Value::string(DEFAULT_STRING),
            TypeKind::Int => Value::Int(DEFAULT_INT),
            TypeKind::Number => Value::Number(DEFAULT_NUMBER),
            TypeKind::Boolean => Value::Bool(DEFAULT_BOOLEAN),
        }
    }
}

impl Display for TypeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.type_name())
    }
}
