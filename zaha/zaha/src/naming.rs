//! Override-method naming derived from schema field names.

/// Verb prepended to the capitalized field name.
pub const OVERRIDE_PREFIX: &str = "with";

/// Upper-cases the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `userName` -> `withUserName`.
pub fn override_method_name(field: &str) -> String {
    format!("{OVERRIDE_PREFIX}{}", capitalize(field))
}
