//! Field-name-to-descriptor mappings.

mod format;
mod types;

pub use format::format_schema;
pub use types::Schema;
