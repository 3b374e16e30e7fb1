//! Error types for descriptors and builders.

/// Error returned by descriptor constructors and builder overrides.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FactoryError {
    /// `one_of` was given no candidates to choose from.
    #[error("one_of requires at least one candidate value")]
    EmptyCandidates,

    /// An override targeted a field that the factory schema never declared,
    /// so the builder has no such override.
    #[error("builder has no override `{method}`: field '{field}' is not declared in its schema")]
    UnknownField { field: String, method: String },
}
