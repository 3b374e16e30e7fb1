//! Plain value model for `zaha` fixture builders.
//!
//! This crate provides the output representation ([`Value`]) that builders
//! materialize, the primitive type tags ([`TypeKind`]) and the canonical
//! default constants substituted for unset primitive fields. It knows nothing
//! about schemas or builders; see the `zaha` crate for those.

mod error;
mod kind;
mod value;

pub use error::ValueTypeError;
pub use kind::{DEFAULT_BOOLEAN, DEFAULT_INT, DEFAULT_NUMBER, DEFAULT_STRING, TypeKind};
pub use value::{Callable, Fields, Value};
