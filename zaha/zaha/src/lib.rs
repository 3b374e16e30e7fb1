//! Schema-driven builder factories for nested test fixtures.
//!
//! A [`Schema`] maps field names to [`Descriptor`]s: literals, primitive
//! placeholders, nested schemas, one-element arrays, no-op functions, fixed
//! choices, or other builders. A [`Factory`] declared from a schema hands out
//! [`Builder`] instances; each instance takes a shallow copy of the schema, so
//! overrides stay local to it, and [`Builder::build`] resolves every field into
//! a plain [`Value`].
//!
//! ```
//! use zaha::{DEFAULT_STRING, Factory, Value, is, schema};
//!
//! let person = Factory::new(schema! {
//!     name: is::string(),
//!     age: is::int(),
//!     address: is::object(schema! { city: is::value("Baghdad") }),
//! });
//!
//! let fixture = person.instance().with("age", 72)?.build();
//! assert_eq!(fixture["name"], Value::string(DEFAULT_STRING));
//! assert_eq!(fixture["age"], Value::Int(72));
//! assert_eq!(fixture["address"]["city"], Value::string("Baghdad"));
//!
//! // Other instances keep the declared defaults.
//! assert_eq!(person.build()["age"], Value::Int(zaha::DEFAULT_INT));
//! # Ok::<(), zaha::FactoryError>(())
//! ```

mod macros;

mod builder;
mod descriptor;
mod error;
mod factory;
pub mod is;
pub mod naming;
mod schema;

pub use builder::Builder;
pub use descriptor::{Candidates, Descriptor};
pub use error::FactoryError;
pub use factory::{Factory, create_factory};
pub use schema::{Schema, format_schema};
pub use zaha_core as core;
pub use zaha_core::{
    Callable, DEFAULT_BOOLEAN, DEFAULT_INT, DEFAULT_NUMBER, DEFAULT_STRING, Fields, TypeKind,
    Value, ValueTypeError,
};
