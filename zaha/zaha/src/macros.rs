//! Declarative shorthands for schemas and typed builders.

/// Build a [`Schema`](crate::Schema) in declaration order.
///
/// Keys are identifiers (camelCase is fine) or string literals; values are
/// anything convertible into a [`Descriptor`](crate::Descriptor).
///
/// ```
/// use zaha::{is, schema};
///
/// let schema = schema! {
///     userName: is::string(),
///     "display name": is::value("Zaha"),
/// };
/// assert_eq!(schema.names().collect::<Vec<_>>(), vec!["userName", "display name"]);
/// ```
#[macro_export]
macro_rules! schema {
    () => {
        $crate::Schema::new()
    };
    ($($field:tt : $descriptor:expr),+ $(,)?) => {
        $crate::Schema::new()$(.field($crate::__field_name!($field), $descriptor))+
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_name {
    ($name:ident) => {
        ::std::stringify!($name)
    };
    ($name:literal) => {
        $name
    };
}

/// Declare a typed builder with one named override per field.
///
/// Each type gets its own [`Factory`](crate::Factory), created once per
/// thread from the listed fields. Named overrides cannot fail. The type also
/// gets a chaining `with(field, value)` that checks the field like
/// [`Builder::with`](crate::Builder::with); the rest of [`Builder`](crate::Builder),
/// including the in-place `set`, is reachable through `Deref`.
///
/// ```
/// use zaha::{Value, builder, is};
///
/// builder! {
///     pub struct ArchitectBuilder {
///         name => with_name: is::string(),
///         firstBuilding => with_first_building: is::value("Vitra Fire Station"),
///     }
/// }
///
/// let architect = ArchitectBuilder::new().with_name("Zaha Hadid").build();
/// assert_eq!(architect["name"], Value::string("Zaha Hadid"));
/// assert_eq!(architect["firstBuilding"], Value::string("Vitra Fire Station"));
/// ```
#[macro_export]
macro_rules! builder {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($field:tt => $method:ident : $descriptor:expr),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        $vis struct $name($crate::Builder);

        #[allow(dead_code)]
        impl $name {
            /// The factory shared by every instance of this builder on the
            /// current thread.
            pub fn factory() -> $crate::Factory {
                ::std::thread_local! {
                    static FACTORY: $crate::Factory =
                        $crate::Factory::new($crate::schema! { $($field : $descriptor),* });
                }
                FACTORY.with(::std::clone::Clone::clone)
            }

            pub fn new() -> Self {
                Self(Self::factory().instance())
            }

            $(
                pub fn $method(self, value: impl ::std::convert::Into<$crate::Descriptor>) -> Self {
                    self.0.schema_mut().insert($crate::__field_name!($field), value);
                    self
                }
            )*

            /// Override a field by name and return the builder for chaining.
            pub fn with(
                self,
                field: &str,
                value: impl ::std::convert::Into<$crate::Descriptor>,
            ) -> ::std::result::Result<Self, $crate::FactoryError> {
                self.0.set(field, value)?;
                ::std::result::Result::Ok(self)
            }

            pub fn build(&self) -> $crate::Value {
                self.0.build()
            }

            pub fn into_inner(self) -> $crate::Builder {
                self.0
            }
        }

        impl ::std::default::Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl ::std::ops::Deref for $name {
            type Target = $crate::Builder;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl ::std::convert::From<$name> for $crate::Descriptor {
            fn from(builder: $name) -> Self {
                $crate::Descriptor::Builder(builder.0)
            }
        }
    };
}
