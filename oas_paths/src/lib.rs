//! OpenAPI 3.x parameter serializer and URL path template resolver,
//! used by `oas_client` crate.
//!
//! Path templates carry the style of their parameters in the placeholder:
//!
//! | placeholder | style    | explode |
//! |-------------|----------|---------|
//! | `{id}`      | `simple` | no      |
//! | `{id*}`     | `simple` | yes     |
//! | `{.id}`     | `label`  | no      |
//! | `{;id*}`    | `matrix` | yes     |
//!
//! ```
//! use oas_paths::{resolve, ParamValue, PathParams};
//!
//! let mut params = PathParams::new();
//! params.insert("id".to_owned(), ParamValue::array([3i64, 4, 5]));
//!
//! assert_eq!(resolve("/users/{;id*}", Some(&params)), "/users/;id=3;id=4;id=5");
//! ```
//!
//! Only shallow values are supported: objects and arrays of plain values.

pub mod array;
pub mod encode;
pub mod error;
pub mod object;
pub mod path_template;
pub mod query;
pub mod resolver;
pub mod style;
pub mod value;
#[cfg(feature = "serde")]
mod value_serializer;

pub use array::serialize_array;
pub use encode::{encode_component, serialize_primitive};
pub use error::{Error, Result};
pub use object::serialize_object;
pub use path_template::{ParamToken, PathTemplate, Segment};
pub use query::{serialize_header, QuerySerializer};
pub use resolver::resolve;
pub use style::{PathStyle, Style, StyleOptions};
pub use value::{ParamValue, PathParams, Primitive};
#[cfg(feature = "serde")]
pub use value_serializer::{to_params, to_value};

/// Serialize structure into path template.
///
/// ## Returns
///
/// Percent encoded path with placeholders substituted for struct fields.
/// Placeholders without a matching field (or with a `None` one) are left as is.
#[cfg(feature = "serde")]
pub fn serialize<T: ?Sized + serde::Serialize>(template: &str, args: &T) -> Result<String> {
    let params = to_params(args)?;
    Ok(PathTemplate::new(template).resolve(Some(&params)))
}
