//! Percent encoding and the primitive encoder.

use crate::error::{Error, Result};
use crate::value::{ParamValue, Primitive};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left literal by URI component encoding.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a string as a URI component.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Percent-encode the textual form of a scalar.
pub(crate) fn encode_primitive(value: &Primitive) -> String {
    match value {
        Primitive::Str(v) => encode_component(v),
        other => encode_component(&other.to_string()),
    }
}

/// `name=<encoded value>` for a scalar.
pub(crate) fn encode_pair(name: &str, value: &Primitive) -> String {
    format!("{name}={}", encode_primitive(value))
}

/// Serialize a scalar parameter as `name=<encoded value>`.
///
/// Absent values produce an empty string.
///
/// # Errors
///
/// [`Error::NotPrimitive`] if `value` is an array or an object.
pub fn serialize_primitive(name: &str, value: &ParamValue) -> Result<String> {
    match value {
        ParamValue::Absent => Ok(String::new()),
        ParamValue::Primitive(v) => Ok(encode_pair(name, v)),
        composite => Err(Error::NotPrimitive {
            name: name.to_owned(),
            kind: composite.kind(),
        }),
    }
}
