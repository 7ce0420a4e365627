//! Query string and header serialization, built on the same encoders as
//! path parameters.

use crate::array::serialize_array;
use crate::encode::{encode_pair, encode_primitive};
use crate::object::serialize_object;
use crate::style::{Style, StyleOptions};
use crate::value::{ParamValue, PathParams};

/// Serializer of query parameters.
///
/// Defaults to `form` exploded arrays (`id=3&id=4`) and `deepObject`
/// exploded objects (`id[role]=admin`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct QuerySerializer {
    pub array: StyleOptions,
    pub object: StyleOptions,
}

impl Default for QuerySerializer {
    fn default() -> Self {
        Self {
            array: StyleOptions::new(Style::Form, true),
            object: StyleOptions::new(Style::DeepObject, true),
        }
    }
}

impl QuerySerializer {
    pub fn new(array: StyleOptions, object: StyleOptions) -> Self {
        Self { array, object }
    }

    /// Serialize parameters into a query string (without leading `?`).
    ///
    /// Absent values and empty fragments are skipped.
    pub fn serialize(&self, params: &PathParams) -> String {
        params
            .iter()
            .filter_map(|(name, value)| {
                let fragment = match value {
                    ParamValue::Absent => return None,
                    ParamValue::Primitive(v) => encode_pair(name, v),
                    ParamValue::Array(_) => serialize_array(name, value, self.array),
                    ParamValue::Object(_) => serialize_object(name, value, self.object),
                };

                (!fragment.is_empty()).then_some(fragment)
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Serialize a header value (`simple` style, no name).
pub fn serialize_header(value: &ParamValue, explode: bool) -> String {
    let options = StyleOptions::new(Style::Simple, explode);

    match value {
        ParamValue::Absent => String::new(),
        ParamValue::Primitive(v) => encode_primitive(v),
        ParamValue::Array(_) => serialize_array("", value, options),
        ParamValue::Object(_) => serialize_object("", value, options),
    }
}
