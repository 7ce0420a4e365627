//! Shallow array serialization.

use crate::encode::{encode_pair, encode_primitive};
use crate::style::{Style, StyleOptions};
use crate::value::ParamValue;

/// Serialize a shallow array parameter.
///
/// Anything other than an array serializes to an empty string.
pub fn serialize_array(name: &str, value: &ParamValue, options: StyleOptions) -> String {
    let elems = match value {
        ParamValue::Array(elems) => elems,
        _ => return String::new(),
    };
    let StyleOptions { style, explode } = options;

    if !explode {
        let joined = elems
            .iter()
            .map(encode_primitive)
            .collect::<Vec<_>>()
            .join(style.array_joiner());

        return match style {
            Style::Simple => joined,
            Style::Label => format!(".{joined}"),
            Style::Matrix => format!(";{name}={joined}"),
            Style::Form | Style::SpaceDelimited | Style::PipeDelimited | Style::DeepObject => {
                format!("{name}={joined}")
            }
        };
    }

    let joiner = style.exploded_joiner();
    let joined = elems
        .iter()
        .map(|v| match style {
            Style::Simple | Style::Label => encode_primitive(v),
            _ => encode_pair(name, v),
        })
        .collect::<Vec<_>>()
        .join(joiner);

    if style.prefixes_exploded() {
        format!("{joiner}{joined}")
    } else {
        joined
    }
}
