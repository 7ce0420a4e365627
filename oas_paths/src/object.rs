//! Shallow object serialization.

use crate::encode::{encode_pair, encode_primitive};
use crate::style::{Style, StyleOptions};
use crate::value::ParamValue;

/// Serialize a shallow object parameter.
///
/// Non-exploded forms join keys and values with commas. Keys are written
/// as is, only values are percent-encoded. Exploded forms write one
/// `key=value` pair per entry (`name[key]=value` for [`Style::DeepObject`]).
///
/// Anything other than a non-empty object serializes to an empty string.
pub fn serialize_object(name: &str, value: &ParamValue, options: StyleOptions) -> String {
    let map = match value {
        ParamValue::Object(map) if !map.is_empty() => map,
        _ => return String::new(),
    };
    let StyleOptions { style, explode } = options;

    if !explode && style != Style::DeepObject {
        let joined = map
            .iter()
            .flat_map(|(k, v)| [k.clone(), encode_primitive(v)])
            .collect::<Vec<_>>()
            .join(",");

        return match style {
            Style::Form => format!("{name}={joined}"),
            Style::Label => format!(".{joined}"),
            Style::Matrix => format!(";{name}={joined}"),
            Style::Simple | Style::SpaceDelimited | Style::PipeDelimited | Style::DeepObject => {
                joined
            }
        };
    }

    let joiner = style.exploded_joiner();
    let joined = map
        .iter()
        .map(|(k, v)| match style {
            Style::DeepObject => encode_pair(&format!("{name}[{k}]"), v),
            _ => encode_pair(k, v),
        })
        .collect::<Vec<_>>()
        .join(joiner);

    if style.prefixes_exploded() {
        format!("{joiner}{joined}")
    } else {
        joined
    }
}
