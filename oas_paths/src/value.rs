//! Runtime parameter values.
//!
//! Containers only ever hold [`Primitive`]s, so nested arrays and objects
//! can't be expressed. Deeper structures need a custom serializer.

use indexmap::IndexMap;
use std::fmt::Display;

/// Flat map of parameter names to their values, in insertion order.
pub type PathParams = IndexMap<String, ParamValue>;

/// A scalar parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

impl Display for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(v) => f.write_str(v),
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
            Self::Float(v) => fmt_float(*v, f),
            Self::Bool(v) => write!(f, "{v}"),
        }
    }
}

/// Number-to-text in the spelling URLs conventionally carry: `NaN`,
/// `Infinity`, integral values without a fraction, and exponent notation
/// (`1e+21`, `1e-7`) outside `1e-6..1e21`.
fn fmt_float(v: f64, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    if v.is_nan() {
        return f.write_str("NaN");
    }
    if v.is_infinite() {
        return f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if v == 0.0 {
        // -0 too
        return f.write_str("0");
    }

    let abs = v.abs();
    if !(1e-6..1e21).contains(&abs) {
        let exp = format!("{v:e}");
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                write!(f, "{mantissa}e+{power}")
            }
            _ => f.write_str(&exp),
        };
    }

    write!(f, "{v}")
}

/// A value bound to a parameter name.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ParamValue {
    /// No value. Tokens bound to it are left unresolved.
    #[default]
    Absent,
    Primitive(Primitive),
    Array(Vec<Primitive>),
    /// Shallow object, keys in insertion order.
    Object(IndexMap<String, Primitive>),
}

impl ParamValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Human readable kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Primitive(_) => "primitive",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// Build an object value from key/value pairs, keeping their order.
    pub fn object<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Primitive>,
    {
        Self::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build an array value from its elements.
    pub fn array<V: Into<Primitive>>(elems: impl IntoIterator<Item = V>) -> Self {
        Self::Array(elems.into_iter().map(Into::into).collect())
    }
}

macro_rules! impl_from_primitive {
    ($variant:ident: $($ty:ty),*) => {
        $(
            impl From<$ty> for Primitive {
                fn from(value: $ty) -> Self {
                    Self::$variant(value.into())
                }
            }

            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    Self::Primitive(value.into())
                }
            }
        )*
    };
}

impl_from_primitive!(Str: String, &str, char);
impl_from_primitive!(Int: i8, i16, i32, i64);
impl_from_primitive!(UInt: u8, u16, u32, u64);
impl_from_primitive!(Float: f64);

// Widening keeps binary noise (`0.1f32` is `0.10000000149011612` as f64),
// so go through the f32's own shortest text form.
impl From<f32> for Primitive {
    fn from(value: f32) -> Self {
        Self::Float(value.to_string().parse().unwrap_or(f64::from(value)))
    }
}

impl From<f32> for ParamValue {
    fn from(value: f32) -> Self {
        Self::Primitive(value.into())
    }
}
impl_from_primitive!(Bool: bool);

impl From<Primitive> for ParamValue {
    fn from(value: Primitive) -> Self {
        Self::Primitive(value)
    }
}

impl<T: Into<Primitive>> From<Vec<T>> for ParamValue {
    fn from(value: Vec<T>) -> Self {
        Self::array(value)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}
