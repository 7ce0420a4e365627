use crate::error::{Error, Result};
use crate::value::{ParamValue, PathParams, Primitive};
use indexmap::IndexMap;
use serde::ser::{
    Impossible, SerializeMap, SerializeSeq, SerializeStruct, SerializeTuple, SerializeTupleStruct,
    Serializer,
};
use serde::Serialize;

/// Convert a value into a [`ParamValue`].
///
/// # Accepted serialized values
///
/// * Plain values: numbers, bools, chars, strings and unit enum variants.
/// * `None` and `()` (converted to [`ParamValue::Absent`]).
/// * [Sequences](https://serde.rs/data-model.html) and tuples of plain values.
/// * Maps and structs with plain values.
///
/// `None` members of sequences, maps and structs are skipped.
pub fn to_value<T: ?Sized + Serialize>(value: &T) -> Result<ParamValue> {
    value.serialize(ValueSerializer { nested: false })
}

/// Convert a map or a struct into path parameters, one parameter
/// per entry. Every entry is converted the way [`to_value`] does it.
pub fn to_params<T: ?Sized + Serialize>(value: &T) -> Result<PathParams> {
    value.serialize(ParamsSerializer)
}

/// Serializer of a single parameter value.
///
/// `nested` is set for elements of a container, which can only be plain.
#[derive(Debug, Clone, Copy)]
struct ValueSerializer {
    nested: bool,
}

impl ValueSerializer {
    fn primitive(self, value: impl Into<Primitive>) -> Result<ParamValue> {
        Ok(ParamValue::Primitive(value.into()))
    }

    fn assert_flat(self) -> Result<()> {
        if self.nested {
            Err(Error::DeepNesting)
        } else {
            Ok(())
        }
    }

    /// Serialize container element, `None` for absent ones.
    fn element<T: ?Sized + Serialize>(value: &T) -> Result<Option<Primitive>> {
        match value.serialize(ValueSerializer { nested: true })? {
            ParamValue::Absent => Ok(None),
            ParamValue::Primitive(v) => Ok(Some(v)),
            ParamValue::Array(_) | ParamValue::Object(_) => Err(Error::DeepNesting),
        }
    }

    fn key<T: ?Sized + Serialize>(key: &T) -> Result<String> {
        match key.serialize(ValueSerializer { nested: true }) {
            Ok(ParamValue::Primitive(v)) => Ok(v.to_string()),
            _ => Err(Error::KeyMustBeAString),
        }
    }
}

macro_rules! impl_primitive {
    ($(($trait_fn:ident, $prim_ty:ty)),*) => {
        $(fn $trait_fn(self, v: $prim_ty) -> Result<Self::Ok> {
            self.primitive(v)
        })*
    };
}

impl Serializer for ValueSerializer {
    type Ok = ParamValue;
    type Error = Error;

    type SerializeSeq = SeqSerializer;
    type SerializeTuple = SeqSerializer;
    type SerializeTupleStruct = SeqSerializer;
    type SerializeMap = ObjectSerializer;
    type SerializeStruct = ObjectSerializer;
    type SerializeTupleVariant = Impossible<Self::Ok, Self::Error>;
    type SerializeStructVariant = Impossible<Self::Ok, Self::Error>;

    impl_primitive!(
        (serialize_bool, bool),
        (serialize_i8, i8),
        (serialize_i16, i16),
        (serialize_i32, i32),
        (serialize_i64, i64),
        (serialize_u8, u8),
        (serialize_u16, u16),
        (serialize_u32, u32),
        (serialize_u64, u64),
        (serialize_f32, f32),
        (serialize_f64, f64),
        (serialize_char, char),
        (serialize_str, &str)
    );

    fn serialize_bytes(self, _v: &[u8]) -> Result<Self::Ok> {
        Err(Error::TypeNotSupported("&[u8]"))
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        Ok(ParamValue::Absent)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        Ok(ParamValue::Absent)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok> {
        Ok(ParamValue::Absent)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok> {
        self.primitive(variant)
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::TypeNotSupported("newtype variant"))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq> {
        self.assert_flat()?;
        Ok(SeqSerializer {
            elems: Vec::with_capacity(len.unwrap_or_default()),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::TypeNotSupported("tuple variant"))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap> {
        self.assert_flat()?;
        Ok(ObjectSerializer {
            entries: IndexMap::with_capacity(len.unwrap_or_default()),
            next_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<Self::SerializeStruct> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::TypeNotSupported("struct variant"))
    }
}

#[doc(hidden)]
pub struct SeqSerializer {
    elems: Vec<Primitive>,
}

impl SerializeSeq for SeqSerializer {
    type Ok = ParamValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        if let Some(elem) = ValueSerializer::element(value)? {
            self.elems.push(elem);
        }
        Ok(())
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(ParamValue::Array(self.elems))
    }
}

impl SerializeTuple for SeqSerializer {
    type Ok = ParamValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Self::Ok> {
        SerializeSeq::end(self)
    }
}

impl SerializeTupleStruct for SeqSerializer {
    type Ok = ParamValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Self::Ok> {
        SerializeSeq::end(self)
    }
}

#[doc(hidden)]
pub struct ObjectSerializer {
    entries: IndexMap<String, Primitive>,
    next_key: Option<String>,
}

impl SerializeMap for ObjectSerializer {
    type Ok = ParamValue;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.next_key = Some(ValueSerializer::key(key)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .next_key
            .take()
            .ok_or_else(|| Error::Custom("map value serialized before its key".to_owned()))?;

        if let Some(value) = ValueSerializer::element(value)? {
            self.entries.insert(key, value);
        }
        Ok(())
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(ParamValue::Object(self.entries))
    }
}

impl SerializeStruct for ObjectSerializer {
    type Ok = ParamValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        if let Some(value) = ValueSerializer::element(value)? {
            self.entries.insert(key.to_owned(), value);
        }
        Ok(())
    }

    fn end(self) -> Result<Self::Ok> {
        SerializeMap::end(self)
    }
}

/// Serializer of the top level parameter map.
struct ParamsSerializer;

macro_rules! reject_plain {
    ($(($trait_fn:ident, $prim_ty:ty)),*) => {
        $(fn $trait_fn(self, _v: $prim_ty) -> Result<Self::Ok> {
            Err(Error::TypeNotSupported(concat!(stringify!($prim_ty), " as parameter map")))
        })*
    };
}

impl Serializer for ParamsSerializer {
    type Ok = PathParams;
    type Error = Error;

    type SerializeSeq = Impossible<Self::Ok, Self::Error>;
    type SerializeTuple = Impossible<Self::Ok, Self::Error>;
    type SerializeTupleStruct = Impossible<Self::Ok, Self::Error>;
    type SerializeMap = ParamsMapSerializer;
    type SerializeStruct = ParamsMapSerializer;
    type SerializeTupleVariant = Impossible<Self::Ok, Self::Error>;
    type SerializeStructVariant = Impossible<Self::Ok, Self::Error>;

    reject_plain!(
        (serialize_bool, bool),
        (serialize_i8, i8),
        (serialize_i16, i16),
        (serialize_i32, i32),
        (serialize_i64, i64),
        (serialize_u8, u8),
        (serialize_u16, u16),
        (serialize_u32, u32),
        (serialize_u64, u64),
        (serialize_f32, f32),
        (serialize_f64, f64),
        (serialize_char, char),
        (serialize_str, &str),
        (serialize_bytes, &[u8])
    );

    fn serialize_none(self) -> Result<Self::Ok> {
        Ok(PathParams::new())
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        Ok(PathParams::new())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok> {
        Ok(PathParams::new())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<Self::Ok> {
        Err(Error::TypeNotSupported("unit variant as parameter map"))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::TypeNotSupported("newtype variant"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(Error::TypeNotSupported("sequence as parameter map"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(Error::TypeNotSupported("tuple as parameter map"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(Error::TypeNotSupported("tuple struct as parameter map"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::TypeNotSupported("tuple variant"))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(ParamsMapSerializer {
            params: PathParams::with_capacity(len.unwrap_or_default()),
            next_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<Self::SerializeStruct> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::TypeNotSupported("struct variant"))
    }
}

#[doc(hidden)]
pub struct ParamsMapSerializer {
    params: PathParams,
    next_key: Option<String>,
}

impl SerializeMap for ParamsMapSerializer {
    type Ok = PathParams;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.next_key = Some(ValueSerializer::key(key)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .next_key
            .take()
            .ok_or_else(|| Error::Custom("map value serialized before its key".to_owned()))?;

        self.params.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(self.params)
    }
}

impl SerializeStruct for ParamsMapSerializer {
    type Ok = PathParams;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.params.insert(key.to_owned(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[derive(Debug, Clone, Serialize)]
    struct User {
        role: &'static str,
        #[serde(rename = "firstName")]
        first_name: &'static str,
    }

    #[derive(Debug, Clone, Copy, Serialize)]
    #[serde(rename_all = "lowercase")]
    enum Format {
        Json,
        Xml,
    }

    #[derive(Debug, Clone, Serialize)]
    struct Params {
        id: Vec<u32>,
        user: User,
        format: Format,
        page: Option<u32>,
    }

    #[derive(Debug, Clone, Serialize)]
    struct SingleElem<T>(T);

    #[derive(Debug, Clone, Serialize)]
    enum Tagged {
        Value(u32),
    }

    #[test]
    fn plain_values() {
        assert_eq!(to_value(&true), Ok(true.into()));
        assert_eq!(to_value(&5u8), Ok(5u8.into()));
        assert_eq!(to_value(&-5i32), Ok((-5i32).into()));
        assert_eq!(to_value(&1.5f64), Ok(1.5f64.into()));
        assert_eq!(to_value(&0.1f32), Ok(0.1f64.into()));
        assert_eq!(to_value(&'a'), Ok('a'.into()));
        assert_eq!(to_value("abc"), Ok("abc".into()));
        assert_eq!(to_value(&Format::Xml), Ok("xml".into()));
        assert_eq!(to_value(&SingleElem(7u64)), Ok(7u64.into()));
    }

    #[test]
    fn absent_values() {
        assert_eq!(to_value(&None::<u32>), Ok(ParamValue::Absent));
        assert_eq!(to_value(&()), Ok(ParamValue::Absent));
        assert_eq!(to_value(&Some(3u32)), Ok(3u32.into()));
    }

    #[test]
    fn arrays() {
        assert_eq!(
            to_value(&vec![3u32, 4, 5]),
            Ok(ParamValue::array([3u32, 4, 5]))
        );
        assert_eq!(
            to_value(&("a", 1u8, false)),
            Ok(ParamValue::Array(vec!["a".into(), 1u8.into(), false.into()]))
        );
        assert_eq!(
            to_value(&vec![Some(1u8), None, Some(2)]),
            Ok(ParamValue::array([1u8, 2]))
        );
    }

    #[test]
    fn objects() {
        let user = User {
            role: "admin",
            first_name: "Alex",
        };
        assert_eq!(
            to_value(&user),
            Ok(ParamValue::object([("role", "admin"), ("firstName", "Alex")]))
        );

        let map = BTreeMap::from([(1u8, "one"), (2u8, "two")]);
        assert_eq!(
            to_value(&map),
            Ok(ParamValue::object([("1", "one"), ("2", "two")]))
        );
    }

    #[test]
    fn deep_nesting() {
        assert_eq!(to_value(&vec![vec![1u8]]), Err(Error::DeepNesting));
        assert_eq!(
            to_value(&BTreeMap::from([("a", vec![1u8])])),
            Err(Error::DeepNesting)
        );
    }

    #[test]
    fn unsupported() {
        assert_eq!(
            to_value(&Tagged::Value(1)),
            Err(Error::TypeNotSupported("newtype variant"))
        );
        assert_eq!(
            to_value(&BTreeMap::from([((1u8, 2u8), "x")])),
            Err(Error::KeyMustBeAString)
        );
    }

    #[test]
    fn params_from_struct() {
        let params = to_params(&Params {
            id: vec![3, 4, 5],
            user: User {
                role: "admin",
                first_name: "Alex",
            },
            format: Format::Json,
            page: None,
        })
        .unwrap();

        assert_eq!(
            params.keys().collect::<Vec<_>>(),
            ["id", "user", "format", "page"]
        );
        assert_eq!(params["id"], ParamValue::array([3u32, 4, 5]));
        assert_eq!(
            params["user"],
            ParamValue::object([("role", "admin"), ("firstName", "Alex")])
        );
        assert_eq!(params["format"], "json".into());
        assert_eq!(params["page"], ParamValue::Absent);
    }

    #[test]
    fn params_from_map() {
        let params = to_params(&BTreeMap::from([("a", 1u8), ("b", 2u8)])).unwrap();
        assert_eq!(params["a"], 1u8.into());
        assert_eq!(params["b"], 2u8.into());
    }

    #[test]
    fn params_must_be_a_map() {
        assert!(matches!(to_params(&1u8), Err(Error::TypeNotSupported(_))));
        assert!(matches!(
            to_params(&vec![1u8]),
            Err(Error::TypeNotSupported(_))
        ));
        assert_eq!(to_params(&None::<User>), Ok(PathParams::new()));
    }
}
