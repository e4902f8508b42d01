//! Serde bridge into [`PhpValue`].
//!
//! [`ValueSerializer`] converts anything implementing `Serialize` into a
//! [`PhpValue`], which the crate-root helpers then render with a
//! [`crate::ValueGenerator`].
//!
//! ## Mapping
//!
//! - Sequences, tuples and tuple structs become list arrays
//! - Maps and structs become associative arrays, in field order
//! - `None` and unit become `null`; unit variants become their name
//! - Newtype, tuple and struct variants become `['Variant' => payload]`
//! - Integers beyond `i64` become [`Number::Big`]
//! - [`crate::Constant`] fields become [`PhpValue::Constant`]
//!
//! ```rust
//! use php_literal::{to_value, PhpValue};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! enum Shape {
//!     Circle { radius: u32 },
//! }
//!
//! let value = to_value(&Shape::Circle { radius: 2 }).unwrap();
//! let circle = value.as_array().unwrap().get("Circle").unwrap();
//! assert_eq!(circle.as_array().unwrap().get("radius"), Some(&PhpValue::from(2)));
//! ```

use crate::value::CONSTANT_TOKEN;
use crate::{ArrayKey, Error, Number, PhpArray, PhpValue, Result};
use serde::{ser, Serialize};

/// Serializer producing [`PhpValue`] trees.
pub struct ValueSerializer;

pub struct SerializeVec {
    array: PhpArray,
    variant: Option<&'static str>,
}

pub struct SerializeMap {
    array: PhpArray,
    current_key: Option<ArrayKey>,
    variant: Option<&'static str>,
}

impl ser::Serializer for ValueSerializer {
    type Ok = PhpValue;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVec;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeMap;

    fn serialize_bool(self, v: bool) -> Result<PhpValue> {
        Ok(PhpValue::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<PhpValue> {
        Ok(PhpValue::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<PhpValue> {
        Ok(PhpValue::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<PhpValue> {
        Ok(PhpValue::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<PhpValue> {
        Ok(PhpValue::from(v))
    }

    fn serialize_i128(self, v: i128) -> Result<PhpValue> {
        Ok(PhpValue::from(v))
    }

    fn serialize_u8(self, v: u8) -> Result<PhpValue> {
        Ok(PhpValue::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<PhpValue> {
        Ok(PhpValue::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<PhpValue> {
        Ok(PhpValue::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<PhpValue> {
        Ok(PhpValue::from(v))
    }

    fn serialize_u128(self, v: u128) -> Result<PhpValue> {
        Ok(PhpValue::from(v))
    }

    fn serialize_f32(self, v: f32) -> Result<PhpValue> {
        Ok(PhpValue::Number(Number::Float(v as f64)))
    }

    fn serialize_f64(self, v: f64) -> Result<PhpValue> {
        Ok(PhpValue::Number(Number::Float(v)))
    }

    fn serialize_char(self, v: char) -> Result<PhpValue> {
        Ok(PhpValue::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<PhpValue> {
        Ok(PhpValue::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<PhpValue> {
        Ok(PhpValue::Array(v.iter().map(|&b| PhpValue::from(b)).collect()))
    }

    fn serialize_none(self) -> Result<PhpValue> {
        Ok(PhpValue::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<PhpValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<PhpValue> {
        Ok(PhpValue::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<PhpValue> {
        Ok(PhpValue::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<PhpValue> {
        Ok(PhpValue::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, name: &'static str, value: &T) -> Result<PhpValue>
    where
        T: ?Sized + Serialize,
    {
        if name == CONSTANT_TOKEN {
            return match value.serialize(self)? {
                PhpValue::String(expr) => Ok(PhpValue::Constant(expr)),
                other => Err(Error::type_mismatch("string", other.type_name())),
            };
        }
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<PhpValue>
    where
        T: ?Sized + Serialize,
    {
        let mut array = PhpArray::new();
        array.insert(variant, to_php_value(value)?);
        Ok(PhpValue::Array(array))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len.unwrap_or(0), None))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, None))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, None))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, Some(variant)))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len.unwrap_or(0), None))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len, None))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len, Some(variant)))
    }
}

/// Wraps `payload` as `[variant => payload]` for externally tagged enums.
fn wrap_variant(variant: Option<&'static str>, payload: PhpArray) -> PhpValue {
    match variant {
        Some(name) => {
            let mut outer = PhpArray::with_capacity(1);
            outer.insert(name, PhpValue::Array(payload));
            PhpValue::Array(outer)
        }
        None => PhpValue::Array(payload),
    }
}

impl SerializeVec {
    fn new(capacity: usize, variant: Option<&'static str>) -> Self {
        SerializeVec {
            array: PhpArray::with_capacity(capacity),
            variant,
        }
    }

    fn push<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.array.push(to_php_value(value)?)?;
        Ok(())
    }

    fn finish(self) -> PhpValue {
        wrap_variant(self.variant, self.array)
    }
}

impl SerializeMap {
    fn new(capacity: usize, variant: Option<&'static str>) -> Self {
        SerializeMap {
            array: PhpArray::with_capacity(capacity),
            current_key: None,
            variant,
        }
    }

    fn field<T: ?Sized + Serialize>(&mut self, key: &'static str, value: &T) -> Result<()> {
        self.array.insert(key, to_php_value(value)?);
        Ok(())
    }

    fn finish(self) -> PhpValue {
        wrap_variant(self.variant, self.array)
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = PhpValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<PhpValue> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = PhpValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<PhpValue> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = PhpValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<PhpValue> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleVariant for SerializeVec {
    type Ok = PhpValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<PhpValue> {
        Ok(self.finish())
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = PhpValue;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.current_key = Some(to_array_key(to_php_value(key)?)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.array.insert(key, to_php_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<PhpValue> {
        Ok(self.finish())
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = PhpValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.field(key, value)
    }

    fn end(self) -> Result<PhpValue> {
        Ok(self.finish())
    }
}

impl ser::SerializeStructVariant for SerializeMap {
    type Ok = PhpValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.field(key, value)
    }

    fn end(self) -> Result<PhpValue> {
        Ok(self.finish())
    }
}

fn to_php_value<T: Serialize + ?Sized>(value: &T) -> Result<PhpValue> {
    value.serialize(ValueSerializer)
}

/// PHP accepts integer and string keys; bools are cast to `0`/`1`.
fn to_array_key(key: PhpValue) -> Result<ArrayKey> {
    match key {
        PhpValue::String(s) => Ok(ArrayKey::from(s)),
        PhpValue::Number(Number::Integer(i)) => Ok(ArrayKey::Int(i)),
        PhpValue::Bool(b) => Ok(ArrayKey::Int(i64::from(b))),
        other => Err(Error::invalid_key(&format!(
            "{} cannot be used as an array key",
            other.type_name()
        ))),
    }
}
