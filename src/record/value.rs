use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::record::ValueError;

/// A single statement argument or row cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Timestamp(DateTime<Utc>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Short name of the variant, used in conversion errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::UInt(_) => "uint",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Bytes(_) => "bytes",
            Value::Timestamp(_) => "timestamp",
        }
    }

    pub fn as_timestamp(&self) -> Option<&DateTime<Utc>> {
        match self {
            Value::Timestamp(ts) => Some(ts),
            _ => None,
        }
    }
}

/// Reads a field into a [`Value`].
pub trait ToValue {
    fn to_value(&self) -> Value;
}

/// Writes a scanned [`Value`] back into a field.
pub trait FromValue: Sized {
    fn from_value(value: Value) -> Result<Self, ValueError>;
}

impl ValueError {
    pub(crate) fn mismatch(expected: &'static str, found: &Value) -> Self {
        if found.is_null() {
            ValueError::NullNotAllowed { expected }
        } else {
            ValueError::Mismatch {
                expected,
                found: found.kind(),
            }
        }
    }

    fn out_of_range(expected: &'static str, value: impl ToString) -> Self {
        ValueError::OutOfRange {
            expected,
            value: value.to_string(),
        }
    }
}

macro_rules! implement_int {
    ($({$Type:ty, $Variant:ident, $Wide:ty}), *) => {
        $(
            impl ToValue for $Type {
                fn to_value(&self) -> Value {
                    Value::$Variant(<$Wide>::from(*self))
                }
            }

            impl FromValue for $Type {
                fn from_value(value: Value) -> Result<Self, ValueError> {
                    match value {
                        Value::Int(v) => <$Type>::try_from(v)
                            .map_err(|_| ValueError::out_of_range(stringify!($Type), v)),
                        Value::UInt(v) => <$Type>::try_from(v)
                            .map_err(|_| ValueError::out_of_range(stringify!($Type), v)),
                        other => Err(ValueError::mismatch(stringify!($Type), &other)),
                    }
                }
            }

            impl From<$Type> for Value {
                fn from(value: $Type) -> Self {
                    value.to_value()
                }
            }
        )*
    };
}

implement_int!(
    {i8, Int, i64},
    {i16, Int, i64},
    {i32, Int, i64},
    {i64, Int, i64},
    {u8, UInt, u64},
    {u16, UInt, u64},
    {u32, UInt, u64},
    {u64, UInt, u64}
);

impl ToValue for usize {
    fn to_value(&self) -> Value {
        Value::UInt(*self as u64)
    }
}

impl FromValue for usize {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        u64::from_value(value).and_then(|v| {
            usize::try_from(v).map_err(|_| ValueError::out_of_range("usize", v))
        })
    }
}

impl ToValue for isize {
    fn to_value(&self) -> Value {
        Value::Int(*self as i64)
    }
}

impl FromValue for isize {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        i64::from_value(value).and_then(|v| {
            isize::try_from(v).map_err(|_| ValueError::out_of_range("isize", v))
        })
    }
}

impl ToValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl FromValue for f64 {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Float(v) => Ok(v),
            Value::Int(v) => Ok(v as f64),
            Value::UInt(v) => Ok(v as f64),
            other => Err(ValueError::mismatch("f64", &other)),
        }
    }
}

impl FromValue for f32 {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Float(v) => Ok(v as f32),
            Value::Int(v) => Ok(v as f32),
            Value::UInt(v) => Ok(v as f32),
            other => Err(ValueError::mismatch("f32", &other)),
        }
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Bool(v) => Ok(v),
            // TINYINT(1) columns come back as integers
            Value::Int(v) => Ok(v != 0),
            Value::UInt(v) => Ok(v != 0),
            other => Err(ValueError::mismatch("bool", &other)),
        }
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::Text(self.to_owned())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Text(v) => Ok(v),
            Value::Bytes(v) => String::from_utf8(v).map_err(|_| ValueError::Mismatch {
                expected: "String",
                found: "non utf-8 bytes",
            }),
            other => Err(ValueError::mismatch("String", &other)),
        }
    }
}

impl ToValue for Vec<u8> {
    fn to_value(&self) -> Value {
        Value::Bytes(self.clone())
    }
}

impl FromValue for Vec<u8> {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Bytes(v) => Ok(v),
            Value::Text(v) => Ok(v.into_bytes()),
            other => Err(ValueError::mismatch("Vec<u8>", &other)),
        }
    }
}

impl ToValue for DateTime<Utc> {
    fn to_value(&self) -> Value {
        Value::Timestamp(*self)
    }
}

impl FromValue for DateTime<Utc> {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Timestamp(v) => Ok(v),
            other => Err(ValueError::mismatch("DateTime<Utc>", &other)),
        }
    }
}

impl ToValue for NaiveDateTime {
    fn to_value(&self) -> Value {
        Value::Timestamp(self.and_utc())
    }
}

impl FromValue for NaiveDateTime {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Timestamp(v) => Ok(v.naive_utc()),
            other => Err(ValueError::mismatch("NaiveDateTime", &other)),
        }
    }
}

impl ToValue for NaiveDate {
    fn to_value(&self) -> Value {
        Value::Timestamp(self.and_time(NaiveTime::MIN).and_utc())
    }
}

impl FromValue for NaiveDate {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Timestamp(v) => Ok(v.date_naive()),
            other => Err(ValueError::mismatch("NaiveDate", &other)),
        }
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Null => Ok(None),
            v => T::from_value(v).map(Some),
        }
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        Ok(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Timestamp(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
