use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// A printable value attached to a log field.
///
/// `Dynamic` holds a [`Valuer`] that is evaluated every time a record is
/// emitted, which is how `ts` gets a fresh timestamp on each line even though
/// it lives in the logger's fixed context.
#[derive(Clone)]
pub enum Value {
    Null,
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    Str(String),
    Dynamic(Valuer),
}

impl Value {
    /// Evaluate dynamic values until a concrete one is reached.
    pub fn resolve(&self) -> Value {
        match self {
            Value::Dynamic(valuer) => valuer.evaluate().resolve(),
            other => other.clone(),
        }
    }

    /// Borrow the string payload, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::I64(n) => write!(f, "{}", n),
            Value::U64(n) => write!(f, "{}", n),
            Value::F64(n) => write!(f, "{}", n),
            Value::Str(s) => f.write_str(s),
            Value::Dynamic(valuer) => write!(f, "{}", valuer.evaluate()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::I64(n) => f.debug_tuple("I64").field(n).finish(),
            Value::U64(n) => f.debug_tuple("U64").field(n).finish(),
            Value::F64(n) => f.debug_tuple("F64").field(n).finish(),
            Value::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Value::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::I64(a), Value::I64(b)) => a == b,
            (Value::U64(a), Value::U64(b)) => a == b,
            (Value::F64(a), Value::F64(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Dynamic(a), Value::Dynamic(b)) => Arc::ptr_eq(&a.0, &b.0),
            _ => false,
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::I64(n) => serializer.serialize_i64(*n),
            Value::U64(n) => serializer.serialize_u64(*n),
            Value::F64(n) => serializer.serialize_f64(*n),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Dynamic(valuer) => valuer.evaluate().serialize(serializer),
        }
    }
}

macro_rules! impl_from_int {
    ($variant:ident as $target:ty: $($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::$variant(n as $target)
                }
            }
        )*
    };
}

impl_from_int!(I64 as i64: i8, i16, i32, i64, isize);
impl_from_int!(U64 as u64: u8, u16, u32, u64, usize);

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::F64(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::F64(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Str(c.to_string())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Str(s.clone())
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(s: Cow<'_, str>) -> Self {
        Value::Str(s.into_owned())
    }
}

impl From<Valuer> for Value {
    fn from(valuer: Valuer) -> Self {
        Value::Dynamic(valuer)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

/// A value computed at emission time rather than when the field is attached.
#[derive(Clone)]
pub struct Valuer(Arc<dyn Fn() -> Value + Send + Sync>);

impl Valuer {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        Valuer(Arc::new(f))
    }

    pub fn evaluate(&self) -> Value {
        (self.0)()
    }
}

impl fmt::Debug for Valuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Valuer(..)")
    }
}

/// One key/value pair of a log record.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub key: Cow<'static, str>,
    pub value: Value,
}

impl Field {
    pub fn new(key: impl Into<Cow<'static, str>>, value: impl Into<Value>) -> Self {
        Field {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Copy of this field with any dynamic value evaluated.
    pub fn resolve(&self) -> Field {
        Field {
            key: self.key.clone(),
            value: self.value.resolve(),
        }
    }
}

impl<K, V> From<(K, V)> for Field
where
    K: Into<Cow<'static, str>>,
    V: Into<Value>,
{
    fn from((key, value): (K, V)) -> Self {
        Field::new(key, value)
    }
}

/// Build a `Vec<Field>` from `key => value` pairs, keeping their order.
///
/// ```
/// use service_logger::fields;
///
/// let fields = fields!["user_id" => 42, "reason" => "invalid password"];
/// assert_eq!(fields.len(), 2);
/// assert_eq!(fields[0].key(), "user_id");
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        ::std::vec::Vec::<$crate::field::Field>::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        ::std::vec![$($crate::field::Field::new($key, $value)),+]
    };
}
