use indexmap::IndexMap;

use crate::db::SKIP;

pub type Integer = i64;
pub type Float = f64;
pub type Text = String;
pub type Mapping = IndexMap<String, Value>;

/// An argument bound to a placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(Integer),
    Float(Float),
    Text(Text),
    Boolean(bool),
    Null,
    List(Vec<Value>),
    Mapping(Mapping),
    /// Omit the slot, and the conditional block around it if there is one.
    Skip,
}

impl Value {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Boolean(_) => "boolean",
            Self::Null => "null",
            Self::List(_) => "list",
            Self::Mapping(_) => "mapping",
            Self::Skip => "skip",
        }
    }

    /// `true` for [`Value::Skip`] and for text equal to the reserved sentinel string.
    pub fn is_skip(&self) -> bool {
        match self {
            Self::Skip => true,
            Self::Text(text) => text == SKIP,
            _ => false,
        }
    }

    pub fn from_json(value: serde_json::Value) -> Self {
        value.into()
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Integer(value as Integer)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32);

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        match Integer::try_from(value) {
            Ok(value) => Self::Integer(value),
            Err(_) => Self::Float(value as Float),
        }
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(value as Float)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Value {
    fn from(values: &[T]) -> Self {
        Self::List(values.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(values: [T; N]) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, T: Into<Value>> From<IndexMap<K, T>> for Value {
    fn from(entries: IndexMap<K, T>) -> Self {
        Self::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, T: Into<Value>> FromIterator<(K, T)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Self::Mapping(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Integer(i),
                None => Self::Float(n.as_f64().unwrap_or(Float::NAN)),
            },
            serde_json::Value::String(s) => Self::Text(s),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(entries) => Self::Mapping(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<chrono::NaiveDate> for Value {
    fn from(value: chrono::NaiveDate) -> Self {
        Self::Text(value.format("%Y-%m-%d").to_string())
    }
}

impl From<chrono::NaiveDateTime> for Value {
    fn from(value: chrono::NaiveDateTime) -> Self {
        Self::Text(value.format("%Y-%m-%d %H:%M:%S").to_string())
    }
}

impl<Tz: chrono::TimeZone> From<chrono::DateTime<Tz>> for Value
where
    Tz::Offset: std::fmt::Display,
{
    fn from(value: chrono::DateTime<Tz>) -> Self {
        Self::Text(value.to_rfc3339())
    }
}
