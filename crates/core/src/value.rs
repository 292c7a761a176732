//! Attribute values stored in record tables
//!
//! The value model mirrors the attribute types of a managed key-value table:
//! - Null, Bool, Number, String, List, Map
//!
//! Different variants are never equal: `Number(1) != String("1")`.

use crate::schema::AttributeType;
use std::collections::BTreeMap;

/// A record's attributes keyed by attribute name
pub type Item = BTreeMap<String, AttributeValue>;

/// A single attribute value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Number(i64),
    /// UTF-8 string
    String(String),
    /// Ordered list of values
    List(Vec<AttributeValue>),
    /// Nested attribute map
    Map(BTreeMap<String, AttributeValue>),
}

impl AttributeValue {
    /// Borrow the string payload, if this is a `String`
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Number payload, if this is a `Number`
    pub fn as_number(&self) -> Option<i64> {
        match self {
            AttributeValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Whether this is `Null`
    pub fn is_null(&self) -> bool {
        matches!(self, AttributeValue::Null)
    }

    /// Schema type of this value; `None` for `Null`, which fits any attribute
    pub fn attribute_type(&self) -> Option<AttributeType> {
        match self {
            AttributeValue::Null => None,
            AttributeValue::Bool(_) => Some(AttributeType::Bool),
            AttributeValue::Number(_) => Some(AttributeType::N),
            AttributeValue::String(_) => Some(AttributeType::S),
            AttributeValue::List(_) => Some(AttributeType::L),
            AttributeValue::Map(_) => Some(AttributeType::M),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::String(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::String(s)
    }
}

impl From<i64> for AttributeValue {
    fn from(n: i64) -> Self {
        AttributeValue::Number(n)
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        AttributeValue::Bool(b)
    }
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AttributeValue::Null, Into::into)
    }
}
