//! Property values attached to nodes and edges
//!
//! Properties are open string-keyed maps. The value side is a small sum type
//! so a single map can mix strings, numbers, booleans and nested structures.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A single property value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Array(Vec<PropertyValue>),
    Map(HashMap<String, PropertyValue>),
    Null,
}

impl PropertyValue {
    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }

    /// Get the string value if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the integer value if this is an integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            PropertyValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the float value if this is a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            PropertyValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get the boolean value if this is a boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            PropertyValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the element list if this is an array
    pub fn as_array(&self) -> Option<&[PropertyValue]> {
        match self {
            PropertyValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Get the nested map if this is a map
    pub fn as_map(&self) -> Option<&HashMap<String, PropertyValue>> {
        match self {
            PropertyValue::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::String(_) => "String",
            PropertyValue::Integer(_) => "Integer",
            PropertyValue::Float(_) => "Float",
            PropertyValue::Boolean(_) => "Boolean",
            PropertyValue::Array(_) => "Array",
            PropertyValue::Map(_) => "Map",
            PropertyValue::Null => "Null",
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::String(s) => write!(f, "\"{}\"", s),
            PropertyValue::Integer(i) => write!(f, "{}", i),
            PropertyValue::Float(x) => write!(f, "{}", x),
            PropertyValue::Boolean(b) => write!(f, "{}", b),
            PropertyValue::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            PropertyValue::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
            PropertyValue::Null => write!(f, "null"),
        }
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::String(s)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::String(s.to_string())
    }
}

impl From<i64> for PropertyValue {
    fn from(i: i64) -> Self {
        PropertyValue::Integer(i)
    }
}

impl From<i32> for PropertyValue {
    fn from(i: i32) -> Self {
        PropertyValue::Integer(i as i64)
    }
}

impl From<f64> for PropertyValue {
    fn from(f: f64) -> Self {
        PropertyValue::Float(f)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Boolean(b)
    }
}

impl From<Vec<PropertyValue>> for PropertyValue {
    fn from(items: Vec<PropertyValue>) -> Self {
        PropertyValue::Array(items)
    }
}

impl From<HashMap<String, PropertyValue>> for PropertyValue {
    fn from(map: HashMap<String, PropertyValue>) -> Self {
        PropertyValue::Map(map)
    }
}

/// Property map carried by every node and edge
///
/// Insertion order is not significant; the std hasher is fine here since
/// keys are short caller-supplied strings, not a hot integer path.
pub type PropertyMap = HashMap<String, PropertyValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(PropertyValue::from("x").type_name(), "String");
        assert_eq!(PropertyValue::from(1i64).type_name(), "Integer");
        assert_eq!(PropertyValue::from(0.5).type_name(), "Float");
        assert_eq!(PropertyValue::from(false).type_name(), "Boolean");
        assert_eq!(PropertyValue::Array(vec![]).type_name(), "Array");
        assert_eq!(PropertyValue::Map(HashMap::new()).type_name(), "Map");
        assert_eq!(PropertyValue::Null.type_name(), "Null");
    }

    #[test]
    fn test_accessors_reject_other_variants() {
        let v = PropertyValue::from(42i64);
        assert_eq!(v.as_integer(), Some(42));
        assert_eq!(v.as_str(), None);
        assert_eq!(v.as_float(), None);
        assert_eq!(v.as_boolean(), None);
        assert!(!v.is_null());
    }

    #[test]
    fn test_conversions() {
        let s: PropertyValue = "Idaho".into();
        assert_eq!(s.as_str(), Some("Idaho"));

        let i: PropertyValue = 30i32.into();
        assert_eq!(i.as_integer(), Some(30));

        let f: PropertyValue = 1.25.into();
        assert_eq!(f.as_float(), Some(1.25));

        let b: PropertyValue = true.into();
        assert_eq!(b.as_boolean(), Some(true));
    }

    #[test]
    fn test_nested_values() {
        let tags = PropertyValue::Array(vec!["a".into(), "b".into()]);
        assert_eq!(tags.as_array().unwrap().len(), 2);

        let mut inner = HashMap::new();
        inner.insert("lat".to_string(), PropertyValue::Float(43.6));
        inner.insert("lon".to_string(), PropertyValue::Float(-116.2));
        let coords = PropertyValue::Map(inner);
        assert!(coords.as_map().unwrap().contains_key("lat"));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", PropertyValue::from("Lucy")), "\"Lucy\"");
        assert_eq!(format!("{}", PropertyValue::from(7i64)), "7");
        assert_eq!(
            format!("{}", PropertyValue::Array(vec![1i64.into(), 2i64.into()])),
            "[1, 2]"
        );
        assert_eq!(format!("{}", PropertyValue::Null), "null");
    }

    #[test]
    fn test_property_map() {
        let props = PropertyMap::from([
            ("type".to_string(), "Person".into()),
            ("name".to_string(), "Lucy".into()),
        ]);
        assert_eq!(props.get("type").unwrap().as_str(), Some("Person"));
        assert_eq!(props.get("name").unwrap().as_str(), Some("Lucy"));
    }
}
