//! Scalar values renderable as XML element text

use std::fmt;

use serde::{Deserialize, Serialize};

/// A primitive value that can appear as the text content of an element.
///
/// `Display` gives the literal text form: strings as-is, numbers in plain
/// decimal notation, booleans as `true`/`false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum XmlScalar {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for XmlScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XmlScalar::Bool(b) => write!(f, "{}", b),
            XmlScalar::Integer(i) => write!(f, "{}", i),
            XmlScalar::Float(v) => write!(f, "{}", v),
            XmlScalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for XmlScalar {
    fn from(s: &str) -> Self {
        XmlScalar::Text(s.to_string())
    }
}

impl From<String> for XmlScalar {
    fn from(s: String) -> Self {
        XmlScalar::Text(s)
    }
}

impl From<i64> for XmlScalar {
    fn from(i: i64) -> Self {
        XmlScalar::Integer(i)
    }
}

impl From<i32> for XmlScalar {
    fn from(i: i32) -> Self {
        XmlScalar::Integer(i64::from(i))
    }
}

impl From<u32> for XmlScalar {
    fn from(i: u32) -> Self {
        XmlScalar::Integer(i64::from(i))
    }
}

impl From<f64> for XmlScalar {
    fn from(v: f64) -> Self {
        XmlScalar::Float(v)
    }
}

impl From<bool> for XmlScalar {
    fn from(b: bool) -> Self {
        XmlScalar::Bool(b)
    }
}
