//! Insertion-ordered records of named scalar fields

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::scalar::XmlScalar;

/// An ordered mapping from field names to scalar values.
///
/// Field order is insertion order and determines child-element order in the
/// serialized output. Setting an existing field replaces its value without
/// moving it. Field names are used as element names verbatim; no validation
/// is performed, so an invalid name produces invalid markup.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct XmlItem {
    fields: Vec<(String, XmlScalar)>,
}

/// An ordered sequence of [`XmlItem`] records, rendered under a shared
/// parent/child tag pair. Order is significant: it determines document
/// order in the output.
pub type XmlItemList = Vec<XmlItem>;

impl XmlItem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`set`](Self::set).
    pub fn field(mut self, name: impl Into<String>, value: impl Into<XmlScalar>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a field, replacing any existing value in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<XmlScalar>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&XmlScalar> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &XmlScalar)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// Serialized as a plain map. Deserialization goes through MapAccess
// directly, so JSON key order is preserved no matter which map type the
// format's own value model uses.
impl Serialize for XmlItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for XmlItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ItemVisitor;

        impl<'de> Visitor<'de> for ItemVisitor {
            type Value = XmlItem;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of field names to scalar values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<XmlItem, A::Error> {
                let mut item = XmlItem::new();
                while let Some((name, value)) = access.next_entry::<String, XmlScalar>()? {
                    item.set(name, value);
                }
                Ok(item)
            }
        }

        deserializer.deserialize_map(ItemVisitor)
    }
}
