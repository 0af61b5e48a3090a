//! Plain-structure interop and serialization.
//!
//! "Plain" is `serde_json::Value`: the neutral nested form other code
//! hands us and expects back. Construction deep-wraps plain arrays and
//! objects into child containers; [`Container::to_plain`] is the exact
//! inverse walk. The JSON text surface rides on top of that, while the
//! binary wire form serializes the entries as an ordered `(key, value)`
//! pair sequence so enumeration order survives independent of any map
//! semantics.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use super::errors::ContainerError;
use super::key::Key;
use super::value::Value;
use super::Container;

impl Container {
    /// Builds a container from a plain nested structure.
    ///
    /// Objects and arrays are accepted and recursively wrapped; anything
    /// else (a scalar or string where a collection was required) fails with
    /// [`ContainerError::InvalidInput`].
    ///
    /// ```
    /// use keywalk::Container;
    /// use serde_json::json;
    ///
    /// let c = Container::from_plain(&json!({"one": 1, "two": [2, 3]}))?;
    /// assert_eq!(c.len(), 2);
    /// assert!(c.get("two").and_then(|v| v.as_container()).is_some());
    ///
    /// assert!(Container::from_plain(&json!("just a string")).is_err());
    /// # Ok::<(), keywalk::Error>(())
    /// ```
    pub fn from_plain(plain: &serde_json::Value) -> crate::Result<Self> {
        match Value::from(plain.clone()) {
            Value::Container(container) => Ok(container),
            other => Err(ContainerError::InvalidInput {
                reason: format!("expected an array-like value, found {}", other.type_name()),
            }
            .into()),
        }
    }

    /// Exports to a plain nested structure, the exact inverse of
    /// construction-time wrapping.
    ///
    /// The shape follows the keys: a JSON array when the keys are exactly
    /// the integers `0..n-1` in order, a JSON object otherwise (member
    /// order is enumeration order).
    pub fn to_plain(&self) -> serde_json::Value {
        if self.has_sequential_keys() {
            serde_json::Value::Array(self.iter().map(|(_, value)| value_to_plain(value)).collect())
        } else {
            let mut map = serde_json::Map::with_capacity(self.len());
            for (key, value) in self.iter() {
                map.insert(key.to_string(), value_to_plain(value));
            }
            serde_json::Value::Object(map)
        }
    }

    fn has_sequential_keys(&self) -> bool {
        self.positions
            .iter()
            .enumerate()
            .all(|(i, key)| key.as_index() == Some(i as u64))
    }

    /// Encodes the container as JSON text (the plain-structure shape).
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(&self.to_plain())?)
    }

    /// Encodes the container as pretty-printed JSON text.
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_plain())?)
    }

    /// Parses JSON text into a container; the top-level value must be an
    /// object or array.
    pub fn from_json(text: &str) -> crate::Result<Self> {
        let plain: serde_json::Value = serde_json::from_str(text)?;
        Self::from_plain(&plain)
    }

    /// Encodes the container for the wire: an ordered `(key, value)` pair
    /// sequence, so a decode rebuilds the same enumeration order.
    pub fn to_bytes(&self) -> crate::Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| {
            ContainerError::SerializationFailed {
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Decodes wire bytes produced by [`to_bytes`](Self::to_bytes). The
    /// cursor starts at the first element.
    pub fn from_bytes(bytes: &[u8]) -> crate::Result<Self> {
        let container: Container = serde_json::from_slice(bytes).map_err(|e| {
            crate::Error::from(ContainerError::DeserializationFailed {
                reason: e.to_string(),
            })
        })?;
        tracing::trace!(entries = container.len(), "decoded container from wire bytes");
        Ok(container)
    }
}

fn value_to_plain(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => (*b).into(),
        Value::Int(n) => (*n).into(),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map_or(serde_json::Value::Null, serde_json::Value::Number),
        Value::Text(s) => s.clone().into(),
        Value::Container(c) => c.to_plain(),
    }
}

/// Deep-wrapping conversion from plain values: arrays and objects become
/// child containers, recursively; scalars become leaf values.
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map_or(Value::Null, Value::Float),
            },
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => Value::Container(Container::from_values(items)),
            serde_json::Value::Object(members) => {
                Value::Container(Container::from_entries(members))
            }
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(value: &serde_json::Value) -> Self {
        value.clone().into()
    }
}

impl TryFrom<serde_json::Value> for Container {
    type Error = crate::Error;

    fn try_from(value: serde_json::Value) -> crate::Result<Self> {
        Self::from_plain(&value)
    }
}

/// The wire form: a sequence of `(key, value)` pairs in enumeration order.
/// This deliberately differs from [`Container::to_json`], which produces
/// the plain shape for human-facing output and interop.
impl Serialize for Container {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for entry in self.iter() {
            seq.serialize_element(&entry)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Container {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<(Key, Value)>::deserialize(deserializer)?;
        Ok(Container::from_entries(entries))
    }
}
