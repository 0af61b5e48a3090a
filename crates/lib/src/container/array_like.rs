//! The array-like capability.
//!
//! "Is this value a collection" is an interface-satisfaction check, not a
//! runtime type sniff: anything that can enumerate key/value pairs and copy
//! itself to a plain structure implements [`ArrayLike`] and can be fed to
//! [`Container::from_array_like`]. The container implements it itself
//! (enabling copy-construction), and adapters below cover the common plain
//! Rust collections.

use std::collections::BTreeMap;

use super::key::Key;
use super::value::Value;
use super::Container;

/// Capability of enumerating key/value pairs and exporting a plain copy.
pub trait ArrayLike {
    /// The entries in enumeration order.
    fn entries(&self) -> Vec<(Key, Value)>;

    /// Copy to a plain nested structure.
    ///
    /// The default wraps the entries in a container and exports that, which
    /// is correct for any implementor; the container overrides it with a
    /// direct walk.
    fn to_plain_value(&self) -> serde_json::Value {
        Container::from_entries(self.entries()).to_plain()
    }
}

impl ArrayLike for Container {
    fn entries(&self) -> Vec<(Key, Value)> {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    fn to_plain_value(&self) -> serde_json::Value {
        self.to_plain()
    }
}

impl<V: Clone + Into<Value>> ArrayLike for [V] {
    fn entries(&self) -> Vec<(Key, Value)> {
        self.iter()
            .enumerate()
            .map(|(i, value)| (Key::Index(i as u64), value.clone().into()))
            .collect()
    }
}

impl<V: Clone + Into<Value>> ArrayLike for Vec<V> {
    fn entries(&self) -> Vec<(Key, Value)> {
        self.as_slice().entries()
    }
}

impl<V: Clone + Into<Value>> ArrayLike for BTreeMap<String, V> {
    fn entries(&self) -> Vec<(Key, Value)> {
        self.iter()
            .map(|(key, value)| (Key::from_name(key.clone()), value.clone().into()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_construction_from_container() {
        let mut source = Container::from_entries([("a", 1), ("b", 2)]);
        source.next();

        let copy = Container::from_array_like(&source);
        assert_eq!(copy, source);
        assert_eq!(copy.pos(), Some(0), "copies start rewound");
    }

    #[test]
    fn test_slice_adapter_uses_integer_keys() {
        let values = vec!["x", "y"];
        let c = Container::from_array_like(&values);
        assert_eq!(c.get(1u64).and_then(|v| v.as_text()), Some("y"));
    }

    #[test]
    fn test_btree_map_adapter_normalizes_keys() {
        let mut source = BTreeMap::new();
        source.insert("7".to_string(), 1);
        source.insert("name".to_string(), 2);

        let c = Container::from_array_like(&source);
        assert!(c.contains_key(7u64));
        assert!(c.contains_key("name"));
    }

    #[test]
    fn test_default_to_plain_value() {
        let values = vec![1, 2];
        assert_eq!(values.to_plain_value(), serde_json::json!([1, 2]));
    }
}
