//! Entry keys for containers.
//!
//! A [`Key`] is either a non-negative integer index or a string name. Keys
//! are unique within a container, and a string that is the canonical decimal
//! rendering of an integer ("0", "7", but not "07" or "+7") denotes the same
//! key as that integer. Normalization to the integer form happens at every
//! boundary where string keys enter the container, so `set("7", ..)` and
//! `set(7, ..)` address the same entry.

use std::fmt;

/// A container entry key: a non-negative integer index or a string name.
///
/// The derived ordering is the container's natural key ordering: integer
/// keys compare numerically and sort before string keys, string keys compare
/// lexically.
///
/// # Examples
///
/// ```
/// use keywalk::Key;
///
/// assert_eq!(Key::from("7"), Key::Index(7));
/// assert_eq!(Key::from("0a"), Key::Name("0a".to_string()));
/// assert!(Key::from(10u64) < Key::from("zz"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum Key {
    /// Non-negative integer key
    Index(u64),
    /// String key
    Name(String),
}

impl Key {
    /// Builds a key from a string, normalizing canonical decimal strings to
    /// their integer form.
    ///
    /// A string is canonical when it is non-empty, all ASCII digits, and has
    /// no leading zero (except `"0"` itself). Anything else stays a name.
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        if Self::is_canonical_index(&name)
            && let Ok(n) = name.parse::<u64>()
        {
            return Key::Index(n);
        }
        // canonical digits that overflow u64 stay names
        Key::Name(name)
    }

    fn is_canonical_index(s: &str) -> bool {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        s == "0" || !s.starts_with('0')
    }

    /// Returns the integer form, if this is an integer key.
    pub fn as_index(&self) -> Option<u64> {
        match self {
            Key::Index(n) => Some(*n),
            Key::Name(_) => None,
        }
    }

    /// Returns the string form, if this is a string key.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Index(_) => None,
            Key::Name(s) => Some(s),
        }
    }

    /// Returns true if this is an integer key.
    pub fn is_index(&self) -> bool {
        matches!(self, Key::Index(_))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(n) => write!(f, "{n}"),
            Key::Name(s) => write!(f, "{s}"),
        }
    }
}

impl From<u64> for Key {
    fn from(value: u64) -> Self {
        Key::Index(value)
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::Index(value as u64)
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Key::Index(value as u64)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::from_name(value)
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::from_name(value)
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}
