use serde::Serialize;
use std::collections::BTreeMap;

/// A single configuration value or an ordered sequence of values.
///
/// Most fields are single strings. Repeated query-string keys and the
/// host list of a clustered connection string produce sequences. The
/// untagged serde representation turns a `Single` into a JSON string and
/// a `Many` into a JSON array, so consumers see the same shape the
/// mapping exposes in memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// One value
    Single(String),
    /// Ordered values for a key that carries more than one
    Many(Vec<String>),
}

impl ConfigValue {
    /// The value as a single string, if it is one
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            Self::Many(_) => None,
        }
    }

    /// The value as an ordered sequence, if it is one
    #[must_use]
    pub fn as_seq(&self) -> Option<&[String]> {
        match self {
            Self::Single(_) => None,
            Self::Many(values) => Some(values),
        }
    }

    /// Append another value, promoting a single value to a sequence
    pub(crate) fn push(&mut self, value: String) {
        match self {
            Self::Single(first) => {
                *self = Self::Many(vec![std::mem::take(first), value]);
            }
            Self::Many(values) => values.push(value),
        }
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<Vec<String>> for ConfigValue {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

/// Normalized database connection configuration
///
/// A flat string-keyed mapping produced by [`parse`](crate::parse). The
/// `driver` key is always present; `host`, `port`, `user`, `password`,
/// `database`, and `filename` appear as the input supplies them, and any
/// query-string parameters are carried through verbatim. Serializes to a
/// flat JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ConnectionConfig {
    entries: BTreeMap<String, ConfigValue>,
}

impl ConnectionConfig {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// The backend driver identifier
    ///
    /// Always present after parsing; defaults to the empty string only
    /// for a hand-built empty mapping.
    #[must_use]
    pub fn driver(&self) -> &str {
        self.get_str("driver").unwrap_or_default()
    }

    /// Look up a value by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.get(key)
    }

    /// Look up a single-string value by key
    ///
    /// Returns `None` when the key is absent or holds a sequence.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(ConfigValue::as_str)
    }

    /// Whether the mapping contains `key`
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a value, replacing any previous value for the key
    pub(crate) fn insert(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Add a value for a key, promoting repeats to a sequence
    pub(crate) fn append(&mut self, key: &str, value: String) {
        if let Some(existing) = self.entries.get_mut(key) {
            existing.push(value);
        } else {
            self.entries
                .insert(key.to_string(), ConfigValue::Single(value));
        }
    }
}
