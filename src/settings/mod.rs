//! Flattened settings mapping handed to the underlying client library.
//!
//! Keys are dotted strings (`monitor.process.refresh_interval`), values are
//! plain strings, keys are unique and order is irrelevant. Defaults are put
//! first and explicit values afterwards, so the last put wins on conflict.


use std::collections::HashMap;

/// Gathers all pairs whose key starts with `<prefix>.`, strips the prefix
/// and returns the resulting mapping.
///
/// No validation beyond string handling; pairs outside the prefix are
/// ignored, as is the bare prefix itself.
pub fn collect_prefixed<I, K, V>(
    pairs: I,
    prefix: &str,
) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    let qualified = format!("{prefix}.");
    let mut collected = HashMap::new();
    for (key, value) in pairs {
        if let Some(stripped) = key.as_ref().strip_prefix(&qualified) {
            if !stripped.is_empty() {
                collected.insert(stripped.to_string(), value.into());
            }
        }
    }
    collected
}

/// Immutable flattened settings carried by a constructed client.
///
/// Built through [`Settings::builder`]; the merge contract is that later
/// puts override earlier ones, which is how factory defaults lose against
/// explicitly supplied properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    entries: HashMap<String, String>,
}

impl Settings {
    /// Start building a settings mapping.
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder {
            entries: HashMap::new(),
        }
    }

    /// Collects `<prefix>.*` pairs from a flat source into a settings
    /// mapping, prefix stripped. See [`collect_prefixed`].
    pub fn from_prefixed<I, K, V>(
        pairs: I,
        prefix: &str,
    ) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            entries: collect_prefixed(pairs, prefix),
        }
    }

    /// Value for `key`, if present.
    pub fn get(
        &self,
        key: &str,
    ) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// True when `key` is present.
    pub fn contains(
        &self,
        key: &str,
    ) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of settings entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entry is present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all `(key, value)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Chainable construction of a [`Settings`] mapping.
pub struct SettingsBuilder {
    entries: HashMap<String, String>,
}

impl SettingsBuilder {
    /// Puts a single entry, replacing any earlier value for the key.
    pub fn put(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Puts every pair from `pairs`, replacing earlier values per key.
    pub fn put_all<I, K, V>(
        mut self,
        pairs: I,
    ) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in pairs {
            self.entries.insert(key.into(), value.into());
        }
        self
    }

    /// Freezes the mapping.
    pub fn build(self) -> Settings {
        Settings {
            entries: self.entries,
        }
    }
}
