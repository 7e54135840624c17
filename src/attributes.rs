use std::collections::{BTreeMap, BTreeSet};

/// An immutable string-to-string attribute map (OSM tags).
///
/// Keys are kept sorted so that iteration and debug output are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: BTreeMap<String, String>,
}

impl Attributes {
    #[must_use]
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn builder() -> AttributesBuilder {
        AttributesBuilder::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns the value for `key`, or `default` if absent.
    #[must_use]
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Returns the value for `key` parsed as an integer, or `default` if the
    /// key is absent or its value is not a valid integer.
    #[must_use]
    pub fn get_int(&self, key: &str, default: i32) -> i32 {
        self.get(key)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }

    /// Returns a copy restricted to the keys in `keys_to_keep`.
    #[must_use]
    pub fn keep_only_keys(&self, keys_to_keep: &BTreeSet<String>) -> Self {
        let entries = self
            .entries
            .iter()
            .filter(|(k, _)| keys_to_keep.contains(k.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Self { entries }
    }

    /// Returns `true` if any of `keys` is present.
    #[must_use]
    pub fn contains_any(&self, keys: &BTreeSet<String>) -> bool {
        self.entries.keys().any(|k| keys.contains(k))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Incrementally builds an [`Attributes`] map. Later values win.
#[derive(Debug, Clone, Default)]
pub struct AttributesBuilder {
    entries: BTreeMap<String, String>,
}

impl AttributesBuilder {
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn build(&self) -> Attributes {
        Attributes::new(self.entries.clone())
    }
}

/// A value paired with its attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Attributed<T> {
    value: T,
    attributes: Attributes,
}

impl<T> Attributed<T> {
    #[must_use]
    pub fn new(value: T, attributes: Attributes) -> Self {
        Self { value, attributes }
    }

    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    #[must_use]
    pub fn has_attribute(&self, key: &str) -> bool {
        self.attributes.contains(key)
    }

    #[must_use]
    pub fn attribute_value(&self, key: &str) -> Option<&str> {
        self.attributes.get(key)
    }

    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }
}

/// Collects string literals into a key set.
#[must_use]
pub fn key_set(keys: &[&str]) -> BTreeSet<String> {
    keys.iter().map(|k| (*k).to_owned()).collect()
}
