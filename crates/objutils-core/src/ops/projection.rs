use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

/// Borrowed view over a subset of a mapping's top-level entries
///
/// Values are shared with the source, not cloned. Entries keep the
/// source's enumeration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection<'a> {
    entries: Vec<(&'a str, &'a Value)>,
}

impl<'a> Projection<'a> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Keys in source order
    pub fn keys(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a Value)> + '_ {
        self.entries.iter().copied()
    }

    /// Clone the selected entries into an owned mapping
    pub fn to_map(&self) -> Map<String, Value> {
        self.entries
            .iter()
            .map(|(k, v)| (k.to_string(), (*v).clone()))
            .collect()
    }
}

impl Serialize for Projection<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Keep the top-level entries whose key appears in `keys`
///
/// Keys absent from `source` are ignored. Order follows `source`, not
/// `keys`.
///
/// # Example
/// ```
/// use objutils_core::ops::filter;
/// use serde_json::json;
///
/// let source = json!({"id": 1, "name": "My Test", "secret": "bacon"});
/// let source = source.as_object().unwrap();
/// let kept = filter(source, &["name", "id"]);
/// assert_eq!(kept.keys().collect::<Vec<_>>(), ["id", "name"]);
/// ```
pub fn filter<'a, K>(source: &'a Map<String, Value>, keys: &[K]) -> Projection<'a>
where
    K: AsRef<str>,
{
    project(source, keys, true)
}

/// Keep the top-level entries whose key does not appear in `keys`
///
/// For the same `keys`, `filter` and `omit` partition the source's keys.
pub fn omit<'a, K>(source: &'a Map<String, Value>, keys: &[K]) -> Projection<'a>
where
    K: AsRef<str>,
{
    project(source, keys, false)
}

/// Owned [`filter`]: moves the kept values out of `source`
pub fn filter_into<K>(source: Map<String, Value>, keys: &[K]) -> Map<String, Value>
where
    K: AsRef<str>,
{
    source
        .into_iter()
        .filter(|(key, _)| listed(keys, key))
        .collect()
}

/// Owned [`omit`]: moves the kept values out of `source`
pub fn omit_into<K>(source: Map<String, Value>, keys: &[K]) -> Map<String, Value>
where
    K: AsRef<str>,
{
    source
        .into_iter()
        .filter(|(key, _)| !listed(keys, key))
        .collect()
}

fn project<'a, K>(
    source: &'a Map<String, Value>,
    keys: &[K],
    keep_listed: bool,
) -> Projection<'a>
where
    K: AsRef<str>,
{
    let entries = source
        .iter()
        .filter(|(key, _)| listed(keys, key) == keep_listed)
        .map(|(key, value)| (key.as_str(), value))
        .collect();
    Projection { entries }
}

fn listed<K: AsRef<str>>(keys: &[K], key: &str) -> bool {
    keys.iter().any(|k| k.as_ref() == key)
}
