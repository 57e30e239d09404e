//! Record - the default structured payload of a failure.

use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

static EMPTY: OnceLock<Arc<Record>> = OnceLock::new();

/// An ordered, string-keyed map of [`Value`]s.
///
/// Records are built by value with [`Record::with`] and are never mutated
/// afterwards; there is no `&mut` API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// The process-wide empty record. Every call returns the same allocation.
    pub fn empty() -> Arc<Record> {
        Arc::clone(Self::empty_ref())
    }

    pub(crate) fn empty_ref() -> &'static Arc<Record> {
        EMPTY.get_or_init(|| Arc::new(Record::new()))
    }

    /// Returns the record with `key` set to `value`, replacing any previous entry.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_shared() {
        let a = Record::empty();
        let b = Record::empty();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(a.is_empty());
    }

    #[test]
    fn test_with_replaces_existing_key() {
        let record = Record::new().with("code", 1).with("code", 2);
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("code"), Some(&Value::Int(2)));
    }

    #[test]
    fn test_iteration_is_ordered() {
        let record: Record = [("b", 2), ("a", 1)].into_iter().collect();
        let keys: Vec<&str> = record.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_json_round_trip_as_object() {
        let record = Record::new().with("offset", 3).with("found", "x");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"found":"x","offset":3}"#);

        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
