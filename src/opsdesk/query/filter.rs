use crate::model::Record;
use std::collections::BTreeMap;

/// Selecting this value for a filter key disables the key entirely.
pub const ALL_SENTINEL: &str = "all";

/// Active filter state for one listing: filter key → selected value.
///
/// A record matches when every non-sentinel entry equals the named record
/// field exactly and case-sensitively. No partial matching, no ranges, no
/// multi-select; one value per key at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    entries: BTreeMap<String, String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a filter key. Selecting [`ALL_SENTINEL`] clears the constraint,
    /// same as removing the key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries
            .values()
            .all(|v| v == ALL_SENTINEL)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Pure predicate: true iff the record matches every non-sentinel filter.
    ///
    /// A key the record does not carry never matches, except when its value
    /// is the sentinel.
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        self.entries.iter().all(|(key, value)| {
            if value == ALL_SENTINEL {
                return true;
            }
            match record.field(key) {
                Some(actual) => actual == *value,
                None => false,
            }
        })
    }
}
