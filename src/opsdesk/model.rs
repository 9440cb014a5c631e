//! The [`Record`] trait is the seam between the generic list engine and the
//! per-module record shapes in [`crate::records`].
//!
//! A record exposes its data three ways:
//! - `field(key)` — named access to the fields the filter evaluator may
//!   constrain (status, category, priority, ...). Exact, case-sensitive
//!   values; `None` for keys the record does not carry.
//! - `SEARCH_FIELDS` — the fixed, ordered list of keys the search predicate
//!   scans. Decided per module at design time, never user-configurable.
//! - `COLUMNS` / `cells()` — the tabular projection shared by the table and
//!   card renderers.
//!
//! The filter and search evaluators see nothing of a record beyond this
//! trait, which is what keeps the engine data-shape-agnostic.

use chrono::{DateTime, Utc};

/// One business entity instance held in a module's record list.
pub trait Record {
    /// Plural noun for empty-state messages ("No leads found.").
    const NOUN: &'static str;

    /// Fixed, ordered field list scanned by the search predicate.
    const SEARCH_FIELDS: &'static [&'static str];

    /// Column keys for the tabular projection, in render order.
    const COLUMNS: &'static [&'static str];

    /// Unique identifier within the record's dataset.
    fn id(&self) -> &str;

    /// Named field access for filtering and searching.
    ///
    /// Returns `None` when the record does not carry the key at all, which
    /// the filter evaluator treats as a non-match for any value other than
    /// the `"all"` sentinel.
    fn field(&self, key: &str) -> Option<String>;

    /// Cell values matching [`Record::COLUMNS`], in order.
    fn cells(&self) -> Vec<String>;

    /// Short display title used as the card header.
    fn title(&self) -> String;

    /// Creation timestamp, when the record carries one. Renderers use it for
    /// the relative-time column.
    fn created_at(&self) -> Option<DateTime<Utc>> {
        None
    }
}
