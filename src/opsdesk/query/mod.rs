//! # The List Engine
//!
//! One reusable filter/search/list contract shared by every listing module.
//! Historically each page reimplemented the same predicate chain inline; this
//! module is the extraction of that pattern, parameterized by the
//! [`crate::model::Record`] trait.
//!
//! - [`filter`]: exact-match narrowing with the `"all"` sentinel
//! - [`search`]: case-insensitive substring over a fixed field list
//! - [`view`]: AND-composition, order preservation, and the table/cards
//!   view-mode toggle

pub mod filter;
pub mod search;
pub mod view;

pub use filter::{FilterSet, ALL_SENTINEL};
pub use view::{ListView, ViewMode};
