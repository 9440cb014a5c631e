//! # Data Layer
//!
//! Datasets are abstracted behind the [`DataStore`] trait so the command
//! layer stays decoupled from where records live. Today the only
//! implementation is [`memory::InMemoryStore`]: every module's list seeds
//! from static mock data at construction and mutations replace in-memory
//! state only, so everything resets on restart. A server-backed store can
//! implement the same trait later without touching the engine.
//!
//! The in-memory store is `Vec`-backed on purpose: the list view contract
//! guarantees output in source order, so the store must preserve insertion
//! order rather than hash records into a map.

use crate::error::Result;
use crate::model::Record;

pub mod memory;

/// Abstract interface for one module's record dataset.
pub trait DataStore<R: Record> {
    /// All records, in insertion order.
    fn list(&self) -> Result<Vec<R>>;

    /// Get a record by id.
    fn get(&self, id: &str) -> Result<R>;

    /// Insert a new record. Fails if the id is already taken.
    fn insert(&mut self, record: R) -> Result<()>;

    /// Replace an existing record in place, keeping its position.
    fn update(&mut self, record: R) -> Result<()>;

    /// Remove a record permanently.
    fn delete(&mut self, id: &str) -> Result<()>;
}
