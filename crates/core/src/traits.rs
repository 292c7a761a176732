//! Core traits for entities and record tables
//!
//! This module defines the `Entity` and `RecordTable` traits. Production code
//! depends on `RecordTable`, so a real table client and an in-memory double
//! can be swapped without touching the code under test.

use std::fmt;

use crate::error::{Error, Result};
use crate::key::Key;
use crate::schema::TableSchema;
use crate::value::Item;

/// A record type stored in a table
///
/// The schema is written by hand; nothing is derived by reflection.
pub trait Entity: Clone + fmt::Debug + 'static {
    /// Fixed table identifier for this entity type
    const TABLE_NAME: &'static str;

    /// Attribute layout of this entity
    fn table_schema() -> TableSchema;

    /// Value of the identifying attribute, `None` when absent
    fn partition_value(&self) -> Option<String>;

    /// All attributes of this record
    fn to_item(&self) -> Item;
}

/// A secondary index over a table
pub trait SecondaryIndex<T: Entity>: fmt::Debug {
    /// Index name
    fn index_name(&self) -> &str;

    /// Items whose index key matches `key`
    fn query(&self, key: &Key) -> Result<Vec<T>>;
}

/// Table-access contract
///
/// Mirrors the surface of a managed key-value table client. The provided
/// methods `delete_item`, `delete_item_for` and `scan` fail with
/// `Error::Unsupported` unless an implementation overrides them.
///
/// Mutating methods take `&mut self`: implementations are single-threaded
/// and hold no locks.
pub trait RecordTable<T: Entity> {
    /// Table identifier
    fn table_name(&self) -> &str;

    /// Schema of the stored entity type
    fn table_schema(&self) -> &TableSchema;

    /// Build the primary key for `item` from its identifying attribute
    fn key_from(&self, item: &T) -> Result<Key>;

    /// Open a secondary index by name
    fn index(&self, index_name: &str) -> Result<Box<dyn SecondaryIndex<T> + '_>>;

    /// Fetch the item stored under `key`
    ///
    /// Returns `None` if there is none.
    fn get_item(&self, key: &Key) -> Result<Option<T>>;

    /// Fetch the item stored under the key derived from `item`
    fn get_item_for(&self, item: &T) -> Result<Option<T>> {
        let key = self.key_from(item)?;
        self.get_item(&key)
    }

    /// Store `item`, replacing any item with the same key
    fn put_item(&mut self, item: T) -> Result<()>;

    /// Store `item`, replacing any item with the same key, and return it
    fn update_item(&mut self, item: T) -> Result<T>;

    /// Remove and return the item stored under `key`
    fn delete_item(&mut self, key: &Key) -> Result<Option<T>> {
        let _ = key;
        Err(Error::unsupported(self.table_name(), "delete_item"))
    }

    /// Remove and return the item stored under the key derived from `item`
    fn delete_item_for(&mut self, item: &T) -> Result<Option<T>> {
        let _ = item;
        Err(Error::unsupported(self.table_name(), "delete_item_for"))
    }

    /// Every stored item
    fn scan(&self) -> Result<Vec<T>> {
        Err(Error::unsupported(self.table_name(), "scan"))
    }
}
