//! FakeRecordTable: single-slot table double
//!
//! ## Design
//!
//! Holds at most one record. Every lookup returns whatever was last stored,
//! whatever key or record is asked for: the double does no key matching.
//! `get_item_for` never derives a key, so it cannot fail on a record whose
//! identifying attribute is absent. `put_item`
//! and `update_item` both overwrite the slot; they stay separate code paths
//! because the contract distinguishes them by signature.
//!
//! `key_from` builds a partition-only key even when the schema declares a
//! sort key.
//!
//! Secondary indexes are never available. `delete_item`, `delete_item_for`
//! and `scan` keep the contract's unsupported defaults.
//!
//! ## Thread Safety
//!
//! None. Writes take `&mut self`; there are no locks.

use crate::config::{MissingKeyPolicy, TableConfig};
use recordtable_core::{
    Entity, Error, Key, RecordTable, Result, SecondaryIndex, TableSchema,
};
use tracing::{debug, warn};

/// Single-slot stand-in for a record table
///
/// # Example
///
/// ```ignore
/// use recordtable_fixture::FakeRecordTable;
///
/// let mut table = FakeRecordTable::<Business>::new();
/// table.update_item(business("acme"))?;
///
/// // Any key yields the held record
/// let key = Key::partition("ignored-key")?;
/// assert_eq!(table.get_item(&key)?, Some(business("acme")));
/// ```
#[derive(Debug)]
pub struct FakeRecordTable<T: Entity> {
    table_name: String,
    schema: TableSchema,
    missing_key: MissingKeyPolicy,
    held: Option<T>,
}

impl<T: Entity> FakeRecordTable<T> {
    /// Create an empty table with default config
    pub fn new() -> Self {
        FakeRecordTable {
            table_name: T::TABLE_NAME.to_string(),
            schema: T::table_schema(),
            missing_key: MissingKeyPolicy::default(),
            held: None,
        }
    }

    /// Create an empty table from `config`
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the missing-key policy is unknown.
    pub fn with_config(config: &TableConfig) -> Result<Self> {
        let missing_key = config.missing_key_policy()?;
        let table_name = config
            .table_name
            .clone()
            .unwrap_or_else(|| T::TABLE_NAME.to_string());
        Ok(FakeRecordTable {
            table_name,
            schema: T::table_schema(),
            missing_key,
            held: None,
        })
    }

    /// Seed the slot before handing the table to code under test
    pub fn with_record(mut self, item: T) -> Self {
        self.held = Some(item);
        self
    }

    /// The held record, for assertions
    pub fn held(&self) -> Option<&T> {
        self.held.as_ref()
    }

    /// Empty the slot, returning what it held
    pub fn take(&mut self) -> Option<T> {
        self.held.take()
    }
}

impl<T: Entity> Default for FakeRecordTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> RecordTable<T> for FakeRecordTable<T> {
    fn table_name(&self) -> &str {
        &self.table_name
    }

    fn table_schema(&self) -> &TableSchema {
        &self.schema
    }

    fn key_from(&self, item: &T) -> Result<Key> {
        let value = match (item.partition_value(), self.missing_key) {
            (Some(value), _) => value,
            (None, MissingKeyPolicy::Empty) => String::new(),
            (None, MissingKeyPolicy::Error) => {
                return Err(Error::MissingKeyAttribute {
                    table: self.table_name.clone(),
                    attribute: self.schema.partition_key().name.clone(),
                })
            }
        };
        Ok(Key::derived(value))
    }

    fn index(&self, index_name: &str) -> Result<Box<dyn SecondaryIndex<T> + '_>> {
        warn!(
            target: "recordtable::fake",
            table = %self.table_name,
            index = index_name,
            "Secondary index requested from single-slot table"
        );
        Err(Error::unsupported(
            &self.table_name,
            format!("index({})", index_name),
        ))
    }

    fn get_item(&self, key: &Key) -> Result<Option<T>> {
        debug!(
            target: "recordtable::fake",
            table = %self.table_name,
            key = ?key.partition_key_value(),
            held = self.held.is_some(),
            "get_item"
        );
        Ok(self.held.clone())
    }

    fn get_item_for(&self, item: &T) -> Result<Option<T>> {
        debug!(
            target: "recordtable::fake",
            table = %self.table_name,
            requested = ?item.partition_value(),
            held = self.held.is_some(),
            "get_item_for"
        );
        Ok(self.held.clone())
    }

    fn put_item(&mut self, item: T) -> Result<()> {
        debug!(target: "recordtable::fake", table = %self.table_name, "put_item");
        self.held = Some(item);
        Ok(())
    }

    fn update_item(&mut self, item: T) -> Result<T> {
        debug!(target: "recordtable::fake", table = %self.table_name, "update_item");
        self.held = Some(item.clone());
        Ok(item)
    }
}
