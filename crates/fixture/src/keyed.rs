//! InMemoryTable: keyed multi-item table double
//!
//! Items live in a `Vec` in insertion order. Each item's key is the string
//! produced by the table's key extractor; reads, writes and deletes match on
//! that string. A lookup key matches when its partition value is a string
//! equal to the extracted key, so non-string partition values match nothing.
//!
//! Keys are partition-only: `key_from` never sets a sort value, even when the
//! schema declares a sort key, and never fails.
//!
//! Unlike `FakeRecordTable`, this double supports `delete_item`,
//! `delete_item_for` and `scan`. Secondary indexes are still unsupported.

use recordtable_core::{Entity, Error, Key, RecordTable, Result, SecondaryIndex, TableSchema};
use std::fmt;
use tracing::{debug, warn};

type KeyExtractor<T> = Box<dyn Fn(&T) -> String>;

/// Keyed in-memory table
pub struct InMemoryTable<T: Entity> {
    table_name: String,
    schema: TableSchema,
    key_extractor: KeyExtractor<T>,
    items: Vec<T>,
}

impl<T: Entity> InMemoryTable<T> {
    /// Create an empty table with an explicit name, schema and key extractor
    pub fn new(
        table_name: impl Into<String>,
        schema: TableSchema,
        key_extractor: impl Fn(&T) -> String + 'static,
    ) -> Self {
        InMemoryTable {
            table_name: table_name.into(),
            schema,
            key_extractor: Box::new(key_extractor),
            items: Vec::new(),
        }
    }

    /// Create an empty table from the entity's own name, schema and
    /// identifying attribute
    ///
    /// Items without an identifying attribute are keyed by the empty string.
    pub fn for_entity() -> Self {
        Self::new(T::TABLE_NAME, T::table_schema(), |item: &T| {
            item.partition_value().unwrap_or_default()
        })
    }

    /// Stored items, in insertion order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of stored items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn key_of(&self, item: &T) -> String {
        (self.key_extractor)(item)
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.items.iter().position(|it| self.key_of(it) == key)
    }

    fn upsert(&mut self, item: T) {
        let key = self.key_of(&item);
        match self.position(&key) {
            Some(index) => self.items[index] = item,
            None => self.items.push(item),
        }
    }

    fn remove(&mut self, key: &str) -> Option<T> {
        let removed = self.position(key).map(|index| self.items.remove(index));
        debug!(
            target: "recordtable::keyed",
            table = %self.table_name,
            key,
            removed = removed.is_some(),
            "delete"
        );
        removed
    }
}

/// Seeds items as-is, without replacing items that share a key
impl<T: Entity> Extend<T> for InMemoryTable<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T: Entity> fmt::Debug for InMemoryTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryTable")
            .field("table_name", &self.table_name)
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

impl<T: Entity> RecordTable<T> for InMemoryTable<T> {
    fn table_name(&self) -> &str {
        &self.table_name
    }

    fn table_schema(&self) -> &TableSchema {
        &self.schema
    }

    fn key_from(&self, item: &T) -> Result<Key> {
        Ok(Key::derived(self.key_of(item)))
    }

    fn index(&self, index_name: &str) -> Result<Box<dyn SecondaryIndex<T> + '_>> {
        warn!(
            target: "recordtable::keyed",
            table = %self.table_name,
            index = index_name,
            "Secondary index requested from in-memory table"
        );
        Err(Error::unsupported(
            &self.table_name,
            format!("index({})", index_name),
        ))
    }

    fn get_item(&self, key: &Key) -> Result<Option<T>> {
        let found = key
            .partition_key_value()
            .as_str()
            .and_then(|wanted| self.items.iter().find(|it| self.key_of(it) == wanted))
            .cloned();
        debug!(
            target: "recordtable::keyed",
            table = %self.table_name,
            key = ?key.partition_key_value(),
            found = found.is_some(),
            "get_item"
        );
        Ok(found)
    }

    fn get_item_for(&self, item: &T) -> Result<Option<T>> {
        let wanted = self.key_of(item);
        Ok(self
            .items
            .iter()
            .find(|it| self.key_of(it) == wanted)
            .cloned())
    }

    fn put_item(&mut self, item: T) -> Result<()> {
        debug!(target: "recordtable::keyed", table = %self.table_name, "put_item");
        self.upsert(item);
        Ok(())
    }

    fn update_item(&mut self, item: T) -> Result<T> {
        debug!(target: "recordtable::keyed", table = %self.table_name, "update_item");
        self.upsert(item.clone());
        Ok(item)
    }

    fn delete_item(&mut self, key: &Key) -> Result<Option<T>> {
        Ok(match key.partition_key_value().as_str() {
            Some(wanted) => self.remove(wanted),
            None => None,
        })
    }

    fn delete_item_for(&mut self, item: &T) -> Result<Option<T>> {
        let key = self.key_of(item);
        Ok(self.remove(&key))
    }

    fn scan(&self) -> Result<Vec<T>> {
        Ok(self.items.clone())
    }
}
