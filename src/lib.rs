//! recordtable - in-memory doubles for record table clients
//!
//! Code that persists entities depends on the [`RecordTable`] trait. Tests
//! hand it a [`FakeRecordTable`] (one held record, key-independent reads) or
//! an [`InMemoryTable`] (keyed items) instead of a real table client.
//!
//! # Quick Start
//!
//! ```ignore
//! use recordtable::{FakeRecordTable, Key, RecordTable};
//!
//! let mut table = FakeRecordTable::<Business>::new();
//! assert_eq!(table.get_item(&Key::partition("x")?)?, None);
//!
//! table.update_item(acme)?;
//! assert_eq!(table.get_item(&Key::partition("ignored-key")?)?, Some(acme));
//!
//! assert!(table.index("byRegion").unwrap_err().is_unsupported());
//! ```

pub use recordtable_core::*;
pub use recordtable_fixture::*;
