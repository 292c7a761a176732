//! In-memory record table doubles
//!
//! Two implementations of [`RecordTable`] for unit tests of code that
//! persists entities:
//!
//! - [`FakeRecordTable`]: holds one record and returns it for any key
//! - [`InMemoryTable`]: keyed multi-item table with delete and scan
//!
//! Both reject secondary-index queries with `Error::Unsupported`.
//!
//! [`RecordTable`]: recordtable_core::RecordTable

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod keyed;
pub mod single_slot;

pub use config::{MissingKeyPolicy, TableConfig, CONFIG_FILE_NAME};
pub use keyed::InMemoryTable;
pub use single_slot::FakeRecordTable;
