//! Core types and traits for record tables
//!
//! This crate defines the table-access contract shared by real table
//! clients and in-memory doubles:
//! - Entity: record types with a hand-written schema and identifying attribute
//! - RecordTable: the table-access trait (get/put/update/index/key derivation)
//! - Key: partition value plus optional sort value
//! - AttributeValue / Item: the attribute value model
//! - TableSchema: explicit attribute descriptors
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod key;
pub mod schema;
pub mod traits;
pub mod value;

pub use error::{Error, Result};
pub use key::{Key, KeyBuilder, KeyError, MAX_PARTITION_KEY_BYTES, MAX_SORT_KEY_BYTES};
pub use schema::{AttributeDescriptor, AttributeType, KeyRole, TableSchema, TableSchemaBuilder};
pub use traits::{Entity, RecordTable, SecondaryIndex};
pub use value::{AttributeValue, Item};
