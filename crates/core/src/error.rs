//! Error types for record tables
//!
//! Every fallible table operation returns [`Error`]. Key construction has its
//! own [`KeyError`], which converts into `Error::InvalidKey`.

use crate::key::KeyError;
use std::io;
use thiserror::Error;

/// Result type alias for table operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for record tables
#[derive(Debug, Error)]
pub enum Error {
    /// The table does not model the requested capability
    ///
    /// Raised for every secondary-index query and for optional operations
    /// an implementation leaves unimplemented. Never retried.
    #[error("Unsupported operation '{operation}' on table '{table}'")]
    Unsupported {
        /// Table name
        table: String,
        /// Operation that was requested
        operation: String,
    },

    /// The record's identifying attribute is absent, so no key can be built
    #[error("Cannot derive key for table '{table}': attribute '{attribute}' is absent")]
    MissingKeyAttribute {
        /// Table name
        table: String,
        /// Partition key attribute name
        attribute: String,
    },

    /// Key construction failed
    #[error("Invalid key: {0}")]
    InvalidKey(#[from] KeyError),

    /// Schema definition is malformed
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    /// A record's attributes disagree with its schema
    #[error("Schema mismatch on attribute '{attribute}': {reason}")]
    SchemaMismatch {
        /// Offending attribute
        attribute: String,
        /// What did not match
        reason: String,
    },

    /// Configuration could not be parsed or holds an unknown value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error (config file access)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Build an `Unsupported` error for `operation` on `table`
    pub fn unsupported(table: impl Into<String>, operation: impl Into<String>) -> Self {
        Error::Unsupported {
            table: table.into(),
            operation: operation.into(),
        }
    }

    /// Whether this error signals an unmodelled capability
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::Unsupported { .. })
    }
}
