//! Table keys
//!
//! A key is a partition value plus an optional sort value. Keys are built
//! through [`KeyBuilder`], which enforces the rules a managed table applies:
//! - A partition value must be supplied
//! - A string partition value must not exceed `MAX_PARTITION_KEY_BYTES`
//! - A string sort value must not exceed `MAX_SORT_KEY_BYTES`
//!
//! Keys derived from records skip these checks: see [`Key::derived`].

use crate::value::AttributeValue;
use thiserror::Error;

/// Maximum encoded size of a string partition value
pub const MAX_PARTITION_KEY_BYTES: usize = 2048;

/// Maximum encoded size of a string sort value
pub const MAX_SORT_KEY_BYTES: usize = 1024;

/// Primary key descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    partition: AttributeValue,
    sort: Option<AttributeValue>,
}

impl Key {
    /// Start building a key
    pub fn builder() -> KeyBuilder {
        KeyBuilder::default()
    }

    /// Key with only a partition value
    ///
    /// # Examples
    ///
    /// ```
    /// use recordtable_core::key::Key;
    ///
    /// let key = Key::partition("acme").unwrap();
    /// assert_eq!(key.partition_key_value().as_str(), Some("acme"));
    /// assert!(key.sort_key_value().is_none());
    /// ```
    pub fn partition(value: impl Into<AttributeValue>) -> Result<Key, KeyError> {
        Key::builder().partition_value(value).build()
    }

    /// Key derived from a record's identifying attribute
    ///
    /// Infallible: the value is always a string, so it is never null, and no
    /// length limit is applied.
    pub fn derived(partition: impl Into<String>) -> Key {
        Key {
            partition: AttributeValue::String(partition.into()),
            sort: None,
        }
    }

    /// Partition value
    pub fn partition_key_value(&self) -> &AttributeValue {
        &self.partition
    }

    /// Sort value, if any
    pub fn sort_key_value(&self) -> Option<&AttributeValue> {
        self.sort.as_ref()
    }
}

/// Builder for [`Key`]
#[derive(Debug, Clone, Default)]
pub struct KeyBuilder {
    partition: Option<AttributeValue>,
    sort: Option<AttributeValue>,
}

impl KeyBuilder {
    /// Set the partition value
    pub fn partition_value(mut self, value: impl Into<AttributeValue>) -> Self {
        self.partition = Some(value.into());
        self
    }

    /// Set the sort value
    pub fn sort_value(mut self, value: impl Into<AttributeValue>) -> Self {
        self.sort = Some(value.into());
        self
    }

    /// Validate and build the key
    pub fn build(self) -> Result<Key, KeyError> {
        let partition = match self.partition {
            Some(AttributeValue::Null) | None => return Err(KeyError::MissingPartitionValue),
            Some(value) => value,
        };
        check_len(&partition, MAX_PARTITION_KEY_BYTES)?;
        if let Some(sort) = &self.sort {
            check_len(sort, MAX_SORT_KEY_BYTES)?;
        }
        Ok(Key {
            partition,
            sort: self.sort,
        })
    }
}

fn check_len(value: &AttributeValue, max: usize) -> Result<(), KeyError> {
    if let Some(s) = value.as_str() {
        if s.len() > max {
            return Err(KeyError::TooLong {
                actual: s.len(),
                max,
            });
        }
    }
    Ok(())
}

/// Key construction errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    /// No partition value (or a null one) was supplied
    #[error("Key requires a partition value")]
    MissingPartitionValue,

    /// String key value exceeds the maximum length
    #[error("Key value too long: {actual} bytes exceeds maximum {max}")]
    TooLong {
        /// Actual length in bytes
        actual: usize,
        /// Maximum allowed length
        max: usize,
    },
}
