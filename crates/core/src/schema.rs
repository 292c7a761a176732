//! Table schema descriptors
//!
//! A schema is an explicit, hand-written list of attributes for an entity
//! type. Each attribute has a name, a scalar type, and optionally a key role.
//! Entities supply their schema through [`Entity::table_schema`].
//!
//! # Example
//!
//! ```
//! use recordtable_core::schema::{AttributeType, TableSchema};
//!
//! let schema = TableSchema::builder()
//!     .partition_key("name", AttributeType::S)
//!     .attribute("publicId", AttributeType::S)
//!     .attribute("autoAcceptDeliveries", AttributeType::Bool)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(schema.partition_key().name, "name");
//! assert_eq!(schema.attribute_names(), vec!["name", "publicId", "autoAcceptDeliveries"]);
//! ```
//!
//! [`Entity::table_schema`]: crate::traits::Entity::table_schema

use crate::error::{Error, Result};
use crate::traits::Entity;
use crate::value::Item;
use std::collections::HashSet;
use std::fmt;

/// Attribute type as declared in a schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeType {
    /// String
    S,
    /// Number
    N,
    /// Boolean
    Bool,
    /// List
    L,
    /// Map
    M,
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AttributeType::S => "S",
            AttributeType::N => "N",
            AttributeType::Bool => "BOOL",
            AttributeType::L => "L",
            AttributeType::M => "M",
        };
        f.write_str(s)
    }
}

/// Role an attribute plays in the primary key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyRole {
    /// Hash key
    Partition,
    /// Range key
    Sort,
}

/// One declared attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDescriptor {
    /// Attribute name as stored
    pub name: String,
    /// Declared type
    pub attribute_type: AttributeType,
    /// Key role, if this attribute is part of the primary key
    pub key_role: Option<KeyRole>,
}

/// Schema for an entity type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    attributes: Vec<AttributeDescriptor>,
    partition: usize,
}

impl TableSchema {
    /// Start building a schema
    pub fn builder() -> TableSchemaBuilder {
        TableSchemaBuilder::default()
    }

    /// All attributes, in declaration order
    pub fn attributes(&self) -> &[AttributeDescriptor] {
        &self.attributes
    }

    /// Attribute names, in declaration order
    pub fn attribute_names(&self) -> Vec<&str> {
        self.attributes.iter().map(|a| a.name.as_str()).collect()
    }

    /// Look up an attribute by name
    pub fn attribute(&self, name: &str) -> Option<&AttributeDescriptor> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// The partition key attribute
    ///
    /// A built schema always has exactly one.
    pub fn partition_key(&self) -> &AttributeDescriptor {
        &self.attributes[self.partition]
    }

    /// The sort key attribute, if declared
    pub fn sort_key(&self) -> Option<&AttributeDescriptor> {
        self.attributes
            .iter()
            .find(|a| a.key_role == Some(KeyRole::Sort))
    }

    /// Convert an entity to its attribute map, checking it against this schema
    ///
    /// Every attribute the entity emits must be declared, and non-null values
    /// must have the declared type.
    pub fn item_to_map<T: Entity>(&self, entity: &T) -> Result<Item> {
        let item = entity.to_item();
        for (name, value) in &item {
            let declared = self.attribute(name).ok_or_else(|| Error::SchemaMismatch {
                attribute: name.clone(),
                reason: "attribute is not declared".to_string(),
            })?;
            if let Some(actual) = value.attribute_type() {
                if actual != declared.attribute_type {
                    return Err(Error::SchemaMismatch {
                        attribute: name.clone(),
                        reason: format!("expected {}, got {}", declared.attribute_type, actual),
                    });
                }
            }
        }
        Ok(item)
    }
}

/// Builder for [`TableSchema`]
#[derive(Debug, Clone, Default)]
pub struct TableSchemaBuilder {
    attributes: Vec<AttributeDescriptor>,
}

impl TableSchemaBuilder {
    /// Declare the partition key attribute
    pub fn partition_key(self, name: impl Into<String>, attribute_type: AttributeType) -> Self {
        self.push(name, attribute_type, Some(KeyRole::Partition))
    }

    /// Declare the sort key attribute
    pub fn sort_key(self, name: impl Into<String>, attribute_type: AttributeType) -> Self {
        self.push(name, attribute_type, Some(KeyRole::Sort))
    }

    /// Declare a non-key attribute
    pub fn attribute(self, name: impl Into<String>, attribute_type: AttributeType) -> Self {
        self.push(name, attribute_type, None)
    }

    fn push(
        mut self,
        name: impl Into<String>,
        attribute_type: AttributeType,
        key_role: Option<KeyRole>,
    ) -> Self {
        self.attributes.push(AttributeDescriptor {
            name: name.into(),
            attribute_type,
            key_role,
        });
        self
    }

    /// Validate and build the schema
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidSchema` on duplicate names, a missing partition
    /// key, or more than one partition or sort key.
    pub fn build(self) -> Result<TableSchema> {
        let mut seen = HashSet::new();
        for attr in &self.attributes {
            if !seen.insert(attr.name.as_str()) {
                return Err(Error::InvalidSchema(format!(
                    "duplicate attribute '{}'",
                    attr.name
                )));
            }
        }

        let count = |role| {
            self.attributes
                .iter()
                .filter(|a| a.key_role == Some(role))
                .count()
        };
        match count(KeyRole::Partition) {
            0 => return Err(Error::InvalidSchema("no partition key declared".to_string())),
            1 => {}
            n => {
                return Err(Error::InvalidSchema(format!(
                    "{} partition keys declared, expected 1",
                    n
                )))
            }
        }
        if count(KeyRole::Sort) > 1 {
            return Err(Error::InvalidSchema(
                "more than one sort key declared".to_string(),
            ));
        }

        let partition = self
            .attributes
            .iter()
            .position(|a| a.key_role == Some(KeyRole::Partition))
            .unwrap_or_default();
        Ok(TableSchema {
            attributes: self.attributes,
            partition,
        })
    }
}
