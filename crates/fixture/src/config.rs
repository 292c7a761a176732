//! Fixture configuration via `recordtable.toml`
//!
//! Tables are built with defaults unless a test supplies a config. A config
//! can override the table identifier and choose what happens when a record's
//! identifying attribute is absent during key derivation.

use recordtable_core::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Config file name conventionally placed next to test data.
pub const CONFIG_FILE_NAME: &str = "recordtable.toml";

/// What `key_from` does when the identifying attribute is absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingKeyPolicy {
    /// Fail with `Error::MissingKeyAttribute`
    #[default]
    Error,
    /// Substitute the empty string
    Empty,
}

/// Table fixture configuration loaded from `recordtable.toml`.
///
/// # Example
///
/// ```toml
/// # Override the entity's table name
/// # table_name = "business"
///
/// # "error" (default) or "empty"
/// missing_key = "error"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TableConfig {
    /// Table identifier override. Defaults to `Entity::TABLE_NAME`.
    #[serde(default)]
    pub table_name: Option<String>,
    /// Missing-key policy: `"error"` or `"empty"`.
    #[serde(default = "default_missing_key_str")]
    pub missing_key: String,
}

fn default_missing_key_str() -> String {
    "error".to_string()
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            table_name: None,
            missing_key: default_missing_key_str(),
        }
    }
}

impl TableConfig {
    /// Parse the missing-key string into a `MissingKeyPolicy`.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not `"error"` or `"empty"`.
    pub fn missing_key_policy(&self) -> Result<MissingKeyPolicy> {
        match self.missing_key.as_str() {
            "error" => Ok(MissingKeyPolicy::Error),
            "empty" => Ok(MissingKeyPolicy::Empty),
            other => Err(Error::InvalidConfig(format!(
                "Invalid missing_key '{}'. Expected \"error\" or \"empty\".",
                other
            ))),
        }
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Record table fixture configuration
#
# Table identifier override (default: the entity's TABLE_NAME)
# table_name = "business"

# Key derivation when the identifying attribute is absent:
#   "error" = fail with MissingKeyAttribute (default)
#   "empty" = use the empty string as the partition value
missing_key = "error"
"#
    }

    /// Parse config from TOML text, validating it eagerly.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TableConfig = toml::from_str(content)
            .map_err(|e| Error::InvalidConfig(format!("Failed to parse config: {}", e)))?;
        config.missing_key_policy()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content).map_err(|e| match e {
            Error::InvalidConfig(msg) => {
                Error::InvalidConfig(format!("{} ({})", msg, path.display()))
            }
            other => other,
        })?;
        info!(
            target: "recordtable::config",
            path = %path.display(),
            missing_key = %config.missing_key,
            "Loaded table config"
        );
        Ok(config)
    }

    /// Create `path` with the commented default config.
    ///
    /// An existing file is left untouched.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }
}
