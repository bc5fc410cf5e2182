//! TOML configuration for custom field tables
//!
//! ```toml
//! [[fields]]
//! name = "L Number"
//! pattern = 'L Number:\s*-\s*(\d+)'
//!
//! [[fields]]
//! name = "Ref"
//! pattern = '(Ref|Reference):\s*(\w+)'
//! capture_group = 2
//! ```
//!
//! Entry order is the report row order.

use crate::patterns::{FieldDefinition, FieldTable, DEFAULT_CAPTURE_GROUP};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Field table configuration loaded from TOML files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldTableConfig {
    pub fields: Vec<FieldEntry>,
}

/// One configured field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldEntry {
    pub name: String,
    pub pattern: String,
    #[serde(default = "default_capture_group")]
    pub capture_group: usize,
}

fn default_capture_group() -> usize {
    DEFAULT_CAPTURE_GROUP
}

impl FieldTableConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML is malformed
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read field config: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse field configuration")
    }

    /// Compile the configured fields into a table
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern does not compile, lacks its capture
    /// group, or a field name is repeated
    pub fn into_table(self) -> anyhow::Result<FieldTable> {
        let mut table = FieldTable::default();
        for entry in self.fields {
            let field =
                FieldDefinition::with_capture_group(&entry.name, &entry.pattern, entry.capture_group)
                    .with_context(|| format!("Invalid field definition '{}'", entry.name))?;
            table.push(field)?;
        }
        Ok(table)
    }
}

/// Load and compile a field table from a TOML file
pub fn load_field_table<P: AsRef<Path>>(path: P) -> anyhow::Result<FieldTable> {
    FieldTableConfig::from_file(path)?.into_table()
}
