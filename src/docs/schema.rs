//! Documentation Table Types
//!
//! Serde types for the embedded TOML tables and their runtime form.

use std::collections::HashMap;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// Root table file structure (matches TOML)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DocFile {
    pub table: TableMeta,
    #[serde(default)]
    pub entries: Vec<DocEntry>,
}

/// Table metadata
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TableMeta {
    pub name: String,
    pub description: Option<String>,
}

/// Documentation for a single M-code
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DocEntry {
    pub code: u32,
    pub title: String,
    pub function: String,
    pub purpose: String,
    /// Provenance, e.g. the manual edition or the macro file name
    #[serde(default)]
    pub source: String,
}

/// Runtime table (keyed by code)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocTable {
    pub name: String,
    pub description: Option<String>,
    pub entries: HashMap<u32, DocEntry>,
}

impl DocTable {
    /// An empty table, used when a layer cannot be loaded
    pub fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Parse a table from TOML source
    pub fn from_toml(source: &str) -> Result<Self> {
        let file: DocFile = toml::from_str(source).context("invalid documentation table")?;
        Self::try_from(file)
    }

    pub fn get(&self, code: u32) -> Option<&DocEntry> {
        self.entries.get(&code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<DocFile> for DocTable {
    type Error = anyhow::Error;

    fn try_from(file: DocFile) -> Result<Self> {
        let mut entries = HashMap::with_capacity(file.entries.len());

        for entry in file.entries {
            let code = entry.code;
            if entries.insert(code, entry).is_some() {
                bail!("table '{}' defines M{} more than once", file.table.name, code);
            }
        }

        Ok(Self {
            name: file.table.name,
            description: file.table.description,
            entries,
        })
    }
}
