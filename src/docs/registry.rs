//! Documentation Registry
//!
//! Merged, read-only M-code lookup. The macro set overrides the manual
//! entry for a code as a whole; fields are never mixed between layers.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::schema::{DocEntry, DocTable};

const MANUAL_TABLE: &str = include_str!("../../resources/docs/manual.toml");
const MACRO_TABLE: &str = include_str!("../../resources/docs/macros.toml");

static BUILTIN: LazyLock<DocRegistry> = LazyLock::new(|| {
    let manual = load_embedded("manual", MANUAL_TABLE);
    let macros = load_embedded("macros", MACRO_TABLE);
    let registry = DocRegistry::from_tables(&manual, &macros);
    log::debug!(
        "Loaded {} M-code entries ({} manual, {} macro set)",
        registry.len(),
        manual.len(),
        macros.len()
    );
    registry
});

/// Merged M-code documentation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocRegistry {
    entries: HashMap<u32, DocEntry>,
}

impl DocRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry built from the embedded tables
    pub fn builtin() -> &'static DocRegistry {
        &BUILTIN
    }

    /// Merge the manual table with the macro set on top of it
    pub fn from_tables(manual: &DocTable, overrides: &DocTable) -> Self {
        let mut registry = Self::new();
        registry.merge(manual);
        registry.merge(overrides);
        registry
    }

    /// Layer a table over the current entries. Existing codes are replaced.
    pub fn merge(&mut self, table: &DocTable) {
        for (code, entry) in &table.entries {
            self.entries.insert(*code, entry.clone());
        }
    }

    /// Look up any integer code; negative or oversized codes are simply absent
    pub fn lookup(&self, code: i64) -> Option<&DocEntry> {
        let code = u32::try_from(code).ok()?;
        self.entries.get(&code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All documented codes in ascending order
    pub fn codes(&self) -> Vec<u32> {
        let mut codes: Vec<u32> = self.entries.keys().copied().collect();
        codes.sort_unstable();
        codes
    }
}

fn load_embedded(name: &str, source: &str) -> DocTable {
    match DocTable::from_toml(source) {
        Ok(table) => table,
        Err(e) => {
            log::warn!("Failed to parse embedded '{}' table: {:#}", name, e);
            DocTable::empty(name)
        }
    }
}
