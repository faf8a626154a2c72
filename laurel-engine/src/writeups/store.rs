//! Template store - accolade identifier to writeup template, in
//! writeups-file row order.

use rustc_hash::FxHashMap;

use laurel_core::errors::TableError;
use laurel_core::tables::Table;

use crate::validate::REQUIRED_WRITEUP_COLUMNS;

use super::WriteupTemplate;

/// Read-only mapping from prefixed accolade identifier (the roster flag
/// column name) to its writeup template.
///
/// Iteration order is the writeups file's row order, which makes
/// transcript section order deterministic. Lookup is O(1) via a side
/// index.
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    entries: Vec<(String, WriteupTemplate)>,
    index: FxHashMap<String, usize>,
}

impl TemplateStore {
    /// Build the store from a loaded writeups table.
    ///
    /// Each identifier is namespaced with `prefix` so it matches the
    /// corresponding flag column in the roster. Missing required
    /// columns are fatal - the validator should have caught that
    /// already, so this signals a malformed table reached too far.
    pub fn build(writeups: &Table, prefix: &str) -> Result<Self, TableError> {
        for column in REQUIRED_WRITEUP_COLUMNS {
            if !writeups.has_column(column) {
                return Err(TableError::MissingColumn {
                    path: writeups.path().to_string(),
                    column: column.to_string(),
                });
            }
        }

        let mut store = Self::default();
        for row in writeups.iter() {
            let (Some(accolade), Some(text)) = (row.get("accolade"), row.get("writeup")) else {
                tracing::warn!(row = row.index(), "Skipping writeups row with blank cells");
                continue;
            };
            let key = format!("{prefix}{accolade}");
            let template = WriteupTemplate::new(accolade, text);
            match store.index.get(&key) {
                // Repeated identifier: last writeup wins, position kept.
                Some(&pos) => store.entries[pos].1 = template,
                None => {
                    store.index.insert(key.clone(), store.entries.len());
                    store.entries.push((key, template));
                }
            }
        }

        Ok(store)
    }

    pub fn get(&self, key: &str) -> Option<&WriteupTemplate> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(flag column name, template)` in writeups-file row order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &WriteupTemplate)> {
        self.entries.iter().map(|(k, t)| (k.as_str(), t))
    }
}
