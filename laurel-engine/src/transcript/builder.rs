//! Composes one person's transcript from their earned accolades.

use rustc_hash::FxHashMap;

use laurel_core::errors::RenderError;
use laurel_core::tables::Row;

use crate::writeups::TemplateStore;

/// Builds transcripts for roster rows against one template store.
///
/// Section order is the writeups file's row order - explicit and
/// deterministic, independent of how the roster happens to order its
/// flag columns.
pub struct TranscriptBuilder<'a> {
    store: &'a TemplateStore,
    variable_columns: &'a [String],
}

impl<'a> TranscriptBuilder<'a> {
    pub fn new(store: &'a TemplateStore, variable_columns: &'a [String]) -> Self {
        Self {
            store,
            variable_columns,
        }
    }

    /// Substitution context for one person: every non-accolade column,
    /// stringified. An absent cell becomes the literal `"None"`.
    pub fn variables(&self, row: Row<'_>) -> FxHashMap<String, String> {
        self.variable_columns
            .iter()
            .map(|col| {
                let value = row.get(col).unwrap_or("None").to_string();
                (col.clone(), value)
            })
            .collect()
    }

    /// Build the transcript for one roster row.
    ///
    /// For every store entry whose flag is set to "yes" (any casing) on
    /// this row, the writeup is rendered against the person's variable
    /// context; rendered sections are joined with a single space. A
    /// person with no earned accolades yields the empty string. A
    /// writeup referencing a variable outside the context propagates
    /// [`RenderError::MissingVariable`] to the caller.
    pub fn build(&self, row: Row<'_>) -> Result<String, RenderError> {
        let context = self.variables(row);
        let mut sections = Vec::new();

        for (flag_column, template) in self.store.iter() {
            let earned = row
                .get(flag_column)
                .is_some_and(|v| v.eq_ignore_ascii_case("yes"));
            if earned {
                sections.push(template.render(&context)?);
            }
        }

        Ok(sections.join(" "))
    }
}
