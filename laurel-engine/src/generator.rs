//! The generator façade - loads and validates both inputs once, then
//! serves any number of export calls over the immutable tables.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use laurel_core::config::LaurelConfig;
use laurel_core::errors::{GeneratorError, RenderError};
use laurel_core::tables::{Row, Table};

use crate::export;
use crate::transcript::TranscriptBuilder;
use crate::validate::{validate_roster, validate_writeups};
use crate::writeups::TemplateStore;

/// Generates transcripts from a roster and a writeups table.
///
/// Construction validates both files (aggregate failure carries every
/// problem found), loads them, and builds the template store. All state
/// is read-only afterwards; each export call produces fresh artifacts.
#[derive(Debug)]
pub struct TranscriptGenerator {
    config: LaurelConfig,
    roster: Table,
    store: TemplateStore,
    accolade_columns: Vec<String>,
    variable_columns: Vec<String>,
}

impl TranscriptGenerator {
    pub fn new(
        roster_path: &Path,
        writeups_path: &Path,
        config: LaurelConfig,
    ) -> Result<Self, GeneratorError> {
        validate_roster(roster_path, &config).into_result()?;
        validate_writeups(writeups_path).into_result()?;

        let roster = Table::load(roster_path)?;
        let writeups = Table::load(writeups_path)?;

        let prefix = config.roster.effective_accolade_prefix();
        let store = TemplateStore::build(&writeups, prefix)?;

        let (accolade_columns, variable_columns): (Vec<String>, Vec<String>) = roster
            .headers()
            .iter()
            .cloned()
            .partition(|h| h.starts_with(prefix));

        tracing::info!(
            people = roster.row_count(),
            writeups = store.len(),
            accolade_columns = accolade_columns.len(),
            "Generator ready"
        );

        Ok(Self {
            config,
            roster,
            store,
            accolade_columns,
            variable_columns,
        })
    }

    pub fn config(&self) -> &LaurelConfig {
        &self.config
    }

    pub fn roster(&self) -> &Table {
        &self.roster
    }

    pub fn store(&self) -> &TemplateStore {
        &self.store
    }

    /// Roster columns carrying the accolade prefix, in file order.
    pub fn accolade_columns(&self) -> &[String] {
        &self.accolade_columns
    }

    /// Roster columns available for substitution, in file order.
    pub fn variable_columns(&self) -> &[String] {
        &self.variable_columns
    }

    fn builder(&self) -> TranscriptBuilder<'_> {
        TranscriptBuilder::new(&self.store, &self.variable_columns)
    }

    /// Substitution context for one roster row.
    pub fn person_variables(&self, row: Row<'_>) -> FxHashMap<String, String> {
        self.builder().variables(row)
    }

    /// Build one person's transcript.
    pub fn transcript(&self, row: Row<'_>) -> Result<String, RenderError> {
        self.builder().build(row)
    }

    /// Export all transcripts as one CSV. Returns the file path.
    pub fn export_table(&self, output_dir: Option<&Path>) -> Result<PathBuf, GeneratorError> {
        export::export_table(&self.roster, &self.builder(), &self.config, output_dir)
    }

    /// Export one rendered document per person. Returns the directory.
    pub fn export_documents(
        &self,
        template_path: &Path,
        output_dir: Option<&Path>,
    ) -> Result<PathBuf, GeneratorError> {
        export::export_documents(
            &self.roster,
            &self.builder(),
            &self.config,
            template_path,
            output_dir,
        )
    }
}
