//! In-memory table loaded from a CSV file.
//!
//! Column order and row order follow the file exactly; everything that
//! iterates a `Table` is therefore deterministic across runs.

use std::path::Path;

use crate::errors::TableError;

/// One CSV file, fully loaded.
#[derive(Debug, Clone)]
pub struct Table {
    path: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// Borrowed view of one row, resolving cells by column name.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    table: &'a Table,
    index: usize,
}

impl Table {
    /// Load a CSV file.
    ///
    /// Fails if the file does not exist, does not carry a `.csv`
    /// extension, cannot be parsed, or contains zero data rows.
    pub fn load(path: &Path) -> Result<Self, TableError> {
        // Named to stay clear of `tracing`'s `display` field shorthand.
        let display_path = path.display().to_string();

        if !path.exists() {
            return Err(TableError::FileNotFound { path: display_path });
        }
        let is_csv = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
        if !is_csv {
            return Err(TableError::Extension { path: display_path });
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .map_err(|e| Self::map_csv_error(&display_path, e))?;

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| Self::map_csv_error(&display_path, e))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| Self::map_csv_error(&display_path, e))?;
            rows.push(record.iter().map(|c| c.to_string()).collect());
        }

        if headers.is_empty() || rows.is_empty() {
            return Err(TableError::Empty { path: display_path });
        }

        tracing::debug!(
            path = %display_path,
            columns = headers.len(),
            rows = rows.len(),
            "Loaded table"
        );

        Ok(Self {
            path: display_path,
            headers,
            rows,
        })
    }

    fn map_csv_error(path: &str, e: csv::Error) -> TableError {
        if e.is_io_error() {
            match e.into_kind() {
                csv::ErrorKind::Io(io) => TableError::Io {
                    path: path.to_string(),
                    source: io,
                },
                other => TableError::Parse {
                    path: path.to_string(),
                    message: format!("{other:?}"),
                },
            }
        } else {
            TableError::Parse {
                path: path.to_string(),
                message: e.to_string(),
            }
        }
    }

    /// Path the table was loaded from.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Column names in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        (index < self.rows.len()).then_some(Row { table: self, index })
    }

    /// Iterate all rows in file order.
    pub fn iter(&self) -> impl Iterator<Item = Row<'_>> {
        (0..self.rows.len()).map(move |index| Row { table: self, index })
    }
}

impl<'a> Row<'a> {
    /// Zero-based row index within the table's data rows.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Resolve a cell by column name.
    ///
    /// Returns `None` for an unknown column, a short row, or an empty
    /// cell - an empty cell counts as absent, matching the semantics of
    /// a blank field in the source file. Cell content is returned as
    /// written: padding in a flag value makes it invalid rather than
    /// silently accepted, and writeup text keeps its whitespace.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let col = self.table.column_index(column)?;
        let cell = self.table.rows[self.index].get(col)?.as_str();
        if cell.is_empty() {
            None
        } else {
            Some(cell)
        }
    }
}
