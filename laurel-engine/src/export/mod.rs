//! Exporters - tabular CSV output and per-person rendered documents.

mod document;
mod paths;
mod tabular;

pub use document::export_documents;
pub use paths::{run_timestamp, sanitize_name};
pub use tabular::export_table;
