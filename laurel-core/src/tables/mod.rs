//! Tabular input model - ordered in-memory view of a delimited file.

pub mod table;

pub use table::{Row, Table};
