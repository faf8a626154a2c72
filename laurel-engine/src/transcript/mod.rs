//! Per-person transcript composition.

mod builder;

pub use builder::TranscriptBuilder;
