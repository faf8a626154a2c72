//! laurel-engine: Transcript generation pipeline
//!
//! This crate turns two validated CSV inputs into personalized
//! transcripts:
//! - Validate: four independent pre-flight checks over the input artifacts
//! - Writeups: `${variable}` writeup templates keyed by accolade
//! - Transcript: per-person composition of earned writeup sections
//! - Export: one CSV of transcripts, or one rendered document per person
//! - Generator: the façade tying loading, validation, and export together

pub mod export;
pub mod generator;
pub mod transcript;
pub mod validate;
pub mod writeups;

// Re-exports for convenience
pub use generator::TranscriptGenerator;
pub use transcript::TranscriptBuilder;
pub use validate::{
    validate_document_template, validate_output_directory, validate_roster,
    validate_writeups,
};
pub use writeups::{TemplateStore, WriteupTemplate};
