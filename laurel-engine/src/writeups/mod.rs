//! Writeup templates - `${variable}` text blocks keyed by accolade.

mod store;
mod template;

pub use store::TemplateStore;
pub use template::WriteupTemplate;
