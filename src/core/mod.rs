//! Extraction engine.
//!
//! - `ast`: serialized template syntax tree
//! - `registry`: translation function signatures
//! - `visit`: visitor trait and prioritized traversal
//! - `extract`: message extractor and its records
//! - `parsers`, `file_scanner`: loading trees from disk
//! - `context`: project-wide extraction run

pub mod ast;
pub mod context;
pub mod extract;
pub mod file_scanner;
pub mod parsers;
pub mod registry;
pub mod visit;

pub use context::{ExtractContext, ExtractionOutput, TemplateMessages, extract_template};
