//! Translation message extraction.
//!
//! - `record`: the `ExtractionRecord` produced for each message
//! - `session`: per-traversal record collection and call matching
//! - `extractor`: the toggleable `MessageExtractor` visitor
//! - `error`: malformed call diagnostics

pub mod error;
pub mod extractor;
pub mod record;
pub mod session;

pub use error::ExtractError;
pub use extractor::{MessageExtractor, extract_messages};
pub use record::{DEFAULT_DOMAIN, ExtractionRecord};
pub use session::{ExtractionSession, TRANSLATION_FUNCTIONS, is_translation_function};
