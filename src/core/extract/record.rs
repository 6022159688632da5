use serde::{Deserialize, Serialize};

/// Translation domain every extracted message is filed under.
pub const DEFAULT_DOMAIN: &str = "messages";

/// A translatable string found in a template, with its provenance.
///
/// Serialized with `null` for the optional fields so catalog writers see the
/// full tuple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExtractionRecord {
    /// The literal message text.
    pub text: String,
    /// Plural form. Never populated by the call extractor.
    pub plural_text: Option<String>,
    /// Translation domain (namespace) of the message.
    pub domain: String,
    /// Translator notes.
    pub notes: Option<String>,
    /// Disambiguation context (gettext `msgctxt`).
    pub context: Option<String>,
    /// Source line of the call (1-based).
    pub line: usize,
}

impl ExtractionRecord {
    /// A message in the default domain with no plural, notes or context.
    pub fn message(text: impl Into<String>, line: usize) -> Self {
        Self {
            text: text.into(),
            plural_text: None,
            domain: DEFAULT_DOMAIN.to_string(),
            notes: None,
            context: None,
            line,
        }
    }
}
