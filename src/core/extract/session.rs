use tracing::debug;

use super::{ExtractError, ExtractionRecord};
use crate::core::ast::{NodeKind, SyntaxNode};
use crate::core::registry::FunctionRegistry;

/// Translation helpers whose first argument is collected.
///
/// The older `transchoice` helper is not collected.
pub const TRANSLATION_FUNCTIONS: &[&str] = &["_", "__", "_n", "__n"];

/// Returns true if `name` is one of the collected translation helpers.
pub fn is_translation_function(name: &str) -> bool {
    TRANSLATION_FUNCTIONS.contains(&name)
}

/// Records collected during a single traversal.
///
/// A session is the explicit context of one extraction pass; start a new one
/// for every template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionSession {
    records: Vec<ExtractionRecord>,
}

impl ExtractionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records in traversal order.
    pub fn records(&self) -> &[ExtractionRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<ExtractionRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Inspect `node` and append a record if it is a translation call.
    ///
    /// Returns `Ok(true)` when a record was appended and `Ok(false)` when the
    /// node is not a call of interest. A matched call that cannot yield a
    /// string message is reported as an error and leaves the session untouched.
    pub fn record_call(
        &mut self,
        node: &SyntaxNode,
        registry: &dyn FunctionRegistry,
    ) -> Result<bool, ExtractError> {
        if node.kind() != NodeKind::FunctionCall {
            return Ok(false);
        }
        let Some(name) = node.function_name() else {
            return Ok(false);
        };
        if !is_translation_function(name) {
            return Ok(false);
        }

        let line = node.line();
        if registry.lookup(name).is_none() {
            return Err(ExtractError::UnregisteredFunction {
                function: name.to_string(),
                line,
            });
        }

        let first = node
            .arguments()
            .and_then(<[SyntaxNode]>::first)
            .ok_or_else(|| ExtractError::MissingArgument {
                function: name.to_string(),
                line,
            })?;
        let value = first
            .literal_value()
            .ok_or_else(|| ExtractError::NonLiteralArgument {
                function: name.to_string(),
                line,
            })?;
        let text = value.as_str().ok_or_else(|| ExtractError::NonStringLiteral {
            function: name.to_string(),
            line,
        })?;

        debug!(function = name, line, text, "collected message");
        self.records.push(ExtractionRecord::message(text, line));
        Ok(true)
    }
}
