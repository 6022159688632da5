use crate::core::TemplateMessages;
use crate::issues::Issue;

use super::super::args::OutputFormat;

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ExtractSummary {
    /// Templates processed successfully, sorted by path.
    pub templates: Vec<TemplateMessages>,
    /// Number of template trees found by the scan.
    pub templates_scanned: usize,
    pub format: OutputFormat,
}

impl ExtractSummary {
    pub fn message_count(&self) -> usize {
        self.templates.iter().map(|t| t.messages.len()).sum()
    }
}

#[derive(Debug)]
pub struct InitSummary {
    /// Set when the config file could not be created.
    pub error: Option<String>,
}

/// Result of running a command.
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// Issues found during extraction, sorted by location.
    pub issues: Vec<Issue>,
}
