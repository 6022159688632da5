//! Report formatting and printing utilities.
//!
//! Separate from core logic so the extractor can be used as a library.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use super::args::OutputFormat;
use super::commands::{CommandResult, CommandSummary, ExtractSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::TemplateMessages;
use crate::core::extract::ExtractionRecord;
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the outcome of a command.
pub fn print(result: &CommandResult) -> Result<()> {
    match &result.summary {
        CommandSummary::Extract(summary) => match summary.format {
            OutputFormat::Human => {
                let mut out = io::stdout().lock();
                print_templates_to(&summary.templates, &mut out);
                report_to(&result.issues, &mut out);
                print_extract_summary_to(summary, &mut out);
                print_problems_to(result, &mut out);
            }
            OutputFormat::Json => {
                print_json_to(&summary.templates, &mut io::stdout().lock())?;
                report_to(&result.issues, &mut io::stderr().lock());
            }
        },
        CommandSummary::Init(summary) => print_init(summary),
    }
    Ok(())
}

/// JSON shape of one template's messages.
#[derive(Serialize)]
struct TemplateOutput<'a> {
    file: &'a str,
    messages: &'a [ExtractionRecord],
}

/// Write extracted messages as a pretty-printed JSON array.
pub fn print_json_to<W: Write>(templates: &[TemplateMessages], writer: &mut W) -> Result<()> {
    let output: Vec<TemplateOutput<'_>> = templates
        .iter()
        .map(|t| TemplateOutput {
            file: &t.file_path,
            messages: &t.messages,
        })
        .collect();
    let json = serde_json::to_string_pretty(&output).context("Failed to serialize messages")?;
    writeln!(writer, "{}", json).context("Failed to write output")?;
    Ok(())
}

/// Print each template's messages, one line per message.
///
/// Templates without messages are omitted.
pub fn print_templates_to<W: Write>(templates: &[TemplateMessages], writer: &mut W) {
    for template in templates.iter().filter(|t| !t.messages.is_empty()) {
        let width = template
            .messages
            .iter()
            .map(|m| m.line)
            .max()
            .map(|n| n.to_string().len())
            .unwrap_or(1);

        let _ = writeln!(writer, "{}", template.file_path.bold());
        for message in &template.messages {
            let _ = writeln!(
                writer,
                "  {:>width$} {} {:?}",
                message.line.to_string().blue(),
                "|".blue(),
                message.text,
                width = width
            );
        }
        let _ = writeln!(writer);
    }
}

/// Print issues in cargo-style format.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    for issue in issues {
        print_issue(issue, writer);
    }
}

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    match issue.location() {
        ReportLocation::Source { path, line } => {
            let _ = writeln!(writer, "  {} {}:{}", "-->".blue(), path, line);
        }
        ReportLocation::File { path } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "hint:".bold().cyan(), hint);
    }

    let _ = writeln!(writer);
}

/// Print the closing summary of an extraction run.
pub fn print_extract_summary_to<W: Write>(summary: &ExtractSummary, writer: &mut W) {
    let messages = summary.message_count();
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Extracted {} {} from {} {}",
            messages,
            if messages == 1 { "message" } else { "messages" },
            summary.templates_scanned,
            if summary.templates_scanned == 1 {
                "template"
            } else {
                "templates"
            }
        )
        .green()
    );
}

/// Print a problem count line, if there are any problems.
pub fn print_problems_to<W: Write>(result: &CommandResult, writer: &mut W) {
    let total = result.error_count + result.warning_count;
    if total == 0 {
        return;
    }
    let _ = writeln!(
        writer,
        "{} {} {} ({} {}, {} {})",
        FAILURE_MARK.red(),
        total,
        if total == 1 { "problem" } else { "problems" },
        result.error_count,
        if result.error_count == 1 { "error" } else { "errors" }.red(),
        result.warning_count,
        if result.warning_count == 1 {
            "warning"
        } else {
            "warnings"
        }
        .yellow()
    );
}

fn print_init(summary: &InitSummary) {
    match &summary.error {
        Some(error) => eprintln!("{} {}", "Error:".bold().red(), error),
        None => println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        ),
    }
}
