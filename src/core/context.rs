use std::{collections::BTreeSet, path::Path};

use anyhow::{Context as _, Result, anyhow};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::{
    cli::args::ExtractArgs,
    config::{Config, load_config},
    core::{
        extract::{ExtractionRecord, MessageExtractor},
        file_scanner::scan_files,
        parsers::tree::load_tree,
        registry::{FunctionRegistry, FunctionTable},
        visit::{FaultPolicy, NodeTraverser},
    },
    issues::{Issue, MalformedCallIssue, ParseErrorIssue},
};

/// Messages extracted from one template, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateMessages {
    pub file_path: String,
    pub messages: Vec<ExtractionRecord>,
}

/// Output of a project-wide extraction run.
#[derive(Debug, Default)]
pub struct ExtractionOutput {
    /// Successfully processed templates, sorted by path.
    pub templates: Vec<TemplateMessages>,
    pub issues: Vec<Issue>,
}

/// Project extraction context.
///
/// Configuration is resolved with the following priority (highest to lowest):
/// 1. CLI arguments (e.g., `--on-error abort`, explicit paths)
/// 2. `.gettextscanrc.json` config file
/// 3. Built-in defaults
pub struct ExtractContext {
    pub config: Config,
    /// Serialized template trees to process.
    pub files: BTreeSet<String>,
    registry: FunctionTable,
}

impl ExtractContext {
    /// Load configuration and scan for template trees.
    ///
    /// # Errors
    ///
    /// Returns error if the config file is invalid.
    pub fn new(args: &ExtractArgs) -> Result<Self> {
        let source_root = args
            .common
            .source_root
            .clone()
            .unwrap_or_else(|| ".".into());
        let base_dir = source_root
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", source_root))?;

        let config_result = load_config(Path::new(base_dir))?;
        if !config_result.from_file {
            debug!("No config file found, using default configuration");
        }

        let mut config = config_result.config;
        if let Some(policy) = args.on_error {
            config.on_error = policy;
        }
        if !args.paths.is_empty() {
            config.includes = args
                .paths
                .iter()
                .map(|p| p.to_string_lossy().into_owned())
                .collect();
        }

        let scan_result = scan_files(base_dir, &config.includes, &config.ignores);
        if scan_result.skipped_count > 0 {
            warn!(
                "{} path(s) skipped due to access errors",
                scan_result.skipped_count
            );
        }
        info!(files = scan_result.files.len(), "scanned template trees");

        Ok(Self {
            config,
            files: scan_result.files,
            registry: FunctionTable::translation_functions(),
        })
    }

    /// Extract every template in parallel, one extractor per template.
    pub fn run(&self) -> ExtractionOutput {
        let policy = self.config.on_error;
        let results: Vec<(Option<TemplateMessages>, Vec<Issue>)> = self
            .files
            .par_iter()
            .map(|file_path| extract_template(file_path, &self.registry, policy))
            .collect();

        let mut output = ExtractionOutput::default();
        for (template, issues) in results {
            output.templates.extend(template);
            output.issues.extend(issues);
        }
        output
            .templates
            .sort_by(|a, b| a.file_path.cmp(&b.file_path));
        output
    }
}

/// Load one template tree and collect its messages.
///
/// Returns `None` for the template when it could not be parsed or a malformed
/// call aborted its pass.
pub fn extract_template(
    file_path: &str,
    registry: &dyn FunctionRegistry,
    policy: FaultPolicy,
) -> (Option<TemplateMessages>, Vec<Issue>) {
    let root = match load_tree(Path::new(file_path)) {
        Ok(root) => root,
        Err(e) => {
            debug!("{} - {:#}", file_path, e);
            let issue = Issue::ParseError(ParseErrorIssue {
                file_path: file_path.to_string(),
                error: format!("{:#}", e),
            });
            return (None, vec![issue]);
        }
    };

    let mut extractor = MessageExtractor::new();
    extractor.enable();

    let mut traverser = NodeTraverser::new(policy);
    traverser.add_visitor(&mut extractor);
    let result = traverser.traverse(&root, registry);
    drop(traverser);

    match result {
        Ok(report) => {
            let messages = extractor.new_session().into_records();
            info!(file = file_path, messages = messages.len(), "extracted");
            let issues = report
                .faults
                .into_iter()
                .map(|error| {
                    Issue::MalformedCall(MalformedCallIssue {
                        file_path: file_path.to_string(),
                        error,
                        aborted: false,
                    })
                })
                .collect();
            (
                Some(TemplateMessages {
                    file_path: file_path.to_string(),
                    messages,
                }),
                issues,
            )
        }
        Err(error) => {
            debug!("{}: extraction aborted: {}", file_path, error);
            let issue = Issue::MalformedCall(MalformedCallIssue {
                file_path: file_path.to_string(),
                error,
                aborted: true,
            });
            (None, vec![issue])
        }
    }
}
