use anyhow::Result;

use super::super::args::ExtractCommand;
use super::{CommandResult, CommandSummary, ExtractSummary, helper::finish};
use crate::core::ExtractContext;

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = ExtractContext::new(args)?;
    let output = ctx.run();

    Ok(finish(
        CommandSummary::Extract(ExtractSummary {
            templates: output.templates,
            templates_scanned: ctx.files.len(),
            format: args.format,
        }),
        output.issues,
    ))
}
