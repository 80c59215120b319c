use anyhow::{Ok, Result};

use super::super::args::GenerateCommand;
use super::{CommandResult, CommandSummary, GenerateSummary};
use crate::{core::generate_override, sync::read_lines};

pub fn generate(cmd: GenerateCommand) -> Result<CommandResult> {
    let default_lines = read_lines(&cmd.file)?;

    Ok(CommandResult {
        summary: CommandSummary::Generate(GenerateSummary {
            lines: generate_override(&default_lines),
        }),
        error_count: 0,
        warning_count: 0,
        exit_on_errors: true,
    })
}
