use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::task::validate_task;

use super::CommandDefinition;

const USAGE: &str = r#"validate-task '{"titulo": "...", "prioridade": "baixa|media|alta"}'"#;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "validate-task",
        "Check a task record given as JSON",
        USAGE,
        cmd_validate_task,
    )]
}

fn cmd_validate_task(_context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return Err(CommandError::InvalidArguments(format!("Usage: {USAGE}")));
    }
    let task: serde_json::Value = serde_json::from_str(&args.join(" "))?;
    let priority = validate_task(&task)?;
    io::print_success(format!("Task is valid (priority: {priority})."));
    Ok(())
}
