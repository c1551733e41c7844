//! `templates` - template sets available under `.crules/templates`.

use crate::error::CrulesResult;

use super::command::{Command, CommandArgs, CommandContext, CommandOutput};

#[derive(Debug, Clone, Copy, Default)]
pub struct TemplatesCommand;

impl Command for TemplatesCommand {
    fn name(&self) -> &'static str {
        "templates"
    }

    fn summary(&self) -> &'static str {
        "List template sets and whether they are usable"
    }

    fn execute(&self, ctx: &CommandContext, _args: &CommandArgs) -> CrulesResult<CommandOutput> {
        let root = ctx.locate_root()?;
        let templates = ctx.resolver().list(&root)?;
        tracing::debug!(count = templates.len(), "listed template sets");
        Ok(CommandOutput::Templates(templates))
    }
}
