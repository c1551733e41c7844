//! `list` - rules currently deployed into `.cursor/rules`.

use crate::domain::value_objects::{asset_stem, AssetCategory, RULES_EXTENSION};
use crate::error::CrulesResult;

use super::command::{Command, CommandArgs, CommandContext, CommandOutput};

#[derive(Debug, Clone, Copy, Default)]
pub struct ListCommand;

impl Command for ListCommand {
    fn name(&self) -> &'static str {
        "list"
    }

    fn summary(&self) -> &'static str {
        "List deployed rules"
    }

    fn execute(&self, ctx: &CommandContext, _args: &CommandArgs) -> CrulesResult<CommandOutput> {
        let root = ctx.locate_root()?;
        let dir = root.destination_dir(AssetCategory::Rules);

        // Nothing deployed yet
        if !ctx.fs().is_dir(&dir) {
            return Ok(CommandOutput::Rules(Vec::new()));
        }

        let rules = ctx
            .fs()
            .list_dir(&dir)?
            .into_iter()
            .filter(|entry| entry.is_file())
            .filter_map(|entry| asset_stem(&entry.name, RULES_EXTENSION).map(str::to_string))
            .collect();
        Ok(CommandOutput::Rules(rules))
    }
}
