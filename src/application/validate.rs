//! `validate` - check that every asset of a template set loads and renders.
//!
//! Templated rules are rendered with the same variables `deploy` provides;
//! nothing is written.

use crate::domain::value_objects::UnitName;
use crate::error::CrulesResult;

use super::command::{arg, Command, CommandArgs, CommandContext, CommandOutput};

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateCommand;

impl Command for ValidateCommand {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn summary(&self) -> &'static str {
        "Check that every asset of a template set loads and renders"
    }

    fn execute(&self, ctx: &CommandContext, args: &CommandArgs) -> CrulesResult<CommandOutput> {
        let root = ctx.locate_root()?;
        let name = UnitName::parse("template", args.require(arg::TEMPLATE)?)?;

        let template = ctx.resolver().resolve(&root, &name);
        let context = ctx.render_context(&root, &template, false);
        let check = ctx.resolver().check(&template, &context)?;

        for failure in check.failures() {
            tracing::info!(template = %name, asset = %failure.path.display(), "asset failed validation");
        }
        Ok(CommandOutput::Validation(check))
    }
}
