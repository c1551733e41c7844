//! `init` - deploy the rules of a named template set and remember the name.

use crate::domain::entities::TEMPLATE_NAME_KEY;
use crate::domain::value_objects::{AssetCategory, UnitName};
use crate::error::CrulesResult;

use super::command::{arg, Command, CommandArgs, CommandContext, CommandOutput};

#[derive(Debug, Clone, Copy, Default)]
pub struct InitCommand;

impl Command for InitCommand {
    fn name(&self) -> &'static str {
        "init"
    }

    fn summary(&self) -> &'static str {
        "Deploy the rules of a template set into .cursor/rules"
    }

    fn execute(&self, ctx: &CommandContext, args: &CommandArgs) -> CrulesResult<CommandOutput> {
        let root = ctx.locate_root()?;
        let name = UnitName::parse("template", args.require(arg::PROJECT_NAME)?)?;
        let force = args.flag(arg::FORCE);

        // Open before deploying so a broken config fails without side effects
        let mut store = ctx.config_store(&root)?;

        let template = ctx.resolver().resolve(&root, &name);
        let context = ctx.render_context(&root, &template, force);
        let report =
            ctx.deployer()
                .deploy_all(&template, &root, &[AssetCategory::Rules], force, &context)?;

        store.set(TEMPLATE_NAME_KEY, name.as_str())?;

        Ok(CommandOutput::Deployed {
            template: name.to_string(),
            report,
        })
    }
}
