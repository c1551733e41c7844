//! `deploy` - redeploy rules and notes of the template named in the config.

use crate::domain::value_objects::AssetCategory;
use crate::error::CrulesResult;

use super::command::{arg, Command, CommandArgs, CommandContext, CommandOutput};

#[derive(Debug, Clone, Copy, Default)]
pub struct DeployCommand;

impl Command for DeployCommand {
    fn name(&self) -> &'static str {
        "deploy"
    }

    fn summary(&self) -> &'static str {
        "Deploy rules and notes of the template recorded in .crules/config.yaml"
    }

    fn execute(&self, ctx: &CommandContext, args: &CommandArgs) -> CrulesResult<CommandOutput> {
        let force = args.flag(arg::FORCE);
        let root = ctx.locate_root()?;
        let name = ctx.config_store(&root)?.template_name()?;

        let template = ctx.resolver().resolve(&root, &name);
        let context = ctx.render_context(&root, &template, force);
        let report = ctx
            .deployer()
            .deploy_all(&template, &root, &AssetCategory::ALL, force, &context)?;

        Ok(CommandOutput::Deployed {
            template: name.to_string(),
            report,
        })
    }
}
