//! `add` - deploy a single rule.
//!
//! The template comes from the `template` argument, falling back to the
//! `template_name` recorded by `init`. `<rule>.md.tera` is rendered and
//! takes precedence over a plain `<rule>.md`.

use crate::domain::services::{DeployMode, DeployPair, DeployReport};
use crate::domain::value_objects::{AssetCategory, UnitName};
use crate::error::{CrulesError, CrulesResult};

use super::command::{arg, Command, CommandArgs, CommandContext, CommandOutput};

#[derive(Debug, Clone, Copy, Default)]
pub struct AddCommand;

impl Command for AddCommand {
    fn name(&self) -> &'static str {
        "add"
    }

    fn summary(&self) -> &'static str {
        "Deploy one rule of a template set into .cursor/rules"
    }

    fn execute(&self, ctx: &CommandContext, args: &CommandArgs) -> CrulesResult<CommandOutput> {
        let root = ctx.locate_root()?;
        let rule = UnitName::parse("rule", args.require(arg::RULE_NAME)?)?;
        let force = args.flag(arg::FORCE);

        let name = match args.value(arg::TEMPLATE) {
            Some(template) => UnitName::parse("template", template)?,
            None => ctx.config_store(&root)?.template_name()?,
        };
        let template = ctx.resolver().resolve(&root, &name);

        let category = AssetCategory::Rules;
        let templated = template.template_asset_path(category, &rule);
        let plain = template.asset_path(category, &rule);
        let (source, mode) = if ctx.fs().is_file(&templated) {
            (templated, DeployMode::Render)
        } else if ctx.fs().is_file(&plain) {
            (plain, DeployMode::Copy)
        } else {
            return Err(CrulesError::AssetNotFound { path: plain });
        };

        let destination_dir = root.destination_dir(category);
        ctx.fs().create_dir_all(&destination_dir)?;
        let pair = DeployPair {
            source,
            destination: destination_dir.join(category.destination_file_name(rule.as_str())),
            mode,
        };

        let context = ctx.render_context(&root, &template, force);
        let action = ctx.deployer().deploy_one(&pair, &context, force)?;
        tracing::info!(rule = %rule, template = %name, ?action, "added rule");

        let mut report = DeployReport::default();
        report.record(action, &pair.destination);
        Ok(CommandOutput::Deployed {
            template: name.to_string(),
            report,
        })
    }
}
