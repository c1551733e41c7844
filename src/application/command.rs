//! Command contract shared by every operation the registry dispatches.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::domain::entities::{ProjectRoot, TemplateSet};
use crate::domain::ports::{ConfigRepository, FileSystem, RenderContext, Renderer};
use crate::domain::services::{
    ConfigStore, DeployReport, Deployer, ProjectRootLocator, TemplateCheck, TemplateResolver,
    TemplateSummary,
};
use crate::error::{CrulesError, CrulesResult};

/// Argument names understood by the built-in commands
pub mod arg {
    pub const PROJECT_NAME: &str = "project_name";
    pub const RULE_NAME: &str = "rule_name";
    pub const TEMPLATE: &str = "template";
    pub const FORCE: &str = "force";
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ArgValue {
    Text(String),
    Flag(bool),
}

/// Arguments of a single invocation, owned by that invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandArgs {
    values: BTreeMap<String, ArgValue>,
}

impl CommandArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), ArgValue::Text(value.into()));
        self
    }

    /// Set `name` only when `value` is present.
    pub fn with_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.with(name, value),
            None => self,
        }
    }

    pub fn with_flag(mut self, name: impl Into<String>, on: bool) -> Self {
        self.values.insert(name.into(), ArgValue::Flag(on));
        self
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(ArgValue::Text(value)) => Some(value),
            _ => None,
        }
    }

    pub fn require(&self, name: &str) -> CrulesResult<&str> {
        self.value(name).ok_or_else(|| CrulesError::MissingArgument {
            name: name.to_string(),
        })
    }

    /// Absent flags are off.
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(ArgValue::Flag(true)))
    }
}

/// What a command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    Deployed {
        template: String,
        report: DeployReport,
    },
    /// Deployed rule names, extension stripped
    Rules(Vec<String>),
    Templates(Vec<TemplateSummary>),
    Validation(TemplateCheck),
}

impl CommandOutput {
    /// A failed validation is reported like any other output but exits
    /// non-zero.
    pub fn is_success(&self) -> bool {
        match self {
            CommandOutput::Validation(check) => check.is_valid(),
            _ => true,
        }
    }
}

/// Ports and the start directory a command runs against.
pub struct CommandContext {
    fs: Box<dyn FileSystem>,
    renderer: Box<dyn Renderer>,
    config_repo: Box<dyn ConfigRepository>,
    start_dir: PathBuf,
}

impl CommandContext {
    pub fn new(
        fs: Box<dyn FileSystem>,
        renderer: Box<dyn Renderer>,
        config_repo: Box<dyn ConfigRepository>,
        start_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fs,
            renderer,
            config_repo,
            start_dir: start_dir.into(),
        }
    }

    pub fn fs(&self) -> &dyn FileSystem {
        self.fs.as_ref()
    }

    pub fn start_dir(&self) -> &std::path::Path {
        &self.start_dir
    }

    pub fn locate_root(&self) -> CrulesResult<ProjectRoot> {
        ProjectRootLocator::new(self.fs()).require(&self.start_dir)
    }

    pub fn resolver(&self) -> TemplateResolver<'_> {
        TemplateResolver::new(self.fs(), self.renderer.as_ref())
    }

    pub fn deployer(&self) -> Deployer<'_> {
        Deployer::new(self.fs(), self.renderer.as_ref())
    }

    pub fn config_store(&self, root: &ProjectRoot) -> CrulesResult<ConfigStore<'_>> {
        ConfigStore::open(self.config_repo.as_ref(), root.config_path())
    }

    /// Variables every rendered asset can use
    pub fn render_context(
        &self,
        root: &ProjectRoot,
        template: &TemplateSet,
        force: bool,
    ) -> RenderContext {
        RenderContext::new()
            .with("project_root", root.path().to_string_lossy())
            .with("template_name", template.name().as_str())
            .with("force", force.to_string())
    }
}

/// An executable operation registered under a name.
pub trait Command {
    fn name(&self) -> &'static str;

    /// One-line description for help output
    fn summary(&self) -> &'static str;

    fn execute(&self, ctx: &CommandContext, args: &CommandArgs) -> CrulesResult<CommandOutput>;
}
