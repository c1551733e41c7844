//! crules - deploy named rule template sets into a project
//!
//! A project is marked by a `.crules/` directory. Template sets live in
//! `.crules/templates/<name>/{rules,notes}`; their markdown assets are
//! deployed into `.cursor/rules/*.mdc` and `.notes/*.md`. Existing files
//! are left alone unless a deploy is forced.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{Command, CommandArgs, CommandContext, CommandOutput, CommandRegistry};
pub use domain::entities::{Config, ProjectRoot, TemplateSet};
pub use domain::services::{DeployReport, ProjectRootLocator, TemplateResolver};
pub use error::{CrulesError, CrulesResult, ErrorKind};
