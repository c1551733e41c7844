//! Application Layer
//!
//! Commands that orchestrate the domain services, and the registry that
//! dispatches them by name.

pub mod add;
pub mod command;
pub mod deploy;
pub mod init;
pub mod list;
pub mod registry;
pub mod templates;
pub mod validate;

#[cfg(test)]
mod test_support;

pub use add::AddCommand;
pub use command::{arg, Command, CommandArgs, CommandContext, CommandOutput};
pub use deploy::DeployCommand;
pub use init::InitCommand;
pub use list::ListCommand;
pub use registry::CommandRegistry;
pub use templates::TemplatesCommand;
pub use validate::ValidateCommand;
