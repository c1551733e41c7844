//! Name-keyed command registry.
//!
//! `dispatch` is the uniform boolean contract: failures are logged with
//! their kind and reported as `false`, as is an output that is not a
//! success. `run` hands the error back for callers that report it
//! themselves.

use std::collections::BTreeMap;

use crate::error::{CrulesError, CrulesResult};

use super::add::AddCommand;
use super::command::{Command, CommandArgs, CommandContext, CommandOutput};
use super::deploy::DeployCommand;
use super::init::InitCommand;
use super::list::ListCommand;
use super::templates::TemplatesCommand;
use super::validate::ValidateCommand;

#[derive(Default)]
pub struct CommandRegistry {
    commands: BTreeMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in command under its own name
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        let commands: [Box<dyn Command>; 6] = [
            Box::new(InitCommand),
            Box::new(DeployCommand),
            Box::new(AddCommand),
            Box::new(ListCommand),
            Box::new(TemplatesCommand),
            Box::new(ValidateCommand),
        ];
        for command in commands {
            registry.register(command.name(), command);
        }
        registry
    }

    /// Register `command` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, command: Box<dyn Command>) {
        self.commands.insert(name.into(), command);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|command| command.as_ref())
    }

    /// Registered names, sorted
    pub fn list_commands(&self) -> Vec<&str> {
        self.commands.keys().map(String::as_str).collect()
    }

    pub fn help(&self, name: &str) -> String {
        match self.get(name) {
            Some(command) => format!("{name}: {}", command.summary()),
            None => "Command not found".to_string(),
        }
    }

    pub fn run(
        &self,
        name: &str,
        ctx: &CommandContext,
        args: &CommandArgs,
    ) -> CrulesResult<CommandOutput> {
        let command = self.get(name).ok_or_else(|| CrulesError::UnknownCommand {
            name: name.to_string(),
        })?;
        tracing::info!(command = name, "running command");
        command.execute(ctx, args)
    }

    pub fn dispatch(&self, name: &str, ctx: &CommandContext, args: &CommandArgs) -> bool {
        match self.run(name, ctx, args) {
            Ok(output) => output.is_success(),
            Err(err) => {
                tracing::warn!(command = name, kind = %err.kind(), error = %err, "command failed");
                false
            }
        }
    }
}
