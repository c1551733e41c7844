//! Command-line arguments (clap derive) and their mapping to registry calls

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::application::{arg, CommandArgs};

/// crules - deploy Cursor rule templates into a project
#[derive(Parser, Debug)]
#[command(name = "crules")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit one JSON event per result (NDJSON)
    #[arg(long, global = true)]
    pub json: bool,

    /// When to colour human output
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Start root discovery from this directory instead of the current one
    #[arg(short = 'C', long = "directory", value_name = "DIR", global = true)]
    pub directory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deploy the rules of a template set and remember it in the config
    Init {
        /// Template set under .crules/templates
        project_name: String,

        /// Overwrite rules that already exist
        #[arg(short, long)]
        force: bool,
    },

    /// Deploy rules and notes of the template recorded in the config
    Deploy {
        /// Overwrite files that already exist
        #[arg(short, long)]
        force: bool,
    },

    /// Deploy a single rule
    Add {
        /// Rule name without extension
        rule_name: String,

        /// Template set to take the rule from (defaults to the configured one)
        #[arg(short, long)]
        template: Option<String>,

        /// Overwrite the rule if it already exists
        #[arg(short, long)]
        force: bool,
    },

    /// List deployed rules
    List,

    /// List available template sets
    Templates,

    /// Check that every asset of a template set loads and renders
    Validate {
        /// Template set under .crules/templates
        template: String,
    },
}

impl Commands {
    /// Registry name of the command
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Init { .. } => "init",
            Commands::Deploy { .. } => "deploy",
            Commands::Add { .. } => "add",
            Commands::List => "list",
            Commands::Templates => "templates",
            Commands::Validate { .. } => "validate",
        }
    }

    pub fn to_args(&self) -> CommandArgs {
        match self {
            Commands::Init {
                project_name,
                force,
            } => CommandArgs::new()
                .with(arg::PROJECT_NAME, project_name.as_str())
                .with_flag(arg::FORCE, *force),
            Commands::Deploy { force } => CommandArgs::new().with_flag(arg::FORCE, *force),
            Commands::Add {
                rule_name,
                template,
                force,
            } => CommandArgs::new()
                .with(arg::RULE_NAME, rule_name.as_str())
                .with_opt(arg::TEMPLATE, template.as_deref())
                .with_flag(arg::FORCE, *force),
            Commands::Validate { template } => {
                CommandArgs::new().with(arg::TEMPLATE, template.as_str())
            }
            Commands::List | Commands::Templates => CommandArgs::new(),
        }
    }
}
