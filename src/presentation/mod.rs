//! Presentation Layer
//!
//! - `cli` - argument parsing (via clap)
//! - `factory` - wires commands to the real filesystem
//! - `output` - text and NDJSON rendering

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::{create_context, create_registry};
pub use output::{use_color, Printer};
