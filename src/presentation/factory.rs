//! Dependency wiring for the binary.

use std::path::PathBuf;

use crate::application::{CommandContext, CommandRegistry};
use crate::infrastructure::{LocalFs, TeraRenderer, YamlConfigRepository};

/// Context backed by the real filesystem, discovering the root from `start_dir`.
pub fn create_context(start_dir: impl Into<PathBuf>) -> CommandContext {
    CommandContext::new(
        Box::new(LocalFs::new()),
        Box::new(TeraRenderer::new()),
        Box::new(YamlConfigRepository::new()),
        start_dir,
    )
}

pub fn create_registry() -> CommandRegistry {
    CommandRegistry::builtin()
}
