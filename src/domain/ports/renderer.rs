//! Renderer port - the single capability the deployer needs from a
//! templating engine.

use std::collections::BTreeMap;

/// Error raised by a [`Renderer`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RenderError {
    pub message: String,
}

impl RenderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Variables visible to a template while it renders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    vars: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Turns template source text into output text.
///
/// `name` identifies the template in error messages only; implementations
/// must not read anything beyond `source`.
pub trait Renderer {
    fn render(&self, name: &str, source: &str, context: &RenderContext)
        -> Result<String, RenderError>;
}

/// Renderer that returns the source unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct VerbatimRenderer;

impl Renderer for VerbatimRenderer {
    fn render(
        &self,
        _name: &str,
        source: &str,
        _context: &RenderContext,
    ) -> Result<String, RenderError> {
        Ok(source.to_string())
    }
}
