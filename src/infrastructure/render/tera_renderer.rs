//! Template rendering with Tera.
//!
//! Each asset is rendered on its own with `Tera::one_off`; templates cannot
//! include or extend each other. Autoescaping is off because the output is
//! markdown, not HTML.

use std::error::Error as _;

use crate::domain::ports::{RenderContext, RenderError, Renderer};

#[derive(Debug, Clone, Copy, Default)]
pub struct TeraRenderer;

impl TeraRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for TeraRenderer {
    fn render(
        &self,
        name: &str,
        source: &str,
        context: &RenderContext,
    ) -> Result<String, RenderError> {
        let mut tera_context = tera::Context::new();
        for (key, value) in context.iter() {
            tera_context.insert(key, value);
        }

        tracing::trace!(asset = name, "rendering");
        // The caller attaches the file name
        tera::Tera::one_off(source, &tera_context, false)
            .map_err(|err| RenderError::new(describe(&err)))
    }
}

/// Tera's top-level message is generic ("Failed to render '__tera_one_off'");
/// the cause chain carries the useful part.
fn describe(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
