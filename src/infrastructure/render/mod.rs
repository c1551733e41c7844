//! Renderer implementations

mod tera_renderer;

pub use tera_renderer::TeraRenderer;
