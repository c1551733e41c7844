//! Domain Entities

pub mod config;
pub mod project_root;
pub mod template_set;

pub use config::{Config, TEMPLATE_NAME_KEY};
pub use project_root::ProjectRoot;
pub use template_set::TemplateSet;
