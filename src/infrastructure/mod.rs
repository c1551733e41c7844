//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, in-memory)
//! - `config/` - YAML config repository
//! - `render/` - Tera renderer

pub mod config;
pub mod fs;
pub mod render;

// Re-export for convenience
pub use config::YamlConfigRepository;
pub use fs::{LocalFs, MemoryFs};
pub use render::TeraRenderer;
