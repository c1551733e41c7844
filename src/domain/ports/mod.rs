//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod config_repository;
pub mod file_system;
pub mod renderer;

pub use config_repository::ConfigRepository;
pub use file_system::{DirEntry, EntryKind, FileSystem, FsError, FsResult};
pub use renderer::{RenderContext, RenderError, Renderer, VerbatimRenderer};
