//! Domain Layer
//!
//! The core of crules - project layout rules and the deployment algorithm,
//! without direct I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - ProjectRoot, TemplateSet, Config
//! - `value_objects/` - Layout constants, asset categories, validated names
//! - `services/` - Root discovery, template resolution, config store, deployer
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
