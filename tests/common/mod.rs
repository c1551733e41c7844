//! Common test utilities for crules CLI and scenario tests.
//!
//! - `TestEnv`: isolated project in a temp directory
//! - Assertion macros: `assert_deployed!`, `assert_not_deployed!`
//! - Fixtures: reusable template content

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
