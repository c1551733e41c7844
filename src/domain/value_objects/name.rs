//! Validated names for template sets and rules
//!
//! A name becomes a single path segment, so only `[A-Za-z0-9_-]` is allowed.

use std::fmt;

use crate::error::{CrulesError, CrulesResult};

/// Check a template or rule name.
pub fn validate_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// A name that passed [`validate_name`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitName(String);

impl UnitName {
    /// `what` names the kind of unit ("template", "rule") in the error.
    pub fn parse(what: &'static str, name: &str) -> CrulesResult<Self> {
        if validate_name(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(CrulesError::InvalidName {
                what,
                name: name.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UnitName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
