//! Project root entity

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{AssetCategory, CONFIG_FILE, MARKER_DIR, TEMPLATES_DIR};

/// Absolute directory that contains the marker directory.
///
/// Computed per command by upward search; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectRoot(PathBuf);

impl ProjectRoot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    pub fn marker_dir(&self) -> PathBuf {
        self.0.join(MARKER_DIR)
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.marker_dir().join(TEMPLATES_DIR)
    }

    pub fn config_path(&self) -> PathBuf {
        self.marker_dir().join(CONFIG_FILE)
    }

    /// Where assets of `category` are deployed
    pub fn destination_dir(&self, category: AssetCategory) -> PathBuf {
        self.0.join(category.destination_dir())
    }
}

impl fmt::Display for ProjectRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl AsRef<Path> for ProjectRoot {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}
