//! Project root discovery
//!
//! Walks upward from a start directory to the nearest ancestor (inclusive)
//! that has the marker directory as a direct child.

use std::path::{Path, PathBuf};

use crate::domain::entities::ProjectRoot;
use crate::domain::ports::{FileSystem, FsResult};
use crate::domain::value_objects::MARKER_DIR;
use crate::error::{CrulesError, CrulesResult};

use super::path_resolver::{normalize_path, resolve_path};

pub struct ProjectRootLocator<'a> {
    fs: &'a dyn FileSystem,
}

impl<'a> ProjectRootLocator<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }

    /// Find the nearest ancestor of `start` carrying the marker directory.
    ///
    /// Relative `start` paths are resolved against the file system's current
    /// directory. The filesystem root is checked too. Returns `Ok(None)`
    /// when no ancestor qualifies.
    pub fn locate(&self, start: &Path) -> FsResult<Option<ProjectRoot>> {
        let start = self.absolute(start)?;
        for dir in start.ancestors() {
            if self.fs.is_dir(&dir.join(MARKER_DIR)) {
                tracing::debug!(root = %dir.display(), "found project root");
                return Ok(Some(ProjectRoot::new(dir)));
            }
        }
        tracing::debug!(start = %start.display(), "no project root found");
        Ok(None)
    }

    /// Like [`locate`](Self::locate), but a missing root is an error.
    pub fn require(&self, start: &Path) -> CrulesResult<ProjectRoot> {
        self.locate(start)?
            .ok_or_else(|| CrulesError::ProjectRootNotFound {
                start: start.to_path_buf(),
            })
    }

    fn absolute(&self, start: &Path) -> FsResult<PathBuf> {
        if start.is_absolute() {
            Ok(normalize_path(start))
        } else {
            Ok(resolve_path(start, &self.fs.current_dir()?))
        }
    }
}
