//! In-memory File System
//!
//! Hermetic FileSystem double for tests. Paths are taken as given, so tests
//! should use absolute paths.
//!
//! Uses `Arc<Mutex<>>` internally so it can be cloned and shared.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::ports::file_system::{DirEntry, EntryKind, FileSystem, FsError, FsResult};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    File(String),
    Dir,
}

#[derive(Debug, Default)]
struct State {
    nodes: BTreeMap<PathBuf, Node>,
    failing_writes: BTreeSet<PathBuf>,
    mutations: usize,
}

#[derive(Debug, Clone)]
pub struct MemoryFs {
    state: Arc<Mutex<State>>,
    cwd: PathBuf,
}

impl Default for MemoryFs {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::with_current_dir("/")
    }

    pub fn with_current_dir(cwd: impl Into<PathBuf>) -> Self {
        Self {
            state: Arc::new(Mutex::new(State::default())),
            cwd: cwd.into(),
        }
    }

    /// Seed a directory (and its ancestors). Not counted as a mutation.
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut state = self.lock();
        insert_dir(&mut state.nodes, path.as_ref());
    }

    /// Seed a file (and its ancestors). Not counted as a mutation.
    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        let path = path.as_ref();
        let mut state = self.lock();
        if let Some(parent) = path.parent() {
            insert_dir(&mut state.nodes, parent);
        }
        state
            .nodes
            .insert(path.to_path_buf(), Node::File(content.to_string()));
    }

    /// Make every later `write` to `path` fail.
    pub fn fail_writes_to(&self, path: impl AsRef<Path>) {
        self.lock()
            .failing_writes
            .insert(path.as_ref().to_path_buf());
    }

    /// File content, if `path` is a file
    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        match self.lock().nodes.get(path.as_ref()) {
            Some(Node::File(content)) => Some(content.clone()),
            _ => None,
        }
    }

    /// Every file below `dir` with its content
    pub fn files_under(&self, dir: impl AsRef<Path>) -> BTreeMap<PathBuf, String> {
        let dir = dir.as_ref();
        self.lock()
            .nodes
            .iter()
            .filter(|(path, _)| path.starts_with(dir))
            .filter_map(|(path, node)| match node {
                Node::File(content) => Some((path.clone(), content.clone())),
                Node::Dir => None,
            })
            .collect()
    }

    /// Number of `write` and `create_dir_all` calls that changed anything
    pub fn mutation_count(&self) -> usize {
        self.lock().mutations
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // A panic while holding the lock only happens inside a failing test.
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

fn insert_dir(nodes: &mut BTreeMap<PathBuf, Node>, path: &Path) -> bool {
    let mut created = false;
    for dir in path.ancestors() {
        if dir.as_os_str().is_empty() {
            continue;
        }
        if !nodes.contains_key(dir) {
            nodes.insert(dir.to_path_buf(), Node::Dir);
            created = true;
        }
    }
    created
}

impl FileSystem for MemoryFs {
    fn current_dir(&self) -> FsResult<PathBuf> {
        Ok(self.cwd.clone())
    }

    fn exists(&self, path: &Path) -> bool {
        self.lock().nodes.contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        matches!(self.lock().nodes.get(path), Some(Node::Dir))
    }

    fn is_file(&self, path: &Path) -> bool {
        matches!(self.lock().nodes.get(path), Some(Node::File(_)))
    }

    fn read(&self, path: &Path) -> FsResult<String> {
        match self.lock().nodes.get(path) {
            Some(Node::File(content)) => Ok(content.clone()),
            Some(Node::Dir) => Err(FsError::Other(format!(
                "is a directory: {}",
                path.display()
            ))),
            None => Err(FsError::NotFound(path.to_path_buf())),
        }
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let mut state = self.lock();
        if state.failing_writes.contains(path) {
            return Err(FsError::Other(format!(
                "simulated write failure: {}",
                path.display()
            )));
        }
        if matches!(state.nodes.get(path), Some(Node::Dir)) {
            return Err(FsError::Other(format!(
                "is a directory: {}",
                path.display()
            )));
        }
        if let Some(parent) = path.parent() {
            insert_dir(&mut state.nodes, parent);
        }
        state
            .nodes
            .insert(path.to_path_buf(), Node::File(content.to_string()));
        state.mutations += 1;
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        let mut state = self.lock();
        if matches!(state.nodes.get(path), Some(Node::File(_))) {
            return Err(FsError::Other(format!(
                "not a directory: {}",
                path.display()
            )));
        }
        if insert_dir(&mut state.nodes, path) {
            state.mutations += 1;
        }
        Ok(())
    }

    fn list_dir(&self, path: &Path) -> FsResult<Vec<DirEntry>> {
        let state = self.lock();
        match state.nodes.get(path) {
            Some(Node::Dir) => {}
            Some(Node::File(_)) => {
                return Err(FsError::Other(format!(
                    "not a directory: {}",
                    path.display()
                )))
            }
            None => return Err(FsError::NotFound(path.to_path_buf())),
        }

        // BTreeMap iteration keeps entries sorted by full path, hence by name
        Ok(state
            .nodes
            .iter()
            .filter(|(child, _)| child.parent() == Some(path))
            .filter_map(|(child, node)| {
                let name = child.file_name()?.to_string_lossy().into_owned();
                let kind = match node {
                    Node::File(_) => EntryKind::File,
                    Node::Dir => EntryKind::Dir,
                };
                Some(DirEntry { name, kind })
            })
            .collect())
    }
}
