//! YAML-based configuration repository implementation.

use std::path::Path;

use crate::domain::entities::Config;
use crate::domain::ports::{ConfigRepository, FileSystem};
use crate::error::{CrulesError, CrulesResult};
use crate::infrastructure::fs::LocalFs;

/// YAML configuration repository implementation.
///
/// Reads and writes through a FileSystem port so the same code serves the
/// local disk and the in-memory test double.
#[derive(Debug, Clone, Default)]
pub struct YamlConfigRepository<FS = LocalFs> {
    fs: FS,
}

impl YamlConfigRepository<LocalFs> {
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }
}

impl<FS: FileSystem> YamlConfigRepository<FS> {
    pub fn with_fs(fs: FS) -> Self {
        Self { fs }
    }
}

impl<FS: FileSystem> ConfigRepository for YamlConfigRepository<FS> {
    fn load(&self, path: &Path) -> CrulesResult<Config> {
        if !self.fs.exists(path) {
            return Ok(Config::default());
        }
        let content = self.fs.read(path)?;
        parse_config(&content, path)
    }

    fn save(&self, path: &Path, config: &Config) -> CrulesResult<()> {
        let content = serde_yaml_ng::to_string(config)?;
        self.fs.write(path, &content)?;
        tracing::debug!(path = %path.display(), "saved config");
        Ok(())
    }
}

/// Parse a flat YAML mapping. Empty and `null` documents are empty configs.
fn parse_config(content: &str, path: &Path) -> CrulesResult<Config> {
    let value: serde_yaml_ng::Value = serde_yaml_ng::from_str(content)?;
    match value {
        serde_yaml_ng::Value::Null => Ok(Config::default()),
        serde_yaml_ng::Value::Mapping(_) => {
            serde_yaml_ng::from_value(value).map_err(|e| CrulesError::InvalidConfig {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        }
        _ => Err(CrulesError::InvalidConfig {
            path: path.to_path_buf(),
            message: "expected a mapping of keys to values".to_string(),
        }),
    }
}
