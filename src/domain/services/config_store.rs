//! Config store - get/set access to the persisted settings document.
//!
//! Every `set` is written through immediately.

use std::path::{Path, PathBuf};

use serde_yaml_ng::Value;

use crate::domain::entities::{Config, TEMPLATE_NAME_KEY};
use crate::domain::ports::ConfigRepository;
use crate::domain::value_objects::UnitName;
use crate::error::{CrulesError, CrulesResult};

pub struct ConfigStore<'a> {
    repo: &'a dyn ConfigRepository,
    path: PathBuf,
    config: Config,
}

impl<'a> ConfigStore<'a> {
    /// Open the store at `path`, loading its current content.
    pub fn open(repo: &'a dyn ConfigRepository, path: impl Into<PathBuf>) -> CrulesResult<Self> {
        let path = path.into();
        let config = repo.load(&path)?;
        Ok(Self { repo, path, config })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-read the document from storage.
    pub fn load_config(&mut self) -> CrulesResult<&Config> {
        self.config = self.repo.load(&self.path)?;
        Ok(&self.config)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.config.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> CrulesResult<()> {
        self.config.insert(key, value);
        self.repo.save(&self.path, &self.config)
    }

    pub fn validate_config(&self) -> bool {
        self.config.is_valid()
    }

    /// The persisted template name, validated as a path segment.
    pub fn template_name(&self) -> CrulesResult<UnitName> {
        if !self.config.contains_key(TEMPLATE_NAME_KEY) {
            return Err(CrulesError::MissingConfigKey {
                key: TEMPLATE_NAME_KEY.to_string(),
                path: self.path.clone(),
            });
        }
        let name = self
            .config
            .template_name()
            .ok_or_else(|| CrulesError::InvalidConfig {
                path: self.path.clone(),
                message: format!("'{}' must be a string", TEMPLATE_NAME_KEY),
            })?;
        UnitName::parse("template", name)
    }
}
