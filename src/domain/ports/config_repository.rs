//! Config repository port - abstracts configuration loading and saving.

use std::path::Path;

use crate::domain::entities::Config;
use crate::error::CrulesResult;

/// Repository trait for the persisted settings document.
///
/// Abstracts the underlying storage so commands can be exercised against
/// an in-memory store.
pub trait ConfigRepository {
    /// Load the document at `path`. A missing file yields an empty config.
    fn load(&self, path: &Path) -> CrulesResult<Config>;

    /// Persist `config` at `path`, replacing what was there.
    fn save(&self, path: &Path, config: &Config) -> CrulesResult<()>;
}
