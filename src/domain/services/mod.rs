//! Domain Services
//!
//! Stateless logic operating on entities through the ports.

pub mod config_store;
pub mod deployer;
pub mod path_resolver;
pub mod root_locator;
pub mod template_resolver;

pub use config_store::ConfigStore;
pub use deployer::{DeployAction, DeployMode, DeployPair, DeployReport, Deployer};
pub use path_resolver::{is_subpath, normalize_path, resolve_path, validate_path};
pub use root_locator::ProjectRootLocator;
pub use template_resolver::{AssetCheck, TemplateCheck, TemplateResolver, TemplateSummary};
