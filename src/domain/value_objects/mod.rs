//! Domain Value Objects
//!
//! Immutable types that carry naming and layout rules.

pub mod layout;
pub mod name;

pub use layout::{
    asset_stem, AssetCategory, SourceAsset, CONFIG_FILE, MARKER_DIR, RULES_EXTENSION,
    SOURCE_EXTENSION, TEMPLATES_DIR, TEMPLATE_SUFFIX,
};
pub use name::{validate_name, UnitName};
