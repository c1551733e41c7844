//! Template set entity
//!
//! A named bundle of "rules" and "notes" source assets stored at
//! `<root>/.crules/templates/<name>/`.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{AssetCategory, UnitName};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    name: UnitName,
    path: PathBuf,
}

impl TemplateSet {
    pub fn new(name: UnitName, path: impl Into<PathBuf>) -> Self {
        Self {
            name,
            path: path.into(),
        }
    }

    pub fn name(&self) -> &UnitName {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Source directory of one asset category
    pub fn category_dir(&self, category: AssetCategory) -> PathBuf {
        self.path.join(category.source_dir_name())
    }

    /// Source file of a single named unit
    pub fn asset_path(&self, category: AssetCategory, unit: &UnitName) -> PathBuf {
        self.category_dir(category)
            .join(category.source_file_name(unit.as_str()))
    }

    /// Rendered variant (`<unit>.md.tera`) of a single named unit
    pub fn template_asset_path(&self, category: AssetCategory, unit: &UnitName) -> PathBuf {
        self.category_dir(category)
            .join(category.template_file_name(unit.as_str()))
    }
}
