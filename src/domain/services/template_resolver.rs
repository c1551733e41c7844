//! Template set resolution and usability checks

use std::path::{Path, PathBuf};

use crate::domain::entities::{ProjectRoot, TemplateSet};
use crate::domain::ports::{FileSystem, RenderContext, Renderer};
use crate::domain::value_objects::{AssetCategory, UnitName, TEMPLATE_SUFFIX};
use crate::error::{CrulesError, CrulesResult};

use super::path_resolver::is_subpath;

/// One entry of the template listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSummary {
    pub name: String,
    /// Directory exists and has a `rules/` subdirectory
    pub valid: bool,
    pub rules: usize,
    pub notes: usize,
}

/// Outcome of checking one source asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetCheck {
    /// Relative to the template directory, e.g. `rules/style.md`
    pub path: PathBuf,
    pub templated: bool,
    pub ok: bool,
}

/// Every asset of a template set checked against a render context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateCheck {
    pub name: String,
    pub rules_dir: bool,
    pub notes_dir: bool,
    pub assets: Vec<AssetCheck>,
}

impl TemplateCheck {
    /// `rules/` exists and every asset loads (and renders, if templated).
    /// A missing `notes/` only breaks `deploy`, so it does not count.
    pub fn is_valid(&self) -> bool {
        self.rules_dir && self.assets.iter().all(|asset| asset.ok)
    }

    pub fn failures(&self) -> impl Iterator<Item = &AssetCheck> {
        self.assets.iter().filter(|asset| !asset.ok)
    }
}

pub struct TemplateResolver<'a> {
    fs: &'a dyn FileSystem,
    renderer: &'a dyn Renderer,
}

impl<'a> TemplateResolver<'a> {
    pub fn new(fs: &'a dyn FileSystem, renderer: &'a dyn Renderer) -> Self {
        Self { fs, renderer }
    }

    /// Compose `<root>/.crules/templates/<name>`. Existence is not checked.
    pub fn resolve(&self, root: &ProjectRoot, name: &UnitName) -> TemplateSet {
        TemplateSet::new(name.clone(), root.templates_dir().join(name.as_str()))
    }

    /// Whether `asset` (relative to the template directory) loads and,
    /// when it carries the `.tera` suffix, renders with `context`. Every
    /// failure maps to `false`.
    pub fn validate(&self, template: &TemplateSet, asset: &Path, context: &RenderContext) -> bool {
        let path = template.path().join(asset);
        if !is_subpath(&path, template.path()) {
            return false;
        }
        let source = match self.fs.read(&path) {
            Ok(source) => source,
            Err(err) => {
                tracing::debug!(asset = %path.display(), error = %err, "template asset unreadable");
                return false;
            }
        };
        if !is_templated(asset) {
            return true;
        }
        match self
            .renderer
            .render(&asset.to_string_lossy(), &source, context)
        {
            Ok(_) => true,
            Err(err) => {
                tracing::debug!(asset = %path.display(), error = %err, "template asset does not render");
                false
            }
        }
    }

    /// Validate every qualifying asset of both categories. Templated rules
    /// see `context` plus their own `asset_name`.
    ///
    /// A template directory that does not exist is `TemplateNotFound`.
    pub fn check(
        &self,
        template: &TemplateSet,
        context: &RenderContext,
    ) -> CrulesResult<TemplateCheck> {
        if !self.fs.is_dir(template.path()) {
            return Err(CrulesError::TemplateNotFound {
                name: template.name().to_string(),
                path: template.path().to_path_buf(),
            });
        }

        let mut check = TemplateCheck {
            name: template.name().to_string(),
            rules_dir: false,
            notes_dir: false,
            assets: Vec::new(),
        };
        for category in AssetCategory::ALL {
            let dir = template.category_dir(category);
            if !self.fs.is_dir(&dir) {
                continue;
            }
            match category {
                AssetCategory::Rules => check.rules_dir = true,
                AssetCategory::Notes => check.notes_dir = true,
            }
            for entry in self.fs.list_dir(&dir)? {
                if !entry.is_file() {
                    continue;
                }
                let Some(asset) = category.classify(&entry.name) else {
                    continue;
                };
                let path = PathBuf::from(category.source_dir_name()).join(&entry.name);
                let asset_context = context.clone().with("asset_name", asset.stem);
                let ok = self.validate(template, &path, &asset_context);
                check.assets.push(AssetCheck {
                    path,
                    templated: asset.templated,
                    ok,
                });
            }
        }
        tracing::debug!(
            template = %template.name(),
            assets = check.assets.len(),
            valid = check.is_valid(),
            "checked template"
        );
        Ok(check)
    }

    /// The directory exists and has a `rules/` subdirectory.
    pub fn is_valid(&self, template: &TemplateSet) -> bool {
        self.fs.is_dir(template.path()) && self.fs.is_dir(&template.category_dir(AssetCategory::Rules))
    }

    /// Every directory under `.crules/templates/`. A missing templates
    /// directory yields an empty list.
    pub fn list(&self, root: &ProjectRoot) -> CrulesResult<Vec<TemplateSummary>> {
        let dir = root.templates_dir();
        if !self.fs.is_dir(&dir) {
            return Ok(Vec::new());
        }

        let mut summaries = Vec::new();
        for entry in self.fs.list_dir(&dir)? {
            if entry.is_file() {
                continue;
            }
            let summary = match UnitName::parse("template", &entry.name) {
                Ok(name) => {
                    let template = self.resolve(root, &name);
                    TemplateSummary {
                        name: entry.name,
                        valid: self.is_valid(&template),
                        rules: self.count_assets(&template, AssetCategory::Rules),
                        notes: self.count_assets(&template, AssetCategory::Notes),
                    }
                }
                Err(_) => TemplateSummary {
                    name: entry.name,
                    valid: false,
                    rules: 0,
                    notes: 0,
                },
            };
            summaries.push(summary);
        }
        Ok(summaries)
    }

    fn count_assets(&self, template: &TemplateSet, category: AssetCategory) -> usize {
        self.fs
            .list_dir(&template.category_dir(category))
            .map(|entries| {
                entries
                    .iter()
                    .filter(|e| e.is_file() && category.classify(&e.name).is_some())
                    .count()
            })
            .unwrap_or(0)
    }
}

fn is_templated(asset: &Path) -> bool {
    asset.extension().is_some_and(|ext| ext == TEMPLATE_SUFFIX)
}
