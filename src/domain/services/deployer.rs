//! Deployer - materializes template assets into the project.
//!
//! For each asset category:
//! 1. Ensure the destination directory exists
//! 2. List the category's source directory (sorted by name)
//! 3. Map each qualifying `*.md` source to its destination name. Rules
//!    named `*.md.tera` are rendered; everything else is copied verbatim
//! 4. Write the destination when it is absent or `overwrite` is set,
//!    otherwise leave it untouched
//!
//! The first failing asset aborts the call; files written before it stay.

use std::collections::btree_map::{BTreeMap, Entry};
use std::path::{Path, PathBuf};

use crate::domain::entities::{ProjectRoot, TemplateSet};
use crate::domain::ports::{FileSystem, RenderContext, Renderer};
use crate::domain::value_objects::{AssetCategory, SourceAsset};
use crate::error::{CrulesError, CrulesResult};

/// How a source becomes its destination content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployMode {
    /// Pass the source through the renderer
    Render,
    /// Copy the source verbatim
    Copy,
}

impl From<SourceAsset<'_>> for DeployMode {
    fn from(asset: SourceAsset<'_>) -> Self {
        if asset.templated {
            DeployMode::Render
        } else {
            DeployMode::Copy
        }
    }
}

/// One source/destination pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployPair {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub mode: DeployMode,
}

/// What happened to a single destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployAction {
    Written,
    Skipped,
}

/// Destinations touched by a deploy call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployReport {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

impl DeployReport {
    pub fn record(&mut self, action: DeployAction, destination: &Path) {
        match action {
            DeployAction::Written => self.written.push(destination.to_path_buf()),
            DeployAction::Skipped => self.skipped.push(destination.to_path_buf()),
        }
    }

    pub fn total(&self) -> usize {
        self.written.len() + self.skipped.len()
    }
}

pub struct Deployer<'a> {
    fs: &'a dyn FileSystem,
    renderer: &'a dyn Renderer,
}

impl<'a> Deployer<'a> {
    pub fn new(fs: &'a dyn FileSystem, renderer: &'a dyn Renderer) -> Self {
        Self { fs, renderer }
    }

    /// Deploy `categories` of `template` into `root`, in the given order.
    pub fn deploy_all(
        &self,
        template: &TemplateSet,
        root: &ProjectRoot,
        categories: &[AssetCategory],
        overwrite: bool,
        context: &RenderContext,
    ) -> CrulesResult<DeployReport> {
        let mut report = DeployReport::default();
        for &category in categories {
            self.deploy_category(template, root, category, overwrite, context, &mut report)?;
        }
        tracing::info!(
            template = %template.name(),
            written = report.written.len(),
            skipped = report.skipped.len(),
            "deployed template"
        );
        Ok(report)
    }

    pub fn deploy_category(
        &self,
        template: &TemplateSet,
        root: &ProjectRoot,
        category: AssetCategory,
        overwrite: bool,
        context: &RenderContext,
        report: &mut DeployReport,
    ) -> CrulesResult<()> {
        let destination_dir = root.destination_dir(category);
        self.fs.create_dir_all(&destination_dir)?;

        for pair in self.plan_category(template, &destination_dir, category)? {
            let action = self.deploy_one(&pair, context, overwrite)?;
            report.record(action, &pair.destination);
        }
        Ok(())
    }

    /// Source/destination pairs for every qualifying file of `category`,
    /// ordered by destination.
    ///
    /// When `x.md` and `x.md.tera` both exist the templated source wins.
    /// A missing source directory is `TemplateNotFound`.
    pub fn plan_category(
        &self,
        template: &TemplateSet,
        destination_dir: &Path,
        category: AssetCategory,
    ) -> CrulesResult<Vec<DeployPair>> {
        let source_dir = template.category_dir(category);
        let entries = self.fs.list_dir(&source_dir).map_err(|err| {
            if err.is_not_found() {
                CrulesError::TemplateNotFound {
                    name: template.name().to_string(),
                    path: source_dir.clone(),
                }
            } else {
                err.into()
            }
        })?;

        let mut planned: BTreeMap<String, DeployPair> = BTreeMap::new();
        for entry in entries.iter().filter(|entry| entry.is_file()) {
            let Some(asset) = category.classify(&entry.name) else {
                continue;
            };
            let destination_name = category.destination_file_name(asset.stem);
            let pair = DeployPair {
                source: source_dir.join(&entry.name),
                destination: destination_dir.join(&destination_name),
                mode: asset.into(),
            };
            match planned.entry(destination_name) {
                Entry::Vacant(slot) => {
                    slot.insert(pair);
                }
                Entry::Occupied(mut slot) if asset.templated => {
                    tracing::debug!(source = %pair.source.display(), "templated source replaces plain one");
                    slot.insert(pair);
                }
                Entry::Occupied(_) => {}
            }
        }
        Ok(planned.into_values().collect())
    }

    /// Materialize a single pair, honoring the overwrite policy.
    pub fn deploy_one(
        &self,
        pair: &DeployPair,
        context: &RenderContext,
        overwrite: bool,
    ) -> CrulesResult<DeployAction> {
        if !overwrite && self.fs.exists(&pair.destination) {
            tracing::debug!(destination = %pair.destination.display(), "exists, skipping");
            return Ok(DeployAction::Skipped);
        }

        let source = self.fs.read(&pair.source).map_err(|err| {
            if err.is_not_found() {
                CrulesError::AssetNotFound {
                    path: pair.source.clone(),
                }
            } else {
                err.into()
            }
        })?;

        let content = match pair.mode {
            DeployMode::Copy => source,
            DeployMode::Render => {
                let mut context = context.clone();
                if let Some(stem) = pair.destination.file_stem() {
                    context.insert("asset_name", stem.to_string_lossy());
                }
                let name = pair.source.to_string_lossy();
                self.renderer
                    .render(&name, &source, &context)
                    .map_err(|source| CrulesError::Render {
                        file: pair.source.clone(),
                        source,
                    })?
            }
        };

        self.fs.write(&pair.destination, &content)?;
        tracing::debug!(
            source = %pair.source.display(),
            destination = %pair.destination.display(),
            "written"
        );
        Ok(DeployAction::Written)
    }
}
