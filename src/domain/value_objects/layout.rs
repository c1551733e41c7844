//! Project layout value objects
//!
//! Fixed names of the marker directory, template storage and deployment
//! targets, plus the per-category naming rules.

use std::fmt;
use std::path::PathBuf;

/// Marker directory whose presence identifies a project root
pub const MARKER_DIR: &str = ".crules";

/// Template storage directory inside the marker directory
pub const TEMPLATES_DIR: &str = "templates";

/// Settings document inside the marker directory
pub const CONFIG_FILE: &str = "config.yaml";

/// Extension a source asset must carry to be deployed
pub const SOURCE_EXTENSION: &str = "md";

/// Extension deployed rules carry
pub const RULES_EXTENSION: &str = "mdc";

/// Extra suffix that opts a rules source into rendering (`style.md.tera`)
pub const TEMPLATE_SUFFIX: &str = "tera";

/// A qualifying source file name split into its unit stem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceAsset<'a> {
    pub stem: &'a str,
    /// Rendered before deployment; plain sources are copied verbatim
    pub templated: bool,
}

/// The two asset categories of a template set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetCategory {
    Rules,
    Notes,
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 2] = [AssetCategory::Rules, AssetCategory::Notes];

    /// Subdirectory of a template set holding this category's sources
    pub fn source_dir_name(&self) -> &'static str {
        match self {
            AssetCategory::Rules => "rules",
            AssetCategory::Notes => "notes",
        }
    }

    /// Destination directory, relative to the project root
    pub fn destination_dir(&self) -> PathBuf {
        match self {
            AssetCategory::Rules => PathBuf::from(".cursor").join("rules"),
            AssetCategory::Notes => PathBuf::from(".notes"),
        }
    }

    pub fn destination_extension(&self) -> &'static str {
        match self {
            AssetCategory::Rules => RULES_EXTENSION,
            AssetCategory::Notes => SOURCE_EXTENSION,
        }
    }

    /// Only rules may opt into rendering; notes are always copied verbatim.
    pub fn accepts_templates(&self) -> bool {
        matches!(self, AssetCategory::Rules)
    }

    /// Split a source file name into its stem, or `None` when the source
    /// does not qualify for deployment.
    pub fn classify<'a>(&self, source_name: &'a str) -> Option<SourceAsset<'a>> {
        if self.accepts_templates() {
            if let Some(inner) = asset_stem(source_name, TEMPLATE_SUFFIX) {
                return asset_stem(inner, SOURCE_EXTENSION).map(|stem| SourceAsset {
                    stem,
                    templated: true,
                });
            }
        }
        asset_stem(source_name, SOURCE_EXTENSION).map(|stem| SourceAsset {
            stem,
            templated: false,
        })
    }

    /// Destination file name for a source file name, or `None` when the
    /// source does not qualify for deployment.
    ///
    /// ```
    /// use crules::domain::value_objects::AssetCategory;
    ///
    /// assert_eq!(AssetCategory::Rules.destination_name("foo.md").as_deref(), Some("foo.mdc"));
    /// assert_eq!(AssetCategory::Rules.destination_name("foo.md.tera").as_deref(), Some("foo.mdc"));
    /// assert_eq!(AssetCategory::Notes.destination_name("bar.md").as_deref(), Some("bar.md"));
    /// assert_eq!(AssetCategory::Rules.destination_name("notes.txt"), None);
    /// ```
    pub fn destination_name(&self, source_name: &str) -> Option<String> {
        let asset = self.classify(source_name)?;
        Some(self.destination_file_name(asset.stem))
    }

    /// Source file name for a named unit of this category
    pub fn source_file_name(&self, unit: &str) -> String {
        format!("{}.{}", unit, SOURCE_EXTENSION)
    }

    /// Source file name of the rendered variant of a named unit
    pub fn template_file_name(&self, unit: &str) -> String {
        format!("{}.{}.{}", unit, SOURCE_EXTENSION, TEMPLATE_SUFFIX)
    }

    /// Destination file name for a named unit of this category
    pub fn destination_file_name(&self, unit: &str) -> String {
        format!("{}.{}", unit, self.destination_extension())
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source_dir_name())
    }
}

/// Strip `.ext` from `file_name`, returning the non-empty stem.
pub fn asset_stem<'a>(file_name: &'a str, ext: &str) -> Option<&'a str> {
    let stem = file_name.strip_suffix(ext)?.strip_suffix('.')?;
    if stem.is_empty() {
        None
    } else {
        Some(stem)
    }
}
