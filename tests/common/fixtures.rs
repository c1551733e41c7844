//! Test fixtures - reusable template content.

/// A rule that uses every render variable, deployed as `<name>.md.tera`
pub const TEMPLATED_RULE: &str = "---\ndescription: {{ asset_name }} rule\n---\n# {{ template_name }}\n";

/// A plain rule without placeholders
pub const PLAIN_RULE: &str = "# Style\n\nUse four spaces.\n";

/// A plain rule carrying GitHub Actions expressions, copied as is
pub const WORKFLOW_RULE: &str = "# CI\n\nUse ${{ github.ref }} in workflows.\n";

/// A note with template syntax that must be copied as is
pub const TEMPLATE_LOOKING_NOTE: &str = "# Notes\n\n{{ not_rendered }}\n";

/// Simple project config naming the `web` template
pub const WEB_CONFIG: &str = "template_name: web\n";
