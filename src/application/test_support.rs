//! Fixtures for command tests: a MemoryFs-backed context rooted at `/p`.

use crate::application::CommandContext;
use crate::infrastructure::{MemoryFs, TeraRenderer, YamlConfigRepository};

pub const ROOT: &str = "/p";

pub fn context_at(fs: &MemoryFs, start: &str) -> CommandContext {
    CommandContext::new(
        Box::new(fs.clone()),
        Box::new(TeraRenderer::new()),
        Box::new(YamlConfigRepository::with_fs(fs.clone())),
        start,
    )
}

/// `/p/.crules/templates/demo` with a plain rule, a templated rule, a
/// stray file and one note
pub fn demo_project() -> MemoryFs {
    let fs = MemoryFs::new();
    fs.add_file("/p/.crules/templates/demo/rules/a.md", "A");
    fs.add_file(
        "/p/.crules/templates/demo/rules/b.md.tera",
        "rule {{ asset_name }} of {{ template_name }}",
    );
    fs.add_file("/p/.crules/templates/demo/rules/skip.txt", "not deployed");
    fs.add_file("/p/.crules/templates/demo/notes/overview.md", "{{ verbatim }}");
    fs.add_dir("/p/src");
    fs
}
