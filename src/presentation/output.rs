//! Output Rendering
//!
//! Human text with semantic icons, or one NDJSON event per result.

use std::io::{self, Write};
use std::path::Path;

use crossterm::style::{Color, Stylize};
use is_terminal::IsTerminal;
use serde_json::json;

use crate::application::CommandOutput;
use crate::domain::services::{TemplateCheck, TemplateSummary};
use crate::error::CrulesError;

use super::cli::ColorWhen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Write,
    Skip,
    Invalid,
}

impl Icon {
    pub fn render(&self) -> &'static str {
        match self {
            Icon::Success => "✓",
            Icon::Write => "→",
            Icon::Skip => "○",
            Icon::Invalid => "!",
        }
    }

    pub fn colored(&self, color: bool) -> String {
        let s = self.render();
        if !color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => Color::Green,
            Icon::Write => Color::Cyan,
            Icon::Skip => Color::DarkGrey,
            Icon::Invalid => Color::Yellow,
        };
        format!("{}", s.with(color))
    }
}

/// Colour only when asked to, or when stdout is a terminal and `NO_COLOR`
/// is unset.
pub fn use_color(when: ColorWhen) -> bool {
    resolve_color(
        when,
        io::stdout().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
    )
}

fn resolve_color(when: ColorWhen, is_tty: bool, no_color: bool) -> bool {
    match when {
        ColorWhen::Always => true,
        ColorWhen::Never => false,
        ColorWhen::Auto => is_tty && !no_color,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Printer {
    pub json: bool,
    pub color: bool,
}

impl Printer {
    pub fn new(json: bool, color: bool) -> Self {
        Self { json, color }
    }

    pub fn print(&self, command: &str, output: &CommandOutput) -> io::Result<()> {
        let mut out = io::stdout().lock();
        if self.json {
            write_event(&mut out, &output_event(command, output))
        } else {
            out.write_all(self.format_text(output).as_bytes())
        }
    }

    /// Errors go to stderr in text mode, stdout as an event in JSON mode.
    pub fn print_error(&self, command: Option<&str>, err: &CrulesError) -> io::Result<()> {
        if self.json {
            let event = json!({
                "event": "error",
                "command": command,
                "kind": err.kind().as_str(),
                "message": err.to_string(),
            });
            return write_event(&mut io::stdout().lock(), &event);
        }
        let label = if self.color {
            format!("{}", "Error:".with(Color::Red))
        } else {
            "Error:".to_string()
        };
        writeln!(io::stderr().lock(), "{label} {err}")
    }

    pub fn format_text(&self, output: &CommandOutput) -> String {
        let mut text = String::new();
        match output {
            CommandOutput::Deployed { template, report } => {
                text.push_str(&format!(
                    "{} Deployed '{}' ({} written, {} skipped)\n",
                    Icon::Success.colored(self.color),
                    template,
                    report.written.len(),
                    report.skipped.len()
                ));
                for path in &report.written {
                    text.push_str(&format!("  {} {}\n", Icon::Write.colored(self.color), path.display()));
                }
                for path in &report.skipped {
                    text.push_str(&format!(
                        "  {} {} (exists, use --force to overwrite)\n",
                        Icon::Skip.colored(self.color),
                        path.display()
                    ));
                }
            }
            CommandOutput::Rules(rules) => {
                for rule in rules {
                    text.push_str(&format!("- {rule}\n"));
                }
            }
            CommandOutput::Templates(templates) => {
                if templates.is_empty() {
                    text.push_str("No template sets found in .crules/templates\n");
                }
                for template in templates {
                    text.push_str(&self.template_line(template));
                }
            }
            CommandOutput::Validation(check) => self.push_check(&mut text, check),
        }
        text
    }

    fn push_check(&self, text: &mut String, check: &TemplateCheck) {
        let problems = check.failures().count() + usize::from(!check.rules_dir);
        if check.is_valid() {
            text.push_str(&format!(
                "{} '{}' is valid ({} assets)\n",
                Icon::Success.colored(self.color),
                check.name,
                check.assets.len()
            ));
        } else {
            text.push_str(&format!(
                "{} '{}' is invalid ({} problems)\n",
                Icon::Invalid.colored(self.color),
                check.name,
                problems
            ));
        }
        if !check.rules_dir {
            text.push_str(&format!("  {} rules/ missing\n", Icon::Invalid.colored(self.color)));
        }
        if !check.notes_dir {
            text.push_str(&format!(
                "  {} notes/ missing (deploy needs it)\n",
                Icon::Skip.colored(self.color)
            ));
        }
        for asset in &check.assets {
            if asset.ok {
                text.push_str(&format!(
                    "  {} {}\n",
                    Icon::Success.colored(self.color),
                    asset.path.display()
                ));
            } else {
                let reason = if asset.templated {
                    "does not render"
                } else {
                    "unreadable"
                };
                text.push_str(&format!(
                    "  {} {} ({reason})\n",
                    Icon::Invalid.colored(self.color),
                    asset.path.display()
                ));
            }
        }
    }

    fn template_line(&self, template: &TemplateSummary) -> String {
        if template.valid {
            format!(
                "{} {} ({} rules, {} notes)\n",
                Icon::Success.colored(self.color),
                template.name,
                template.rules,
                template.notes
            )
        } else {
            format!(
                "{} {} (invalid: missing rules/)\n",
                Icon::Invalid.colored(self.color),
                template.name
            )
        }
    }
}

fn paths(list: &[impl AsRef<Path>]) -> Vec<String> {
    list.iter()
        .map(|p| p.as_ref().display().to_string())
        .collect()
}

/// The JSON event describing a command result
pub fn output_event(command: &str, output: &CommandOutput) -> serde_json::Value {
    match output {
        CommandOutput::Deployed { template, report } => json!({
            "event": "deployed",
            "command": command,
            "template": template,
            "written": paths(&report.written),
            "skipped": paths(&report.skipped),
        }),
        CommandOutput::Rules(rules) => json!({
            "event": "rules",
            "command": command,
            "rules": rules,
        }),
        CommandOutput::Templates(templates) => json!({
            "event": "templates",
            "command": command,
            "templates": templates
                .iter()
                .map(|t| json!({
                    "name": t.name,
                    "valid": t.valid,
                    "rules": t.rules,
                    "notes": t.notes,
                }))
                .collect::<Vec<_>>(),
        }),
        CommandOutput::Validation(check) => json!({
            "event": "validation",
            "command": command,
            "template": check.name,
            "valid": check.is_valid(),
            "rules_dir": check.rules_dir,
            "notes_dir": check.notes_dir,
            "assets": check
                .assets
                .iter()
                .map(|a| json!({
                    "path": a.path.display().to_string(),
                    "templated": a.templated,
                    "ok": a.ok,
                }))
                .collect::<Vec<_>>(),
        }),
    }
}

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).map_err(io::Error::other)?;
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")
}
