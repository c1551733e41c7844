//! Test environment builder for isolated crules testing.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a crules CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated project directory plus helpers to run the binary in it.
pub struct TestEnv {
    pub project_root: TempDir,
    crules_bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run crules from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.project_root.path(), args)
    }

    /// Run crules from a specific directory
    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let output = Command::new(&self.crules_bin)
            .current_dir(cwd)
            .args(args)
            .env("NO_COLOR", "1")
            .env_remove("CRULES_LOG")
            .output()
            .expect("Failed to execute crules");

        output_to_result(output)
    }

    pub fn read_project_file(&self, relative_path: &str) -> String {
        let full_path = self.project_path(relative_path);
        std::fs::read_to_string(&full_path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative_path, e))
    }

    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        write_file(&self.project_path(relative_path), content);
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    files: Vec<(String, String)>,
    dirs: Vec<String>,
    create_marker: bool,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            dirs: Vec::new(),
            create_marker: true,
        }
    }

    /// Add `.crules/templates/<template>/rules/<name>.md`
    pub fn with_rule(mut self, template: &str, name: &str, content: &str) -> Self {
        self.files.push((
            format!(".crules/templates/{template}/rules/{name}.md"),
            content.to_string(),
        ));
        self
    }

    /// Add `.crules/templates/<template>/rules/<name>.md.tera`, rendered on deploy
    pub fn with_template_rule(mut self, template: &str, name: &str, content: &str) -> Self {
        self.files.push((
            format!(".crules/templates/{template}/rules/{name}.md.tera"),
            content.to_string(),
        ));
        self
    }

    /// Add `.crules/templates/<template>/notes/<name>.md`
    pub fn with_note(mut self, template: &str, name: &str, content: &str) -> Self {
        self.files.push((
            format!(".crules/templates/{template}/notes/{name}.md"),
            content.to_string(),
        ));
        self
    }

    /// Write `.crules/config.yaml`
    pub fn with_config(mut self, yaml: &str) -> Self {
        self.files
            .push((".crules/config.yaml".to_string(), yaml.to_string()));
        self
    }

    /// Any file relative to the project root
    pub fn with_file(mut self, relative: &str, content: &str) -> Self {
        self.files.push((relative.to_string(), content.to_string()));
        self
    }

    pub fn with_subdirectory(mut self, relative: &str) -> Self {
        self.dirs.push(relative.to_string());
        self
    }

    /// Leave out the `.crules` marker directory
    pub fn without_marker(mut self) -> Self {
        self.create_marker = false;
        self
    }

    pub fn build(self) -> TestEnv {
        let project_root = TempDir::new().expect("Failed to create project dir");
        if self.create_marker {
            std::fs::create_dir_all(project_root.path().join(".crules"))
                .expect("Failed to create .crules");
        }
        for (relative, content) in &self.files {
            write_file(&project_root.path().join(relative), content);
        }
        for dir in &self.dirs {
            std::fs::create_dir_all(project_root.path().join(dir))
                .expect("Failed to create subdirectory");
        }

        TestEnv {
            project_root,
            crules_bin: PathBuf::from(env!("CARGO_BIN_EXE_crules")),
        }
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}
