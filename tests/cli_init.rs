mod common;

use common::*;

#[test]
fn test_init_deploys_rules_and_records_template() {
    let env = TestEnv::builder()
        .with_template_rule("web", "style", TEMPLATED_RULE)
        .with_rule("web", "plain", PLAIN_RULE)
        .with_note("web", "overview", TEMPLATE_LOOKING_NOTE)
        .build();

    let result = env.run(&["init", "web"]);

    assert!(result.is_success(), "stderr: {}", result.stderr);
    assert_deployed!(env, ".cursor/rules/style.mdc");
    assert_deployed!(env, ".cursor/rules/plain.mdc");
    assert_not_deployed!(env, ".notes/overview.md");
    assert_eq!(
        env.read_project_file(".cursor/rules/style.mdc"),
        "---\ndescription: style rule\n---\n# web\n"
    );
    assert!(env
        .read_project_file(".crules/config.yaml")
        .contains("template_name: web"));
    assert!(result.stdout.contains("2 written"), "stdout: {}", result.stdout);
}

#[test]
fn test_init_copies_rule_with_workflow_expressions() {
    let env = TestEnv::builder().with_rule("web", "ci", WORKFLOW_RULE).build();

    let result = env.run(&["init", "web"]);

    assert!(result.is_success(), "stderr: {}", result.stderr);
    assert_eq!(env.read_project_file(".cursor/rules/ci.mdc"), WORKFLOW_RULE);
}

#[cfg(unix)]
#[test]
fn test_init_writes_rules_world_readable() {
    use std::os::unix::fs::PermissionsExt;

    let env = TestEnv::builder().with_rule("web", "style", PLAIN_RULE).build();

    assert!(env.run(&["init", "web"]).is_success());

    let mode = std::fs::metadata(env.project_path(".cursor/rules/style.mdc"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o644);
}

#[test]
fn test_init_from_subdirectory_finds_root() {
    let env = TestEnv::builder()
        .with_rule("web", "style", PLAIN_RULE)
        .with_subdirectory("src/deep")
        .build();

    let result = env.run_from(&env.project_path("src/deep"), &["init", "web"]);

    assert!(result.is_success(), "stderr: {}", result.stderr);
    assert_deployed!(env, ".cursor/rules/style.mdc");
    assert_not_deployed!(env, "src/deep/.cursor");
}

#[test]
fn test_init_keeps_local_edits_without_force() {
    let env = TestEnv::builder()
        .with_rule("web", "style", PLAIN_RULE)
        .with_file(".cursor/rules/style.mdc", "mine")
        .build();

    let result = env.run(&["init", "web"]);
    assert!(result.is_success());
    assert_eq!(env.read_project_file(".cursor/rules/style.mdc"), "mine");

    let result = env.run(&["init", "web", "--force"]);
    assert!(result.is_success());
    assert_eq!(env.read_project_file(".cursor/rules/style.mdc"), PLAIN_RULE);
}

#[test]
fn test_init_without_marker_fails_and_writes_nothing() {
    let env = TestEnv::builder()
        .without_marker()
        .with_file("templates/web/rules/style.md", PLAIN_RULE)
        .build();

    let result = env.run(&["init", "web"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("Error:"), "stderr: {}", result.stderr);
    assert!(result.stderr.contains("project root not found"));
    assert_not_deployed!(env, ".cursor");
    assert_not_deployed!(env, ".crules");
}

#[test]
fn test_init_unknown_template_fails() {
    let env = TestEnv::builder().with_rule("web", "style", PLAIN_RULE).build();

    let result = env.run(&["init", "mobile"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("mobile"), "stderr: {}", result.stderr);
    assert_not_deployed!(env, ".crules/config.yaml");
}

#[test]
fn test_init_rejects_path_like_template_name() {
    let env = TestEnv::builder().build();

    let result = env.run(&["init", "../elsewhere"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("invalid template name"), "stderr: {}", result.stderr);
}
