//! Scenario: adopting a shared template set in a fresh project
//!
//! Steps:
//! 1. Project carries `.crules/templates/team` with rules and notes
//! 2. `crules templates` shows the set as usable
//! 3. `crules init team` deploys rules and records the template
//! 4. `crules deploy` adds the notes using the recorded template
//! 5. `crules add` restores a deleted rule
//! 6. `crules list` shows every deployed rule

use crate::common::*;
use crate::{assert_deployed, assert_not_deployed};

#[test]
fn scenario_new_project_complete_journey() {
    let env = TestEnv::builder()
        .with_template_rule("team", "style", TEMPLATED_RULE)
        .with_rule("team", "review", PLAIN_RULE)
        .with_note("team", "onboarding", TEMPLATE_LOOKING_NOTE)
        .with_subdirectory("app/src")
        .build();
    let workdir = env.project_path("app/src");

    let result = env.run_from(&workdir, &["templates"]);
    assert!(result.is_success(), "templates: {}", result.stderr);
    assert!(result.stdout.contains("team (2 rules, 1 notes)"));

    let result = env.run_from(&workdir, &["init", "team"]);
    assert!(result.is_success(), "init: {}", result.stderr);
    assert_deployed!(env, ".cursor/rules/review.mdc");
    assert_not_deployed!(env, ".notes/onboarding.md");

    let result = env.run_from(&workdir, &["deploy"]);
    assert!(result.is_success(), "deploy: {}", result.stderr);
    assert_eq!(
        env.read_project_file(".notes/onboarding.md"),
        TEMPLATE_LOOKING_NOTE
    );

    std::fs::remove_file(env.project_path(".cursor/rules/review.mdc")).unwrap();
    let result = env.run_from(&workdir, &["add", "review"]);
    assert!(result.is_success(), "add: {}", result.stderr);
    assert_eq!(env.read_project_file(".cursor/rules/review.mdc"), PLAIN_RULE);

    let result = env.run_from(&workdir, &["list"]);
    assert!(result.is_success());
    assert_eq!(result.stdout, "- review\n- style\n");
}
