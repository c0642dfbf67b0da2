//! Tests for `hatch pipeline`.

use crate::support::*;

#[cfg(unix)]
#[test]
fn test_pipeline_prints_without_writing() {
    let t = Test::with_ci();

    let output = t.pipeline();
    assert_success(&output);

    let out = stdout(&output);
    assert!(out.starts_with("language: java"));
    assert_eq!(secure_lines(&out), expected_secure());
    assert!(out.contains(&format!("$encrypted_{}_key", KEY_ID)));

    assert_no_file(&t, ".travis.yml");
    assert_no_file(&t, "settings.gradle.kts");
    assert_file(&t, "secring.gpg.enc");
}

#[cfg(unix)]
#[test]
fn test_pipeline_matches_written_file() {
    let t = Test::with_ci();

    let printed = stdout(&t.pipeline());
    assert_success(&t.new_travis("Demo"));

    assert_eq!(printed, t.read(".travis.yml"));
}

#[cfg(unix)]
#[test]
fn test_pipeline_stdout_clean_when_verbose() {
    let t = Test::with_ci();

    let output = t
        .cmd()
        .arg("--verbose")
        .arg("pipeline")
        .arg("--project")
        .arg(t.project())
        .output()
        .unwrap();
    assert_success(&output);
    assert!(stdout(&output).starts_with("language: java"));
    assert!(!stdout(&output).contains("DEBUG"));
}

#[cfg(unix)]
#[test]
fn test_pipeline_missing_property_prints_nothing() {
    let t = Test::with_ci();
    t.write_home(".gradle/gradle.properties", "repositoryUrl=https://repo\n");

    let output = t.pipeline();
    assert_failure(&output);
    assert!(stdout(&output).is_empty());
    assert_stderr_contains(&output, "property not found: repositoryUser");
    assert_stderr_contains(&output, "~/.gradle/gradle.properties");
}
