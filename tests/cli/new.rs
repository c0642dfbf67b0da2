//! Tests for `hatch new`.

use crate::support::*;
use std::fs;

#[test]
fn test_new_without_travis_creates_gradle_files() {
    let t = Test::new();

    let output = t.new_cmd("Demo library");
    assert_success(&output);
    assert_stdout_contains(&output, "created");

    for rel in &ALL_FILES[1..] {
        assert_file(&t, rel);
    }
    assert_no_file(&t, ".travis.yml");

    assert!(t.read("settings.gradle.kts").contains("rootProject.name = \"demo\""));
    assert!(t
        .read("build.gradle.kts")
        .contains("description.set(\"demo Demo library\")"));
    assert_eq!(t.read("gradle.properties").trim(), "version=1.0-SNAPSHOT");
}

#[test]
fn test_new_without_travis_ignores_missing_credentials() {
    // No properties, keystore, or tool configured.
    let t = Test::new();

    let output = t.new_cmd("Demo");
    assert_success(&output);
}

#[cfg(unix)]
#[test]
fn test_new_travis_creates_everything() {
    let t = Test::with_ci();

    let output = t.new_travis("Demo library");
    assert_success(&output);

    for rel in ALL_FILES {
        assert_file(&t, rel);
    }
    assert_file(&t, "secring.gpg.enc");
    assert_stdout_contains(&output, KEY_ID);
}

#[cfg(unix)]
#[test]
fn test_new_travis_pipeline_contents() {
    let t = Test::with_ci();
    assert_success(&t.new_travis("Demo"));

    let pipeline = t.read(".travis.yml");
    assert_eq!(secure_lines(&pipeline), expected_secure());

    let key_var = format!("$encrypted_{}_key", KEY_ID);
    let iv_var = format!("$encrypted_{}_iv", KEY_ID);
    assert!(pipeline.contains(&key_var));
    assert!(pipeline.contains(&iv_var));
    assert!(!pipeline.contains("{{"));

    let ring = pipeline.find("signingSecretKeyRingFile").unwrap();
    let first_secure = pipeline.find("- secure:").unwrap();
    assert!(ring < first_secure);
}

#[cfg(unix)]
#[test]
fn test_new_keeps_existing_dependencies_file() {
    let t = Test::with_ci();
    let custom = "object Vers { val kotlin = \"9.9\" }\n";
    t.write("buildSrc/src/main/kotlin/Dependencies.kt", custom);

    let output = t.new_travis("Demo");
    assert_success(&output);
    assert_stdout_contains(&output, "skipped");

    assert_eq!(t.read("buildSrc/src/main/kotlin/Dependencies.kt"), custom);
    for rel in ALL_FILES {
        assert_file(&t, rel);
    }
}

#[test]
fn test_new_twice_changes_nothing() {
    let t = Test::new();
    assert_success(&t.new_cmd("First"));

    let before: Vec<_> = ALL_FILES[1..].iter().map(|rel| t.read(rel)).collect();
    t.write("gradle.properties", "version=2.3.4\n");

    let output = t.new_cmd("Second");
    assert_success(&output);

    let after: Vec<_> = ALL_FILES[1..].iter().map(|rel| t.read(rel)).collect();
    assert_eq!(before[..before.len() - 1], after[..after.len() - 1]);
    assert_eq!(t.read("gradle.properties"), "version=2.3.4\n");
    assert!(!t.read("build.gradle.kts").contains("Second"));
}

#[cfg(unix)]
#[test]
fn test_new_missing_keystore_still_writes_gradle_files() {
    let t = Test::with_ci();
    fs::remove_file(t.home.path().join(".gnupg/secring.gpg")).unwrap();

    let output = t.new_travis("Demo");
    assert_failure(&output);
    assert_stderr_contains(&output, "keystore not found");

    assert_no_file(&t, ".travis.yml");
    assert_no_file(&t, "secring.gpg.enc");
    for rel in &ALL_FILES[1..] {
        assert_file(&t, rel);
    }
}

#[cfg(unix)]
#[test]
fn test_new_missing_property_fails() {
    let t = Test::with_ci();
    t.write_home(
        ".gradle/gradle.properties",
        "repositoryUrl=https://repo\nrepositoryUser=jfix\n",
    );

    let output = t.new_travis("Demo");
    assert_failure(&output);
    assert_stderr_contains(&output, "property not found: repositoryPassword");
    assert_no_file(&t, ".travis.yml");
    assert_no_file(&t, "secring.gpg.enc");
}

#[cfg(unix)]
#[test]
fn test_new_replaces_stale_encrypted_keystore() {
    let t = Test::with_ci();
    t.write("secring.gpg.enc", "stale");

    assert_success(&t.new_travis("Demo"));
    assert_file(&t, "secring.gpg.enc");
    assert_ne!(t.read("secring.gpg.enc"), "stale");
}

#[cfg(unix)]
#[test]
fn test_new_keeps_existing_pipeline() {
    let t = Test::with_ci();
    t.write(".travis.yml", "language: rust\n");

    let output = t.new_travis("Demo");
    assert_success(&output);
    assert_eq!(t.read(".travis.yml"), "language: rust\n");

    // The keystore was re-encrypted under a new key id.
    assert_file(&t, "secring.gpg.enc");
    assert_stdout_contains(&output, "kept existing .travis.yml");
    assert_stdout_contains(&output, KEY_ID);
}

#[cfg(unix)]
#[test]
fn test_new_fresh_pipeline_has_no_stale_key_warning() {
    let t = Test::with_ci();

    let output = t.new_travis("Demo");
    assert_success(&output);
    assert!(!stdout(&output).contains("kept existing .travis.yml"));
    assert!(!stderr(&output).contains("kept existing .travis.yml"));
}

#[cfg(unix)]
#[test]
fn test_new_logged_out_client_suggests_login() {
    let t = Test::with_ci();
    t.use_tool(LOGGED_OUT_TRAVIS);

    let output = t.new_travis("Demo");
    assert_failure(&output);
    assert_stderr_contains(&output, "not logged in");
    assert_stderr_contains(&output, "travis login");
    assert_no_file(&t, ".travis.yml");
    assert_file(&t, "settings.gradle.kts");
}

#[cfg(unix)]
#[test]
fn test_new_without_key_id_fails() {
    let t = Test::with_ci();
    t.use_tool(KEYLESS_TRAVIS);

    let output = t.new_travis("Demo");
    assert_failure(&output);
    assert_stderr_contains(&output, "key id");
    assert_no_file(&t, ".travis.yml");
}

#[cfg(unix)]
#[test]
fn test_new_custom_secure_list_order() {
    let t = Test::with_ci();
    let script = t.home.path().join("bin/travis.sh");
    t.write_home(
        ".hatch.toml",
        format!(
            "tool = [\"sh\", {:?}]\nsecure = [\"signingKeyId\", \"repositoryUser\"]\n",
            script.display().to_string()
        ),
    );

    assert_success(&t.new_travis("Demo"));
    assert_eq!(
        secure_lines(&t.read(".travis.yml")),
        vec![
            "\"ENC(signingKeyId=ABCD1234)\"".to_string(),
            "\"ENC(repositoryUser=jfix)\"".to_string(),
        ]
    );
}

#[test]
fn test_new_json_report() {
    let t = Test::new();
    t.write(".gitignore", "*.log\n");

    let output = t
        .cmd()
        .arg("new")
        .arg("--project")
        .arg(t.project())
        .args(["--description", "Demo", "--json"])
        .output()
        .unwrap();
    assert_success(&output);

    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let entries = report["entries"].as_array().unwrap();
    assert_eq!(entries.len(), ALL_FILES.len() - 1);

    let gitignore = entries.iter().find(|e| e["name"] == "gitignore").unwrap();
    assert_eq!(gitignore["status"], "skipped");
    let settings = entries.iter().find(|e| e["name"] == "settings").unwrap();
    assert_eq!(settings["status"], "created");
}

#[test]
fn test_new_unwritable_location_fails() {
    let t = Test::new();
    // A plain file where the module directory should go.
    t.write("demo", "in the way");

    let output = t.new_cmd("Demo");
    assert_failure(&output);
    assert_stderr_contains(&output, "could not be written");
    assert_file(&t, "settings.gradle.kts");
}

#[test]
fn test_new_current_directory() {
    let t = Test::new();
    fs::create_dir_all(t.project()).unwrap();

    let output = t
        .cmd()
        .current_dir(t.project())
        .args(["new", "--project", ".", "--description", "Demo"])
        .output()
        .unwrap();
    assert_success(&output);

    for rel in &ALL_FILES[1..] {
        assert_file(&t, rel);
    }
    assert!(t.read("settings.gradle.kts").contains("include(\"demo\")"));
}

