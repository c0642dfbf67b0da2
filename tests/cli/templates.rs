//! Tests for `hatch templates`.

use crate::support::*;

#[test]
fn test_templates_lists_catalog() {
    let t = Test::new();

    let output = t.cmd().arg("templates").output().unwrap();
    assert_success(&output);

    let out = stdout(&output);
    for name in ["travis", "dependencies", "settings", "main-test", "properties"] {
        assert!(out.contains(name), "missing {}", name);
    }
    assert!(out.contains("<project>/build.gradle.kts"));
    assert!(out.contains("(--travis)"));
}

#[test]
fn test_templates_json_resolves_project() {
    let t = Test::new();

    let output = t
        .cmd()
        .arg("templates")
        .arg("--project")
        .arg(t.project())
        .arg("--json")
        .output()
        .unwrap();
    assert_success(&output);

    let listings: Vec<serde_json::Value> = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(listings.len(), ALL_FILES.len());

    let paths: Vec<_> = listings
        .iter()
        .map(|l| l["path"].as_str().unwrap().to_string())
        .collect();
    for rel in ALL_FILES {
        let expected = t.file(rel).display().to_string();
        assert!(paths.contains(&expected), "missing {}", expected);
    }

    let travis = listings.iter().find(|l| l["name"] == "travis").unwrap();
    assert_eq!(travis["travis_only"], true);
    assert!(!t.project().exists());
}
