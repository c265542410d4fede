//! End-to-end tests for the identity-sim binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn identity_sim() -> Command {
    Command::cargo_bin("identity-sim").unwrap()
}

#[test]
fn test_run_boots_the_bundled_demo_page() {
    identity_sim()
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Designed & developed by Fränz Friederes",
        ))
        .stdout(predicate::str::contains("body.preload-complete"))
        .stdout(predicate::str::contains("div.tooltip.hidden"));
}

#[test]
fn test_run_hover_places_the_tooltip() {
    identity_sim()
        .args(["run", "--hover", ".actions a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("top: 548px; left: 488px"))
        .stdout(predicate::str::contains("text=\"Say hello\""))
        .stdout(predicate::str::contains("div.tooltip.hidden").not());
}

#[test]
fn test_run_scroll_shifts_the_tooltip() {
    identity_sim()
        .args(["run", "--scroll", "12,340", "--hover", ".actions a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("top: 888px; left: 500px"));
}

#[test]
fn test_run_touch_profile_never_creates_a_tooltip() {
    identity_sim()
        .args(["run", "--touch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("body.preload-complete"))
        .stdout(predicate::str::contains("div.tooltip").not());
}

#[test]
fn test_run_advance_stops_short_of_creation() {
    identity_sim()
        .args(["run", "--advance", "3499"])
        .assert()
        .success()
        .stdout(predicate::str::contains("div.tooltip").not());
}

#[test]
fn test_dump_tree_raw_skips_the_behaviors() {
    identity_sim()
        .args(["dump-tree", "--raw"])
        .assert()
        .success()
        .stdout(predicate::str::contains("section.section-hero"))
        .stdout(predicate::str::contains("title=\"Say hello\""))
        .stdout(predicate::str::contains("preload-complete").not());
}

#[test]
fn test_dump_tree_booted_migrates_titles() {
    identity_sim()
        .arg("dump-tree")
        .assert()
        .success()
        .stdout(predicate::str::contains("data-tooltip=\"Say hello\""))
        .stdout(predicate::str::contains("title=\"Say hello\"").not());
}

#[test]
fn test_dump_tree_visible_only_drops_the_parked_tooltip() {
    identity_sim()
        .args(["dump-tree", "--visible-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("section.section-hero"))
        .stdout(predicate::str::contains("div.tooltip").not());
}

#[test]
fn test_dump_tree_filter_narrows_to_matching_elements() {
    identity_sim()
        .args(["dump-tree", "--raw", "--filter", "actions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ul.actions"))
        .stdout(predicate::str::contains("section.section-work").not());
}

#[test]
fn test_console_json_lists_three_styled_entries() {
    let assert = identity_sim().args(["console", "--json"]).assert().success();
    let entries: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("valid JSON");
    let list = entries.as_array().expect("top level array");
    assert_eq!(list.len(), 3);
    let style = list[0]["segments"][0]["style"].as_str().unwrap();
    assert!(style.contains("#ff00aa"));
}

#[test]
fn test_page_flag_loads_markup_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tiny.xhtml");
    std::fs::write(&path, "<html><body><p>Bespoke page</p></body></html>").unwrap();

    identity_sim()
        .args(["dump-tree", "--raw", "--page"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("text=\"Bespoke page\""));
}

#[test]
fn test_missing_page_file_fails() {
    identity_sim()
        .args(["run", "--page", "/nonexistent/page.xhtml"])
        .assert()
        .failure();
}

#[test]
fn test_malformed_scroll_is_rejected() {
    identity_sim()
        .args(["run", "--scroll", "sideways"])
        .assert()
        .failure();
}
