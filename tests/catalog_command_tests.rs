//! Integration tests for `updatekit list` and `updatekit feed`

mod common;

use common::TestWorkspace;
use predicates::prelude::*;

fn populated_workspace() -> TestWorkspace {
    let workspace = TestWorkspace::new();
    workspace.create_update(
        "week-1",
        "---\ndate: 2026-03-02\n---\n# Week 1\nKickoff & planning.\n",
        &[],
    );
    workspace.create_update(
        "week-2",
        "---\ndate: 2026-03-09\n---\n# Week 2\nPrototype rig assembled.\n",
        &[("data.csv", "x,y")],
    );
    workspace.write_file("src/updates/week-2/preview.png", "png");
    workspace
}

#[test]
fn test_list_without_updates() {
    let workspace = TestWorkspace::new();

    workspace
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No updates found."));
}

#[test]
fn test_list_newest_first() {
    let workspace = populated_workspace();

    let output = workspace.cmd().arg("list").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    assert!(stdout.contains("Updates (2):"));
    let newer = stdout.find("Week 2").unwrap();
    let older = stdout.find("Week 1").unwrap();
    assert!(newer < older);
}

#[test]
fn test_list_json() {
    let workspace = populated_workspace();
    workspace.cmd().args(["build", "-q"]).assert().success();

    let output = workspace.cmd().args(["list", "--json"]).assert().success();
    let value: serde_json::Value = serde_json::from_slice(&output.get_output().stdout).unwrap();

    let updates = value.as_array().unwrap();
    assert_eq!(updates.len(), 2);
    assert_eq!(updates[0]["slug"], "week-2");
    assert_eq!(updates[0]["date"], "2026-03-09T00:00:00Z");
    assert_eq!(updates[0]["preview"], "png");
    assert_eq!(updates[0]["has_archive"], true);
    assert_eq!(updates[1]["blurb"], "Kickoff & planning.");
}

#[test]
fn test_feed_writes_default_output() {
    let workspace = populated_workspace();

    workspace
        .cmd()
        .args(["feed", "--base-url", "https://example.org", "--title", "Lab Updates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RSS feed generated:"))
        .stdout(predicate::str::contains("2 items included"));

    let xml = workspace.read_file("dist/feed.xml");
    assert!(xml.contains("<title>Lab Updates</title>"));
    assert!(xml.contains("<link>https://example.org/#update:week-2</link>"));
    assert!(xml.contains("<pubDate>Mon, 09 Mar 2026 00:00:00 GMT</pubDate>"));
    assert!(xml.contains("<description>Kickoff &amp; planning.</description>"));
    assert!(xml.contains("https://example.org/assets/preview-week-2.png"));
    assert!(xml.find("week-2").unwrap() < xml.find("week-1").unwrap());
}

#[test]
fn test_feed_custom_output() {
    let workspace = populated_workspace();

    workspace
        .cmd()
        .args(["feed", "--base-url", "https://example.org/", "-o", "public/rss.xml"])
        .assert()
        .success();

    let xml = workspace.read_file("public/rss.xml");
    assert!(xml.contains("href=\"https://example.org/rss.xml\""));
    assert!(!workspace.file_exists("dist/feed.xml"));
}

#[test]
fn test_feed_missing_updates_dir() {
    let workspace = TestWorkspace::new();

    workspace
        .cmd()
        .args(["feed", "--base-url", "https://example.org"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Updates directory not found"));

    assert!(!workspace.file_exists("dist"));
}
