#![allow(clippy::unwrap_used, clippy::expect_used)]
//! End-to-end tests for `campus filter`

mod common;

use common::{campus_cmd, campus_with_catalog, json_output};
use predicates::prelude::*;
use serde_json::Value;

fn ids(value: &Value) -> Vec<String> {
    value["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn unfiltered_lists_every_object_record() {
    let value = json_output(campus_with_catalog().args(["filter", "-f", "json"]));
    assert_eq!(value["path"], "/colleges");
    assert_eq!(value["total"], 4);
    assert_eq!(ids(&value), vec!["25946", "101", "102", "103"]);
    assert_eq!(value["heading"], "Top Colleges in India");
}

#[test]
fn stream_filter_uses_family_aliases() {
    let value = json_output(campus_with_catalog().args([
        "filter",
        "--stream",
        "Management",
        "-f",
        "json",
    ]));
    assert_eq!(value["path"], "/mba/top-colleges");
    assert_eq!(ids(&value), vec!["25946", "101", "103"]);
    assert_eq!(value["criteria"]["stream"], "Management");
    assert_eq!(value["criteria"]["min_rating"], 0.0);
    assert_eq!(value["criteria"]["institution_type"], "All");
    assert_eq!(value["page_size"], 20);
}

#[test]
fn stream_and_city_build_location_path() {
    let value = json_output(campus_with_catalog().args([
        "filter", "--stream", "mba", "--city", "Pune", "-f", "json",
    ]));
    assert_eq!(value["path"], "/mba/top-colleges-in-pune");
    assert_eq!(ids(&value), vec!["101"]);
    assert_eq!(value["results"][0]["path"], "/university/101-symbiosis-institute-of-business-management");
    assert!(value["title"].as_str().unwrap().contains("in Pune"));
}

#[test]
fn region_group_matches_member_cities() {
    let value = json_output(campus_with_catalog().args([
        "filter",
        "--region",
        "Delhi NCR",
        "-f",
        "json",
    ]));
    assert_eq!(ids(&value), vec!["102", "103"]);
}

#[test]
fn rating_and_course_narrow_results() {
    let value = json_output(campus_with_catalog().args([
        "filter",
        "--min-rating",
        "4.5",
        "-f",
        "json",
    ]));
    assert_eq!(ids(&value), vec!["25946", "102"]);

    let value = json_output(campus_with_catalog().args([
        "filter",
        "--course",
        "computer",
        "--min-rating",
        "4.5",
        "-f",
        "json",
    ]));
    assert_eq!(ids(&value), vec!["102"]);
}

#[test]
fn pagination_with_limit() {
    let value = json_output(campus_with_catalog().args([
        "filter", "--type", "Private", "--limit", "1", "--page", "2", "-f", "json",
    ]));
    assert_eq!(value["total"], 2);
    assert_eq!(value["pages"], 2);
    assert_eq!(value["page_size"], 1);
    assert_eq!(ids(&value), vec!["103"]);

    let value = json_output(campus_with_catalog().args([
        "filter", "--limit", "10", "--page", "5", "-f", "json",
    ]));
    assert!(value["results"].as_array().unwrap().is_empty());
}

#[test]
fn jsonl_emits_one_line_per_result() {
    let output = campus_with_catalog()
        .args(["filter", "--stream", "btech", "-f", "jsonl"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    for line in lines {
        let item: Value = serde_json::from_str(line).unwrap();
        assert!(item["name"].is_string());
    }
}

#[test]
fn text_output_shows_heading_and_page_line() {
    campus_with_catalog()
        .args(["filter", "--stream", "Management", "-f", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Top Management Colleges"))
        .stdout(predicate::str::contains("IIM Lucknow"))
        .stdout(predicate::str::contains("Page 1 of 1 (3 colleges)"));
}

#[test]
fn missing_catalog_is_reported() {
    campus_cmd()
        .args(["filter", "-f", "json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--data"));
}

#[test]
fn unreadable_catalog_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{"items": []}"#).unwrap();

    campus_cmd()
        .arg("--data")
        .arg(&path)
        .args(["filter", "-f", "json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load catalog"));
}
