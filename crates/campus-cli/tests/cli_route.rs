#![allow(clippy::unwrap_used, clippy::expect_used)]
//! End-to-end tests for `campus route`

mod common;

use common::{campus_cmd, json_output};
use predicates::prelude::*;

#[test]
fn listing_with_region_round_trips() {
    let value = json_output(campus_cmd().args([
        "route",
        "/mba/top-colleges-in-delhi-ncr",
        "-f",
        "json",
    ]));
    assert_eq!(value["kind"], "listing");
    assert_eq!(value["canonical"], "/mba/top-colleges-in-delhi-ncr");
    assert_eq!(value["route"]["criteria"]["stream"], "Management");
    assert_eq!(value["route"]["criteria"]["region"], "Delhi NCR");
    assert!(value["route"]["criteria"]["city"].is_null());
}

#[test]
fn listing_with_city_keeps_city() {
    let value = json_output(campus_cmd().args(["route", "/btech/top-colleges-in-pune", "-f", "json"]));
    assert_eq!(value["route"]["criteria"]["stream"], "Engineering");
    assert_eq!(value["route"]["criteria"]["city"], "Pune");
    assert_eq!(value["canonical"], "/btech/top-colleges-in-pune");
}

#[test]
fn malformed_suffix_keeps_stream() {
    let value = json_output(campus_cmd().args(["route", "/mba/top-colleges-near-pune", "-f", "json"]));
    assert_eq!(value["kind"], "listing");
    assert_eq!(value["canonical"], "/mba/top-colleges");
    assert_eq!(value["route"]["criteria"]["stream"], "Management");
}

#[test]
fn legacy_paths_redirect() {
    let value = json_output(campus_cmd().args(["route", "/mba-colleges", "-f", "json"]));
    assert_eq!(value["kind"], "redirect");
    assert_eq!(value["canonical"], "/mba/top-colleges");

    let value = json_output(campus_cmd().args(["route", "/colleges/mba/Pune", "-f", "json"]));
    assert_eq!(value["canonical"], "/mba/top-colleges-in-pune");
}

#[test]
fn detail_and_course_routes() {
    let value = json_output(campus_cmd().args([
        "route",
        "/university/25946-iim-lucknow?tab=rankings",
        "-f",
        "json",
    ]));
    assert_eq!(value["kind"], "detail");
    assert_eq!(value["route"]["id"], "25946");

    let value = json_output(campus_cmd().args([
        "route",
        "/courses/management/pgdm-finance",
        "-f",
        "json",
    ]));
    assert_eq!(value["kind"], "course");
    assert_eq!(value["route"]["category"], "management");
}

#[test]
fn unknown_route_has_no_canonical_path() {
    campus_cmd()
        .args(["route", "/about/us/team", "-f", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kind: unknown"))
        .stdout(predicate::str::contains("canonical: none"));
}

#[test]
fn configured_region_is_recognised() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(
        &config,
        "[[regions]]\nname = \"Mumbai Metropolitan Region\"\ncities = [\"Mumbai\", \"Thane\"]\n",
    )
    .unwrap();

    let value = json_output(
        campus_cmd()
            .env("CAMPUS_CONFIG", &config)
            .args(["route", "/mba/top-colleges-in-mumbai-metropolitan-region", "-f", "json"]),
    );
    assert_eq!(value["route"]["criteria"]["region"], "Mumbai Metropolitan Region");
}

#[test]
fn invalid_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[listing]\npage_size = 0\n").unwrap();

    campus_cmd()
        .arg("--config")
        .arg(&config)
        .args(["route", "/colleges"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("page_size"));
}
