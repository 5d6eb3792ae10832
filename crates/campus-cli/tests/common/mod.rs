#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;
use tempfile::TempDir;

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

const CATALOG: &str = r##"{
  "data": [
    {
      "id": 25946,
      "name": "IIM Lucknow",
      "location": "Lucknow, Uttar Pradesh",
      "stream": "MBA",
      "type": "Government",
      "rating": 4.6,
      "courses": [{"name": "PGP in Management", "fees": "2400000"}],
      "rawScraped": {
        "ranking_data": [
          {"stream": "MBA", "ranking": "#6 NIRF India 2024"},
          {"stream": "MBA", "ranking": ["#7 NIRF India 2023", "#9 NIRF India 2024"]}
        ]
      }
    },
    {
      "id": "101",
      "name": "Symbiosis Institute of Business Management",
      "location": "Pune, Maharashtra",
      "stream": ["MBA", "PGDM"],
      "type": "Private",
      "rating": "4.2",
      "courses": [{"name": "MBA", "fees": "2200000"}]
    },
    {
      "id": 102,
      "name": "IIT Delhi",
      "location": "Hauz Khas, New Delhi",
      "stream": ["B.Tech"],
      "type": "Government",
      "rating": 4.8,
      "courses": [{"name": "B.Tech Computer Science"}]
    },
    {
      "id": 103,
      "name": "Amity University",
      "location": "Sector 125, Noida, Uttar Pradesh",
      "stream": ["B.Tech", "MBA"],
      "type": "Private",
      "rating": 3.9,
      "courses": [{"name": "MBA"}, {"name": "B.Tech Computer Science"}]
    },
    "not an institution"
  ]
}"##;

fn fixture_dir() -> &'static Path {
    static DIR: OnceLock<TempDir> = OnceLock::new();
    DIR.get_or_init(|| {
        let dir = tempfile::tempdir().expect("failed to create fixture dir for tests");
        std::fs::write(dir.path().join("colleges.json"), CATALOG).expect("write catalog");
        std::fs::write(dir.path().join("config.toml"), "").expect("write config");
        dir
    })
    .path()
}

/// Path of the shared fixture catalog.
#[allow(dead_code)]
pub fn catalog_file() -> PathBuf {
    fixture_dir().join("colleges.json")
}

/// A `campus` command isolated from the user's config, with no catalog set.
pub fn campus_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("campus"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env_remove("CAMPUS_DATA");
    cmd.env_remove("CAMPUS_OUTPUT_FORMAT");
    cmd.env("CAMPUS_CONFIG", fixture_dir().join("config.toml"));
    cmd.env("NO_COLOR", "1");
    cmd
}

/// A `campus` command reading the fixture catalog.
#[allow(dead_code)]
pub fn campus_with_catalog() -> Command {
    let mut cmd = campus_cmd();
    cmd.env("CAMPUS_DATA", catalog_file());
    cmd
}

/// Run to success and parse stdout as one JSON document.
#[allow(dead_code)]
pub fn json_output(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("stdout should be JSON")
}
