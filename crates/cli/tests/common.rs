// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// Database file used by tests inside their temp directory.
pub fn db_path(temp: &TempDir) -> PathBuf {
    temp.path().join("echallan.db")
}

/// Base command running against the temp directory's database.
pub fn challan(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("challan");
    cmd.current_dir(temp.path()).env("CHALLAN_DB", db_path(temp));
    cmd
}

/// Base command with no database pinned, for config discovery tests.
pub fn challan_bare(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("challan");
    cmd.current_dir(temp.path()).env_remove("CHALLAN_DB");
    cmd
}

/// Helper to issue a challan and return its id.
pub fn issue_challan(temp: &TempDir, vehicle: &str, violation: &str, fine: &str) -> String {
    let output = challan(temp)
        .args(["issue", vehicle, violation, fine])
        .output()
        .unwrap();
    assert!(output.status.success(), "issue failed: {output:?}");

    String::from_utf8_lossy(&output.stdout)
        .split_whitespace()
        .find(|s| s.starts_with("CH"))
        .unwrap()
        .to_string()
}

/// Helper to seed a challan with an explicit issue time through the
/// library, so listings can contain overdue rows.
pub fn seed_challan_at(temp: &TempDir, id: &str, vehicle: &str, fine: f64, issued_at: &str) {
    use challan::{Challan, Database};

    let issued_at = chrono::NaiveDateTime::parse_from_str(issued_at, "%Y-%m-%d %H:%M:%S").unwrap();
    let db = Database::open(&db_path(temp)).unwrap();
    db.insert(&Challan::with_issue_time(
        id.to_string(),
        vehicle.to_string(),
        "Over Speeding".to_string(),
        fine,
        None,
        issued_at,
    ))
    .unwrap();
}
