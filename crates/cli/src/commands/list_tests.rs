// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;

fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn challan_issued_jan_first() -> Challan {
    Challan::with_issue_time(
        "CH1".to_string(),
        "KA01AB1234".to_string(),
        "Over Speeding".to_string(),
        1500.0,
        Some("MG Road"),
        dt("2024-01-01 10:00:00"),
    )
}

#[test]
fn test_challan_json_flattens_record_with_derived_fields() {
    let challan = challan_issued_jan_first();
    let value = serde_json::to_value(ChallanJson::new(&challan, dt("2024-02-05 00:00:00"))).unwrap();

    assert_eq!(value["id"], "CH1");
    assert_eq!(value["vehicle"], "KA01AB1234");
    assert_eq!(value["violation"], "Over Speeding");
    assert_eq!(value["fine"], 1500.0);
    assert_eq!(value["status"], "PENDING");
    assert_eq!(value["issued_at"], "2024-01-01 10:00");
    assert_eq!(value["due_at"], "2024-01-31");
    assert_eq!(value["location"], "MG Road");
    assert_eq!(value["overdue"], true);
    assert_eq!(value["penalty"], 150.0);
    assert_eq!(value["total"], 1650.0);
}

#[test]
fn test_challan_json_within_due_period() {
    let challan = challan_issued_jan_first();
    let value = serde_json::to_value(ChallanJson::new(&challan, dt("2024-01-10 00:00:00"))).unwrap();

    assert_eq!(value["overdue"], false);
    assert_eq!(value["penalty"], 0.0);
    assert_eq!(value["total"], 1500.0);
}

#[test]
fn test_listing_commands_run_against_seeded_db() {
    let db = Database::open_in_memory().unwrap();
    db.insert(&challan_issued_jan_first()).unwrap();

    all_impl(&db, OutputFormat::Text).unwrap();
    pending_impl(&db, OutputFormat::Text).unwrap();
    overdue_impl(&db, OutputFormat::Json).unwrap();
}

#[test]
fn test_listing_commands_run_against_empty_db() {
    let db = Database::open_in_memory().unwrap();

    all_impl(&db, OutputFormat::Text).unwrap();
    pending_impl(&db, OutputFormat::Json).unwrap();
    overdue_impl(&db, OutputFormat::Text).unwrap();
}
