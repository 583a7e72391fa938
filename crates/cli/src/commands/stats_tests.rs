// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use challan_core::Challan;

#[test]
fn test_stats_runs_on_empty_db() {
    let db = Database::open_in_memory().unwrap();
    run_impl(&db, OutputFormat::Text).unwrap();
    run_impl(&db, OutputFormat::Json).unwrap();
}

#[test]
fn test_stats_reflects_paid_and_pending() {
    let db = Database::open_in_memory().unwrap();
    for (id, fine) in [("CH1", 1500.0), ("CH2", 300.0)] {
        db.insert(&Challan::new(
            id.to_string(),
            "KA01AB1234".to_string(),
            "Over Speeding".to_string(),
            fine,
            None,
        ))
        .unwrap();
    }
    db.mark_paid("CH2").unwrap();

    let stats = db.statistics().unwrap();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.pending, 1);
    assert_eq!(stats.paid, 1);
    assert_eq!(stats.pending_amount, 1500.0);
    assert_eq!(stats.collected_amount, 300.0);

    run_impl(&db, OutputFormat::Text).unwrap();
}
