// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use challan_core::{Database, Status};
use chrono::Local;

use super::open_db;
use crate::display::format_payment_details;
use crate::error::{Error, Result};

pub fn run(db_flag: Option<&Path>, id: &str) -> Result<()> {
    let (db, _) = open_db(db_flag)?;
    run_impl(&db, id)
}

/// Internal implementation that accepts the database for testing.
///
/// The amount quoted includes the penalty accrued at payment time, even
/// though only the status transition is persisted.
pub(crate) fn run_impl(db: &Database, id: &str) -> Result<()> {
    let challan = db
        .get(id)?
        .ok_or_else(|| Error::ChallanNotFound(id.to_string()))?;
    if challan.status() == Status::Paid {
        return Err(Error::AlreadyPaid(id.to_string()));
    }

    let now = Local::now().naive_local();
    let total = challan.total_amount_at(now);
    println!("{}", format_payment_details(&challan, now));

    if !db.mark_paid(id)? {
        return Err(Error::ChallanNotFound(id.to_string()));
    }
    println!("Payment successful! Amount Paid: \u{20b9}{total:.2}");
    Ok(())
}

#[cfg(test)]
#[path = "pay_tests.rs"]
mod tests;
