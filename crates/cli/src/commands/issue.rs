// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use challan_core::{Challan, Database, Error as CoreError};

use super::open_db;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::id::generate_id;

/// Maximum number of regenerated ids tried when an insert collides.
const MAX_ID_COLLISION_RETRIES: u32 = 10;

pub fn run(
    db_flag: Option<&Path>,
    vehicle: &str,
    violation: &str,
    fine: Option<f64>,
    location: Option<&str>,
) -> Result<()> {
    let (db, config) = open_db(db_flag)?;
    run_impl(&db, &config, vehicle, violation, fine, location)
}

/// Internal implementation that accepts the database and config for
/// testing.
pub(crate) fn run_impl(
    db: &Database,
    config: &Config,
    vehicle: &str,
    violation: &str,
    fine: Option<f64>,
    location: Option<&str>,
) -> Result<()> {
    let vehicle = vehicle.trim().to_uppercase();

    let fine = match fine {
        Some(amount) => amount,
        None => config
            .preset_fine(violation)
            .ok_or_else(|| Error::UnknownViolation(violation.to_string()))?,
    };
    if fine < 0.0 {
        return Err(Error::NegativeFine(fine));
    }

    let challan = insert_with_retry(db, &vehicle, violation, fine, location)?;

    println!(
        "Issued {} to {} (due {})",
        challan.id(),
        challan.vehicle(),
        challan.due_at()
    );
    Ok(())
}

/// Inserts a fresh challan, regenerating the id on a collision.
///
/// Issuing twice within one millisecond produces the same id; the
/// duplicate insert is retried until the clock has moved on.
fn insert_with_retry(
    db: &Database,
    vehicle: &str,
    violation: &str,
    fine: f64,
    location: Option<&str>,
) -> Result<Challan> {
    for _ in 0..MAX_ID_COLLISION_RETRIES {
        let challan = Challan::new(
            generate_id(),
            vehicle.to_string(),
            violation.to_string(),
            fine,
            location,
        );
        match db.insert(&challan) {
            Ok(()) => return Ok(challan),
            Err(CoreError::DuplicateChallan(_)) => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Err(Error::IdGenerationFailed)
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
