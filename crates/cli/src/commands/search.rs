// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use challan_core::Database;

use super::list::print_challans;
use super::open_db;
use crate::cli::OutputFormat;
use crate::error::Result;

pub fn run(db_flag: Option<&Path>, vehicle: &str, output: OutputFormat) -> Result<()> {
    let (db, _) = open_db(db_flag)?;
    run_impl(&db, vehicle, output)
}

/// Internal implementation that accepts the database for testing.
///
/// Matching is a case-sensitive substring scan over stored vehicle
/// numbers; uppercasing the query here mirrors what `issue` stores.
pub(crate) fn run_impl(db: &Database, vehicle: &str, output: OutputFormat) -> Result<()> {
    let vehicle = vehicle.trim().to_uppercase();
    let challans = db.find_by_vehicle(&vehicle)?;
    print_challans(&format!("Search Results for: {vehicle}"), &challans, output)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
