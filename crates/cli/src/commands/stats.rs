// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use challan_core::Database;

use super::open_db;
use crate::cli::OutputFormat;
use crate::display::format_stats_line;
use crate::error::Result;

pub fn run(db_flag: Option<&Path>, output: OutputFormat) -> Result<()> {
    let (db, _) = open_db(db_flag)?;
    run_impl(&db, output)
}

/// Internal implementation that accepts the database for testing.
pub(crate) fn run_impl(db: &Database, output: OutputFormat) -> Result<()> {
    let stats = db.statistics()?;
    match output {
        OutputFormat::Text => println!("{}", format_stats_line(&stats)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
    }
    Ok(())
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
