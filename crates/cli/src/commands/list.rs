// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use challan_core::{Challan, Database};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;

use super::open_db;
use crate::cli::OutputFormat;
use crate::display::format_listing;
use crate::error::Result;

/// One challan in JSON output.
///
/// Stored fields are flattened alongside the derived time-dependent
/// values so consumers need no date arithmetic of their own.
#[derive(Serialize)]
pub(crate) struct ChallanJson<'a> {
    #[serde(flatten)]
    challan: &'a Challan,
    overdue: bool,
    penalty: f64,
    total: f64,
}

impl<'a> ChallanJson<'a> {
    pub(crate) fn new(challan: &'a Challan, now: NaiveDateTime) -> Self {
        ChallanJson {
            overdue: challan.is_overdue_at(now),
            penalty: challan.penalty_amount_at(now),
            total: challan.total_amount_at(now),
            challan,
        }
    }
}

/// Shared output path for every command that prints challans.
pub(crate) fn print_challans(
    title: &str,
    challans: &[Challan],
    output: OutputFormat,
) -> Result<()> {
    let now = Local::now().naive_local();
    match output {
        OutputFormat::Text => println!("{}", format_listing(title, challans, now)),
        OutputFormat::Json => {
            let items: Vec<ChallanJson> =
                challans.iter().map(|c| ChallanJson::new(c, now)).collect();
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
    }
    Ok(())
}

pub fn all(db_flag: Option<&Path>, output: OutputFormat) -> Result<()> {
    let (db, _) = open_db(db_flag)?;
    all_impl(&db, output)
}

pub(crate) fn all_impl(db: &Database, output: OutputFormat) -> Result<()> {
    let challans = db.all()?;
    print_challans("All Challans", &challans, output)
}

pub fn pending(db_flag: Option<&Path>, output: OutputFormat) -> Result<()> {
    let (db, _) = open_db(db_flag)?;
    pending_impl(&db, output)
}

pub(crate) fn pending_impl(db: &Database, output: OutputFormat) -> Result<()> {
    let challans = db.pending()?;
    print_challans("Pending Challans", &challans, output)
}

pub fn overdue(db_flag: Option<&Path>, output: OutputFormat) -> Result<()> {
    let (db, _) = open_db(db_flag)?;
    overdue_impl(&db, output)
}

pub(crate) fn overdue_impl(db: &Database, output: OutputFormat) -> Result<()> {
    let challans = db.overdue()?;
    print_challans("Overdue Challans (with Penalty)", &challans, output)
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
