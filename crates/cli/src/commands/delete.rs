// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use challan_core::Database;

use super::open_db;
use crate::error::{Error, Result};

pub fn run(db_flag: Option<&Path>, id: &str) -> Result<()> {
    let (db, _) = open_db(db_flag)?;
    run_impl(&db, id)
}

/// Internal implementation that accepts the database for testing.
pub(crate) fn run_impl(db: &Database, id: &str) -> Result<()> {
    if !db.delete(id)? {
        return Err(Error::ChallanNotFound(id.to_string()));
    }
    println!("Deleted {id}");
    Ok(())
}

#[cfg(test)]
#[path = "delete_tests.rs"]
mod tests;
