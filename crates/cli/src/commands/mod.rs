// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command implementations.
//!
//! Each command is a thin `run` wrapper that opens the database and
//! delegates to a `run_impl` taking the open handle, so tests drive the
//! implementation against an in-memory database.

pub mod delete;
pub mod issue;
pub mod list;
pub mod pay;
pub mod search;
pub mod stats;

use std::path::Path;

use challan_core::Database;
use tracing::debug;

use crate::config::{resolve_db_path, Config};
use crate::error::Result;

/// Opens the database for a command invocation.
///
/// The path comes from the `--db` flag when given, otherwise from
/// `CHALLAN_DB`, the discovered `challan.toml`, or `echallan.db` in the
/// current directory.
pub(crate) fn open_db(db_flag: Option<&Path>) -> Result<(Database, Config)> {
    let config = Config::discover()?;
    let db_path = resolve_db_path(db_flag, &config);
    debug!("opening database at {}", db_path.display());
    let db = Database::open(&db_path)?;
    Ok((db, config))
}
