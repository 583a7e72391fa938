// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! challan - a traffic-violation record tracker library.
//!
//! This crate provides the command layer for the `challan` CLI tool,
//! which keeps challan records in a SQLite database and derives due
//! dates, overdue state, and late penalties from them.
//!
//! # Main Components
//!
//! - [`Database`] - SQLite-backed storage for challan records
//! - [`Challan`] - one violation record with its derived amounts
//! - [`Config`] - presets and database location from `challan.toml`
//! - [`Error`] - error types for all operations
//!
//! The storage layer itself lives in `challan-core`; the types needed to
//! drive it are re-exported here.

mod cli;
mod commands;
mod display;

pub mod config;
pub mod error;
pub mod id;

pub use cli::{Cli, Command, OutputFormat};
pub use config::Config;
pub use error::{Error, Result};

pub use challan_core::{Challan, Database, Statistics, Status};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a parsed CLI invocation. This is the main entry point for
/// library users and provides a testable way to run commands without
/// process execution.
pub fn run(cli: Cli) -> Result<()> {
    let db = cli.db.as_deref();
    match cli.command {
        Command::Issue {
            vehicle,
            violation,
            fine,
            location,
        } => commands::issue::run(db, &vehicle, &violation, fine, location.as_deref()),
        Command::List { output } => commands::list::all(db, output),
        Command::Pending { output } => commands::list::pending(db, output),
        Command::Overdue { output } => commands::list::overdue(db, output),
        Command::Search { vehicle, output } => commands::search::run(db, &vehicle, output),
        Command::Pay { id } => commands::pay::run(db, &id),
        Command::Delete { id } => commands::delete::run(db, &id),
        Command::Stats { output } => commands::stats::run(db, output),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "challan", &mut std::io::stdout());
            Ok(())
        }
    }
}
