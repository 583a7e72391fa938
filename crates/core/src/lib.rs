// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! challan-core: Shared library for the challan tracker
//!
//! This crate provides the challan record type, the SQLite-backed store,
//! and the error taxonomy used by the challan CLI.

pub mod challan;
pub mod db;
pub mod error;

pub use challan::{Challan, Status, DEFAULT_LOCATION, DUE_DATE_FORMAT, ISSUE_DATE_FORMAT};
pub use db::{Database, Statistics};
pub use error::{Error, Result};
