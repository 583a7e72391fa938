// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Challan identifier generation.
//!
//! Identifiers are `CH` followed by the Unix epoch time in milliseconds
//! at issuance, e.g. `CH1717171717171`. The timestamp keeps ids sortable
//! by issuance order; collisions are only possible within a single
//! millisecond and are retried by the caller.

use chrono::Utc;

/// Prefix carried by every generated challan id.
pub const ID_PREFIX: &str = "CH";

/// Generate a challan id from the current time.
pub fn generate_id() -> String {
    format_id(Utc::now().timestamp_millis())
}

fn format_id(millis: i64) -> String {
    format!("{ID_PREFIX}{millis}")
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
