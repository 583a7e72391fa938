// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed database for challan storage.
//!
//! The [`Database`] struct provides all data access operations for
//! challans: insertion, retrieval, filtered queries, status mutation,
//! deletion, and the aggregate statistics pass.

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use crate::challan::{Challan, Status, DEFAULT_LOCATION};
use crate::error::{Error, Result};

/// SQL schema for the challan database.
///
/// The column layout is shared with databases written by earlier tooling;
/// renaming or reordering columns breaks that on-disk compatibility.
pub const SCHEMA: &str = r#"
-- Challan register
CREATE TABLE IF NOT EXISTS challans (
    challan_id TEXT PRIMARY KEY,
    vehicle_number TEXT NOT NULL,
    violation TEXT NOT NULL,
    fine REAL NOT NULL,
    status TEXT DEFAULT 'PENDING',
    issue_date TEXT,
    due_date TEXT,
    location TEXT DEFAULT 'Not Specified'
);

-- Indexes
CREATE INDEX IF NOT EXISTS idx_challans_status ON challans(status);
CREATE INDEX IF NOT EXISTS idx_challans_vehicle ON challans(vehicle_number);
"#;

/// Parse a status column value, returning a rusqlite error on bad data.
fn parse_status(value: &str) -> std::result::Result<Status, rusqlite::Error> {
    value.parse().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(Error::CorruptedData(format!(
                "invalid value '{value}' in column 'status'"
            ))),
        )
    })
}

/// Bring the challans table to the current layout.
///
/// Repair is destructive: a table from an older layout (one without the
/// issue_date column) is dropped wholesale and recreated empty. There is
/// no column-by-column migration path.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    if schema_is_stale(conn) {
        tracing::warn!("challans table predates the issue_date column, dropping and recreating");
        conn.execute("DROP TABLE IF EXISTS challans", [])?;
    }
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// Whether an existing challans table lacks the issue_date column.
///
/// A table whose metadata cannot be inspected is assumed stale. A missing
/// table is not stale; the create step builds it fresh.
fn schema_is_stale(conn: &Connection) -> bool {
    let table_exists: bool = conn
        .query_row(
            "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type = 'table' AND name = 'challans'",
            [],
            |row| row.get(0),
        )
        .unwrap_or(true);

    if !table_exists {
        return false;
    }

    let has_issue_date: bool = conn
        .query_row(
            "SELECT COUNT(*) > 0 FROM pragma_table_info('challans') WHERE name = 'issue_date'",
            [],
            |row| row.get(0),
        )
        .unwrap_or(false);

    !has_issue_date
}

/// Map one challans row onto a [`Challan`].
///
/// Stored values are re-stamped verbatim over a freshly constructed
/// record; nothing temporal is recomputed, so rows written by older
/// tooling survive rehydration unchanged.
fn challan_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Challan> {
    let status: Option<String> = row.get(4)?;
    let issue_date: Option<String> = row.get(5)?;
    let due_date: Option<String> = row.get(6)?;
    let location: Option<String> = row.get(7)?;

    let mut challan = Challan::new(row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, None);
    challan.set_status(match status {
        Some(s) => parse_status(&s)?,
        None => Status::Pending,
    });
    challan.set_issued_at(issue_date.unwrap_or_default());
    challan.set_due_at(due_date.unwrap_or_default());
    challan.set_location(location.unwrap_or_else(|| DEFAULT_LOCATION.to_string()));
    Ok(challan)
}

/// Aggregate counters over the whole challan table.
///
/// Amounts sum stored base fines only; accrued penalties never enter the
/// aggregates, unlike the per-record total.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Statistics {
    /// Number of challans in the table.
    pub total: i64,
    /// Number with status PENDING.
    pub pending: i64,
    /// Number with status PAID.
    pub paid: i64,
    /// Sum of base fines over PENDING challans.
    pub pending_amount: f64,
    /// Sum of base fines over PAID challans.
    pub collected_amount: f64,
}

/// SQLite database connection with challan operations.
pub struct Database {
    /// The underlying SQLite connection.
    pub conn: Connection,
}

impl Database {
    /// Open a database connection at the given path, creating and repairing
    /// the schema if needed.
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;

        // WAL journaling plus a bounded busy wait for competing writers
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;

        let db = Database { conn };
        ensure_schema(&db.conn)?;
        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Database { conn };
        ensure_schema(&db.conn)?;
        Ok(db)
    }

    /// Insert one challan with all attributes.
    ///
    /// A duplicate id surfaces as [`Error::DuplicateChallan`]; uniqueness
    /// is enforced here by the primary key, not by the record itself.
    pub fn insert(&self, challan: &Challan) -> Result<()> {
        let result = self.conn.execute(
            "INSERT INTO challans (challan_id, vehicle_number, violation, fine,
             status, issue_date, due_date, location)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                challan.id(),
                challan.vehicle(),
                challan.violation(),
                challan.fine(),
                challan.status().as_str(),
                challan.issued_at(),
                challan.due_at(),
                challan.location(),
            ],
        );

        match result {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(Error::DuplicateChallan(challan.id().to_string()))
            }
            Err(e) => {
                tracing::error!("insert failed for challan {}: {e}", challan.id());
                Err(e.into())
            }
        }
    }

    /// Get a challan by id, if present.
    pub fn get(&self, id: &str) -> Result<Option<Challan>> {
        let challan = self
            .conn
            .query_row(
                "SELECT challan_id, vehicle_number, violation, fine, status,
                        issue_date, due_date, location
                 FROM challans WHERE challan_id = ?1",
                params![id],
                challan_from_row,
            )
            .optional()?;
        Ok(challan)
    }

    /// Get every challan, most recently issued first.
    pub fn all(&self) -> Result<Vec<Challan>> {
        let mut stmt = self.conn.prepare(
            "SELECT challan_id, vehicle_number, violation, fine, status,
                    issue_date, due_date, location
             FROM challans ORDER BY issue_date DESC",
        )?;

        let challans = stmt
            .query_map([], challan_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        tracing::debug!("retrieved {} challans", challans.len());
        Ok(challans)
    }

    /// Get challans whose vehicle number contains the given text.
    ///
    /// Matching is a case-sensitive substring test against the stored
    /// value, most recently issued first.
    pub fn find_by_vehicle(&self, pattern: &str) -> Result<Vec<Challan>> {
        let mut stmt = self.conn.prepare(
            "SELECT challan_id, vehicle_number, violation, fine, status,
                    issue_date, due_date, location
             FROM challans WHERE instr(vehicle_number, ?1) > 0
             ORDER BY issue_date DESC",
        )?;

        let challans = stmt
            .query_map(params![pattern], challan_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        tracing::debug!("vehicle search '{pattern}' matched {} challans", challans.len());
        Ok(challans)
    }

    /// Get challans still awaiting payment, most recently issued first.
    pub fn pending(&self) -> Result<Vec<Challan>> {
        let mut stmt = self.conn.prepare(
            "SELECT challan_id, vehicle_number, violation, fine, status,
                    issue_date, due_date, location
             FROM challans WHERE status = ?1 ORDER BY issue_date DESC",
        )?;

        let challans = stmt
            .query_map(params![Status::Pending.as_str()], challan_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        tracing::debug!("retrieved {} pending challans", challans.len());
        Ok(challans)
    }

    /// Get pending challans past their due day.
    ///
    /// Overdue-ness is never persisted; it is recomputed here against the
    /// wall clock after retrieval.
    pub fn overdue(&self) -> Result<Vec<Challan>> {
        let mut challans = self.pending()?;
        challans.retain(|c| c.is_overdue());
        Ok(challans)
    }

    /// Mark the challan paid. Returns false when no row matched.
    pub fn mark_paid(&self, id: &str) -> Result<bool> {
        let affected = self.conn.execute(
            "UPDATE challans SET status = ?1 WHERE challan_id = ?2",
            params![Status::Paid.as_str(), id],
        )?;

        if affected == 0 {
            tracing::warn!("challan {id} not found for payment");
        }
        Ok(affected > 0)
    }

    /// Remove the challan. Returns false when no row matched.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let affected = self.conn.execute(
            "DELETE FROM challans WHERE challan_id = ?1",
            params![id],
        )?;

        if affected == 0 {
            tracing::warn!("challan {id} not found for deletion");
        }
        Ok(affected > 0)
    }

    /// Compute aggregate statistics in a single pass over the table.
    pub fn statistics(&self) -> Result<Statistics> {
        let stats = self.conn.query_row(
            "SELECT COUNT(*),
                    COUNT(CASE WHEN status = 'PENDING' THEN 1 END),
                    COUNT(CASE WHEN status = 'PAID' THEN 1 END),
                    COALESCE(SUM(CASE WHEN status = 'PENDING' THEN fine END), 0),
                    COALESCE(SUM(CASE WHEN status = 'PAID' THEN fine END), 0)
             FROM challans",
            [],
            |row| {
                Ok(Statistics {
                    total: row.get(0)?,
                    pending: row.get(1)?,
                    paid: row.get(2)?,
                    pending_amount: row.get(3)?,
                    collected_amount: row.get(4)?,
                })
            },
        )?;
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
