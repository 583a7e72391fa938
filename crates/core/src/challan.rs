// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core challan types: the [`Challan`] record and its payment [`Status`].
//!
//! A challan derives its overdue state, penalty, and total from stored
//! fields and a caller-supplied clock; it performs no I/O of its own.

use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Storage and display format for issue timestamps (minute precision).
pub const ISSUE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Storage and display format for due dates (date only).
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Location recorded when the caller supplies none.
pub const DEFAULT_LOCATION: &str = "Not Specified";

/// Days from issuance until a challan falls due.
const DUE_DAYS: i64 = 30;

/// Flat surcharge rate applied to the base fine while overdue.
const PENALTY_RATE: f64 = 0.10;

/// Payment status of a challan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    /// Issued and awaiting payment. Initial state for new challans.
    Pending,
    /// Fine settled; overdue and penalty calculations no longer apply.
    Paid,
}

impl Status {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "PENDING",
            Status::Paid => "PAID",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Status::Pending),
            "paid" => Ok(Status::Paid),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// One traffic-violation citation.
///
/// Temporal fields are held in their storage text formats
/// ([`ISSUE_DATE_FORMAT`] and [`DUE_DATE_FORMAT`]) so that rows written by
/// older tools round-trip losslessly; parsing happens only inside the
/// overdue check, which treats an unparseable due date as not overdue.
///
/// Fields are private: the due date is fixed at issuance as thirty days
/// after the issue timestamp, and only the store's rehydration path may
/// re-stamp temporal state from persisted rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Challan {
    id: String,
    vehicle: String,
    violation: String,
    fine: f64,
    status: Status,
    issued_at: String,
    due_at: String,
    location: String,
}

impl Challan {
    /// Creates a pending challan issued now.
    ///
    /// The issue timestamp is truncated to minute precision and the due
    /// date is derived as thirty days later. An absent or blank location
    /// records [`DEFAULT_LOCATION`].
    pub fn new(
        id: String,
        vehicle: String,
        violation: String,
        fine: f64,
        location: Option<&str>,
    ) -> Self {
        Self::with_issue_time(id, vehicle, violation, fine, location, now_local())
    }

    /// Creates a pending challan issued at an explicit timestamp.
    pub fn with_issue_time(
        id: String,
        vehicle: String,
        violation: String,
        fine: f64,
        location: Option<&str>,
        issued_at: NaiveDateTime,
    ) -> Self {
        let location = match location {
            Some(l) if !l.trim().is_empty() => l.to_string(),
            _ => DEFAULT_LOCATION.to_string(),
        };

        Challan {
            id,
            vehicle,
            violation,
            fine,
            status: Status::Pending,
            issued_at: issued_at.format(ISSUE_DATE_FORMAT).to_string(),
            due_at: (issued_at.date() + Duration::days(DUE_DAYS))
                .format(DUE_DATE_FORMAT)
                .to_string(),
            location,
        }
    }

    /// Unique identifier, supplied by the caller at issuance.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Vehicle registration number.
    pub fn vehicle(&self) -> &str {
        &self.vehicle
    }

    /// Violation category.
    pub fn violation(&self) -> &str {
        &self.violation
    }

    /// Base fine amount, before any overdue penalty.
    pub fn fine(&self) -> f64 {
        self.fine
    }

    /// Current payment status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Issue timestamp in [`ISSUE_DATE_FORMAT`].
    pub fn issued_at(&self) -> &str {
        &self.issued_at
    }

    /// Due date in [`DUE_DATE_FORMAT`].
    pub fn due_at(&self) -> &str {
        &self.due_at
    }

    /// Where the violation was recorded.
    pub fn location(&self) -> &str {
        &self.location
    }

    pub(crate) fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    pub(crate) fn set_issued_at(&mut self, issued_at: String) {
        self.issued_at = issued_at;
    }

    pub(crate) fn set_due_at(&mut self, due_at: String) {
        self.due_at = due_at;
    }

    pub(crate) fn set_location(&mut self, location: String) {
        self.location = location;
    }

    /// Whether the challan is unpaid past the end of its due day.
    ///
    /// Never overdue once paid. The due date's end of day is 23:59; a
    /// malformed stored date reads as not overdue rather than failing.
    pub fn is_overdue_at(&self, now: NaiveDateTime) -> bool {
        if self.status == Status::Paid {
            return false;
        }
        match NaiveDate::parse_from_str(&self.due_at, DUE_DATE_FORMAT) {
            Ok(due) => match due.and_hms_opt(23, 59, 0) {
                Some(deadline) => now > deadline,
                None => false,
            },
            Err(_) => false,
        }
    }

    /// [`Self::is_overdue_at`] against the current wall clock.
    pub fn is_overdue(&self) -> bool {
        self.is_overdue_at(now_local())
    }

    /// Penalty accrued at `now`: 10% of the base fine while overdue,
    /// rounded to two decimals, otherwise zero.
    pub fn penalty_amount_at(&self, now: NaiveDateTime) -> f64 {
        if self.is_overdue_at(now) {
            round2(self.fine * PENALTY_RATE)
        } else {
            0.0
        }
    }

    /// [`Self::penalty_amount_at`] against the current wall clock.
    pub fn penalty_amount(&self) -> f64 {
        self.penalty_amount_at(now_local())
    }

    /// Base fine plus any accrued penalty at `now`.
    pub fn total_amount_at(&self, now: NaiveDateTime) -> f64 {
        self.fine + self.penalty_amount_at(now)
    }

    /// [`Self::total_amount_at`] against the current wall clock.
    pub fn total_amount(&self) -> f64 {
        self.total_amount_at(now_local())
    }

    /// Renders the canonical one-line representation at `now`.
    ///
    /// Penalty and total segments appear only while a penalty has accrued;
    /// an `[OVERDUE]` tag is appended for unpaid challans past due.
    pub fn render_at(&self, now: NaiveDateTime) -> String {
        let mut line = format!(
            "ID: {} | Vehicle: {} | Violation: {} | Fine: \u{20b9}{:.2}",
            self.id, self.vehicle, self.violation, self.fine
        );

        let penalty = self.penalty_amount_at(now);
        if penalty > 0.0 {
            line.push_str(&format!(
                " | Penalty: \u{20b9}{:.2} | Total: \u{20b9}{:.2}",
                penalty,
                self.total_amount_at(now)
            ));
        }

        line.push_str(&format!(
            " | Status: {} | Date: {} | Due: {} | Location: {}",
            self.status, self.issued_at, self.due_at, self.location
        ));

        if self.is_overdue_at(now) {
            line.push_str(" [OVERDUE]");
        }

        line
    }
}

impl fmt::Display for Challan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render_at(now_local()))
    }
}

/// Current local wall-clock time without timezone offset.
fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Round a currency amount to two decimal places.
fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
#[path = "challan_tests.rs"]
mod tests;
