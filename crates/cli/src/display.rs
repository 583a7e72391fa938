// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal rendering for listings, payments, and statistics.
//!
//! Pure string builders: every function takes the records and the clock
//! value it needs and returns finished text, so command code owns all
//! I/O and tests compare strings.

use challan_core::{Challan, Statistics};
use chrono::NaiveDateTime;

/// Width of the rule lines framing a listing.
const RULE_WIDTH: usize = 80;

/// Renders a titled listing of challans as seen at `now`.
///
/// ```text
/// Pending Challans
/// ================ ... ================
///
/// ID: CH1717171717171 | Vehicle: KA01AB1234 | ... | Location: MG Road
/// ---------------- ... ----------------
///
/// Total Challans: 1 | Total Fine Amount: ₹1500.00
/// ```
///
/// An empty listing reads `No challans found.`; the summary footer is
/// printed either way.
pub fn format_listing(title: &str, challans: &[Challan], now: NaiveDateTime) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push_str("\n\n");

    if challans.is_empty() {
        out.push_str("No challans found.\n");
    } else {
        for challan in challans {
            out.push_str(&challan.render_at(now));
            out.push('\n');
            out.push_str(&"-".repeat(RULE_WIDTH));
            out.push('\n');
        }
    }

    out.push('\n');
    out.push_str(&format_listing_footer(challans, now));
    out
}

/// Summary footer for a listing: record count and fine total always,
/// penalty total and overdue count only when nonzero.
fn format_listing_footer(challans: &[Challan], now: NaiveDateTime) -> String {
    let total_fines: f64 = challans.iter().map(Challan::fine).sum();
    let total_penalties: f64 = challans.iter().map(|c| c.penalty_amount_at(now)).sum();
    let overdue = challans.iter().filter(|c| c.is_overdue_at(now)).count();

    let mut footer = format!(
        "Total Challans: {} | Total Fine Amount: \u{20b9}{:.2}",
        challans.len(),
        total_fines
    );
    if total_penalties > 0.0 {
        footer.push_str(&format!(" | Total Penalties: \u{20b9}{total_penalties:.2}"));
    }
    if overdue > 0 {
        footer.push_str(&format!(" | Overdue: {overdue}"));
    }
    footer
}

/// Renders the single-line statistics summary.
pub fn format_stats_line(stats: &Statistics) -> String {
    format!(
        "Total: {} | Pending: {} | Paid: {} | Pending Amount: \u{20b9}{:.2} | Collected: \u{20b9}{:.2}",
        stats.total, stats.pending, stats.paid, stats.pending_amount, stats.collected_amount
    )
}

/// Renders the payment breakdown shown before a challan is settled.
pub fn format_payment_details(challan: &Challan, now: NaiveDateTime) -> String {
    format!(
        "Challan ID: {}\nVehicle: {}\nFine: \u{20b9}{:.2}\nPenalty: \u{20b9}{:.2}\nTotal Amount: \u{20b9}{:.2}",
        challan.id(),
        challan.vehicle(),
        challan.fine(),
        challan.penalty_amount_at(now),
        challan.total_amount_at(now)
    )
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
