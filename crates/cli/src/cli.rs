// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Output format for commands that support structured output.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

#[derive(Parser)]
#[command(name = "challan", version)]
#[command(about = "Track traffic-violation challans: issuance, payment, and overdue penalties")]
pub struct Cli {
    /// Database file (overrides CHALLAN_DB and challan.toml)
    #[arg(long = "db", global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Issue a new challan
    #[command(after_help = "Examples:
  challan issue KA01AB1234 \"Over Speeding\"               # fine from the preset table
  challan issue KA01AB1234 \"Signal Jump\" 1200            # explicit fine
  challan issue ka01ab1234 \"No Helmet\" -l \"MG Road\"      # vehicle is uppercased")]
    Issue {
        /// Vehicle registration number (uppercased before storing)
        #[arg(value_parser = non_empty_string)]
        vehicle: String,

        /// Violation description (preset names resolve the fine)
        #[arg(value_parser = non_empty_string)]
        violation: String,

        /// Fine amount in rupees (defaults to the violation's preset)
        fine: Option<f64>,

        /// Where the violation was recorded
        #[arg(long, short)]
        location: Option<String>,
    },

    /// List all challans, most recent first
    List {
        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List challans awaiting payment
    Pending {
        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List unpaid challans past their due date, with accrued penalties
    Overdue {
        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Search challans by vehicle number
    #[command(arg_required_else_help = true)]
    Search {
        /// Vehicle number or fragment (uppercased before matching)
        #[arg(value_parser = non_empty_string)]
        vehicle: String,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Pay a pending challan, including any accrued penalty
    #[command(arg_required_else_help = true)]
    Pay {
        /// Challan id, e.g. CH1717171717171
        id: String,
    },

    /// Delete a challan
    #[command(arg_required_else_help = true)]
    Delete {
        /// Challan id
        id: String,
    },

    /// Show aggregate statistics
    Stats {
        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Generate shell completions
    #[command(arg_required_else_help = true)]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
