// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Errors surfaced by the command layer.
///
/// Messages are written for the terminal; multi-line variants carry a
/// `hint:` line with the likely fix.
#[derive(Debug, Error)]
pub enum Error {
    #[error("challan not found: {0}")]
    ChallanNotFound(String),

    #[error("challan already paid: {0}")]
    AlreadyPaid(String),

    #[error("no preset fine for violation '{0}'\n  hint: pass an explicit fine amount or add a [[presets]] entry to challan.toml")]
    UnknownViolation(String),

    #[error("fine cannot be negative: {0}")]
    NegativeFine(f64),

    #[error("could not generate a unique challan id\n  hint: retry the command")]
    IdGenerationFailed,

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] challan_core::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
