// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI configuration.
//!
//! Configuration lives in `challan.toml`, discovered by walking up from
//! the current directory. Every field is optional; no file at all means
//! the built-in defaults.
//!
//! ```toml
//! database = "fines/echallan.db"
//!
//! [[presets]]
//! violation = "Over Speeding"
//! fine = 2000.0
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

const CONFIG_FILE_NAME: &str = "challan.toml";
const DB_FILE_NAME: &str = "echallan.db";

/// Environment variable overriding the database location.
pub const DB_ENV_VAR: &str = "CHALLAN_DB";

/// A violation category with the fine applied when none is given.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Preset {
    pub violation: String,
    pub fine: f64,
}

/// Settings loaded from `challan.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Path to the SQLite database. Relative paths resolve against the
    /// directory holding the config file.
    pub database: Option<PathBuf>,

    /// Violation presets consulted when `issue` is run without a fine.
    /// Listing any preset replaces the built-in table.
    #[serde(default = "default_presets")]
    pub presets: Vec<Preset>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database: None,
            presets: default_presets(),
        }
    }
}

impl Config {
    /// Load configuration from an explicit file path.
    ///
    /// A relative `database` entry resolves against the file's own
    /// directory, so discovery from a subdirectory lands on the same
    /// database file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;
        let mut config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))?;
        if let (Some(db), Some(dir)) = (&config.database, path.parent()) {
            if db.is_relative() {
                config.database = Some(dir.join(db));
            }
        }
        Ok(config)
    }

    /// Discover and load configuration starting from the current
    /// directory. A missing file yields the defaults; a malformed one is
    /// an error.
    pub fn discover() -> Result<Self> {
        match env::current_dir().ok().and_then(|dir| find_config_file(&dir)) {
            Some(path) => {
                debug!("loading config from {}", path.display());
                Self::load(&path)
            }
            None => Ok(Config::default()),
        }
    }

    /// Preset fine for a violation, matched case-insensitively.
    pub fn preset_fine(&self, violation: &str) -> Option<f64> {
        self.presets
            .iter()
            .find(|p| p.violation.eq_ignore_ascii_case(violation))
            .map(|p| p.fine)
    }
}

/// Locate `challan.toml` by walking up from `start`.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Resolve the database path: the `--db` flag wins, then `CHALLAN_DB`,
/// then the config file, then `echallan.db` in the current directory.
pub fn resolve_db_path(flag: Option<&Path>, config: &Config) -> PathBuf {
    let env_db = env::var_os(DB_ENV_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    resolve_db_path_from(flag, env_db, config)
}

fn resolve_db_path_from(
    flag: Option<&Path>,
    env_db: Option<PathBuf>,
    config: &Config,
) -> PathBuf {
    if let Some(path) = flag {
        return path.to_path_buf();
    }
    if let Some(path) = env_db {
        return path;
    }
    match &config.database {
        Some(path) => path.clone(),
        None => PathBuf::from(DB_FILE_NAME),
    }
}

/// Built-in violation presets, matching the fine schedule challans are
/// commonly issued under.
fn default_presets() -> Vec<Preset> {
    [
        ("Over Speeding", 1500.0),
        ("Signal Jump", 1000.0),
        ("Wrong Lane", 500.0),
        ("No Helmet", 1000.0),
        ("Mobile Usage", 1000.0),
        ("No Seat Belt", 500.0),
        ("Parking Violation", 300.0),
        ("Document Missing", 200.0),
    ]
    .into_iter()
    .map(|(violation, fine)| Preset {
        violation: violation.to_string(),
        fine,
    })
    .collect()
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
