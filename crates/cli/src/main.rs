// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use challan::Cli;
use clap::Parser;

fn main() {
    setup_logging();
    let cli = Cli::parse();
    if let Err(e) = challan::run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Route diagnostics to stderr, filtered by `RUST_LOG` (default: warn).
fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
