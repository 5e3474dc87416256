// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::path::PathBuf;

use clap::Parser;

/// Command-line flags. Highest-priority configuration layer.
#[derive(Parser, Debug, Default, Clone, PartialEq, Eq)]
#[command(
    name = "lwcbench",
    version,
    about = "Benchmark lightweight ciphers: setup, run, verify, teardown"
)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of passes over the roster
    #[arg(long)]
    pub iterations: Option<usize>,

    /// Seed for reproducible inputs (decimal or 0x-prefixed hex). Random if omitted.
    #[arg(long, value_parser = crate::config::parse_seed)]
    pub seed: Option<u64>,

    /// Restrict the run to this algorithm. Repeatable.
    #[arg(long = "algorithm", value_name = "NAME")]
    pub algorithms: Vec<String>,

    /// Do not print the report table
    #[arg(long)]
    pub no_table: bool,
}
