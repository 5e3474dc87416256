// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use anyhow::{Context as _, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use lwcbench::{
    BenchConfig, BenchError, Cli, CountingAllocator, HeapProbe, MemorySink, MonotonicClock,
    ReportSink, Runner, SystemAllocator, TableSink,
};
use lwcbench_rand::SeededEntropySource;

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator::new();

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();
    let config = BenchConfig::load(&cli).context("invalid configuration")?;
    let plan = config.plan()?;

    let mut entropy = match config.seed {
        Some(seed) => SeededEntropySource::new(seed),
        None => SeededEntropySource::from_os_seed().context("could not seed input generator")?,
    };
    info!(seed = format_args!("{:#x}", entropy.seed()), "input generator seeded");

    let allocator = SystemAllocator;
    let clock = MonotonicClock::new();
    let probe = HeapProbe::new(&GLOBAL, config.heap_budget);

    let mut table;
    let mut memory;
    let sink: &mut dyn ReportSink = if config.table {
        table = TableSink::new(std::io::stdout().lock());
        &mut table
    } else {
        memory = MemorySink::new();
        &mut memory
    };

    let mut runner = Runner::new(&allocator, &clock, &probe);
    match runner.run(&plan, &mut entropy, sink) {
        Ok(_) => Ok(()),
        Err(err @ BenchError::FatalAllocation { .. }) => {
            error!(error = %err, "Error: Failed to allocate memory for the results matrix");
            std::process::exit(1);
        }
        Err(err) => Err(err).context("benchmark run failed"),
    }
}
