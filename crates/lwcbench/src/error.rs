// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types of the harness.

use std::path::PathBuf;

use thiserror::Error;

use lwcbench_rand::EntropyError;

/// A buffer request the allocator could not satisfy.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AllocationError {
    #[error("OutOfMemory: could not reserve {len} bytes")]
    OutOfMemory { len: usize },
}

/// Why a per-run context could not be built. The slot is skipped.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ContextError {
    #[error("allocation failed: {0}")]
    Allocation(#[from] AllocationError),

    #[error("entropy failed: {0}")]
    Entropy(#[from] EntropyError),
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("sink I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures that end a benchmark run.
#[derive(Debug, Error)]
pub enum BenchError {
    /// The result matrix could not be reserved. Nothing was measured.
    #[error("FatalAllocation: could not reserve the result matrix ({slots} slots)")]
    FatalAllocation { slots: usize },

    #[error(transparent)]
    Sink(#[from] SinkError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value {value:?} for {name}")]
    InvalidEnv { name: &'static str, value: String },

    #[error("unknown algorithm {0:?}")]
    UnknownAlgorithm(String),

    #[error("iterations must be greater than zero")]
    ZeroIterations,
}
