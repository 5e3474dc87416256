// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Layered configuration: defaults, TOML file, environment, command line.

use std::path::Path;

use serde::Deserialize;

use lwcbench_cipher::{Algorithm, ROSTER};

use crate::cli::Cli;
use crate::error::ConfigError;
use crate::memory::DEFAULT_HEAP_BUDGET;
use crate::runner::RunPlan;

pub const DEFAULT_ITERATIONS: usize = 50;

pub const ENV_ITERATIONS: &str = "LWCBENCH_ITERATIONS";
pub const ENV_SEED: &str = "LWCBENCH_SEED";
pub const ENV_ALGORITHMS: &str = "LWCBENCH_ALGORITHMS";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    pub iterations: usize,
    /// Fixed seed for reproducible inputs. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Algorithm names to run. Empty means the whole roster.
    pub algorithms: Vec<String>,
    /// Heap budget in bytes the free-memory probe reports against.
    pub heap_budget: usize,
    /// Print the report table.
    pub table: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            seed: None,
            algorithms: ROSTER.iter().map(|a| a.name().to_string()).collect(),
            heap_budget: DEFAULT_HEAP_BUDGET,
            table: true,
        }
    }
}

impl BenchConfig {
    /// Resolves every layer for `cli` and validates the result.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env()?;
        config.apply_cli(cli);
        config.plan()?;

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Fields missing from `text` keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(&|name| std::env::var(name).ok())
    }

    /// Applies environment overrides read through `lookup`.
    pub fn apply_env_with(
        &mut self,
        lookup: &dyn Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = lookup(ENV_ITERATIONS) {
            self.iterations = val.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                name: ENV_ITERATIONS,
                value: val.clone(),
            })?;
        }

        if let Some(val) = lookup(ENV_SEED) {
            let seed = parse_seed(&val).map_err(|_| ConfigError::InvalidEnv {
                name: ENV_SEED,
                value: val.clone(),
            })?;
            self.seed = Some(seed);
        }

        if let Some(val) = lookup(ENV_ALGORITHMS) {
            self.algorithms = val
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect();
        }

        Ok(())
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(iterations) = cli.iterations {
            self.iterations = iterations;
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if !cli.algorithms.is_empty() {
            self.algorithms = cli.algorithms.clone();
        }
        if cli.no_table {
            self.table = false;
        }
    }

    /// Validates the configuration and resolves it into a [`RunPlan`].
    ///
    /// # Errors
    ///
    /// [`ConfigError::ZeroIterations`] or [`ConfigError::UnknownAlgorithm`].
    pub fn plan(&self) -> Result<RunPlan, ConfigError> {
        if self.iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }

        if self.algorithms.is_empty() {
            return Ok(RunPlan::full(self.iterations));
        }

        let algorithms = self
            .algorithms
            .iter()
            .map(|name| {
                Algorithm::from_name(name).ok_or_else(|| ConfigError::UnknownAlgorithm(name.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RunPlan::new(self.iterations, &algorithms))
    }
}

/// Parses a seed given in decimal or as `0x`-prefixed hex.
pub fn parse_seed(text: &str) -> Result<u64, std::num::ParseIntError> {
    let text = text.trim();

    match text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16),
        None => text.parse(),
    }
}
