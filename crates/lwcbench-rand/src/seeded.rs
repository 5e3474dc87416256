// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use getrandom::Error as GetRandomError;
use rand::rngs::SmallRng;
use rand_core::{RngCore, SeedableRng};

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Non-cryptographic PRNG producing benchmark inputs.
///
/// The seed is kept so that a run driven by an OS seed can be reported and
/// replayed later with [`SeededEntropySource::new`].
pub struct SeededEntropySource {
    rng: SmallRng,
    seed: u64,
}

impl SeededEntropySource {
    /// Creates a source whose output is fully determined by `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a source seeded from the operating system.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if `getrandom` fails.
    pub fn from_os_seed() -> Result<Self, EntropyError> {
        Self::from_os_seed_with(&getrandom::fill)
    }

    pub(crate) fn from_os_seed_with(
        fill_fn: &dyn Fn(&mut [u8]) -> Result<(), GetRandomError>,
    ) -> Result<Self, EntropyError> {
        let mut seed_bytes = [0u8; 8];
        fill_fn(&mut seed_bytes).map_err(|_| EntropyError::EntropyNotAvailable)?;

        Ok(Self::new(u64::from_le_bytes(seed_bytes)))
    }

    /// The seed this source was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl EntropySource for SeededEntropySource {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.rng.fill_bytes(dest);
        Ok(())
    }
}

impl core::fmt::Debug for SeededEntropySource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SeededEntropySource")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}
