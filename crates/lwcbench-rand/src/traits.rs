// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;

/// Source of bytes for harness-generated keys, nonces and messages.
pub trait EntropySource {
    /// Fills the destination buffer completely.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if the source cannot
    /// produce data. The content of `dest` is unspecified on error.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;
}
