// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Per-run inputs and their scoped acquisition.

use zeroize::Zeroize;

use lwcbench_cipher::{Algorithm, AlgorithmDescriptor};
use lwcbench_rand::EntropySource;

use crate::alloc::BufferAllocator;
use crate::error::ContextError;

/// Key, nonce, associated data and plaintext for one run.
///
/// Every buffer is sized exactly per the algorithm's descriptor and filled
/// from an [`EntropySource`]. Buffers are zeroized and handed back to the
/// allocator exactly once, when the context is destroyed or dropped.
pub struct Context<'a> {
    algorithm: Algorithm,
    allocator: &'a dyn BufferAllocator,
    key: Vec<u8>,
    nonce: Vec<u8>,
    aad: Vec<u8>,
    plaintext: Vec<u8>,
}

impl<'a> Context<'a> {
    /// Builds the inputs for one run of `algorithm`.
    ///
    /// Buffers are obtained in the order key, nonce, associated data,
    /// plaintext. Zero-length buffers do not touch the allocator.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::Allocation`] or [`ContextError::Entropy`].
    /// Buffers obtained before the failure are zeroized and released first.
    pub fn create<E>(
        algorithm: Algorithm,
        allocator: &'a dyn BufferAllocator,
        entropy: &mut E,
    ) -> Result<Self, ContextError>
    where
        E: EntropySource + ?Sized,
    {
        let descriptor = algorithm.descriptor();
        let mut context = Self {
            algorithm,
            allocator,
            key: Vec::new(),
            nonce: Vec::new(),
            aad: Vec::new(),
            plaintext: Vec::new(),
        };

        // On early return the partial context drops and releases what it holds.
        context.key = context.obtain(descriptor.key_len, entropy)?;
        context.nonce = context.obtain(descriptor.nonce_len, entropy)?;
        context.aad = context.obtain(descriptor.aad_len, entropy)?;
        context.plaintext = context.obtain(descriptor.plaintext_len, entropy)?;

        Ok(context)
    }

    fn obtain<E>(&self, len: usize, entropy: &mut E) -> Result<Vec<u8>, ContextError>
    where
        E: EntropySource + ?Sized,
    {
        if len == 0 {
            return Ok(Vec::new());
        }

        let mut buf = self.allocator.allocate(len)?;

        if let Err(err) = entropy.fill_bytes(&mut buf) {
            buf.as_mut_slice().zeroize();
            self.allocator.release(buf);
            return Err(err.into());
        }

        Ok(buf)
    }

    /// Zeroizes and releases every buffer.
    pub fn destroy(self) {
        drop(self);
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn descriptor(&self) -> &'static AlgorithmDescriptor {
        self.algorithm.descriptor()
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    pub fn nonce(&self) -> &[u8] {
        &self.nonce
    }

    pub fn aad(&self) -> &[u8] {
        &self.aad
    }

    pub fn plaintext(&self) -> &[u8] {
        &self.plaintext
    }
}

impl Drop for Context<'_> {
    fn drop(&mut self) {
        for buf in [
            &mut self.key,
            &mut self.nonce,
            &mut self.aad,
            &mut self.plaintext,
        ] {
            if buf.is_empty() {
                continue;
            }

            buf.as_mut_slice().zeroize();
            self.allocator.release(core::mem::take(buf));
        }
    }
}

impl core::fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Context {{ algorithm: {}, [protected] }}", self.algorithm)
    }
}
