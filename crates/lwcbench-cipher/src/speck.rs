// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Speck128/128 block cipher.
//!
//! A block is two little-endian 64-bit words `(y, x)` and the key two words
//! `(b, a)`, in byte order.

use zeroize::{Zeroize, ZeroizeOnDrop};

use lwcbench_util::{u64_from_le, u64_to_le};

use crate::descriptor::{AlgorithmDescriptor, CipherKind};
use crate::error::CipherError;
use crate::traits::CipherTransform;

pub const KEY_SIZE: usize = 16;
pub const BLOCK_SIZE: usize = 16;
pub(crate) const ROUNDS: usize = 32;

pub static DESCRIPTOR: AlgorithmDescriptor = AlgorithmDescriptor {
    name: "SPECK",
    kind: CipherKind::ArxBlockCipher,
    plaintext_len: BLOCK_SIZE,
    key_len: KEY_SIZE,
    nonce_len: 0,
    aad_len: 0,
    tag_len: 0,
};

#[inline(always)]
fn round(x: &mut u64, y: &mut u64, k: u64) {
    *x = x.rotate_right(8).wrapping_add(*y) ^ k;
    *y = y.rotate_left(3) ^ *x;
}

#[inline(always)]
fn inverse_round(x: &mut u64, y: &mut u64, k: u64) {
    *y = (*y ^ *x).rotate_right(3);
    *x = ((*x ^ k).wrapping_sub(*y)).rotate_left(8);
}

/// Speck128/128 state with guaranteed zeroization.
#[derive(Default, Zeroize, ZeroizeOnDrop)]
pub struct Speck {
    round_keys: [u64; ROUNDS],
    block: [u64; 2],
    key_schedule: [u64; 2],
    le_bytes_tmp: [u8; 8],
}

impl Speck {
    fn load_key(&mut self, key: &[u8; KEY_SIZE]) {
        for i in 0..2 {
            self.le_bytes_tmp.copy_from_slice(&key[i * 8..i * 8 + 8]);
            u64_from_le(&mut self.key_schedule[i], &mut self.le_bytes_tmp);
        }
    }

    /// Expands the key into all 32 round keys.
    fn expand_key(&mut self, key: &[u8; KEY_SIZE]) {
        self.load_key(key);
        let [b, a] = &mut self.key_schedule;

        self.round_keys[0] = *b;
        for i in 0..ROUNDS - 1 {
            round(a, b, i as u64);
            self.round_keys[i + 1] = *b;
        }
    }

    fn load_block(&mut self, chunk: &[u8]) {
        for i in 0..2 {
            self.le_bytes_tmp.copy_from_slice(&chunk[i * 8..i * 8 + 8]);
            u64_from_le(&mut self.block[i], &mut self.le_bytes_tmp);
        }
    }

    fn store_block(&mut self, chunk: &mut [u8]) {
        for i in 0..2 {
            u64_to_le(
                &mut self.block[i],
                (&mut chunk[i * 8..i * 8 + 8])
                    .try_into()
                    .expect("infallible: block half is exactly 8 bytes"),
            );
        }
    }

    /// Encrypts every 16-byte block of `data` in place.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidBlockSize`] if `data` is not a whole
    /// number of blocks.
    pub fn encrypt(&mut self, key: &[u8; KEY_SIZE], data: &mut [u8]) -> Result<(), CipherError> {
        if data.len() % BLOCK_SIZE != 0 {
            return Err(CipherError::InvalidBlockSize);
        }

        self.expand_key(key);

        for chunk in data.chunks_exact_mut(BLOCK_SIZE) {
            self.load_block(chunk);
            let [y, x] = &mut self.block;
            for k in self.round_keys.iter() {
                round(x, y, *k);
            }
            self.store_block(chunk);
        }

        self.zeroize();
        Ok(())
    }

    /// Decrypts every 16-byte block of `data` in place.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidBlockSize`] if `data` is not a whole
    /// number of blocks.
    pub fn decrypt(&mut self, key: &[u8; KEY_SIZE], data: &mut [u8]) -> Result<(), CipherError> {
        if data.len() % BLOCK_SIZE != 0 {
            return Err(CipherError::InvalidBlockSize);
        }

        self.expand_key(key);

        for chunk in data.chunks_exact_mut(BLOCK_SIZE) {
            self.load_block(chunk);
            let [y, x] = &mut self.block;
            for k in self.round_keys.iter().rev() {
                inverse_round(x, y, *k);
            }
            self.store_block(chunk);
        }

        self.zeroize();
        Ok(())
    }
}

impl CipherTransform for Speck {
    fn descriptor(&self) -> &'static AlgorithmDescriptor {
        &DESCRIPTOR
    }

    fn forward(
        &mut self,
        key: &[u8],
        nonce: &[u8],
        _aad: &[u8],
        data: &mut [u8],
        tag: &mut [u8],
    ) -> Result<(), CipherError> {
        let key: &[u8; KEY_SIZE] = key.try_into().map_err(|_| CipherError::InvalidKeySize)?;
        if !nonce.is_empty() {
            return Err(CipherError::InvalidNonceSize);
        }
        if !tag.is_empty() {
            return Err(CipherError::InvalidTagSize);
        }

        self.encrypt(key, data)
    }

    fn inverse(
        &mut self,
        key: &[u8],
        nonce: &[u8],
        _aad: &[u8],
        data: &mut [u8],
        tag: &[u8],
    ) -> Result<(), CipherError> {
        let key: &[u8; KEY_SIZE] = key.try_into().map_err(|_| CipherError::InvalidKeySize)?;
        if !nonce.is_empty() {
            return Err(CipherError::InvalidNonceSize);
        }
        if !tag.is_empty() {
            return Err(CipherError::InvalidTagSize);
        }

        self.decrypt(key, data)
    }
}

#[cfg(test)]
impl Speck {
    pub(crate) fn is_zeroized(&self) -> bool {
        self.round_keys.iter().all(|k| *k == 0)
            && self.block == [0; 2]
            && self.key_schedule == [0; 2]
            && self.le_bytes_tmp == [0; 8]
    }
}

impl core::fmt::Debug for Speck {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Speck {{ [protected] }}")
    }
}
