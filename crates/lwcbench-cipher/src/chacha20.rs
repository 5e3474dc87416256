// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ChaCha20 stream cipher (RFC 8439).
//!
//! The harness starts the block counter at zero. Forward and inverse are the
//! same keystream XOR.

use zeroize::{Zeroize, ZeroizeOnDrop};

use lwcbench_util::{u32_from_le, u32_to_le};

use crate::descriptor::{AlgorithmDescriptor, CipherKind};
use crate::error::CipherError;
use crate::traits::CipherTransform;

pub const KEY_SIZE: usize = 32;
pub const NONCE_SIZE: usize = 12;
pub const BLOCK_SIZE: usize = 64;
pub const INITIAL_COUNTER: u32 = 0;

pub static DESCRIPTOR: AlgorithmDescriptor = AlgorithmDescriptor {
    name: "CHACHA20",
    kind: CipherKind::StreamCipher,
    plaintext_len: 8,
    key_len: KEY_SIZE,
    nonce_len: NONCE_SIZE,
    aad_len: 0,
    tag_len: 0,
};

/// ChaCha20 cipher state with guaranteed zeroization.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ChaCha20 {
    initial: [u32; 16],
    working: [u32; 16],
    le_bytes_tmp: [u8; 4],
    keystream: [u8; BLOCK_SIZE],
}

impl Default for ChaCha20 {
    fn default() -> Self {
        Self {
            initial: [0; 16],
            working: [0; 16],
            le_bytes_tmp: [0; 4],
            keystream: [0; BLOCK_SIZE],
        }
    }
}

impl ChaCha20 {
    #[inline(always)]
    fn quarter_round(&mut self, a: usize, b: usize, c: usize, d: usize) {
        let w = &mut self.working;

        w[a] = w[a].wrapping_add(w[b]);
        w[d] = (w[d] ^ w[a]).rotate_left(16);

        w[c] = w[c].wrapping_add(w[d]);
        w[b] = (w[b] ^ w[c]).rotate_left(12);

        w[a] = w[a].wrapping_add(w[b]);
        w[d] = (w[d] ^ w[a]).rotate_left(8);

        w[c] = w[c].wrapping_add(w[d]);
        w[b] = (w[b] ^ w[c]).rotate_left(7);
    }

    #[inline(always)]
    fn init_state(&mut self, key: &[u8; KEY_SIZE], nonce: &[u8; NONCE_SIZE], counter: u32) {
        self.initial[0] = 0x61707865;
        self.initial[1] = 0x3320646e;
        self.initial[2] = 0x79622d32;
        self.initial[3] = 0x6b206574;

        for i in 0..8 {
            self.le_bytes_tmp.copy_from_slice(&key[i * 4..i * 4 + 4]);
            u32_from_le(&mut self.initial[4 + i], &mut self.le_bytes_tmp);
        }

        self.initial[12] = counter;

        for i in 0..3 {
            self.le_bytes_tmp.copy_from_slice(&nonce[i * 4..i * 4 + 4]);
            u32_from_le(&mut self.initial[13 + i], &mut self.le_bytes_tmp);
        }
    }

    #[inline(always)]
    fn do_rounds(&mut self) {
        for _ in 0..10 {
            self.quarter_round(0, 4, 8, 12);
            self.quarter_round(1, 5, 9, 13);
            self.quarter_round(2, 6, 10, 14);
            self.quarter_round(3, 7, 11, 15);

            self.quarter_round(0, 5, 10, 15);
            self.quarter_round(1, 6, 11, 12);
            self.quarter_round(2, 7, 8, 13);
            self.quarter_round(3, 4, 9, 14);
        }
    }

    /// Generate keystream block into self.keystream
    #[inline(always)]
    fn generate_block(&mut self, key: &[u8; KEY_SIZE], nonce: &[u8; NONCE_SIZE], counter: u32) {
        self.init_state(key, nonce, counter);
        self.working.copy_from_slice(&self.initial);

        self.do_rounds();

        for i in 0..16 {
            self.working[i] = self.working[i].wrapping_add(self.initial[i]);
            u32_to_le(
                &mut self.working[i],
                (&mut self.keystream[i * 4..i * 4 + 4])
                    .try_into()
                    .expect("infallible: keystream slice is exactly 4 bytes"),
            );
        }

        self.initial.zeroize();
    }

    #[cfg(test)]
    pub(crate) fn block(
        &mut self,
        key: &[u8; KEY_SIZE],
        nonce: &[u8; NONCE_SIZE],
        counter: u32,
        output: &mut [u8; BLOCK_SIZE],
    ) {
        self.generate_block(key, nonce, counter);
        output.copy_from_slice(&self.keystream);
        self.zeroize();
    }

    /// XORs `data` with the keystream starting at block `counter`.
    #[inline(always)]
    pub fn crypt(
        &mut self,
        key: &[u8; KEY_SIZE],
        nonce: &[u8; NONCE_SIZE],
        counter: u32,
        data: &mut [u8],
    ) {
        for (i, chunk) in data.chunks_mut(BLOCK_SIZE).enumerate() {
            self.generate_block(key, nonce, counter.wrapping_add(i as u32));

            for (byte, ks_byte) in chunk.iter_mut().zip(self.keystream.iter()) {
                *byte ^= ks_byte;
            }
        }

        self.zeroize();
    }

    fn checked_crypt(
        &mut self,
        key: &[u8],
        nonce: &[u8],
        data: &mut [u8],
        tag_len: usize,
    ) -> Result<(), CipherError> {
        let key: &[u8; KEY_SIZE] = key.try_into().map_err(|_| CipherError::InvalidKeySize)?;
        let nonce: &[u8; NONCE_SIZE] =
            nonce.try_into().map_err(|_| CipherError::InvalidNonceSize)?;
        if tag_len != 0 {
            return Err(CipherError::InvalidTagSize);
        }

        self.crypt(key, nonce, INITIAL_COUNTER, data);
        Ok(())
    }
}

impl CipherTransform for ChaCha20 {
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
        self.checked_crypt(key, nonce, data, tag.len())
    }

    fn inverse(
        &mut self,
        key: &[u8],
        nonce: &[u8],
        _aad: &[u8],
        data: &mut [u8],
        tag: &[u8],
    ) -> Result<(), CipherError> {
        self.checked_crypt(key, nonce, data, tag.len())
    }
}

#[cfg(test)]
impl ChaCha20 {
    pub(crate) fn is_zeroized(&self) -> bool {
        self.initial == [0; 16]
            && self.working == [0; 16]
            && self.le_bytes_tmp == [0; 4]
            && self.keystream.iter().all(|b| *b == 0)
    }
}

impl core::fmt::Debug for ChaCha20 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ChaCha20 {{ [protected] }}")
    }
}
