// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! TinyJAMBU-128 AEAD.
//!
//! The state is four little-endian 32-bit words `s0..s3`. Byte lanes used by
//! partial blocks refer to the little-endian image of the state, so lane
//! `12 + j` is byte `j` of `s3` and lane `8 + j` is byte `j` of `s2`.

use zeroize::{Zeroize, ZeroizeOnDrop};

use lwcbench_util::{constant_time_eq, u32_from_le, u32_to_le};

use super::consts::{
    FRAME_BITS_AD, FRAME_BITS_FINALIZATION, FRAME_BITS_IV, FRAME_BITS_PC, KEY_SIZE, NONCE_SIZE,
    NROUND1, NROUND2, TAG_SIZE,
};
use crate::descriptor::AlgorithmDescriptor;
use crate::error::CipherError;
use crate::traits::CipherTransform;

/// TinyJAMBU-128 cipher state with guaranteed zeroization.
#[derive(Default, Zeroize, ZeroizeOnDrop)]
pub struct TinyJambu {
    state: [u32; 4],
    key_words: [u32; 4],
    le_bytes_tmp: [u8; 4],
    word_tmp: u32,
    expected_tag: [u8; TAG_SIZE],
}

impl TinyJambu {
    #[inline(always)]
    fn load_word(&mut self, bytes: &[u8]) -> u32 {
        self.le_bytes_tmp.copy_from_slice(bytes);
        u32_from_le(&mut self.word_tmp, &mut self.le_bytes_tmp);
        let word = self.word_tmp;
        self.word_tmp = 0;
        word
    }

    fn load_key(&mut self, key: &[u8; KEY_SIZE]) {
        for i in 0..4 {
            self.le_bytes_tmp.copy_from_slice(&key[i * 4..i * 4 + 4]);
            u32_from_le(&mut self.key_words[i], &mut self.le_bytes_tmp);
        }
    }

    /// Advances the keyed permutation by `steps` (a multiple of 32).
    #[inline(always)]
    pub(crate) fn state_update(&mut self, steps: u32) {
        let s = &mut self.state;

        for i in 0..(steps >> 5) as usize {
            let t1 = (s[1] >> 15) | (s[2] << 17);
            let t2 = (s[2] >> 6) | (s[3] << 26);
            let t3 = (s[2] >> 21) | (s[3] << 11);
            let t4 = (s[2] >> 27) | (s[3] << 5);
            let feedback = s[0] ^ t1 ^ !(t2 & t3) ^ t4 ^ self.key_words[i & 3];

            s[0] = s[1];
            s[1] = s[2];
            s[2] = s[3];
            s[3] = feedback;
        }
    }

    fn initialize(&mut self, key: &[u8; KEY_SIZE], nonce: &[u8; NONCE_SIZE]) {
        self.load_key(key);
        self.state = [0; 4];
        self.state_update(NROUND2);

        for i in 0..3 {
            self.state[1] ^= FRAME_BITS_IV;
            self.state_update(NROUND1);
            self.state[3] ^= self.load_word(&nonce[i * 4..i * 4 + 4]);
        }
    }

    fn process_ad(&mut self, aad: &[u8]) {
        let mut blocks = aad.chunks_exact(4);

        for block in blocks.by_ref() {
            self.state[1] ^= FRAME_BITS_AD;
            self.state_update(NROUND1);
            self.state[3] ^= self.load_word(block);
        }

        let tail = blocks.remainder();
        if !tail.is_empty() {
            self.state[1] ^= FRAME_BITS_AD;
            self.state_update(NROUND1);
            for (j, byte) in tail.iter().enumerate() {
                self.state[3] ^= (*byte as u32) << (8 * j);
            }
            self.state[1] ^= tail.len() as u32;
        }
    }

    /// Derives the tag into `self.expected_tag`.
    fn finalize(&mut self) {
        self.state[1] ^= FRAME_BITS_FINALIZATION;
        self.state_update(NROUND2);
        self.word_tmp = self.state[2];
        u32_to_le(
            &mut self.word_tmp,
            (&mut self.expected_tag[0..4])
                .try_into()
                .expect("infallible: expected_tag[0..4] is exactly 4 bytes"),
        );

        self.state[1] ^= FRAME_BITS_FINALIZATION;
        self.state_update(NROUND1);
        self.word_tmp = self.state[2];
        u32_to_le(
            &mut self.word_tmp,
            (&mut self.expected_tag[4..8])
                .try_into()
                .expect("infallible: expected_tag[4..8] is exactly 4 bytes"),
        );
    }

    /// Encrypts `data` in place and writes the 8-byte tag.
    pub fn encrypt(
        &mut self,
        key: &[u8; KEY_SIZE],
        nonce: &[u8; NONCE_SIZE],
        aad: &[u8],
        data: &mut [u8],
        tag: &mut [u8; TAG_SIZE],
    ) {
        self.initialize(key, nonce);
        self.process_ad(aad);

        for chunk in data.chunks_mut(4) {
            self.state[1] ^= FRAME_BITS_PC;
            self.state_update(NROUND2);

            if chunk.len() == 4 {
                let m = self.load_word(chunk);
                self.state[3] ^= m;
                self.word_tmp = self.state[2] ^ m;
                u32_to_le(
                    &mut self.word_tmp,
                    chunk
                        .try_into()
                        .expect("infallible: chunk is exactly 4 bytes"),
                );
            } else {
                for (j, byte) in chunk.iter_mut().enumerate() {
                    self.state[3] ^= (*byte as u32) << (8 * j);
                    *byte ^= (self.state[2] >> (8 * j)) as u8;
                }
                self.state[1] ^= chunk.len() as u32;
            }
        }

        self.finalize();
        tag.copy_from_slice(&self.expected_tag);
        self.zeroize();
    }

    /// Decrypts `data` in place after verifying `tag`.
    ///
    /// On tag mismatch the recovered plaintext is zeroized.
    pub fn decrypt(
        &mut self,
        key: &[u8; KEY_SIZE],
        nonce: &[u8; NONCE_SIZE],
        aad: &[u8],
        data: &mut [u8],
        tag: &[u8; TAG_SIZE],
    ) -> Result<(), CipherError> {
        self.initialize(key, nonce);
        self.process_ad(aad);

        for chunk in data.chunks_mut(4) {
            self.state[1] ^= FRAME_BITS_PC;
            self.state_update(NROUND2);

            if chunk.len() == 4 {
                let c = self.load_word(chunk);
                let m = self.state[2] ^ c;
                self.state[3] ^= m;
                self.word_tmp = m;
                u32_to_le(
                    &mut self.word_tmp,
                    chunk
                        .try_into()
                        .expect("infallible: chunk is exactly 4 bytes"),
                );
            } else {
                for (j, byte) in chunk.iter_mut().enumerate() {
                    *byte ^= (self.state[2] >> (8 * j)) as u8;
                    self.state[3] ^= (*byte as u32) << (8 * j);
                }
                self.state[1] ^= chunk.len() as u32;
            }
        }

        self.finalize();

        let valid = constant_time_eq(&self.expected_tag, tag);
        self.zeroize();

        if !valid {
            data.zeroize();
            return Err(CipherError::AuthenticationFailed);
        }

        Ok(())
    }
}

impl CipherTransform for TinyJambu {
    fn descriptor(&self) -> &'static AlgorithmDescriptor {
        &super::DESCRIPTOR
    }

    fn forward(
        &mut self,
        key: &[u8],
        nonce: &[u8],
        aad: &[u8],
        data: &mut [u8],
        tag: &mut [u8],
    ) -> Result<(), CipherError> {
        let key: &[u8; KEY_SIZE] = key.try_into().map_err(|_| CipherError::InvalidKeySize)?;
        let nonce: &[u8; NONCE_SIZE] =
            nonce.try_into().map_err(|_| CipherError::InvalidNonceSize)?;
        let tag: &mut [u8; TAG_SIZE] = tag.try_into().map_err(|_| CipherError::InvalidTagSize)?;

        self.encrypt(key, nonce, aad, data, tag);
        Ok(())
    }

    fn inverse(
        &mut self,
        key: &[u8],
        nonce: &[u8],
        aad: &[u8],
        data: &mut [u8],
        tag: &[u8],
    ) -> Result<(), CipherError> {
        let key: &[u8; KEY_SIZE] = key.try_into().map_err(|_| CipherError::InvalidKeySize)?;
        let nonce: &[u8; NONCE_SIZE] =
            nonce.try_into().map_err(|_| CipherError::InvalidNonceSize)?;
        let tag: &[u8; TAG_SIZE] = tag.try_into().map_err(|_| CipherError::InvalidTagSize)?;

        self.decrypt(key, nonce, aad, data, tag)
    }
}

#[cfg(test)]
impl TinyJambu {
    pub(crate) fn is_zeroized(&self) -> bool {
        self.state == [0; 4]
            && self.key_words == [0; 4]
            && self.le_bytes_tmp == [0; 4]
            && self.word_tmp == 0
            && self.expected_tag == [0; TAG_SIZE]
    }
}

impl core::fmt::Debug for TinyJambu {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "TinyJambu {{ [protected] }}")
    }
}
