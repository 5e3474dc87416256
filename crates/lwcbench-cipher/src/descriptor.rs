// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Structural family of a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherKind {
    /// Addition-rotation-XOR block cipher.
    ArxBlockCipher,
    /// Keystream generator, forward and inverse are the same XOR.
    StreamCipher,
    /// Substitution-permutation network block cipher.
    SpnBlockCipher,
    /// Masked-permutation stream cipher with a MAC.
    AuthenticatedStreamCipher,
    /// Keyed-permutation AEAD.
    PermutationAead,
}

impl CipherKind {
    /// Whether the inverse transform verifies a tag.
    pub const fn is_authenticated(self) -> bool {
        matches!(
            self,
            CipherKind::AuthenticatedStreamCipher | CipherKind::PermutationAead
        )
    }

    pub const fn label(self) -> &'static str {
        match self {
            CipherKind::ArxBlockCipher => "ARX block cipher",
            CipherKind::StreamCipher => "stream cipher",
            CipherKind::SpnBlockCipher => "SPN block cipher",
            CipherKind::AuthenticatedStreamCipher => "authenticated stream cipher",
            CipherKind::PermutationAead => "permutation AEAD",
        }
    }
}

/// Static identity of a roster entry, with the sizes the harness generates.
#[derive(Debug, PartialEq, Eq)]
pub struct AlgorithmDescriptor {
    pub name: &'static str,
    pub kind: CipherKind,
    pub plaintext_len: usize,
    pub key_len: usize,
    pub nonce_len: usize,
    pub aad_len: usize,
    pub tag_len: usize,
}

impl AlgorithmDescriptor {
    /// Length of the produced artifact: ciphertext followed by tag.
    pub const fn artifact_len(&self) -> usize {
        self.plaintext_len + self.tag_len
    }
}
