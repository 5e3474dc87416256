// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # lwcbench_cipher
//!
//! Five lightweight symmetric primitives behind a single in-place transform
//! trait, [`CipherTransform`].
//!
//! | Algorithm   | Kind                        | Key | Nonce | Tag |
//! |-------------|-----------------------------|-----|-------|-----|
//! | Speck128/128 | ARX block cipher           | 16  | 0     | 0   |
//! | ChaCha20    | stream cipher (RFC 8439)    | 32  | 12    | 0   |
//! | GIFT-64-128 | SPN block cipher            | 16  | 0     | 0   |
//! | Elephant-Dumbo | authenticated stream cipher | 16 | 12 | 8   |
//! | TinyJAMBU-128 | permutation-driven AEAD   | 16  | 12    | 8   |
//!
//! The roster is closed: [`Algorithm`] enumerates it and [`ROSTER`] fixes the
//! order in which the harness visits it.
//!
//! All cipher state is zeroized when a call returns and again on drop.
//!
//! ## Example
//!
//! ```rust
//! use lwcbench_cipher::Algorithm;
//!
//! let mut transform = Algorithm::TinyJambu.transform();
//! let key = [0x11u8; 16];
//! let nonce = [0x22u8; 12];
//! let aad = b"Metadata";
//! let mut data = *b"Hello, AEAD-Demo";
//! let mut tag = [0u8; 8];
//!
//! transform.forward(&key, &nonce, aad, &mut data, &mut tag).expect("Failed to forward(..)");
//! transform.inverse(&key, &nonce, aad, &mut data, &tag).expect("Failed to inverse(..)");
//!
//! assert_eq!(&data, b"Hello, AEAD-Demo");
//! ```

#[cfg(test)]
mod tests;

mod algorithm;
mod descriptor;
mod error;
mod traits;

pub mod chacha20;
pub mod elephant;
pub mod gift64;
pub mod speck;
pub mod tiny_jambu;

pub use algorithm::{Algorithm, ROSTER};
pub use descriptor::{AlgorithmDescriptor, CipherKind};
pub use error::CipherError;
pub use traits::CipherTransform;
