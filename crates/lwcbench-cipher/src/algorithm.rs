// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Closed roster of primitives.

use crate::chacha20::ChaCha20;
use crate::descriptor::AlgorithmDescriptor;
use crate::elephant::Elephant;
use crate::gift64::Gift64;
use crate::speck::Speck;
use crate::tiny_jambu::TinyJambu;
use crate::traits::CipherTransform;

/// One entry of the benchmark roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Speck,
    ChaCha20,
    Gift64,
    Elephant,
    TinyJambu,
}

/// Every algorithm, in the order each benchmark iteration visits them.
pub const ROSTER: [Algorithm; 5] = [
    Algorithm::Speck,
    Algorithm::ChaCha20,
    Algorithm::Gift64,
    Algorithm::Elephant,
    Algorithm::TinyJambu,
];

impl Algorithm {
    pub fn descriptor(self) -> &'static AlgorithmDescriptor {
        match self {
            Algorithm::Speck => &crate::speck::DESCRIPTOR,
            Algorithm::ChaCha20 => &crate::chacha20::DESCRIPTOR,
            Algorithm::Gift64 => &crate::gift64::DESCRIPTOR,
            Algorithm::Elephant => &crate::elephant::DESCRIPTOR,
            Algorithm::TinyJambu => &crate::tiny_jambu::DESCRIPTOR,
        }
    }

    /// Report name, e.g. `"TINYJAMBU"`.
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// Fresh, zeroed transform for this algorithm.
    pub fn transform(self) -> Box<dyn CipherTransform> {
        match self {
            Algorithm::Speck => Box::new(Speck::default()),
            Algorithm::ChaCha20 => Box::new(ChaCha20::default()),
            Algorithm::Gift64 => Box::new(Gift64::default()),
            Algorithm::Elephant => Box::new(Elephant::default()),
            Algorithm::TinyJambu => Box::new(TinyJambu::default()),
        }
    }

    /// Resolves a report name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        ROSTER
            .iter()
            .copied()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Position in [`ROSTER`].
    pub fn roster_index(self) -> usize {
        self as usize
    }
}

impl core::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
