// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Per-run measurements and their sink-facing form.

use std::ffi::{CStr, CString};

use zeroize::Zeroizing;

use lwcbench_cipher::Algorithm;
use lwcbench_util::to_hex_upper;

use crate::clock::Clock;

/// One measured `(iteration, algorithm)` slot.
///
/// Timestamps are raw microsecond counter samples with
/// `run_start <= encrypt_timestamp <= run_end` modulo the counter width.
pub struct RunRecord {
    pub iteration: usize,
    pub algorithm: Algorithm,
    pub run_start: u64,
    pub encrypt_timestamp: u64,
    pub run_end: u64,
    /// `free_before - free_after`. Negative when memory was returned.
    pub memory_delta: isize,
    pub success: bool,
    pub plaintext: Zeroizing<Vec<u8>>,
    pub key: Zeroizing<Vec<u8>>,
    /// Ciphertext followed by tag.
    pub artifact: Vec<u8>,
}

impl RunRecord {
    /// Converts counter samples into durations and bytes into hex.
    ///
    /// `encrypt_micros + decrypt_micros == total_micros` holds even if the
    /// counter wrapped during the run.
    pub fn to_sink_record(&self, clock: &dyn Clock) -> SinkRecord {
        let encrypt_micros = clock.elapsed_micros(self.run_start, self.encrypt_timestamp);
        let decrypt_micros = clock.elapsed_micros(self.encrypt_timestamp, self.run_end);

        SinkRecord {
            algorithm_name: self.algorithm.name(),
            iteration: self.iteration,
            encrypt_micros,
            decrypt_micros,
            total_micros: encrypt_micros.saturating_add(decrypt_micros),
            memory_delta_bytes: self.memory_delta,
            success: self.success,
            plaintext_hex: HexString::encode(&self.plaintext),
            key_hex: HexString::encode(&self.key),
            artifact_hex: HexString::encode(&self.artifact),
        }
    }
}

impl core::fmt::Debug for RunRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RunRecord")
            .field("iteration", &self.iteration)
            .field("algorithm", &self.algorithm)
            .field("run_start", &self.run_start)
            .field("encrypt_timestamp", &self.encrypt_timestamp)
            .field("run_end", &self.run_end)
            .field("memory_delta", &self.memory_delta)
            .field("success", &self.success)
            .finish_non_exhaustive()
    }
}

/// Upper-case hex, two digits per byte, no separators, NUL-terminated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexString(CString);

impl HexString {
    pub fn encode(bytes: &[u8]) -> Self {
        let hex = to_hex_upper(bytes);
        Self(CString::new(hex).expect("infallible: hex digits never contain NUL"))
    }

    pub fn as_str(&self) -> &str {
        self.0
            .to_str()
            .expect("infallible: hex digits are always ASCII")
    }

    /// NUL-terminated view for C-style consumers.
    pub fn as_c_str(&self) -> &CStr {
        self.0.as_c_str()
    }

    /// Number of hex digits, excluding the terminator.
    pub fn len(&self) -> usize {
        self.0.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.as_bytes().is_empty()
    }
}

impl core::fmt::Display for HexString {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a [`ReportSink`](crate::ReportSink) receives for each measured run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkRecord {
    pub algorithm_name: &'static str,
    pub iteration: usize,
    pub encrypt_micros: u64,
    pub decrypt_micros: u64,
    pub total_micros: u64,
    pub memory_delta_bytes: isize,
    pub success: bool,
    pub plaintext_hex: HexString,
    pub key_hex: HexString,
    pub artifact_hex: HexString,
}
