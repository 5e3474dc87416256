// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte utilities for the cipher harness.
//!
//! Word conversions zeroize their source after reading so that key words
//! do not linger in temporaries between rounds.

use subtle::ConstantTimeEq;

pub use hex::FromHexError;

/// Fills a byte slice with a repeating pattern byte.
///
/// # Example
///
/// ```
/// use lwcbench_util::fill_bytes_with_pattern;
///
/// let mut buffer = [0u8; 8];
/// fill_bytes_with_pattern(&mut buffer, 0xDB);
/// assert!(buffer.iter().all(|&b| b == 0xDB));
/// ```
#[inline]
pub fn fill_bytes_with_pattern(slice: &mut [u8], pattern: u8) {
    for byte in slice.iter_mut() {
        *byte = pattern;
    }
}

/// Constant-time equality comparison for byte slices.
///
/// Slices of different length compare unequal without inspecting content.
///
/// # Example
///
/// ```
/// use lwcbench_util::constant_time_eq;
///
/// assert!(constant_time_eq(&[1, 2, 3, 4], &[1, 2, 3, 4]));
/// assert!(!constant_time_eq(&[1, 2, 3, 4], &[1, 2, 3, 5]));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Encodes bytes as upper-case hex, two digits per byte, no separators.
///
/// ```
/// use lwcbench_util::to_hex_upper;
///
/// assert_eq!(to_hex_upper(&[0x00, 0xab, 0x1f]), "00AB1F");
/// ```
#[inline]
pub fn to_hex_upper(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// Parses a hexadecimal string (either case) into bytes.
#[inline]
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, FromHexError> {
    hex::decode(hex)
}

/// Generates `{type}_from_le` and `{type}_to_le` functions for integer types.
macro_rules! impl_le_conversions {
    ($type:ty, $size:expr, $fn_from:ident, $fn_to:ident) => {
        #[doc = concat!("Converts ", stringify!($size), " bytes to a little-endian `", stringify!($type), "`, zeroizing the source bytes.")]
        #[inline(always)]
        pub fn $fn_from(dst: &mut $type, bytes: &mut [u8; $size]) {
            *dst = 0;
            for (i, byte) in bytes.iter_mut().enumerate() {
                *dst |= (*byte as $type) << (8 * i);
                *byte = 0;
            }
        }

        #[doc = concat!("Converts a `", stringify!($type), "` to little-endian bytes, zeroizing the source.")]
        #[inline(always)]
        pub fn $fn_to(src: &mut $type, bytes: &mut [u8; $size]) {
            for (i, byte) in bytes.iter_mut().enumerate() {
                *byte = (*src >> (8 * i)) as u8;
            }
            *src = 0;
        }
    };
}

impl_le_conversions!(u16, 2, u16_from_le, u16_to_le);
impl_le_conversions!(u32, 4, u32_from_le, u32_to_le);
impl_le_conversions!(u64, 8, u64_from_le, u64_to_le);

/// Verifies that every byte of a slice is zero.
///
/// ```
/// use lwcbench_util::is_slice_zeroized;
///
/// assert!(is_slice_zeroized(&[0u8; 10]));
/// assert!(!is_slice_zeroized(&[0, 0, 1]));
/// ```
#[inline]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}

/// Returns `true` if the slice is non-empty and every byte equals `pattern`.
#[inline]
pub fn is_slice_filled_with(slice: &[u8], pattern: u8) -> bool {
    !slice.is_empty() && slice.iter().all(|&b| b == pattern)
}
