// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod zeroization_probes_tests {
    use lwcbench_util::{fill_bytes_with_pattern, is_slice_filled_with, is_slice_zeroized};

    #[test]
    fn test_is_slice_zeroized() {
        assert!(is_slice_zeroized(&[0u8; 16]));
        assert!(is_slice_zeroized(&[]));
        assert!(!is_slice_zeroized(&[0, 0, 0, 1]));
    }

    #[test]
    fn test_fill_then_zero() {
        let mut buf = vec![0u8; 64];

        fill_bytes_with_pattern(&mut buf, 0xDB);
        assert!(is_slice_filled_with(&buf, 0xDB));

        fill_bytes_with_pattern(&mut buf, 0);
        assert!(is_slice_zeroized(&buf));
    }

    #[test]
    fn test_is_slice_filled_with_rejects_empty_and_mixed() {
        assert!(!is_slice_filled_with(&[], 0xDB));
        assert!(!is_slice_filled_with(&[0xDB, 0xDB, 0x00], 0xDB));
    }
}
