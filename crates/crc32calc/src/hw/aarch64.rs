//! aarch64 hardware CRC-32C (Castagnoli).
//!
//! Uses the ARMv8 CRC32 extension (`crc32c*` instructions).
//!
//! Safety:
//! - This file is allowed to use `unsafe` for ISA-specific intrinsics.
//! - All unsafe is contained within this module.

#![allow(unsafe_code)]

use core::arch::aarch64::{__crc32cb, __crc32cd, __crc32cw};

/// Fold `data` 8 bytes at a time, then 4, then 1.
///
/// # Safety
/// Caller must ensure the CPU supports the `crc` target feature.
#[target_feature(enable = "crc")]
pub(super) unsafe fn compute_wide_unchecked(crc: u32, data: &[u8]) -> u32 {
  let (chunks, rest) = data.as_chunks::<8>();

  let mut current = crc;
  for chunk in chunks {
    current = __crc32cd(current, u64::from_le_bytes(*chunk));
  }

  // SAFETY: same target feature as this function.
  unsafe { compute_narrow_unchecked(current, rest) }
}

/// Fold `data` 4 bytes at a time, then 1.
///
/// # Safety
/// Caller must ensure the CPU supports the `crc` target feature.
#[target_feature(enable = "crc")]
pub(super) unsafe fn compute_narrow_unchecked(crc: u32, data: &[u8]) -> u32 {
  let (chunks, rest) = data.as_chunks::<4>();

  let mut current = crc;
  for chunk in chunks {
    current = __crc32cw(current, u32::from_le_bytes(*chunk));
  }
  for &byte in rest {
    current = __crc32cb(current, byte);
  }

  current
}
