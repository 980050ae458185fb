//! x86/x86_64 hardware CRC-32C (Castagnoli).
//!
//! Uses the SSE4.2 `crc32` instruction, which is hardwired to the Castagnoli
//! polynomial. The 64-bit operand form only exists on x86_64.
//!
//! Safety:
//! - This file is allowed to use `unsafe` for ISA-specific intrinsics.
//! - All unsafe is contained within this module.

#![allow(unsafe_code)]

#[cfg(target_arch = "x86")]
use core::arch::x86::{_mm_crc32_u8, _mm_crc32_u32};
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::{_mm_crc32_u8, _mm_crc32_u32, _mm_crc32_u64};

/// Fold `data` 8 bytes at a time, then 4, then 1.
///
/// # Safety
/// Caller must ensure the CPU supports the `sse4.2` target feature.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "sse4.2")]
pub(super) unsafe fn compute_wide_unchecked(crc: u32, data: &[u8]) -> u32 {
  let (chunks, rest) = data.as_chunks::<8>();

  let mut current = crc as u64;
  for chunk in chunks {
    current = _mm_crc32_u64(current, u64::from_le_bytes(*chunk));
  }

  // SAFETY: same target feature as this function.
  unsafe { compute_narrow_unchecked(current as u32, rest) }
}

/// Fold `data` 4 bytes at a time, then 1.
///
/// # Safety
/// Caller must ensure the CPU supports the `sse4.2` target feature.
#[target_feature(enable = "sse4.2")]
pub(super) unsafe fn compute_narrow_unchecked(crc: u32, data: &[u8]) -> u32 {
  let (chunks, rest) = data.as_chunks::<4>();

  let mut current = crc;
  for chunk in chunks {
    current = _mm_crc32_u32(current, u32::from_le_bytes(*chunk));
  }
  for &byte in rest {
    current = _mm_crc32_u8(current, byte);
  }

  current
}
