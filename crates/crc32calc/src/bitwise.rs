//! Table-less bit-at-a-time CRC-32.
//!
//! Every table-driven and hardware path must produce results identical to
//! [`hash`] for the same polynomial and seed. Eight shift/xor steps per byte,
//! so it serves as a test oracle rather than a production kernel.

// SAFETY: `hash_const` indexes `data[i]` with `i < data.len()` checked by its loop.
// Clippy cannot prove this in const fn contexts.
#![allow(clippy::indexing_slicing)]

/// Fold one byte into a raw (already inverted) CRC register.
///
/// Uses a branchless conditional XOR: `mask` is all ones when the low bit is
/// set, zero otherwise.
#[inline]
#[must_use]
pub const fn compute_byte(poly: u32, mut crc: u32, byte: u8) -> u32 {
  crc ^= byte as u32;
  let mut k = 0;
  while k < 8 {
    let mask = 0u32.wrapping_sub(crc & 1);
    crc = (crc >> 1) ^ (poly & mask);
    k += 1;
  }
  crc
}

/// Fold `data` into a raw (already inverted) CRC register.
#[inline]
#[must_use]
pub fn compute(poly: u32, mut crc: u32, data: &[u8]) -> u32 {
  for &byte in data {
    crc = compute_byte(poly, crc, byte);
  }
  crc
}

/// Seeded CRC-32 with the same seed convention as [`crate::Calculator::hash`].
///
/// # Example
///
/// ```
/// use crc32calc::{bitwise, poly};
///
/// assert_eq!(bitwise::hash(poly::ZIP, b"123456789", 0), 0xCBF4_3926);
/// ```
#[inline]
#[must_use]
pub fn hash(poly: u32, data: &[u8], seed: u32) -> u32 {
  !compute(poly, !seed, data)
}

/// `const` variant of [`hash`], usable for compile-time check values.
#[must_use]
pub const fn hash_const(poly: u32, data: &[u8], seed: u32) -> u32 {
  let mut crc = !seed;
  let mut i = 0;
  while i < data.len() {
    crc = compute_byte(poly, crc, data[i]);
    i += 1;
  }
  !crc
}
