//! Portable slice-by-16 CRC-32.
//!
//! Each iteration folds a 16-byte block with 16 independent table lookups
//! combined by XOR. The current register is XORed into the first four bytes
//! of the block; byte `j` of the block is looked up in slice `15 - j`.
//! Bytes that do not fill a whole block go through the classical
//! byte-at-a-time loop on `table[0]`.

// SAFETY: All array indexing in this module uses bounded indices:
// - `as_chunks::<16>` yields `&[u8; 16]`, indexed with constants 0..16
// - table indices are `u8` values, tables have 256 entries
#![allow(clippy::indexing_slicing)]

use crate::tables::Table;

/// Fold `data` into a raw (already inverted) CRC register.
#[inline]
#[must_use]
pub fn compute(table: &Table, mut crc: u32, data: &[u8]) -> u32 {
  let (blocks, tail) = data.as_chunks::<16>();

  for w in blocks {
    let a = table[3][w[12] as usize] ^ table[2][w[13] as usize] ^ table[1][w[14] as usize] ^ table[0][w[15] as usize];

    let b = table[7][w[8] as usize] ^ table[6][w[9] as usize] ^ table[5][w[10] as usize] ^ table[4][w[11] as usize];

    let c = table[11][w[4] as usize] ^ table[10][w[5] as usize] ^ table[9][w[6] as usize] ^ table[8][w[7] as usize];

    let d = table[15][(crc as u8 ^ w[0]) as usize]
      ^ table[14][((crc >> 8) as u8 ^ w[1]) as usize]
      ^ table[13][((crc >> 16) as u8 ^ w[2]) as usize]
      ^ table[12][((crc >> 24) ^ w[3] as u32) as usize];

    crc = a ^ b ^ c ^ d;
  }

  compute_bytewise(table, crc, tail)
}

/// Byte-at-a-time fold using `table[0]`.
#[inline]
#[must_use]
pub fn compute_bytewise(table: &Table, mut crc: u32, data: &[u8]) -> u32 {
  for &byte in data {
    crc = table[0][(crc as u8 ^ byte) as usize] ^ (crc >> 8);
  }
  crc
}
