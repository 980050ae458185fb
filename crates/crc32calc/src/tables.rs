//! Slice-by-16 lookup table construction.
//!
//! A [`Table`] holds 16 slices of 256 entries. `table[0]` is the classical
//! byte-at-a-time CRC table; `table[k]` is the contribution of a byte that
//! still has `k` more bytes of input to pass through the register.

// SAFETY: All array indexing in this module uses bounded loop indices (0..256, 0..16).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

/// Number of slices (bytes folded per iteration).
pub const SLICES: usize = 16;

/// Slice-by-16 lookup table, indexed `table[slice][byte]`.
pub type Table = [[u32; 256]; SLICES];

/// Run eight rounds of the reflected bit-at-a-time reduction over `value`.
#[inline]
#[must_use]
pub const fn reduce8(poly: u32, mut value: u32) -> u32 {
  let mut k = 0;
  while k < 8 {
    value = if value & 1 != 0 { poly ^ (value >> 1) } else { value >> 1 };
    k += 1;
  }
  value
}

/// Build the slice-by-16 table for a reflected polynomial.
///
/// For every byte value the 8-round reduction is repeated 16 times and the
/// intermediate after round group `t` is stored in `table[t]`.
///
/// # Example
///
/// ```
/// use crc32calc::{poly, tables};
///
/// const ZIP_TABLE: tables::Table = tables::build(poly::ZIP);
/// assert_eq!(ZIP_TABLE[0][1], 0x7707_3096);
/// ```
#[must_use]
pub const fn build(poly: u32) -> Table {
  let mut table = [[0u32; 256]; SLICES];

  let mut i = 0usize;
  while i < 256 {
    let mut value = i as u32;
    let mut t = 0usize;
    while t < SLICES {
      value = reduce8(poly, value);
      table[t][i] = value;
      t += 1;
    }
    i += 1;
  }

  table
}

/// Build the table directly on the heap.
///
/// A table is 16 KiB; calculators keep it boxed so moving a calculator never
/// copies it.
#[must_use]
pub fn build_boxed(poly: u32) -> Box<Table> {
  let mut table: Box<Table> = Box::new([[0u32; 256]; SLICES]);

  for i in 0..256usize {
    let mut value = i as u32;
    for slice in table.iter_mut() {
      value = reduce8(poly, value);
      slice[i] = value;
    }
  }

  table
}
