//! Published check values and seed semantics for every well-known accessor.

use crc32calc::{Kind, poly};

// ─────────────────────────────────────────────────────────────────────────────
// Test Vectors
// ─────────────────────────────────────────────────────────────────────────────

const CHECK_STRING: &[u8] = b"123456789";

const CRC32_ZIP_CHECK: u32 = 0xCBF4_3926;
const CRC32C_CHECK: u32 = 0xE306_9283;
// Normal-orientation constants run through the reflected algorithm.
const ZIP_NORMAL_CHECK: u32 = 0xFC4F_2BE9;
const CASTAGNOLI_NORMAL_CHECK: u32 = 0xF284_17BE;

// ─────────────────────────────────────────────────────────────────────────────
// Check Values
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn zip_produces_correct_result() {
  let result = crc32calc::zip().checksum(CHECK_STRING);
  assert_eq!(
    result, CRC32_ZIP_CHECK,
    "CRC-32/ZIP mismatch: got {result:#010X}, expected {CRC32_ZIP_CHECK:#010X}"
  );
}

#[test]
fn castagnoli_produces_correct_result() {
  let result = crc32calc::castagnoli().checksum(CHECK_STRING);
  assert_eq!(
    result, CRC32C_CHECK,
    "CRC-32C mismatch: got {result:#010X}, expected {CRC32C_CHECK:#010X}"
  );
}

#[test]
fn crc32c_produces_correct_result() {
  let result = crc32calc::crc32c().checksum(CHECK_STRING);
  assert_eq!(
    result,
    CRC32C_CHECK,
    "CRC-32C ({}) mismatch: got {result:#010X}, expected {CRC32C_CHECK:#010X}",
    crc32calc::selected_backend()
  );
}

#[test]
fn get_resolves_well_known_polynomials() {
  assert_eq!(crc32calc::get(poly::ZIP).checksum(CHECK_STRING), CRC32_ZIP_CHECK);
  assert_eq!(crc32calc::get(poly::CASTAGNOLI).checksum(CHECK_STRING), CRC32C_CHECK);
}

#[test]
fn normal_polynomials_are_distinct_checksums() {
  let zip_normal = crc32calc::zip_normal().checksum(CHECK_STRING);
  let castagnoli_normal = crc32calc::castagnoli_normal().checksum(CHECK_STRING);

  assert_ne!(zip_normal, CRC32_ZIP_CHECK);
  assert_ne!(castagnoli_normal, CRC32C_CHECK);
  assert_eq!(zip_normal, ZIP_NORMAL_CHECK);
  assert_eq!(castagnoli_normal, CASTAGNOLI_NORMAL_CHECK);
  assert_eq!(zip_normal, crc32calc::bitwise::hash(poly::ZIP_NORMAL, CHECK_STRING, 0));
  assert_eq!(
    castagnoli_normal,
    crc32calc::bitwise::hash(poly::CASTAGNOLI_NORMAL, CHECK_STRING, 0)
  );
}

#[test]
fn zip_known_buffers() {
  let zip = crc32calc::zip();
  assert_eq!(zip.checksum(&[0u8; 32]), 0x190A_55AD);
  assert_eq!(zip.checksum(&[0xFFu8; 32]), 0xFF6C_AB0B);
  assert_eq!(zip.checksum(b"The quick brown fox jumps over the lazy dog"), 0x414F_A339);
}

#[test]
fn crc32c_known_buffers() {
  let crc32c = crc32calc::crc32c();
  assert_eq!(crc32c.checksum(&[0u8; 32]), 0x8A91_36AA);
  assert_eq!(crc32c.checksum(&[0xFFu8; 32]), 0x62A8_AB43);

  let ascending: Vec<u8> = (0u8..32).collect();
  assert_eq!(crc32c.checksum(&ascending), 0x46DD_794E);
}

// ─────────────────────────────────────────────────────────────────────────────
// Seed Semantics
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn empty_input_returns_seed() {
  for calc in [
    crc32calc::zip_normal(),
    crc32calc::zip(),
    crc32calc::castagnoli(),
    crc32calc::castagnoli_normal(),
    crc32calc::crc32c(),
  ] {
    for seed in [0u32, 1, 0xDEAD_BEEF, 0xFFFF_FFFF] {
      assert_eq!(calc.hash(&[], seed), seed, "{}", calc.backend_name());
    }
  }
}

#[test]
fn seed_continues_previous_result() {
  for calc in [crc32calc::zip(), crc32calc::crc32c()] {
    let whole = calc.checksum(CHECK_STRING);
    let (head, tail) = CHECK_STRING.split_at(4);
    assert_eq!(calc.hash(tail, calc.hash(head, 0)), whole);
  }
}

#[test]
fn unknown_polynomial_is_table_backed() {
  let calc = crc32calc::get(0xEB31_D82E);
  assert_eq!(calc.kind(), Kind::Table);
  assert_eq!(
    calc.checksum(CHECK_STRING),
    crc32calc::bitwise::hash(0xEB31_D82E, CHECK_STRING, 0)
  );
}
