//! Differential fuzzing against reference implementations.
//!
//! Every strategy must agree with the bitwise reference and with
//! well-established crates.

#![no_main]

use arbitrary::Arbitrary;
use crc32calc::{Calculator, poly};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
  polynomial: u32,
  seed: u32,
  data: &'a [u8],
}

fuzz_target!(|input: Input<'_>| {
  let Input { polynomial, seed, data } = input;

  // Arbitrary polynomial: table vs bitwise.
  let ours = crc32calc::get(polynomial).hash(data, seed);
  let reference = crc32calc::bitwise::hash(polynomial, data, seed);
  assert_eq!(
    ours, reference,
    "poly={polynomial:#010x} mismatch: ours={ours:#010x}, reference={reference:#010x}, len={}",
    data.len()
  );

  // CRC-32/ZIP against crc32fast.
  let ours = crc32calc::zip().checksum(data);
  let reference = crc32fast::hash(data);
  assert_eq!(ours, reference, "ZIP differential mismatch, len={}", data.len());

  // CRC-32C (selected strategy, table, hardware) against the crc32c crate.
  let reference = crc32c::crc32c_append(seed, data);
  assert_eq!(crc32calc::crc32c().hash(data, seed), reference, "crc32c mismatch");
  assert_eq!(crc32calc::castagnoli().hash(data, seed), reference, "castagnoli mismatch");
  assert_eq!(Calculator::table(poly::CASTAGNOLI).hash(data, seed), reference);

  if let Some(Calculator::Hardware(hw)) = Calculator::hardware(platform::caps()) {
    assert_eq!(hw.hash(data, seed), reference, "hardware mismatch, step={}", hw.tier().step_bytes());
    assert_eq!(hw.narrowed().hash(data, seed), reference, "narrow hardware mismatch");
  }
});
