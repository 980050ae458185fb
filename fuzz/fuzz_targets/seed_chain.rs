//! Hashing in arbitrary pieces, feeding each result back as the seed, must
//! equal hashing the whole buffer at once.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
  which: u8,
  seed: u32,
  cuts: Vec<u16>,
  data: &'a [u8],
}

fuzz_target!(|input: Input<'_>| {
  let calc = match input.which % 5 {
    0 => crc32calc::zip_normal(),
    1 => crc32calc::zip(),
    2 => crc32calc::castagnoli(),
    3 => crc32calc::castagnoli_normal(),
    _ => crc32calc::crc32c(),
  };

  let expected = calc.hash(input.data, input.seed);

  let mut crc = input.seed;
  let mut rest = input.data;
  for cut in input.cuts {
    let at = usize::from(cut) % (rest.len() + 1);
    let (head, tail) = rest.split_at(at);
    crc = calc.hash(head, crc);
    rest = tail;
  }
  crc = calc.hash(rest, crc);

  assert_eq!(
    crc,
    expected,
    "{} chained mismatch, len={}",
    calc.backend_name(),
    input.data.len()
  );
});
