use proptest::prelude::*;

use crate::{Calculator, Caps, HardwareCalculator, Kind, bitwise, poly, portable, tables};

const WELL_KNOWN: [u32; 4] = [poly::ZIP_NORMAL, poly::ZIP, poly::CASTAGNOLI, poly::CASTAGNOLI_NORMAL];

proptest! {
  #[test]
  fn table_matches_bitwise_for_any_polynomial(
    polynomial in any::<u32>(),
    seed in any::<u32>(),
    data in proptest::collection::vec(any::<u8>(), 0..=512),
  ) {
    let table = tables::build_boxed(polynomial);
    let ours = !portable::compute(&table, !seed, &data);
    prop_assert_eq!(ours, bitwise::hash(polynomial, &data, seed));
  }

  #[test]
  fn well_known_accessors_match_bitwise(
    which in 0usize..4,
    seed in any::<u32>(),
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
  ) {
    let polynomial = WELL_KNOWN[which];
    let calc = crate::get(polynomial);
    prop_assert_eq!(calc.hash(&data, seed), bitwise::hash(polynomial, &data, seed));
  }

  #[test]
  fn seeds_chain_across_splits(
    which in 0usize..4,
    seed in any::<u32>(),
    data in proptest::collection::vec(any::<u8>(), 0..=2048),
    split in any::<usize>(),
  ) {
    let calc = crate::get(WELL_KNOWN[which]);
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);

    let chained = calc.hash(b, calc.hash(a, seed));
    prop_assert_eq!(chained, calc.hash(&data, seed));
  }

  #[test]
  fn chunked_hash_matches_oneshot(
    data in proptest::collection::vec(any::<u8>(), 0..=2048),
    chunk in 1usize..=67,
  ) {
    let calc = crate::crc32c();
    let mut crc = 0u32;
    for part in data.chunks(chunk) {
      crc = calc.hash(part, crc);
    }
    prop_assert_eq!(crc, calc.checksum(&data));
  }

  #[test]
  fn hardware_matches_table(
    seed in any::<u32>(),
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
  ) {
    let table = Calculator::table(poly::CASTAGNOLI);
    if let Some(hw) = HardwareCalculator::new(platform::caps()) {
      prop_assert_eq!(hw.hash(&data, seed), table.hash(&data, seed));
      prop_assert_eq!(hw.narrowed().hash(&data, seed), table.hash(&data, seed));
    }
  }

  #[test]
  fn empty_input_returns_seed(polynomial in any::<u32>(), seed in any::<u32>()) {
    prop_assert_eq!(crate::get(polynomial).hash(&[], seed), seed);
  }

  #[test]
  fn portable_selection_agrees_with_crc32c(data in proptest::collection::vec(any::<u8>(), 0..=1024)) {
    let portable = crate::select_crc32c(Caps::NONE, crate::config::Crc32Force::Auto);
    prop_assert_eq!(portable.kind(), Kind::Table);
    prop_assert_eq!(portable.checksum(&data), crate::crc32c().checksum(&data));
  }
}
