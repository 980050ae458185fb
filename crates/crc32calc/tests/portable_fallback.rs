//! The portable tables are always reachable and agree with hardware.

use crc32calc::{Caps, Kind, config::Crc32Force, poly, select_crc32c};

const CHECK_STRING: &[u8] = b"123456789";
const CRC32C_CHECK: u32 = 0xE306_9283;

#[test]
fn no_caps_selects_table_for_every_force() {
  for force in [Crc32Force::Auto, Crc32Force::Portable, Crc32Force::Hwcrc] {
    let calc = select_crc32c(Caps::NONE, force);
    assert_eq!(calc.kind(), Kind::Table, "force={}", force.as_str());
    assert_eq!(calc.backend_name(), "portable/slice16");
    assert_eq!(calc.polynomial(), poly::CASTAGNOLI);
    assert_eq!(calc.checksum(CHECK_STRING), CRC32C_CHECK);
  }
}

#[test]
fn portable_force_ignores_detected_caps() {
  let calc = select_crc32c(platform::caps(), Crc32Force::Portable);
  assert_eq!(calc.kind(), Kind::Table);
  assert_eq!(calc.checksum(CHECK_STRING), CRC32C_CHECK);
}

#[test]
fn portable_and_selected_agree() {
  let portable = select_crc32c(Caps::NONE, Crc32Force::Auto);
  let selected = crc32calc::crc32c();

  let data: Vec<u8> = (0..100_000u32).map(|i| (i.wrapping_mul(2_654_435_761) >> 24) as u8).collect();
  for len in [0usize, 1, 5, 8, 13, 16, 64, 1000, 65529, 100_000] {
    assert_eq!(
      portable.checksum(&data[..len]),
      selected.checksum(&data[..len]),
      "{} disagrees with portable at len={len}",
      selected.backend_name()
    );
  }
}

#[test]
fn hardware_tier_matches_architecture() {
  let Some(calc) = crc32calc::Calculator::hardware(platform::caps()) else {
    return;
  };
  let tier = calc.hw_tier();
  if cfg!(target_arch = "x86") {
    assert_eq!(tier, Some(crc32calc::HwTier::Narrow));
  } else {
    assert_eq!(tier, Some(crc32calc::HwTier::Wide));
  }
}
