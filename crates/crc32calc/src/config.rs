//! CRC-32C selection configuration (environment overrides).
//!
//! `CRC32CALC_FORCE` picks the strategy behind [`crate::crc32c()`]:
//!
//! | Value | Effect |
//! |-------|--------|
//! | `auto` (default) | hardware when available, else portable |
//! | `portable`, `table`, `scalar` | always the slice-by-16 tables |
//! | `hwcrc`, `hardware`, `crc32c` | hardware when available |
//!
//! The variable is read once per process. Forced modes are always clamped to
//! detected CPU capabilities: forcing `hwcrc` on a CPU without the
//! instructions behaves like `auto`.

use platform::Caps;

use crate::hw::HwCrc;

/// Environment variable consulted by [`get`].
pub const FORCE_ENV: &str = "CRC32CALC_FORCE";

/// Forced backend selection for CRC-32C.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Crc32Force {
  /// Use the default auto selector.
  #[default]
  Auto,
  /// Force the portable table-based implementation.
  Portable,
  /// Force hardware CRC instructions (if available).
  Hwcrc,
}

impl Crc32Force {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Portable => "portable",
      Self::Hwcrc => "hwcrc",
    }
  }

  /// Parse a force value, accepting the aliases listed in the module docs.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    if value.eq_ignore_ascii_case("portable")
      || value.eq_ignore_ascii_case("table")
      || value.eq_ignore_ascii_case("scalar")
    {
      return Some(Self::Portable);
    }
    if value.eq_ignore_ascii_case("hwcrc")
      || value.eq_ignore_ascii_case("hardware")
      || value.eq_ignore_ascii_case("crc32c")
    {
      return Some(Self::Hwcrc);
    }
    None
  }
}

/// Effective CRC-32C configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crc32Config {
  /// Requested force mode (from the environment).
  pub requested_force: Crc32Force,
  /// Force mode clamped to detected CPU capabilities.
  pub effective_force: Crc32Force,
}

/// Interpret a raw `CRC32CALC_FORCE` value (`None` when the variable is unset).
///
/// Unset, empty, and unrecognized values all mean [`Crc32Force::Auto`]; the
/// last one is reported with a warning.
#[must_use]
pub fn force_from_env_value(raw: Option<&str>) -> Crc32Force {
  let Some(raw) = raw else {
    return Crc32Force::Auto;
  };
  if raw.trim().is_empty() {
    return Crc32Force::Auto;
  }

  match Crc32Force::parse(raw) {
    Some(force) => force,
    None => {
      tracing::warn!(var = FORCE_ENV, value = %raw, "ignoring unrecognized value, using auto");
      Crc32Force::Auto
    }
  }
}

fn read_env_force() -> Crc32Force {
  force_from_env_value(std::env::var(FORCE_ENV).ok().as_deref())
}

fn requested_force() -> Crc32Force {
  use std::sync::OnceLock;
  static FORCE: OnceLock<Crc32Force> = OnceLock::new();
  *FORCE.get_or_init(read_env_force)
}

/// Clamp a requested force mode to what `caps` can actually run.
#[inline]
#[must_use]
pub fn clamp_force_to_caps(requested: Crc32Force, caps: Caps) -> Crc32Force {
  match requested {
    Crc32Force::Auto | Crc32Force::Portable => requested,
    Crc32Force::Hwcrc if HwCrc::from_caps(caps).is_some() => Crc32Force::Hwcrc,
    Crc32Force::Hwcrc => Crc32Force::Auto,
  }
}

/// Get the effective CRC-32C configuration for the current platform.
#[must_use]
pub fn get() -> Crc32Config {
  let requested_force = requested_force();
  Crc32Config {
    requested_force,
    effective_force: clamp_force_to_caps(requested_force, platform::caps()),
  }
}
