//! Process-wide calculator cache.
//!
//! Each well-known polynomial has one `OnceLock` slot. The first caller builds
//! the calculator; concurrent first callers block until that single build
//! finishes, and every caller afterwards gets the same `&'static` reference.
//! Slots are never torn down.

use std::{borrow::Cow, sync::OnceLock};

use platform::Caps;

use crate::{
  Calculator, HardwareCalculator,
  config::{self, Crc32Force},
  poly,
};

static ZIP_NORMAL: OnceLock<Calculator> = OnceLock::new();
static ZIP: OnceLock<Calculator> = OnceLock::new();
static CASTAGNOLI: OnceLock<Calculator> = OnceLock::new();
static CASTAGNOLI_NORMAL: OnceLock<Calculator> = OnceLock::new();
static CRC32C_HARDWARE: OnceLock<Calculator> = OnceLock::new();
static CRC32C: OnceLock<&'static Calculator> = OnceLock::new();

#[cold]
fn init_table(polynomial: u32) -> Calculator {
  let calc = Calculator::table(polynomial);
  tracing::debug!(
    polynomial = format_args!("{polynomial:#010x}"),
    backend = calc.backend_name(),
    "crc32 calculator initialized"
  );
  calc
}

/// Hardware CRC-32C calculator to use under `caps` and `force`, if any.
fn hardware_for(caps: Caps, force: Crc32Force) -> Option<HardwareCalculator> {
  match force {
    Crc32Force::Portable => None,
    Crc32Force::Auto | Crc32Force::Hwcrc => HardwareCalculator::new(caps),
  }
}

/// Choose the CRC-32C strategy for an explicit capability set.
///
/// This is the policy behind [`crc32c()`], exposed so callers and tests can
/// evaluate it for any capability set. It always builds a fresh calculator.
///
/// # Example
///
/// ```
/// use crc32calc::{Caps, Kind, config::Crc32Force, select_crc32c};
///
/// // No capabilities: always the portable tables.
/// let calc = select_crc32c(Caps::NONE, Crc32Force::Auto);
/// assert_eq!(calc.kind(), Kind::Table);
/// assert_eq!(calc.checksum(b"123456789"), 0xE306_9283);
/// ```
#[must_use]
pub fn select_crc32c(caps: Caps, force: Crc32Force) -> Calculator {
  match hardware_for(caps, force) {
    Some(hw) => Calculator::Hardware(hw),
    None => Calculator::table(poly::CASTAGNOLI),
  }
}

/// CRC-32 with [`poly::ZIP_NORMAL`].
#[must_use]
pub fn zip_normal() -> &'static Calculator {
  ZIP_NORMAL.get_or_init(|| init_table(poly::ZIP_NORMAL))
}

/// CRC-32 with [`poly::ZIP`] (the zip/gzip/PNG checksum).
///
/// ```
/// assert_eq!(crc32calc::zip().checksum(b"123456789"), 0xCBF4_3926);
/// ```
#[must_use]
pub fn zip() -> &'static Calculator {
  ZIP.get_or_init(|| init_table(poly::ZIP))
}

/// CRC-32C with [`poly::CASTAGNOLI`], always table-backed.
#[must_use]
pub fn castagnoli() -> &'static Calculator {
  CASTAGNOLI.get_or_init(|| init_table(poly::CASTAGNOLI))
}

/// CRC-32C with [`poly::CASTAGNOLI_NORMAL`].
#[must_use]
pub fn castagnoli_normal() -> &'static Calculator {
  CASTAGNOLI_NORMAL.get_or_init(|| init_table(poly::CASTAGNOLI_NORMAL))
}

/// Best available CRC-32C.
///
/// Hardware CRC instructions when the CPU has them (and `CRC32CALC_FORCE` is
/// not `portable`), otherwise the same instance as [`castagnoli()`]. Decided
/// once per process.
///
/// ```
/// assert_eq!(crc32calc::crc32c().checksum(b"123456789"), 0xE306_9283);
/// ```
#[must_use]
pub fn crc32c() -> &'static Calculator {
  CRC32C.get_or_init(|| {
    let caps = platform::caps();
    let config = config::get();

    let calc = match hardware_for(caps, config.effective_force) {
      Some(hw) => CRC32C_HARDWARE.get_or_init(|| Calculator::Hardware(hw)),
      None => castagnoli(),
    };

    tracing::debug!(
      platform = %platform::describe(),
      force = config.effective_force.as_str(),
      backend = calc.backend_name(),
      "crc32c strategy selected"
    );
    calc
  })
}

/// Resolve a calculator for `polynomial`.
///
/// Well-known polynomials borrow their cached instance ([`poly::CASTAGNOLI`]
/// resolves to [`crc32c()`]). Any other value gets a freshly built, uncached
/// table calculator.
///
/// ```
/// use crc32calc::{get, poly};
///
/// assert_eq!(get(poly::ZIP).checksum(b"123456789"), 0xCBF4_3926);
///
/// // Reflected Koopman polynomial (CRC-32K): built on demand.
/// let koopman = get(0xEB31_D82E);
/// assert_eq!(koopman.polynomial(), 0xEB31_D82E);
/// ```
#[must_use]
pub fn get(polynomial: u32) -> Cow<'static, Calculator> {
  match polynomial {
    poly::ZIP_NORMAL => Cow::Borrowed(zip_normal()),
    poly::ZIP => Cow::Borrowed(zip()),
    poly::CASTAGNOLI => Cow::Borrowed(crc32c()),
    poly::CASTAGNOLI_NORMAL => Cow::Borrowed(castagnoli_normal()),
    other => Cow::Owned(Calculator::table(other)),
  }
}

/// Returns the backend [`crc32c()`] uses on this machine.
///
/// Intended for diagnostics and benchmarking.
#[must_use]
pub fn selected_backend() -> &'static str {
  crc32c().backend_name()
}
