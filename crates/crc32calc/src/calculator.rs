//! CRC-32 calculators.
//!
//! A [`Calculator`] is bound to one polynomial and is immutable: hashing only
//! reads its own state and the input, so one instance can serve any number of
//! threads at once.

use core::fmt;

use platform::Caps;

use crate::{
  hw::{HwCrc, HwTier},
  poly, portable,
  tables::{self, Table},
};

/// The strategy behind a [`Calculator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
  /// Portable slice-by-16 lookup tables.
  Table,
  /// Native CRC instructions.
  Hardware,
}

impl Kind {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Table => "table",
      Self::Hardware => "hardware",
    }
  }
}

/// Table-backed calculator for an arbitrary reflected polynomial.
#[derive(Clone)]
pub struct TableCalculator {
  polynomial: u32,
  table: Box<Table>,
}

impl TableCalculator {
  /// Build the slice-by-16 table for `polynomial`.
  #[must_use]
  pub fn new(polynomial: u32) -> Self {
    Self {
      polynomial,
      table: tables::build_boxed(polynomial),
    }
  }

  #[inline]
  #[must_use]
  pub const fn polynomial(&self) -> u32 {
    self.polynomial
  }

  #[inline]
  #[must_use]
  pub fn hash(&self, data: &[u8], seed: u32) -> u32 {
    !portable::compute(&self.table, !seed, data)
  }
}

impl fmt::Debug for TableCalculator {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("TableCalculator")
      .field("polynomial", &format_args!("{:#010x}", self.polynomial))
      .finish_non_exhaustive()
  }
}

/// Hardware-backed CRC-32C calculator.
///
/// Holds no tables, only the proof that the CPU has the instructions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HardwareCalculator {
  hw: HwCrc,
}

impl HardwareCalculator {
  /// Returns `Some` when the CPU supports hardware CRC-32C and `caps` allows it.
  #[must_use]
  pub fn new(caps: Caps) -> Option<Self> {
    HwCrc::from_caps(caps).map(|hw| Self { hw })
  }

  /// Always [`poly::CASTAGNOLI`]: the instructions are hardwired to it.
  #[inline]
  #[must_use]
  pub const fn polynomial(&self) -> u32 {
    poly::CASTAGNOLI
  }

  #[inline]
  #[must_use]
  pub const fn tier(&self) -> HwTier {
    self.hw.tier()
  }

  /// A copy of this calculator limited to 4-byte and 1-byte steps.
  #[inline]
  #[must_use]
  pub const fn narrowed(&self) -> Self {
    Self { hw: self.hw.narrowed() }
  }

  #[inline]
  #[must_use]
  pub fn hash(&self, data: &[u8], seed: u32) -> u32 {
    !self.hw.compute(!seed, data)
  }
}

/// A CRC-32 calculator bound to one polynomial.
///
/// # Example
///
/// ```
/// use crc32calc::{Calculator, poly};
///
/// let zip = Calculator::table(poly::ZIP);
/// assert_eq!(zip.hash(b"123456789", 0), 0xCBF4_3926);
///
/// // Seeds chain: the result of one call continues into the next.
/// let first = zip.hash(b"1234", 0);
/// assert_eq!(zip.hash(b"56789", first), 0xCBF4_3926);
/// ```
#[derive(Clone, Debug)]
pub enum Calculator {
  Table(TableCalculator),
  Hardware(HardwareCalculator),
}

impl Calculator {
  /// Table-backed calculator for any reflected polynomial.
  #[must_use]
  pub fn table(polynomial: u32) -> Self {
    Self::Table(TableCalculator::new(polynomial))
  }

  /// Hardware CRC-32C calculator, if `caps` and the CPU allow it.
  #[must_use]
  pub fn hardware(caps: Caps) -> Option<Self> {
    HardwareCalculator::new(caps).map(Self::Hardware)
  }

  /// CRC of `data`, continuing from `seed`.
  ///
  /// A zero seed gives the conventional checksum. Passing a previous result as
  /// the seed continues that checksum, so
  /// `hash(y, hash(x, s)) == hash(x ++ y, s)`. Empty input returns `seed`.
  #[inline]
  #[must_use]
  pub fn hash(&self, data: &[u8], seed: u32) -> u32 {
    match self {
      Self::Table(t) => t.hash(data, seed),
      Self::Hardware(h) => h.hash(data, seed),
    }
  }

  /// CRC of `data` with the default seed (0).
  #[inline]
  #[must_use]
  pub fn checksum(&self, data: &[u8]) -> u32 {
    self.hash(data, 0)
  }

  #[inline]
  #[must_use]
  pub const fn polynomial(&self) -> u32 {
    match self {
      Self::Table(t) => t.polynomial(),
      Self::Hardware(h) => h.polynomial(),
    }
  }

  #[inline]
  #[must_use]
  pub const fn kind(&self) -> Kind {
    match self {
      Self::Table(_) => Kind::Table,
      Self::Hardware(_) => Kind::Hardware,
    }
  }

  /// The instruction tier, for hardware calculators.
  #[inline]
  #[must_use]
  pub const fn hw_tier(&self) -> Option<HwTier> {
    match self {
      Self::Table(_) => None,
      Self::Hardware(h) => Some(h.tier()),
    }
  }

  /// Name of the kernel this calculator runs, for diagnostics.
  #[must_use]
  pub const fn backend_name(&self) -> &'static str {
    match self {
      Self::Table(_) => "portable/slice16",
      Self::Hardware(h) => h.hw.name(),
    }
  }
}
