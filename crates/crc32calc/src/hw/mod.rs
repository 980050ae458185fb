//! Hardware CRC-32C kernels and the capability token that gates them.
//!
//! The only way to obtain an [`HwCrc`] is [`HwCrc::from_caps`], which checks
//! the requested capabilities against what the platform crate detected. The
//! kernels themselves are `#[target_feature]` functions that are only called
//! through an `HwCrc`, so the hardware path cannot run on a CPU that failed
//! the check.

#![allow(unsafe_code)]

#[cfg(target_arch = "aarch64")]
mod aarch64;
#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
mod x86;

use platform::Caps;

/// Width of the widest CRC instruction form the engine uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HwTier {
  /// 8-byte, 4-byte, and 1-byte steps.
  Wide,
  /// 4-byte and 1-byte steps only (no 64-bit instruction form).
  Narrow,
}

impl HwTier {
  /// Largest number of bytes folded by a single instruction.
  #[must_use]
  pub const fn step_bytes(self) -> usize {
    match self {
      Self::Wide => 8,
      Self::Narrow => 4,
    }
  }
}

/// Proof that the running CPU supports hardware CRC-32C, plus the tier to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HwCrc {
  tier: HwTier,
}

impl HwCrc {
  /// Returns `Some` when `caps` carries the CRC-32C instruction family and the
  /// processor really has it.
  ///
  /// `caps` is intersected with [`platform::caps()`], so passing a forged set
  /// can only disable the hardware path, never enable it.
  #[must_use]
  pub fn from_caps(caps: Caps) -> Option<Self> {
    let caps = caps.intersection(platform::caps());

    #[cfg(target_arch = "x86_64")]
    {
      if caps.has(platform::caps::x86::CRC32C_READY) {
        return Some(Self { tier: HwTier::Wide });
      }
    }

    #[cfg(target_arch = "x86")]
    {
      if caps.has(platform::caps::x86::CRC32C_READY) {
        return Some(Self { tier: HwTier::Narrow });
      }
    }

    #[cfg(target_arch = "aarch64")]
    {
      if caps.has(platform::caps::aarch64::CRC_READY) {
        return Some(Self { tier: HwTier::Wide });
      }
    }

    let _ = caps;
    None
  }

  #[inline]
  #[must_use]
  pub const fn tier(self) -> HwTier {
    self.tier
  }

  /// The same capability restricted to 4-byte and 1-byte steps.
  ///
  /// Every platform that has the wide form also has the narrow one.
  #[inline]
  #[must_use]
  pub const fn narrowed(self) -> Self {
    Self { tier: HwTier::Narrow }
  }

  #[must_use]
  pub const fn name(self) -> &'static str {
    #[cfg(target_arch = "x86_64")]
    {
      match self.tier {
        HwTier::Wide => "x86_64/sse4.2",
        HwTier::Narrow => "x86_64/sse4.2 (narrow)",
      }
    }

    #[cfg(target_arch = "x86")]
    {
      let _ = self;
      "x86/sse4.2 (narrow)"
    }

    #[cfg(target_arch = "aarch64")]
    {
      match self.tier {
        HwTier::Wide => "aarch64/crc",
        HwTier::Narrow => "aarch64/crc (narrow)",
      }
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86", target_arch = "aarch64")))]
    {
      let _ = self;
      "unavailable"
    }
  }

  /// Fold `data` into a raw (already inverted) CRC-32C register.
  #[inline]
  #[must_use]
  pub fn compute(self, crc: u32, data: &[u8]) -> u32 {
    #[cfg(target_arch = "x86_64")]
    {
      match self.tier {
        // SAFETY: an `HwCrc` only exists when SSE4.2 was detected.
        HwTier::Wide => unsafe { x86::compute_wide_unchecked(crc, data) },
        // SAFETY: as above.
        HwTier::Narrow => unsafe { x86::compute_narrow_unchecked(crc, data) },
      }
    }

    #[cfg(target_arch = "x86")]
    {
      let _ = self;
      // SAFETY: an `HwCrc` only exists when SSE4.2 was detected.
      unsafe { x86::compute_narrow_unchecked(crc, data) }
    }

    #[cfg(target_arch = "aarch64")]
    {
      match self.tier {
        // SAFETY: an `HwCrc` only exists when the CRC extension was detected.
        HwTier::Wide => unsafe { aarch64::compute_wide_unchecked(crc, data) },
        // SAFETY: as above.
        HwTier::Narrow => unsafe { aarch64::compute_narrow_unchecked(crc, data) },
      }
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86", target_arch = "aarch64")))]
    {
      // `from_caps` never returns `Some` here.
      let _ = self;
      crate::bitwise::compute(crate::poly::CASTAGNOLI, crc, data)
    }
  }
}
