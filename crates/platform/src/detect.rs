//! Runtime CPU detection.
//!
//! Detection runs once per process and is cached in a `OnceLock`. Before the
//! first query a caller may install an override mask; the override can only
//! remove features from what the hardware reports, never add them, so a
//! capability set returned from here is always safe to dispatch on.
//!
//! Only the CRC-32C instruction families are probed. Under Miri detection
//! always reports no features.

use std::sync::{OnceLock, RwLock};

use crate::caps::{Arch, Caps};

/// Result of a detection pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Detected {
  pub caps: Caps,
  pub arch: Arch,
}

impl Detected {
  /// No accelerated features on the current architecture.
  #[must_use]
  pub const fn portable() -> Self {
    Self {
      caps: Caps::NONE,
      arch: Arch::current(),
    }
  }
}

/// Error returned when an override cannot be installed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum OverrideError {
  /// Detection already ran and its result has been handed out.
  AlreadyInitialized,
  /// The override slot is poisoned by a panic in another thread.
  Poisoned,
}

impl core::fmt::Display for OverrideError {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      Self::AlreadyInitialized => f.write_str("capability detection already initialized"),
      Self::Poisoned => f.write_str("capability override lock poisoned"),
    }
  }
}

impl core::error::Error for OverrideError {}

// ─────────────────────────────────────────────────────────────────────────────
// Cache and Override
// ─────────────────────────────────────────────────────────────────────────────

/// Override mask plus whether detection has already consumed it.
///
/// Both live under one lock so that installing a mask and sealing the slot
/// for detection are ordered: a mask is either seen by detection or rejected.
struct OverrideSlot {
  mask: Option<Caps>,
  sealed: bool,
}

static CACHE: OnceLock<Detected> = OnceLock::new();
static OVERRIDE: RwLock<OverrideSlot> = RwLock::new(OverrideSlot {
  mask: None,
  sealed: false,
});

#[inline]
pub(crate) fn get() -> Detected {
  *CACHE.get_or_init(detect_with_override)
}

/// Install (or clear, with `None`) a capability mask applied to detection.
///
/// Contract: pre-init only. Once detection has started this returns
/// [`OverrideError::AlreadyInitialized`].
#[cold]
pub(crate) fn try_set_override(value: Option<Caps>) -> Result<(), OverrideError> {
  let mut slot = OVERRIDE.write().map_err(|_| OverrideError::Poisoned)?;
  if slot.sealed {
    return Err(OverrideError::AlreadyInitialized);
  }
  slot.mask = value;
  Ok(())
}

#[inline]
pub(crate) fn has_override() -> bool {
  OVERRIDE.read().map(|slot| slot.mask.is_some()).unwrap_or(false)
}

#[cold]
fn detect_with_override() -> Detected {
  let mask = match OVERRIDE.write() {
    Ok(mut slot) => {
      slot.sealed = true;
      slot.mask
    }
    // The slot is plain data, so a poisoned lock still holds a whole mask.
    Err(poisoned) => {
      let mut slot = poisoned.into_inner();
      slot.sealed = true;
      slot.mask
    }
  };

  let mut detected = detect_uncached();
  if let Some(mask) = mask {
    detected.caps = detected.caps.intersection(mask);
  }
  detected
}

// ─────────────────────────────────────────────────────────────────────────────
// Per-architecture detection
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(miri)]
fn detect_uncached() -> Detected {
  Detected::portable()
}

#[cfg(all(not(miri), any(target_arch = "x86_64", target_arch = "x86")))]
fn detect_uncached() -> Detected {
  use crate::caps::x86;

  let mut caps = Caps::NONE;
  if std::arch::is_x86_feature_detected!("sse4.2") {
    caps |= x86::SSE42;
  }

  Detected {
    caps,
    arch: Arch::current(),
  }
}

#[cfg(all(not(miri), target_arch = "aarch64"))]
fn detect_uncached() -> Detected {
  use crate::caps::aarch64;

  let mut caps = Caps::NONE;
  if std::arch::is_aarch64_feature_detected!("crc") {
    caps |= aarch64::CRC;
  }

  Detected {
    caps,
    arch: Arch::Aarch64,
  }
}

#[cfg(all(
  not(miri),
  not(any(target_arch = "x86_64", target_arch = "x86", target_arch = "aarch64"))
))]
fn detect_uncached() -> Detected {
  Detected::portable()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
