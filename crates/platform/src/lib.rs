//! CPU capability detection for crc32calc.
//!
//! This crate is the single place where the workspace asks the processor
//! which CRC instruction families it supports.
//!
//! # Core Types
//!
//! - [`Caps`]: what instructions can run on this machine
//! - [`Description`]: a printable summary for diagnostics
//!
//! # Usage
//!
//! ```
//! use platform::caps::x86;
//!
//! let caps = platform::caps();
//! if caps.has(x86::CRC32C_READY) {
//!   // SSE4.2 `crc32` is available
//! }
//! ```
//!
//! # Caching
//!
//! Detection runs once and is cached in a `OnceLock`. [`try_set_override`]
//! may restrict the reported set before the first query (tests, forcing the
//! portable path on a known machine); it can never enable a feature the
//! processor lacks.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod caps;
mod detect;

pub use caps::{Arch, Caps};
pub use detect::OverrideError;

/// Get the detected CPU capabilities.
#[inline]
#[must_use]
pub fn caps() -> Caps {
  detect::get().caps
}

/// Restrict detected capabilities to `mask` (or clear the restriction).
///
/// Must be called before the first call to [`caps()`] or [`describe()`].
/// A call that races with the first detection either takes effect or fails
/// with [`OverrideError::AlreadyInitialized`]; it is never silently ignored.
///
/// # Example
///
/// ```
/// // Force every dispatcher in this process onto portable code.
/// let _ = platform::try_set_override(Some(platform::Caps::NONE));
/// ```
#[inline]
pub fn try_set_override(mask: Option<Caps>) -> Result<(), OverrideError> {
  detect::try_set_override(mask)
}

/// Check if an override mask is installed.
#[inline]
#[must_use]
pub fn has_override() -> bool {
  detect::has_override()
}

/// Printable description of the current platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Description {
  pub arch: Arch,
  pub caps: Caps,
  pub overridden: bool,
}

impl core::fmt::Display for Description {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "{} [", self.arch)?;
    let mut first = true;
    for name in self.caps.feature_names() {
      if !first {
        f.write_str(", ")?;
      }
      first = false;
      f.write_str(name)?;
    }
    f.write_str("]")?;
    if self.overridden {
      f.write_str(" (override)")?;
    }
    Ok(())
  }
}

/// Describe the current platform.
#[must_use]
pub fn describe() -> Description {
  let detected = detect::get();
  Description {
    arch: detected.arch,
    caps: detected.caps,
    overridden: has_override(),
  }
}
