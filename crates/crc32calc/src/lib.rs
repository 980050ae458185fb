//! CRC-32 checksums with slice-by-16 tables and hardware CRC-32C.
//!
//! Every polynomial runs through the reflected (LSB-first) algorithm with
//! all-ones pre- and post-conditioning. Callers pass and receive
//! un-conditioned values: a seed of 0 yields the conventional checksum and a
//! previous result used as the seed continues it.
//!
//! # Well-known Polynomials
//!
//! | Accessor | Constant | Strategy |
//! |----------|----------|----------|
//! | [`zip_normal()`] | [`poly::ZIP_NORMAL`] (0x04C11DB7) | table |
//! | [`zip()`] | [`poly::ZIP`] (0xEDB88320) | table |
//! | [`castagnoli()`] | [`poly::CASTAGNOLI`] (0x82F63B78) | table |
//! | [`castagnoli_normal()`] | [`poly::CASTAGNOLI_NORMAL`] (0x1EDC6F41) | table |
//! | [`crc32c()`] | [`poly::CASTAGNOLI`] | hardware when available, else table |
//!
//! The `*_NORMAL` constants are fed as-is to the reflected algorithm. They
//! are distinct checksums, not the standard CRC-32 and CRC-32C.
//!
//! # Hardware Acceleration
//!
//! | Target | Instructions | Steps |
//! |--------|--------------|-------|
//! | x86_64 | SSE4.2 `crc32` | 8, 4, 1 bytes |
//! | x86 | SSE4.2 `crc32` | 4, 1 bytes |
//! | aarch64 | CRC extension `crc32c*` | 8, 4, 1 bytes |
//!
//! Set `CRC32CALC_FORCE=portable` to keep [`crc32c()`] on the tables (see
//! [`config`]).
//!
//! # Example
//!
//! ```
//! use crc32calc::poly;
//!
//! let crc = crc32calc::crc32c().checksum(b"123456789");
//! assert_eq!(crc, 0xE306_9283);
//!
//! // Incremental: feed the previous result back as the seed.
//! let zip = crc32calc::get(poly::ZIP);
//! let partial = zip.hash(b"1234", 0);
//! assert_eq!(zip.hash(b"56789", partial), 0xCBF4_3926);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod bitwise;
mod calculator;
pub mod config;
mod hw;
pub mod poly;
mod portable;
mod registry;
pub mod tables;

#[cfg(test)]
mod proptests;

pub use calculator::{Calculator, HardwareCalculator, Kind, TableCalculator};
pub use hw::HwTier;
pub use platform::Caps;
pub use registry::{castagnoli, castagnoli_normal, crc32c, get, select_crc32c, selected_backend, zip, zip_normal};
