//! Well-known CRC-32 polynomial constants.
//!
//! Every value is consumed by the reflected (LSB-first) table algorithm as-is.
//! The two `*_NORMAL` constants are the big-endian spellings of the same
//! generators; they are not bit-reversed before use, so they name distinct
//! polynomials as far as the engine is concerned.

/// CRC-32 (ISO-HDLC) generator `0x04C11DB7`, normal orientation.
pub const ZIP_NORMAL: u32 = 0x04C1_1DB7;

/// CRC-32 (ISO-HDLC) reflected. Used by zip, gzip, PNG, and Ethernet.
pub const ZIP: u32 = 0xEDB8_8320;

/// CRC-32C (Castagnoli) reflected. Used by iSCSI, SCTP, ext4, and Btrfs.
///
/// This is the polynomial of the SSE4.2 and ARMv8 `crc32c` instructions.
pub const CASTAGNOLI: u32 = 0x82F6_3B78;

/// CRC-32C (Castagnoli) generator `0x1EDC6F41`, normal orientation.
pub const CASTAGNOLI_NORMAL: u32 = 0x1EDC_6F41;
