//! Integrity checks: CRC32 and additive checksum
//!
//! Both are pure functions of the input buffer and independent of byte order.
//! This module only computes the values; comparing them against an expected
//! trailer is the caller's decision.

use crate::error::{Result, SensorLinkError};

/// Reflected CRC-32 polynomial (bit-reversed 0x04C11DB7)
const CRC32_POLY: u32 = 0xEDB8_8320;

/// Bit-serial CRC-32 over the buffer
///
/// Init `0xFFFF_FFFF`, reflected polynomial, final complement. Matches the
/// zlib/PNG CRC-32 bit-for-bit: `crc32(b"123456789") == 0xCBF4_3926`.
/// Empty input yields `0`.
pub fn crc32(data: &[u8]) -> u32 {
    let mut crc: u32 = 0xFFFF_FFFF;
    for byte in data {
        let mut temp = (crc & 0xFF) ^ *byte as u32;
        for _ in 0..8 {
            if temp & 1 != 0 {
                temp = (temp >> 1) ^ CRC32_POLY;
            } else {
                temp >>= 1;
            }
        }
        crc = (crc >> 8) ^ temp;
    }
    !crc
}

/// Additive checksum: two's-complement of the mod-256 byte sum
///
/// Appending the result to the buffer makes the total sum 0 mod 256, the
/// trailer convention of the sensor frame format. Empty input is an error;
/// a checksum over nothing protects nothing.
pub fn checksum8(data: &[u8]) -> Result<u8> {
    if data.is_empty() {
        return Err(SensorLinkError::invalid_argument(
            "checksum requires a non-empty buffer",
        ));
    }
    let total = data.iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
    Ok(total.wrapping_neg())
}
