//! Textual encodings of binary data
//!
//! Hex dumps for logs, hex digests for frame reconstruction, and per-bit
//! binary strings for inspecting status registers.
//!
//! Two bit-order conventions coexist on purpose: `byte_to_binary_string` is
//! MSB-first (human-readable register dumps), `bit_string` expands each byte
//! LSB-first (channel-flag consumers index it by bit position). Do not unify
//! them.

use crate::error::{Result, SensorLinkError};

/// Format a buffer as a bracketed uppercase hex dump
///
/// `[0x0A, 0xFF]`; empty input renders as `[]`.
pub fn hex_string(data: &[u8]) -> String {
    if data.is_empty() {
        return "[]".to_string();
    }
    let entries = data
        .iter()
        .map(|b| format!("0x{:02X}", b))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", entries)
}

/// Format a buffer as a bracketed hex dump with zero-based indices
///
/// `[0 - 0x0A, 1 - 0xFF]`; empty input renders as `[]`.
pub fn hex_string_indexed(data: &[u8]) -> String {
    if data.is_empty() {
        return "[]".to_string();
    }
    let entries = data
        .iter()
        .enumerate()
        .map(|(i, b)| format!("{} - 0x{:02X}", i, b))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", entries)
}

/// Render the 8 bits of a byte, most significant first
///
/// `0x0A` → `"00001010"`.
pub fn byte_to_binary_string(byte: u8) -> String {
    format!("{:08b}", byte)
}

/// Bit-expand a buffer, each byte least significant bit first
///
/// Opposite per-byte bit order from [`byte_to_binary_string`]:
/// `[0x0A]` → `"01010000"`. Position `i * 8 + j` holds bit `j` of byte `i`.
pub fn bit_string(data: &[u8]) -> String {
    let mut s = String::with_capacity(data.len() * 8);
    for byte in data {
        for j in 0..8 {
            s.push(if (byte >> j) & 1 != 0 { '1' } else { '0' });
        }
    }
    s
}

/// Parse a 4- or 8-bit binary digit string into a byte
///
/// Length 8 is read as a two's-complement signed byte (leading '1' means
/// negative); length 4 as an unsigned nibble. Any other length or a
/// non-'0'/'1' character is an `InvalidArgument` error.
pub fn parse_binary_string(s: &str) -> Result<i8> {
    if s.len() != 4 && s.len() != 8 {
        return Err(SensorLinkError::invalid_argument(format!(
            "binary string must be 4 or 8 digits, got {} ({:?})",
            s.len(),
            s
        )));
    }
    // from_str_radix also accepts a leading sign, which is not a binary digit
    if !s.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(SensorLinkError::invalid_argument(format!(
            "binary string has non-binary digit: {:?}",
            s
        )));
    }
    let value = u16::from_str_radix(s, 2).map_err(|_| {
        SensorLinkError::invalid_argument(format!("binary string has non-binary digit: {:?}", s))
    })?;
    if s.len() == 8 && s.starts_with('1') {
        Ok((value as i16 - 256) as i8)
    } else {
        Ok(value as i8)
    }
}

/// Render a buffer as uppercase hex pairs with no separators
///
/// `[0x0A, 0xFF]` → `"0AFF"`.
pub fn hex_digest(data: &[u8]) -> String {
    hex::encode_upper(data)
}

/// Parse a hex digest (two digits per byte) back into a buffer
///
/// Empty, odd-length, or non-hex input is an `InvalidArgument` error.
pub fn parse_hex_digest(s: &str) -> Result<Vec<u8>> {
    if s.is_empty() {
        return Err(SensorLinkError::invalid_argument(
            "hex string must not be empty",
        ));
    }
    Ok(hex::decode(s)?)
}

/// Bitwise-complement every byte of a hex digest
///
/// Parses via [`parse_hex_digest`], flips every byte, re-renders via
/// [`hex_digest`]. Used to build the inverted check field of legacy frames.
pub fn hex_complement(s: &str) -> Result<String> {
    let complemented: Vec<u8> = parse_hex_digest(s)?.iter().map(|b| !b).collect();
    Ok(hex_digest(&complemented))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_string() {
        assert_eq!(hex_string(&[0x0A, 0xFF]), "[0x0A, 0xFF]");
        assert_eq!(hex_string(&[0x00]), "[0x00]");
        assert_eq!(hex_string(&[]), "[]");
    }

    #[test]
    fn test_hex_string_indexed() {
        assert_eq!(hex_string_indexed(&[0x0A, 0xFF]), "[0 - 0x0A, 1 - 0xFF]");
        assert_eq!(hex_string_indexed(&[]), "[]");
    }

    #[test]
    fn test_byte_to_binary_string_msb_first() {
        assert_eq!(byte_to_binary_string(0x0A), "00001010");
        assert_eq!(byte_to_binary_string(0x00), "00000000");
        assert_eq!(byte_to_binary_string(0xFF), "11111111");
        assert_eq!(byte_to_binary_string(0x80), "10000000");
    }

    #[test]
    fn test_bit_string_lsb_first() {
        // reversed per-byte bit order relative to byte_to_binary_string
        assert_eq!(bit_string(&[0x0A]), "01010000");
        assert_eq!(bit_string(&[0x80]), "00000001");
        assert_eq!(bit_string(&[0x0A, 0x80]), "0101000000000001");
        assert_eq!(bit_string(&[]), "");
    }

    #[test]
    fn test_parse_binary_string_8bit_signed() {
        assert_eq!(parse_binary_string("00001010").unwrap(), 10);
        assert_eq!(parse_binary_string("11111111").unwrap(), -1);
        assert_eq!(parse_binary_string("10000000").unwrap(), i8::MIN);
        assert_eq!(parse_binary_string("01111111").unwrap(), i8::MAX);
    }

    #[test]
    fn test_parse_binary_string_4bit_unsigned() {
        assert_eq!(parse_binary_string("1010").unwrap(), 10);
        assert_eq!(parse_binary_string("0000").unwrap(), 0);
        assert_eq!(parse_binary_string("1111").unwrap(), 15);
    }

    #[test]
    fn test_parse_binary_string_errors() {
        for bad in ["", "101", "00001", "000010101", "0000102a", "12", "+111", "+1111111", "-111"] {
            assert!(
                matches!(
                    parse_binary_string(bad),
                    Err(SensorLinkError::InvalidArgument(_))
                ),
                "expected error for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_hex_digest_roundtrip() {
        assert_eq!(hex_digest(&[0x0A, 0xFF]), "0AFF");
        assert_eq!(parse_hex_digest("0AFF").unwrap(), vec![0x0A, 0xFF]);
        assert_eq!(hex_digest(&parse_hex_digest("0AFF").unwrap()), "0AFF");
        // lowercase input parses too
        assert_eq!(parse_hex_digest("0aff").unwrap(), vec![0x0A, 0xFF]);
    }

    #[test]
    fn test_parse_hex_digest_errors() {
        for bad in ["", "0", "0A0", "0G", "zz"] {
            assert!(
                matches!(
                    parse_hex_digest(bad),
                    Err(SensorLinkError::InvalidArgument(_))
                ),
                "expected error for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_hex_complement() {
        assert_eq!(hex_complement("0AFF").unwrap(), "F500");
        assert_eq!(hex_complement("00").unwrap(), "FF");
        // involution
        assert_eq!(hex_complement(&hex_complement("1234").unwrap()).unwrap(), "1234");
        assert!(hex_complement("").is_err());
    }
}
