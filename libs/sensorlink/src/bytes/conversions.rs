//! Numeric type conversions with byte order support
//!
//! Converts between byte slices and the three field types the sensor
//! protocol carries: i16, i32, and IEEE-754 f32, in scalar and array forms.
//!
//! Decode at an offset fails with `OutOfRange` when the field would run past
//! the end of the buffer; the firmware-side convention of decoding a short
//! buffer as `0` is indistinguishable from a genuine zero field and is not
//! reproduced here.
//!
//! Round-trip law: for both byte orders, `decode(encode(v, order), 0, order)`
//! returns `v` bit-exact, floats included.

use super::ByteOrder;
use crate::error::{Result, SensorLinkError};

// ============================================================================
// Scalar Decoding
// ============================================================================

/// Decode an i16 from 2 bytes starting at `offset`
pub fn decode_i16(data: &[u8], offset: usize, order: ByteOrder) -> Result<i16> {
    let bytes = field(data, offset, 2)?;
    let bytes = [bytes[0], bytes[1]];
    Ok(match order {
        ByteOrder::BigEndian => i16::from_be_bytes(bytes),
        ByteOrder::LittleEndian => i16::from_le_bytes(bytes),
    })
}

/// Decode an i32 from 4 bytes starting at `offset`
pub fn decode_i32(data: &[u8], offset: usize, order: ByteOrder) -> Result<i32> {
    let bytes = field(data, offset, 4)?;
    let bytes = [bytes[0], bytes[1], bytes[2], bytes[3]];
    Ok(match order {
        ByteOrder::BigEndian => i32::from_be_bytes(bytes),
        ByteOrder::LittleEndian => i32::from_le_bytes(bytes),
    })
}

/// Decode an f32 from 4 bytes starting at `offset`
pub fn decode_f32(data: &[u8], offset: usize, order: ByteOrder) -> Result<f32> {
    let bytes = field(data, offset, 4)?;
    let bytes = [bytes[0], bytes[1], bytes[2], bytes[3]];
    Ok(match order {
        ByteOrder::BigEndian => f32::from_be_bytes(bytes),
        ByteOrder::LittleEndian => f32::from_le_bytes(bytes),
    })
}

fn field(data: &[u8], offset: usize, width: usize) -> Result<&[u8]> {
    // checked: `offset + width` could overflow for hostile offsets
    if data.len().checked_sub(width).map_or(true, |max| offset > max) {
        return Err(SensorLinkError::out_of_range(offset, width, data.len()));
    }
    Ok(&data[offset..offset + width])
}

// ============================================================================
// Array Decoding
// ============================================================================

/// Reinterpret a buffer as consecutive i16 values
///
/// Length is `data.len() / 2`; a trailing odd byte is dropped.
pub fn decode_i16_array(data: &[u8], order: ByteOrder) -> Vec<i16> {
    data.chunks_exact(2)
        .map(|c| {
            let bytes = [c[0], c[1]];
            match order {
                ByteOrder::BigEndian => i16::from_be_bytes(bytes),
                ByteOrder::LittleEndian => i16::from_le_bytes(bytes),
            }
        })
        .collect()
}

/// Reinterpret a buffer as consecutive f32 values
///
/// Length is `data.len() / 4`; trailing remainder bytes are dropped.
pub fn decode_f32_array(data: &[u8], order: ByteOrder) -> Vec<f32> {
    data.chunks_exact(4)
        .map(|c| {
            let bytes = [c[0], c[1], c[2], c[3]];
            match order {
                ByteOrder::BigEndian => f32::from_be_bytes(bytes),
                ByteOrder::LittleEndian => f32::from_le_bytes(bytes),
            }
        })
        .collect()
}

// ============================================================================
// Encoding
// ============================================================================

/// Encode an i16 into 2 bytes
pub fn encode_i16(value: i16, order: ByteOrder) -> [u8; 2] {
    match order {
        ByteOrder::BigEndian => value.to_be_bytes(),
        ByteOrder::LittleEndian => value.to_le_bytes(),
    }
}

/// Encode an i32 into 4 bytes
pub fn encode_i32(value: i32, order: ByteOrder) -> [u8; 4] {
    match order {
        ByteOrder::BigEndian => value.to_be_bytes(),
        ByteOrder::LittleEndian => value.to_le_bytes(),
    }
}

/// Encode an f32 into 4 bytes (IEEE-754 representation preserved)
pub fn encode_f32(value: f32, order: ByteOrder) -> [u8; 4] {
    match order {
        ByteOrder::BigEndian => value.to_be_bytes(),
        ByteOrder::LittleEndian => value.to_le_bytes(),
    }
}

/// Encode an i16 slice as concatenated 2-byte fields in input order
pub fn encode_i16_array(values: &[i16], order: ByteOrder) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(values.len() * 2);
    for v in values {
        bytes.extend_from_slice(&encode_i16(*v, order));
    }
    bytes
}

/// Encode an f32 slice as concatenated 4-byte fields in input order
pub fn encode_f32_array(values: &[f32], order: ByteOrder) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(values.len() * 4);
    for v in values {
        bytes.extend_from_slice(&encode_f32(*v, order));
    }
    bytes
}

/// Encode an i32 in big-endian regardless of any configured order
///
/// Fixed-order variant used for verification against reference captures.
pub fn encode_i32_be(value: i32) -> [u8; 4] {
    value.to_be_bytes()
}
