//! Telemetry frame assembly and disassembly
//!
//! Wire layout: `[head, cmd, len: u16, payload..., checksum]` where `len` is
//! the whole frame length (payload + 5 overhead bytes) and the trailer is the
//! additive checksum of every preceding byte.
//!
//! `unpack` validates size, head, and command but not the checksum; whether a
//! corrupted-but-parseable frame is retried or dropped is the caller's call.
//! Use [`verify`] when the answer matters.

use tracing::debug;

use crate::bytes::integrity::checksum8;
use crate::bytes::{conversions, ByteOrder};
use crate::error::{Result, SensorLinkError};

/// Bytes of overhead around the payload: head, cmd, 2-byte length, checksum
pub const FRAME_OVERHEAD: usize = 5;

/// Assemble a frame around `payload`
///
/// The length field is encoded in `order`. Fails with `InvalidArgument` when
/// the framed length would not fit the 16-bit length field.
pub fn pack(head: u8, cmd: u8, payload: &[u8], order: ByteOrder) -> Result<Vec<u8>> {
    let total = payload.len() + FRAME_OVERHEAD;
    if total > u16::MAX as usize {
        return Err(SensorLinkError::invalid_argument(format!(
            "payload of {} bytes exceeds the 16-bit frame length field",
            payload.len()
        )));
    }

    let mut frame = Vec::with_capacity(total);
    frame.push(head);
    frame.push(cmd);
    frame.extend_from_slice(&conversions::encode_i16(total as i16, order));
    frame.extend_from_slice(payload);
    frame.push(checksum8(&frame)?);

    debug!(
        "Packed frame head=0x{:02X} cmd=0x{:02X}: {}",
        head,
        cmd,
        hex::encode(&frame)
    );
    Ok(frame)
}

/// Validate a frame and return its payload slice
///
/// Checks total size against `expected_len`, then the head and command
/// bytes. The checksum trailer is not inspected here.
pub fn unpack(frame: &[u8], head: u8, cmd: u8, expected_len: usize) -> Result<&[u8]> {
    if frame.len() != expected_len || frame.len() < FRAME_OVERHEAD {
        return Err(SensorLinkError::FrameSize {
            expected: expected_len,
            actual: frame.len(),
        });
    }
    if frame[0] != head {
        return Err(SensorLinkError::FrameHead {
            expected: head,
            actual: frame[0],
        });
    }
    if frame[1] != cmd {
        return Err(SensorLinkError::FrameCmd {
            expected: cmd,
            actual: frame[1],
        });
    }
    debug!("Unpacked frame: {}", hex::encode(frame));
    Ok(&frame[4..frame.len() - 1])
}

/// Check a frame's checksum trailer against its body
pub fn verify(frame: &[u8]) -> bool {
    if frame.len() < FRAME_OVERHEAD {
        return false;
    }
    let (body, trailer) = frame.split_at(frame.len() - 1);
    checksum8(body).map(|cs| cs == trailer[0]).unwrap_or(false)
}
