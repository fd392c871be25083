//! Sensor Link Error Types
//!
//! Core error types for the byte codec and frame layer.

use thiserror::Error;

/// Result type for sensorlink operations
pub type Result<T> = std::result::Result<T, SensorLinkError>;

/// Byte codec and frame errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SensorLinkError {
    /// Structurally invalid input (empty buffer, malformed hex/bit string)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Decode window exceeds the input buffer
    #[error("Out of range: offset {offset} + width {width} exceeds buffer length {len}")]
    OutOfRange {
        offset: usize,
        width: usize,
        len: usize,
    },

    /// Reserved for future width/type extensions
    #[error("Not supported: {0}")]
    NotSupported(String),

    /// Frame is not the expected total size
    #[error("Frame size mismatch: expected {expected}, got {actual}")]
    FrameSize { expected: usize, actual: usize },

    /// Frame head byte does not match
    #[error("Frame head mismatch: expected 0x{expected:02X}, got 0x{actual:02X}")]
    FrameHead { expected: u8, actual: u8 },

    /// Frame command byte does not match
    #[error("Frame command mismatch: expected 0x{expected:02X}, got 0x{actual:02X}")]
    FrameCmd { expected: u8, actual: u8 },
}

// Helper methods for creating errors
impl SensorLinkError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        SensorLinkError::InvalidArgument(msg.into())
    }

    pub fn not_supported(msg: impl Into<String>) -> Self {
        SensorLinkError::NotSupported(msg.into())
    }

    pub fn out_of_range(offset: usize, width: usize, len: usize) -> Self {
        SensorLinkError::OutOfRange { offset, width, len }
    }
}

impl From<hex::FromHexError> for SensorLinkError {
    fn from(err: hex::FromHexError) -> Self {
        SensorLinkError::InvalidArgument(format!("invalid hex string: {}", err))
    }
}
