//! Sensor Link Byte Layer
//!
//! Byte codec and integrity-check utilities for vibration sensor telemetry.
//!
//! # Architecture
//!
//! - **Bytes Utilities**: byte order handling, numeric conversions,
//!   CRC32/checksum, hex and bit text encodings ([`bytes`])
//! - **Frame Layer**: minimal `[head, cmd, len, payload, checksum]` frame
//!   assembly ([`frame`])
//! - **Processing Seam**: trait boundary to the external vibration DSP
//!   library ([`vib`])
//!
//! All operations are pure and lock-free; the only shared state is the
//! process-wide default [`ByteOrder`], replaced atomically.

pub mod bytes;
pub mod error;
pub mod frame;
pub mod vib;

// Re-export core types
pub use bytes::byte_order::{byte_order, set_byte_order};
pub use bytes::ByteOrder;
pub use error::{Result, SensorLinkError};
