//! Binary data processing utilities
//!
//! Provides byte order handling, numeric type conversions, integrity checks
//! (CRC32 and additive checksum), and textual encodings (hex and bit strings)
//! for sensor telemetry frames.
//!
//! # Design Principles
//!
//! - **Protocol-agnostic**: No command- or device-specific logic
//! - **Type-safe**: `ByteOrder` enum prevents string typos
//! - **Explicit failures**: short buffers and malformed strings are errors,
//!   never silently decoded as zero

pub mod byte_order;
pub mod conversions;
pub mod integrity;
pub mod text;

pub use byte_order::ByteOrder;
pub use conversions::*;
pub use integrity::*;
pub use text::*;
