//! Byte order representation and the process-wide default
//!
//! The sensor protocol is little-endian on the wire, but a few firmware
//! revisions emit big-endian fields, so the interpretation is configurable.
//! The default is a single process-wide cell replaced atomically; every codec
//! call that wants the implicit behavior reads it at call time.

use std::sync::atomic::{AtomicU8, Ordering};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Byte order for multi-byte numeric values
///
/// For 32-bit value `0x12345678`:
/// - `LittleEndian`: [0x78, 0x56, 0x34, 0x12]
/// - `BigEndian`: [0x12, 0x34, 0x56, 0x78]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ByteOrder {
    /// Little-endian: least significant byte first (sensor wire default)
    LittleEndian = 0,

    /// Big-endian: most significant byte first (network byte order)
    BigEndian = 1,
}

impl ByteOrder {
    /// Convert from common string spellings
    ///
    /// - "LE", "LITTLE_ENDIAN", "LITTLEENDIAN" → LittleEndian
    /// - "BE", "BIG_ENDIAN", "BIGENDIAN" → BigEndian
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        let normalized = s.to_uppercase().replace('-', "_");
        match normalized.as_str() {
            "LE" | "LITTLE_ENDIAN" | "LITTLEENDIAN" => Some(Self::LittleEndian),
            "BE" | "BIG_ENDIAN" | "BIGENDIAN" => Some(Self::BigEndian),
            _ => None,
        }
    }

    /// Get descriptive name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LittleEndian => "little-endian",
            Self::BigEndian => "big-endian",
        }
    }

    /// Check if this is the big-endian variant
    pub fn is_big_endian(&self) -> bool {
        matches!(self, Self::BigEndian)
    }

    fn from_repr(repr: u8) -> Self {
        match repr {
            1 => Self::BigEndian,
            _ => Self::LittleEndian,
        }
    }
}

impl std::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for ByteOrder {
    /// Default to little-endian (sensor wire order)
    fn default() -> Self {
        Self::LittleEndian
    }
}

/// Process-wide default byte order, little-endian at startup.
///
/// Single-word load/store only; readers observe either the value before or
/// after a concurrent write, never a torn one.
static BYTE_ORDER: AtomicU8 = AtomicU8::new(ByteOrder::LittleEndian as u8);

/// Current process-wide byte order
pub fn byte_order() -> ByteOrder {
    ByteOrder::from_repr(BYTE_ORDER.load(Ordering::Relaxed))
}

/// Replace the process-wide byte order
///
/// `None` is a no-op, so an unset config value can be passed through
/// unchecked: `set_byte_order(ByteOrder::from_str(&cfg.byte_order))`.
/// The new value is immediately visible to subsequent codec calls.
pub fn set_byte_order(order: Option<ByteOrder>) {
    if let Some(order) = order {
        BYTE_ORDER.store(order as u8, Ordering::Relaxed);
        debug!("Byte order changed to {}", order);
    }
}
