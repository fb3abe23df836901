//! Byte order handling for record streams
//!
//! Every multi-byte quantity in a record stream (markers, floats, doubles) is
//! interpreted as little-endian once normalized. A big-endian stream is
//! therefore handled by reversing each quantity before decoding (input side)
//! or after encoding (output side). The host's native byte order is never
//! consulted.

use serde::{Deserialize, Serialize};

/// Byte order of the multi-byte quantities in a record stream
///
/// # Naming Convention
/// Uses ABCD notation where A is the most significant byte:
/// - `Little (DCBA)`: 4-byte `0x12345678` is stored as `[0x78, 0x56, 0x34, 0x12]`
/// - `Big (ABCD)`: 4-byte `0x12345678` is stored as `[0x12, 0x34, 0x56, 0x78]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    /// Least significant byte first (x86, ARM little-endian producers)
    #[default]
    #[serde(alias = "le", alias = "dcba")]
    Little,

    /// Most significant byte first (classic workstation producers)
    #[serde(alias = "be", alias = "abcd")]
    Big,
}

impl ByteOrder {
    /// Parse a byte order name
    ///
    /// Accepts (case-insensitive, `-`/`_` ignored):
    /// - "little", "LE", "little_endian", "DCBA", "HGFEDCBA" → Little
    /// - "big", "BE", "big_endian", "ABCD", "ABCDEFGH" → Big
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        let normalized = s.to_uppercase().replace(['-', '_'], "");
        match normalized.as_str() {
            "LITTLE" | "LE" | "LITTLEENDIAN" | "DCBA" | "HGFEDCBA" => Some(Self::Little),
            "BIG" | "BE" | "BIGENDIAN" | "ABCD" | "ABCDEFGH" => Some(Self::Big),
            _ => None,
        }
    }

    /// Get descriptive name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Little => "DCBA (Little-Endian)",
            Self::Big => "ABCD (Big-Endian)",
        }
    }

    /// Whether quantities in this order must be reversed around decode/encode
    pub fn needs_swap(&self) -> bool {
        matches!(self, Self::Big)
    }

    /// Byte order implied by a swap flag
    pub fn from_swap(swap: bool) -> Self {
        if swap {
            Self::Big
        } else {
            Self::Little
        }
    }
}

impl std::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Byte-order normalization for one direction of a stream
///
/// When enabled, every 4-byte and 8-byte quantity is reversed; otherwise it is
/// copied unchanged. Applying the same normalization twice is the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ByteSwap {
    enabled: bool,
}

impl ByteSwap {
    /// Copy bytes unchanged
    pub const IDENTITY: Self = Self { enabled: false };

    /// Reverse bytes
    pub const REVERSE: Self = Self { enabled: true };

    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Normalize a 4-byte quantity
    pub fn normalize4(&self, src: [u8; 4]) -> [u8; 4] {
        if self.enabled {
            [src[3], src[2], src[1], src[0]]
        } else {
            src
        }
    }

    /// Normalize an 8-byte quantity
    pub fn normalize8(&self, src: [u8; 8]) -> [u8; 8] {
        if self.enabled {
            let mut out = src;
            out.reverse();
            out
        } else {
            src
        }
    }
}

impl From<ByteOrder> for ByteSwap {
    fn from(order: ByteOrder) -> Self {
        Self::new(order.needs_swap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_valid() {
        assert_eq!(ByteOrder::from_str("little"), Some(ByteOrder::Little));
        assert_eq!(ByteOrder::from_str("LE"), Some(ByteOrder::Little));
        assert_eq!(ByteOrder::from_str("little-endian"), Some(ByteOrder::Little));
        assert_eq!(ByteOrder::from_str("DC-BA"), Some(ByteOrder::Little));

        assert_eq!(ByteOrder::from_str("big"), Some(ByteOrder::Big));
        assert_eq!(ByteOrder::from_str("be"), Some(ByteOrder::Big));
        assert_eq!(ByteOrder::from_str("BIG_ENDIAN"), Some(ByteOrder::Big));
        assert_eq!(ByteOrder::from_str("ABCD"), Some(ByteOrder::Big));
    }

    #[test]
    fn test_from_str_invalid() {
        assert_eq!(ByteOrder::from_str("CDAB"), None);
        assert_eq!(ByteOrder::from_str("middle"), None);
        assert_eq!(ByteOrder::from_str(""), None);
    }

    #[test]
    fn test_swap_mapping() {
        assert!(ByteOrder::Big.needs_swap());
        assert!(!ByteOrder::Little.needs_swap());
        assert_eq!(ByteOrder::from_swap(true), ByteOrder::Big);
        assert_eq!(ByteOrder::from_swap(false), ByteOrder::Little);
        assert_eq!(ByteSwap::from(ByteOrder::Big), ByteSwap::REVERSE);
        assert_eq!(ByteSwap::from(ByteOrder::default()), ByteSwap::IDENTITY);
    }

    #[test]
    fn test_normalize4() {
        let src = [0x12, 0x34, 0x56, 0x78];
        assert_eq!(ByteSwap::REVERSE.normalize4(src), [0x78, 0x56, 0x34, 0x12]);
        assert_eq!(ByteSwap::IDENTITY.normalize4(src), src);
    }

    #[test]
    fn test_normalize8() {
        let src = [1, 2, 3, 4, 5, 6, 7, 8];
        assert_eq!(ByteSwap::REVERSE.normalize8(src), [8, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(ByteSwap::IDENTITY.normalize8(src), src);
    }

    #[test]
    fn test_normalize_is_involution() {
        let samples4 = [[0u8; 4], [0xFF, 0, 0xAA, 0x01], 1.5f32.to_be_bytes()];
        for src in samples4 {
            for swap in [ByteSwap::IDENTITY, ByteSwap::REVERSE] {
                assert_eq!(swap.normalize4(swap.normalize4(src)), src);
            }
        }

        let samples8 = [[0u8; 8], (-0.125f64).to_le_bytes(), u64::MAX.to_be_bytes()];
        for src in samples8 {
            for swap in [ByteSwap::IDENTITY, ByteSwap::REVERSE] {
                assert_eq!(swap.normalize8(swap.normalize8(src)), src);
            }
        }
    }
}
