//! Numeric decode/encode for record stream quantities
//!
//! Raw byte arrays are normalized with a [`ByteSwap`] and then interpreted as
//! little-endian IEEE-754 or two's complement values. These functions are the
//! only place where stream bytes turn into numbers and back.

use super::ByteSwap;

// ============================================================================
// Markers (signed 32-bit)
// ============================================================================

/// Decode 4 stream bytes as a signed 32-bit integer
pub fn bytes_to_i32(bytes: &[u8; 4], swap: ByteSwap) -> i32 {
    i32::from_le_bytes(swap.normalize4(*bytes))
}

/// Encode a signed 32-bit integer as 4 stream bytes
pub fn i32_to_bytes(value: i32, swap: ByteSwap) -> [u8; 4] {
    swap.normalize4(value.to_le_bytes())
}

// ============================================================================
// Floating point
// ============================================================================

/// Decode 4 stream bytes as an f32
pub fn bytes_to_f32(bytes: &[u8; 4], swap: ByteSwap) -> f32 {
    f32::from_le_bytes(swap.normalize4(*bytes))
}

/// Encode an f64 as 8 stream bytes
pub fn f64_to_bytes(value: f64, swap: ByteSwap) -> [u8; 8] {
    swap.normalize8(value.to_le_bytes())
}

/// Widen an f32 to f64. Exact for every finite value and infinity.
#[inline]
pub fn widen(value: f32) -> f64 {
    f64::from(value)
}

/// Convert one 4-byte payload element into its 8-byte output form
pub fn widen_element(bytes: &[u8; 4], input: ByteSwap, output: ByteSwap) -> [u8; 8] {
    f64_to_bytes(widen(bytes_to_f32(bytes, input)), output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_to_i32_both_orders() {
        assert_eq!(bytes_to_i32(&[0x08, 0, 0, 0], ByteSwap::IDENTITY), 8);
        assert_eq!(bytes_to_i32(&[0, 0, 0, 0x08], ByteSwap::REVERSE), 8);
        assert_eq!(
            bytes_to_i32(&[0x78, 0x56, 0x34, 0x12], ByteSwap::IDENTITY),
            0x12345678
        );
        assert_eq!(bytes_to_i32(&[0xFF; 4], ByteSwap::REVERSE), -1);
    }

    #[test]
    fn test_i32_to_bytes_both_orders() {
        assert_eq!(i32_to_bytes(16, ByteSwap::IDENTITY), [0x10, 0, 0, 0]);
        assert_eq!(i32_to_bytes(16, ByteSwap::REVERSE), [0, 0, 0, 0x10]);
    }

    #[test]
    fn test_bytes_to_f32() {
        // 25.0 in IEEE 754: 0x41C80000
        assert_eq!(bytes_to_f32(&[0x41, 0xC8, 0, 0], ByteSwap::REVERSE), 25.0);
        assert_eq!(bytes_to_f32(&[0, 0, 0xC8, 0x41], ByteSwap::IDENTITY), 25.0);
    }

    #[test]
    fn test_f64_to_bytes() {
        assert_eq!(
            f64_to_bytes(1.0, ByteSwap::REVERSE),
            [0x3F, 0xF0, 0, 0, 0, 0, 0, 0]
        );
        assert_eq!(
            f64_to_bytes(1.0, ByteSwap::IDENTITY),
            [0, 0, 0, 0, 0, 0, 0xF0, 0x3F]
        );
    }

    #[test]
    fn test_widen_is_exact() {
        let values = [
            0.0f32,
            -0.0,
            1.0,
            -2.5,
            0.1,
            f32::MIN_POSITIVE,
            f32::MAX,
            f32::MIN,
            f32::EPSILON,
            f32::from_bits(1), // smallest subnormal
            f32::INFINITY,
            f32::NEG_INFINITY,
        ];

        for value in values {
            let wide = widen(value);
            assert_eq!(wide as f32, value, "narrowing back failed for {}", value);
            assert_eq!(wide.is_sign_negative(), value.is_sign_negative());
        }

        // 0.1f32 is not 0.1f64: widening keeps the single-precision value
        assert_eq!(widen(0.1), 0.100_000_001_490_116_12);
        assert!(widen(f32::NAN).is_nan());
    }

    #[test]
    fn test_widen_element_mixed_orders() {
        let big = (-2.5f32).to_be_bytes();
        let out = widen_element(&big, ByteSwap::REVERSE, ByteSwap::IDENTITY);
        assert_eq!(out, (-2.5f64).to_le_bytes());

        let little = 1.0f32.to_le_bytes();
        let out = widen_element(&little, ByteSwap::IDENTITY, ByteSwap::REVERSE);
        assert_eq!(out, 1.0f64.to_be_bytes());
    }
}
