//! Record framing
//!
//! A record is a 4-byte length marker, that many bytes of payload, and a
//! trailing copy of the marker. The marker is a signed 32-bit byte count.

use crate::bytes::{bytes_to_i32, i32_to_bytes, ByteSwap};
use crate::error::{ConvertError, Result};

/// Size of a header or trailer marker
pub const MARKER_LEN: usize = 4;

/// Size of one input payload element (f32)
pub const FLOAT_LEN: usize = 4;

/// Size of one output payload element (f64)
pub const DOUBLE_LEN: usize = 8;

/// Part of a record being read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordSection {
    Header,
    Payload,
    Trailer,
}

impl RecordSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Payload => "payload",
            Self::Trailer => "trailer",
        }
    }
}

impl std::fmt::Display for RecordSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Header/trailer length marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordMarker {
    length: i32,
}

impl RecordMarker {
    pub const fn new(length: i32) -> Self {
        Self { length }
    }

    /// Payload byte length declared by the marker
    pub const fn length(&self) -> i32 {
        self.length
    }

    pub fn decode(raw: &[u8; MARKER_LEN], swap: ByteSwap) -> Self {
        Self::new(bytes_to_i32(raw, swap))
    }

    pub fn encode(&self, swap: ByteSwap) -> [u8; MARKER_LEN] {
        i32_to_bytes(self.length, swap)
    }

    /// Check that the marker frames a whole number of f32 elements
    pub fn validate(&self, record: u64) -> Result<()> {
        if self.length < 0 {
            return Err(ConvertError::malformed(record, self.length, "is negative"));
        }
        if self.length as usize % FLOAT_LEN != 0 {
            return Err(ConvertError::malformed(
                record,
                self.length,
                format!("is not a multiple of {}", FLOAT_LEN),
            ));
        }
        Ok(())
    }

    /// Number of f32 elements in the payload
    pub fn element_count(&self) -> usize {
        self.length.max(0) as usize / FLOAT_LEN
    }

    /// Marker for the converted record (payload doubles in size)
    pub fn widened(&self, record: u64) -> Result<Self> {
        let factor = (DOUBLE_LEN / FLOAT_LEN) as i32;
        self.length
            .checked_mul(factor)
            .map(Self::new)
            .ok_or_else(|| {
                ConvertError::malformed(
                    record,
                    self.length,
                    "overflows a 32-bit marker when widened",
                )
            })
    }
}

impl std::fmt::Display for RecordMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.length)
    }
}
