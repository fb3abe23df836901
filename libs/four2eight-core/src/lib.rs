//! four2eight-core - f32 to f64 record stream conversion
//!
//! Converts unformatted sequential record streams (length marker, payload,
//! repeated length marker) whose payload is 4-byte floats into the same
//! framing with 8-byte doubles.
//!
//! # Architecture
//!
//! - **Bytes**: byte order normalization and numeric decode/encode
//! - **Record**: header/trailer marker framing
//! - **Converter**: the streaming record-by-record transform
//!
//! # Example
//!
//! ```rust
//! use four2eight_core::{ConverterConfig, RecordConverter};
//!
//! // One record: header 8, payload [1.0, -2.5], trailer 8
//! let mut input = Vec::new();
//! input.extend_from_slice(&8i32.to_le_bytes());
//! input.extend_from_slice(&1.0f32.to_le_bytes());
//! input.extend_from_slice(&(-2.5f32).to_le_bytes());
//! input.extend_from_slice(&8i32.to_le_bytes());
//!
//! let converter = RecordConverter::new(ConverterConfig::default());
//! let mut output = Vec::new();
//! let mut diagnostics = Vec::new();
//! let summary = converter
//!     .convert(input.as_slice(), &mut output, &mut diagnostics)
//!     .unwrap();
//!
//! assert_eq!(summary.records, 1);
//! assert_eq!(&output[..4], &16i32.to_le_bytes());
//! assert_eq!(&output[4..12], &1.0f64.to_le_bytes());
//! assert_eq!(diagnostics, b"8 > 16\n\n");
//! ```

pub mod bytes;
pub mod config;
pub mod converter;
pub mod error;
pub mod record;

// Re-export core types
pub use bytes::{ByteOrder, ByteSwap};
pub use config::{ConverterConfig, ReadPolicy};
pub use converter::{convert, ConversionSummary, RecordConverter};
pub use error::{ConvertError, Result};
pub use record::{RecordMarker, RecordSection};
