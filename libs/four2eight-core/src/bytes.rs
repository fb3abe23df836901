//! Binary data processing utilities
//!
//! Byte order normalization and numeric decode/encode for record streams.

pub mod byte_order;
pub mod conversions;

pub use byte_order::{ByteOrder, ByteSwap};
pub use conversions::*;
