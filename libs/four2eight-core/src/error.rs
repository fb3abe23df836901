//! Conversion Error Types
//!
//! Record numbers in error values are 1-based positions in the input stream.

use crate::record::RecordSection;
use thiserror::Error;

/// Result type for four2eight-core operations
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Record conversion errors
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input ended inside a record
    #[error("Truncated record {record}: {section} needs {expected} bytes, got {actual}")]
    TruncatedRecord {
        record: u64,
        section: RecordSection,
        expected: usize,
        actual: usize,
    },

    /// Header length cannot frame a record of floats
    #[error("Malformed record {record}: header length {length} {reason}")]
    MalformedRecord {
        record: u64,
        length: i32,
        reason: String,
    },

    /// Trailer does not repeat the header
    #[error("Trailer mismatch in record {record}: header {header}, trailer {trailer}")]
    TrailerMismatch {
        record: u64,
        header: i32,
        trailer: i32,
    },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

// Helper methods for creating errors
impl ConvertError {
    pub fn truncated(record: u64, section: RecordSection, expected: usize, actual: usize) -> Self {
        ConvertError::TruncatedRecord {
            record,
            section,
            expected,
            actual,
        }
    }

    pub fn malformed(record: u64, length: i32, reason: impl Into<String>) -> Self {
        ConvertError::MalformedRecord {
            record,
            length,
            reason: reason.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        ConvertError::Config(msg.into())
    }

    /// Check if this error was caused by input ending mid-record
    pub fn is_truncation(&self) -> bool {
        matches!(self, ConvertError::TruncatedRecord { .. })
    }

    /// Record number the error refers to, if any
    pub fn record(&self) -> Option<u64> {
        match self {
            ConvertError::TruncatedRecord { record, .. }
            | ConvertError::MalformedRecord { record, .. }
            | ConvertError::TrailerMismatch { record, .. } => Some(*record),
            ConvertError::Io(_) | ConvertError::Config(_) => None,
        }
    }
}
