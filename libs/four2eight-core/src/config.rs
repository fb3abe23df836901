//! Converter configuration

use crate::bytes::{ByteOrder, ByteSwap};
use serde::{Deserialize, Serialize};

/// How short reads inside a record are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadPolicy {
    /// Fail with `TruncatedRecord` on any short header, payload or trailer read
    #[default]
    Strict,

    /// Legacy tolerance: a partial header ends the stream, short payload and
    /// trailer reads are zero-filled and conversion continues
    Permissive,
}

impl ReadPolicy {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "strict" => Some(Self::Strict),
            "permissive" | "legacy" => Some(Self::Permissive),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Permissive => "permissive",
        }
    }
}

impl std::fmt::Display for ReadPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Record converter settings, fixed for the lifetime of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Reverse byte order of markers and floats read from the input
    pub swap_input: bool,
    /// Reverse byte order of markers and doubles written to the output
    pub swap_output: bool,
    /// Short-read handling
    pub read_policy: ReadPolicy,
    /// Compare each input trailer against its header
    pub verify_trailer: bool,
    /// Emit one `"H > H'"` line per record on the diagnostic stream
    pub diagnostics: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            swap_input: false,
            swap_output: false,
            read_policy: ReadPolicy::Strict,
            verify_trailer: false,
            diagnostics: true,
        }
    }
}

impl ConverterConfig {
    /// Single swap flag applied to both directions
    pub fn with_swap(swap: bool) -> Self {
        Self {
            swap_input: swap,
            swap_output: swap,
            ..Self::default()
        }
    }

    pub fn with_input_order(mut self, order: ByteOrder) -> Self {
        self.swap_input = order.needs_swap();
        self
    }

    pub fn with_output_order(mut self, order: ByteOrder) -> Self {
        self.swap_output = order.needs_swap();
        self
    }

    pub fn with_read_policy(mut self, policy: ReadPolicy) -> Self {
        self.read_policy = policy;
        self
    }

    pub fn with_trailer_check(mut self, verify: bool) -> Self {
        self.verify_trailer = verify;
        self
    }

    pub fn with_diagnostics(mut self, enabled: bool) -> Self {
        self.diagnostics = enabled;
        self
    }

    pub fn input_swap(&self) -> ByteSwap {
        ByteSwap::new(self.swap_input)
    }

    pub fn output_swap(&self) -> ByteSwap {
        ByteSwap::new(self.swap_output)
    }

    pub fn input_order(&self) -> ByteOrder {
        ByteOrder::from_swap(self.swap_input)
    }

    pub fn output_order(&self) -> ByteOrder {
        ByteOrder::from_swap(self.swap_output)
    }
}
