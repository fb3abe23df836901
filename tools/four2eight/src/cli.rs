//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;
use four2eight_core::{ByteOrder, ReadPolicy};

use crate::config::CliOverrides;

#[derive(Parser, Debug)]
#[command(name = "four2eight")]
#[command(version)]
#[command(about = "Widen unformatted sequential f32 records to f64")]
#[command(long_about = "Widen unformatted sequential f32 records to f64

Each input record (4-byte length H, H bytes of f32, 4-byte length H) becomes
an output record with length 2H and f64 payload. One \"H > 2H\" line per
record is written to stderr.

Examples:
  four2eight < field.r4 > field.r8              # same byte order in and out
  four2eight --swap < field.r4 > field.r8       # big-endian in and out
  four2eight --input-order big -i a.r4 -o a.r8  # big-endian in, little out
  four2eight --permissive < damaged.r4 > out.r8 # zero-fill truncated records")]
pub struct Cli {
    /// Input file (default: stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file (TOML, YAML or JSON)
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Reverse byte order on both input and output
    #[arg(short, long)]
    pub swap: bool,

    /// Reverse byte order on input only
    #[arg(long)]
    pub swap_input: bool,

    /// Reverse byte order on output only
    #[arg(long)]
    pub swap_output: bool,

    /// Input byte order: little|big (overrides swap flags)
    #[arg(long, value_parser = parse_byte_order)]
    pub input_order: Option<ByteOrder>,

    /// Output byte order: little|big (overrides swap flags)
    #[arg(long, value_parser = parse_byte_order)]
    pub output_order: Option<ByteOrder>,

    /// Zero-fill truncated records instead of failing
    #[arg(long)]
    pub permissive: bool,

    /// Fail when a record trailer differs from its header
    #[arg(long)]
    pub verify_trailer: bool,

    /// Suppress per-record diagnostic lines
    #[arg(short, long)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error). Logs share stderr with
    /// the diagnostic lines, so only warnings and errors show by default
    #[arg(short = 'l', long, default_value = "warn", env = "RUST_LOG")]
    pub log_level: String,

    /// Disable colored log output
    #[arg(long)]
    pub no_color: bool,
}

fn parse_byte_order(s: &str) -> Result<ByteOrder, String> {
    ByteOrder::from_str(s).ok_or_else(|| format!("unknown byte order '{}' (use little or big)", s))
}

impl Cli {
    /// Settings given explicitly on the command line. Unset flags stay `None`
    /// so lower configuration layers show through.
    pub fn overrides(&self) -> CliOverrides {
        let flag = |set: bool| set.then_some(true);

        let swap_input = self
            .input_order
            .map(|order| order.needs_swap())
            .or(flag(self.swap_input || self.swap));
        let swap_output = self
            .output_order
            .map(|order| order.needs_swap())
            .or(flag(self.swap_output || self.swap));

        CliOverrides {
            swap_input,
            swap_output,
            read_policy: self.permissive.then_some(ReadPolicy::Permissive),
            verify_trailer: flag(self.verify_trailer),
            diagnostics: self.quiet.then_some(false),
        }
    }
}
