//! four2eight - widen unformatted sequential f32 records to f64
//!
//! Reads length-framed records from stdin (or `--input`), writes converted
//! records to stdout (or `--output`) and reports each record's old and new
//! length on stderr.

mod cli;
mod config;
mod logging;

use std::fs::File;
use std::io::{self, BufReader, BufWriter, IsTerminal, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use four2eight_core::{ConversionSummary, ConvertError, RecordConverter};
use tracing::{debug, info};

use crate::cli::Cli;

fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input {}", path.display()))?;
            Ok(Box::new(file))
        },
        None => Ok(Box::new(io::stdin().lock())),
    }
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output {}", path.display()))?;
            Ok(Box::new(file))
        },
        None => Ok(Box::new(io::stdout().lock())),
    }
}

fn run(cli: &Cli) -> Result<ConversionSummary> {
    let config = config::load_config(cli.config.as_deref(), &cli.overrides())?;
    debug!(
        input_order = %config.input_order(),
        output_order = %config.output_order(),
        read_policy = %config.read_policy,
        verify_trailer = config.verify_trailer,
        "Converter configured"
    );

    let input = BufReader::new(open_input(cli.input.as_deref())?);
    let output = BufWriter::new(open_output(cli.output.as_deref())?);

    let converter = RecordConverter::new(config);
    converter
        .convert(input, output, io::stderr())
        .map_err(|err: ConvertError| {
            let hint = if err.is_truncation() {
                "Input ended inside a record (rerun with --permissive to zero-fill)"
            } else {
                "Conversion failed"
            };
            anyhow::Error::new(err).context(hint)
        })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let ansi = !cli.no_color && io::stderr().is_terminal();
    logging::init_logging(&cli.log_level, ansi)?;

    let summary = run(&cli)?;
    info!(
        "Converted {} records ({} values, {} -> {} bytes)",
        summary.records, summary.values, summary.bytes_read, summary.bytes_written
    );
    Ok(())
}
