//! Record converter
//!
//! Streams length-framed f32 records from a reader to a writer, widening each
//! payload element to f64 and doubling the header and trailer markers. One
//! element is held in memory at a time.

use std::io::{self, Read, Write};

use tracing::{debug, trace, warn};

use crate::bytes::{widen_element, ByteSwap};
use crate::config::{ConverterConfig, ReadPolicy};
use crate::error::{ConvertError, Result};
use crate::record::{RecordMarker, RecordSection, DOUBLE_LEN, FLOAT_LEN, MARKER_LEN};

/// Counters for a finished conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Records converted
    pub records: u64,
    /// Payload elements widened
    pub values: u64,
    /// Bytes consumed from the input
    pub bytes_read: u64,
    /// Bytes produced on the output
    pub bytes_written: u64,
}

/// Converts f32 record streams to f64 record streams
#[derive(Debug, Clone)]
pub struct RecordConverter {
    config: ConverterConfig,
    input_swap: ByteSwap,
    output_swap: ByteSwap,
}

impl RecordConverter {
    pub fn new(config: ConverterConfig) -> Self {
        let input_swap = config.input_swap();
        let output_swap = config.output_swap();
        Self {
            config,
            input_swap,
            output_swap,
        }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Convert every record in `input`, writing converted records to `output`
    /// and one `"H > H'"` line per record to `diagnostics`.
    ///
    /// Stops cleanly when the input ends on a record boundary. The closing
    /// newline is written to `diagnostics` however the record loop ends, so a
    /// failed run still leaves a complete diagnostic listing. Both writers are
    /// flushed before returning.
    pub fn convert<R, W, D>(
        &self,
        mut input: R,
        mut output: W,
        mut diagnostics: D,
    ) -> Result<ConversionSummary>
    where
        R: Read,
        W: Write,
        D: Write,
    {
        let mut summary = ConversionSummary::default();
        let outcome =
            self.convert_records(&mut input, &mut output, &mut diagnostics, &mut summary);

        let closing = if self.config.diagnostics {
            diagnostics.write_all(b"\n")
        } else {
            Ok(())
        };

        if let Err(err) = outcome {
            // The record error is what gets reported; later write failures are dropped
            let _ = output.flush();
            let _ = diagnostics.flush();
            return Err(err);
        }
        closing?;
        output.flush()?;
        diagnostics.flush()?;

        debug!(
            records = summary.records,
            values = summary.values,
            bytes_read = summary.bytes_read,
            bytes_written = summary.bytes_written,
            "Conversion finished"
        );
        Ok(summary)
    }

    fn convert_records<R, W, D>(
        &self,
        input: &mut R,
        output: &mut W,
        diagnostics: &mut D,
        summary: &mut ConversionSummary,
    ) -> Result<()>
    where
        R: Read,
        W: Write,
        D: Write,
    {
        loop {
            let record = summary.records + 1;
            let mut raw_header = [0u8; MARKER_LEN];
            let n = read_full(input, &mut raw_header)?;
            summary.bytes_read += n as u64;

            if n == 0 {
                return Ok(());
            }
            if n < MARKER_LEN {
                return match self.config.read_policy {
                    ReadPolicy::Strict => Err(ConvertError::truncated(
                        record,
                        RecordSection::Header,
                        MARKER_LEN,
                        n,
                    )),
                    ReadPolicy::Permissive => {
                        warn!(
                            "Ignoring {} trailing bytes after record {}",
                            n, summary.records
                        );
                        Ok(())
                    },
                };
            }

            self.convert_record(record, &raw_header, input, output, diagnostics, summary)?;
            summary.records += 1;
        }
    }

    fn convert_record<R, W, D>(
        &self,
        record: u64,
        raw_header: &[u8; MARKER_LEN],
        input: &mut R,
        output: &mut W,
        diagnostics: &mut D,
        summary: &mut ConversionSummary,
    ) -> Result<()>
    where
        R: Read,
        W: Write,
        D: Write,
    {
        let header = RecordMarker::decode(raw_header, self.input_swap);
        header.validate(record)?;
        let widened = header.widened(record)?;

        if self.config.diagnostics {
            writeln!(diagnostics, "{} > {}", header, widened)?;
        }
        debug!(
            record,
            length = header.length(),
            widened = widened.length(),
            "Converting record"
        );

        let out_marker = widened.encode(self.output_swap);
        output.write_all(&out_marker)?;
        summary.bytes_written += MARKER_LEN as u64;

        let count = header.element_count();
        let mut zero_filled = 0usize;
        for index in 0..count {
            let mut element = [0u8; FLOAT_LEN];
            if !self.read_section(input, &mut element, record, RecordSection::Payload, summary)? {
                zero_filled += 1;
            }
            trace!(record, index, raw = ?element, "Widening element");
            output.write_all(&widen_element(&element, self.input_swap, self.output_swap))?;
            summary.values += 1;
            summary.bytes_written += DOUBLE_LEN as u64;
        }
        if zero_filled > 0 {
            warn!(
                "Record {}: input ended inside payload, zero-filled {} of {} elements",
                record, zero_filled, count
            );
        }

        let mut raw_trailer = [0u8; MARKER_LEN];
        if !self.read_section(input, &mut raw_trailer, record, RecordSection::Trailer, summary)? {
            warn!("Record {}: input ended inside trailer", record);
        } else if self.config.verify_trailer && raw_trailer != *raw_header {
            return Err(ConvertError::TrailerMismatch {
                record,
                header: header.length(),
                trailer: RecordMarker::decode(&raw_trailer, self.input_swap).length(),
            });
        }

        output.write_all(&out_marker)?;
        summary.bytes_written += MARKER_LEN as u64;
        Ok(())
    }

    /// Fill `buf` from the input. Returns `false` when the permissive policy
    /// had to zero-fill a short read.
    fn read_section<R: Read>(
        &self,
        input: &mut R,
        buf: &mut [u8],
        record: u64,
        section: RecordSection,
        summary: &mut ConversionSummary,
    ) -> Result<bool> {
        let n = read_full(input, buf)?;
        summary.bytes_read += n as u64;
        if n == buf.len() {
            return Ok(true);
        }

        match self.config.read_policy {
            ReadPolicy::Strict => Err(ConvertError::truncated(record, section, buf.len(), n)),
            ReadPolicy::Permissive => {
                buf[n..].fill(0);
                Ok(false)
            },
        }
    }
}

/// Convert a whole stream with the given configuration
pub fn convert<R, W, D>(
    config: &ConverterConfig,
    input: R,
    output: W,
    diagnostics: D,
) -> Result<ConversionSummary>
where
    R: Read,
    W: Write,
    D: Write,
{
    RecordConverter::new(config.clone()).convert(input, output, diagnostics)
}

/// Read until `buf` is full or the reader reports end of stream
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
