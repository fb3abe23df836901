//! Logging setup
//!
//! Logs go to stderr next to the per-record diagnostic lines, so stdout stays
//! a clean binary stream.

use anyhow::{anyhow, Context, Result};
use tracing::Level;
use tracing_subscriber::{
    fmt::{format::Writer, FmtContext, FormatEvent, FormatFields},
    registry::LookupSpan,
    EnvFilter,
};

/// Bracketed label and ANSI color code for a level
fn level_label(level: Level) -> (&'static str, &'static str) {
    match level {
        Level::TRACE => ("[TRACE]", "35"),
        Level::DEBUG => ("[DEBUG]", "34"),
        Level::INFO => ("[INFO]", "32"),
        Level::WARN => ("[WARN]", "33"),
        Level::ERROR => ("[ERROR]", "31"),
    }
}

/// Event formatter that outputs `[LEVEL] message`
///
/// The process is short-lived, so lines carry no timestamp.
struct LevelPrefixFormat;

impl<S, N> FormatEvent<S, N> for LevelPrefixFormat
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let (label, color) = level_label(*event.metadata().level());
        if writer.has_ansi_escapes() {
            write!(writer, "\x1b[{}m{}\x1b[0m ", color, label)?;
        } else {
            write!(writer, "{} ", label)?;
        }
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Install the global subscriber writing to stderr
///
/// `level` is an `EnvFilter` directive such as `info` or `four2eight_core=debug`.
pub fn init_logging(level: &str, ansi: bool) -> Result<()> {
    let filter =
        EnvFilter::try_new(level).with_context(|| format!("Invalid log level: {}", level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .event_format(LevelPrefixFormat)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_level_label() {
        assert_eq!(level_label(Level::INFO).0, "[INFO]");
        assert_eq!(level_label(Level::ERROR).0, "[ERROR]");
    }

    #[test]
    fn test_event_line_has_no_timestamp() {
        let buf = SharedBuf::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .event_format(LevelPrefixFormat)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!("Ignoring {} trailing bytes after record {}", 2, 1);
        });

        let logged = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert_eq!(logged, "[WARN] Ignoring 2 trailing bytes after record 1\n");
    }

    #[test]
    fn test_invalid_level_rejected() {
        assert!(init_logging("four2eight=verbose", false).is_err());
    }
}
