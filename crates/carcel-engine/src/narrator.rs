//! Narration sink that renders the run onto a byte stream.
//!
//! Text mode prints one human-readable line per event with a blank line
//! before each section heading. JSON mode prints one object per event
//! (JSON lines). The first write failure is kept and every later line is
//! dropped; [`StreamNarrator::finish`] reports it.

use std::io::Write;

use carcel_core::NarrationFormat;
use carcel_rules::Narrator;
use carcel_types::Narration;
use tracing::warn;

use crate::error::EngineError;

/// Writes narration lines to any [`Write`] target.
pub struct StreamNarrator<W: Write> {
    out: W,
    format: NarrationFormat,
    lines: usize,
    failure: Option<EngineError>,
}

impl<W: Write> StreamNarrator<W> {
    /// Create a narrator rendering in `format` onto `out`.
    pub const fn new(out: W, format: NarrationFormat) -> Self {
        Self {
            out,
            format,
            lines: 0,
            failure: None,
        }
    }

    /// Number of lines written successfully.
    pub const fn lines(&self) -> usize {
        self.lines
    }

    /// Flush the stream and report the first failure, if any.
    ///
    /// # Errors
    ///
    /// Returns the first [`EngineError`] raised while writing, or the flush
    /// error.
    pub fn finish(mut self) -> Result<W, EngineError> {
        if let Some(failure) = self.failure.take() {
            return Err(failure);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_line(&mut self, line: &Narration) -> Result<(), EngineError> {
        match self.format {
            NarrationFormat::Text => {
                if line.is_heading() && self.lines > 0 {
                    writeln!(self.out)?;
                }
                writeln!(self.out, "{line}")?;
            }
            NarrationFormat::Json => {
                let encoded = serde_json::to_string(line)?;
                writeln!(self.out, "{encoded}")?;
            }
        }
        Ok(())
    }
}

impl<W: Write> Narrator for StreamNarrator<W> {
    fn narrate(&mut self, line: Narration) {
        if self.failure.is_some() {
            return;
        }
        match self.write_line(&line) {
            Ok(()) => self.lines = self.lines.saturating_add(1),
            Err(e) => {
                warn!(error = %e, "Narration output failed; dropping the rest");
                self.failure = Some(e);
            }
        }
    }
}
