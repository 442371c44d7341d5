//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use raiz_api::StemEntry;
use std::io::Write;

/// JSON formatter - outputs `{word, stem}` objects as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    entries: Vec<StemEntry>,
    pretty: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new pretty-printing JSON formatter
    pub fn new(writer: W) -> Self {
        Self::with_pretty(writer, true)
    }

    /// Create a JSON formatter, compact when `pretty` is false
    pub fn with_pretty(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            entries: Vec::new(),
            pretty,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_entry(&mut self, word: &str, stem: &str) -> Result<()> {
        self.entries.push(StemEntry::new(word, stem));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.entries)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.entries)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
