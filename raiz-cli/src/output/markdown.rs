//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs a word/stem table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    word_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            word_count: 0,
        }
    }

    fn write_header(&mut self) -> Result<()> {
        writeln!(self.writer, "| Word | Stem |")?;
        writeln!(self.writer, "|------|------|")?;
        Ok(())
    }
}

/// Escape characters that would break a table cell
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_entry(&mut self, word: &str, stem: &str) -> Result<()> {
        if self.word_count == 0 {
            self.write_header()?;
        }
        self.word_count += 1;
        writeln!(
            self.writer,
            "| {} | {} |",
            escape_cell(word),
            escape_cell(stem)
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.word_count == 0 {
            self.write_header()?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total words: {}*", self.word_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
