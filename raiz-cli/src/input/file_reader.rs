//! File reading utilities

use anyhow::{Context, Result};
use raiz_api::decode_text;
use std::fs;
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

        decode_text(bytes)
            .with_context(|| format!("Failed to decode file: {}", path.display()))
    }

    /// Read a file as a list of lines, trailing newline not counted
    pub fn read_lines(path: &Path) -> Result<Vec<String>> {
        let content = Self::read_text(path)?;
        Ok(content.lines().map(str::to_string).collect())
    }

    /// Get file size in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }
}
