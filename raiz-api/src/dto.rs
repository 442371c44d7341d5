//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use raiz_core::CoreError;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Input source for processing
///
/// Text sources are vocabularies: one word per line.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Raw text string
    Text(String),
    /// File path
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader (not serializable)
    #[cfg_attr(feature = "serde", serde(skip))]
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the text content from the input
    ///
    /// Bytes from any source that are not UTF-8 fail with
    /// [`CoreError::InvalidInput`] carrying the offending byte offset.
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => decode_text(fs::read(&path)?),
            Input::Bytes(bytes) => decode_text(bytes),
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer)?;
                decode_text(buffer)
            }
        }
    }
}

/// Decode raw bytes as UTF-8 text
pub fn decode_text(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| ApiError::Core(CoreError::from(e.utf8_error())))
}

/// One input word paired with its stem
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StemEntry {
    /// The word as read (trimmed)
    pub word: String,
    /// Its stem
    pub stem: String,
}

impl StemEntry {
    /// Create a new entry
    pub fn new(word: impl Into<String>, stem: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            stem: stem.into(),
        }
    }
}

/// Processing metadata with runtime statistics
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Number of entries produced
    pub total_words: usize,
    /// Total bytes read
    pub total_bytes: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Throughput in words per second
    pub throughput_wps: f64,
    /// Execution mode used
    pub mode_used: String,
    /// Number of threads used
    pub thread_count: usize,
}

impl Metadata {
    /// Create new metadata
    pub fn new(
        total_words: usize,
        total_bytes: usize,
        processing_time_ms: u64,
        mode_used: String,
        thread_count: usize,
    ) -> Self {
        let throughput_wps = if processing_time_ms > 0 {
            total_words as f64 / (processing_time_ms as f64 / 1000.0)
        } else {
            0.0
        };

        Self {
            total_words,
            total_bytes,
            processing_time_ms,
            throughput_wps,
            mode_used,
            thread_count,
        }
    }
}

/// Complete output with stems and metadata
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// One entry per input word, in input order
    pub entries: Vec<StemEntry>,
    /// Processing metadata
    pub metadata: Metadata,
}

impl Output {
    /// Iterate over the stems in input order
    pub fn stems(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.stem.as_str())
    }

    /// Serialize the entries as a JSON array
    #[cfg(feature = "serde")]
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(&self.entries)?
        } else {
            serde_json::to_string(&self.entries)?
        };
        Ok(json)
    }
}
