// Input aggregation - merges typed log text and uploaded file buffers
// into one corpus for analysis

use crate::errors::{Error, Result};

/// The combined text submitted for analysis: the typed segment first, then
/// each uploaded file's contents in upload order, blank-line separated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogCorpus(String);

impl LogCorpus {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Merge typed text and uploaded buffers into a [`LogCorpus`].
///
/// Buffers are decoded as UTF-8 lossily (invalid sequences become U+FFFD
/// rather than rejecting the upload). Empty pieces are skipped. Fails with
/// [`Error::EmptyInput`] when nothing but whitespace remains.
///
/// Pure transformation: no I/O, no external state.
pub fn aggregate(typed: Option<&str>, files: &[Vec<u8>]) -> Result<LogCorpus> {
    let mut pieces: Vec<String> = Vec::with_capacity(1 + files.len());

    if let Some(text) = typed {
        if !text.is_empty() {
            pieces.push(text.to_string());
        }
    }

    for buffer in files {
        let decoded = String::from_utf8_lossy(buffer);
        if !decoded.is_empty() {
            pieces.push(decoded.into_owned());
        }
    }

    let combined = pieces.join("\n\n");
    if combined.trim().is_empty() {
        return Err(Error::EmptyInput);
    }

    Ok(LogCorpus(combined))
}
