//! Groups log lines into blank-line delimited records.

use crate::tail::{RawLine, TailError};

use super::ACCOUNTS_STARTUP_TAG;

const ACCOUNT_LOGIN_SENTENCE: &str = "Successfully logged in to account:";

/// Whether `text` is the client's standalone account login line.
///
/// The line carries no body and need not be followed by a blank line, so it
/// is framed on its own.
#[must_use]
pub fn is_account_login(text: &str) -> bool {
    text.trim()
        .strip_prefix(ACCOUNTS_STARTUP_TAG)
        .is_some_and(|rest| rest.trim_start().starts_with(ACCOUNT_LOGIN_SENTENCE))
}

/// An ordered run of trimmed, non-empty lines.
///
/// Never empty and never contains a blank line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    lines: Vec<String>,
    offset: Option<u64>,
}

impl RawRecord {
    /// Build a record from arbitrary lines.
    ///
    /// Lines are trimmed and blank lines dropped. Returns `None` if nothing
    /// is left.
    pub fn from_lines<I, S>(lines: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<String> = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        if lines.is_empty() {
            None
        } else {
            Some(Self {
                lines,
                offset: None,
            })
        }
    }

    /// The first line of the record.
    #[must_use]
    pub fn header(&self) -> &str {
        &self.lines[0]
    }

    /// All lines after the header.
    #[must_use]
    pub fn body(&self) -> &[String] {
        &self.lines[1..]
    }

    /// All lines, header included.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines in the record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always false; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Byte offset of the header line, when the record came from a file.
    #[must_use]
    pub fn offset(&self) -> Option<u64> {
        self.offset
    }

    /// Consume the record, returning its lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

/// Accumulates lines until a blank line closes the record.
///
/// A buffer holding a single line when the blank line arrives is discarded:
/// a meaningful record needs a header and at least one body line. The
/// account login line is the exception: it becomes a record of its own at
/// once and never enters the buffer.
#[derive(Debug, Default)]
pub struct RecordAssembler {
    buffer: Vec<String>,
    start_offset: Option<u64>,
}

impl RecordAssembler {
    /// Create an empty assembler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one tailed line, returning a record if it closed one.
    pub fn push(&mut self, line: &RawLine) -> Option<RawRecord> {
        self.push_at(&line.text, Some(line.offset))
    }

    /// Feed one line of text with no file position.
    pub fn push_text(&mut self, text: &str) -> Option<RawRecord> {
        self.push_at(text, None)
    }

    fn push_at(&mut self, text: &str, offset: Option<u64>) -> Option<RawRecord> {
        let text = text.trim();
        if is_account_login(text) {
            return Some(RawRecord {
                lines: vec![text.to_string()],
                offset,
            });
        }
        if !text.is_empty() {
            if self.buffer.is_empty() {
                self.start_offset = offset;
            }
            self.buffer.push(text.to_string());
            return None;
        }

        let lines = std::mem::take(&mut self.buffer);
        let offset = self.start_offset.take();
        match lines.len() {
            0 => None,
            1 => {
                tracing::trace!(line = %lines[0], "Discarding single-line record");
                None
            }
            _ => Some(RawRecord { lines, offset }),
        }
    }

    /// Number of lines buffered for the record in progress.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// End of input: the incomplete record in progress is discarded.
    ///
    /// Returns the number of lines dropped.
    pub fn finish(&mut self) -> usize {
        let dropped = self.buffer.len();
        if dropped > 0 {
            tracing::debug!(lines = dropped, "Discarding incomplete record at end of input");
        }
        self.buffer.clear();
        self.start_offset = None;
        dropped
    }

    /// Assemble a finite batch of lines into records.
    pub fn assemble<I, S>(lines: I) -> Vec<RawRecord>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut assembler = Self::new();
        let records: Vec<RawRecord> = lines
            .into_iter()
            .filter_map(|line| assembler.push_text(line.as_ref()))
            .collect();
        assembler.finish();
        records
    }
}

/// Adapt a line sequence into a lazy record sequence.
///
/// Errors from the line sequence are passed through; the incomplete record
/// in progress when the lines end is discarded.
pub fn records<S>(lines: S) -> impl futures_core::Stream<Item = Result<RawRecord, TailError>>
where
    S: futures_core::Stream<Item = Result<RawLine, TailError>>,
{
    use futures_util::StreamExt;

    let state = (Box::pin(lines), RecordAssembler::new());
    futures_util::stream::unfold(state, |(mut lines, mut assembler)| async move {
        loop {
            match lines.next().await {
                Some(Ok(line)) => {
                    if let Some(record) = assembler.push(&line) {
                        return Some((Ok(record), (lines, assembler)));
                    }
                }
                Some(Err(e)) => return Some((Err(e), (lines, assembler))),
                None => {
                    assembler.finish();
                    return None;
                }
            }
        }
    })
}
