//! Incremental log file tailer.
//!
//! Reads new lines from a text log as they are appended, tolerating
//! partial writes and truncation.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tokio_util::sync::CancellationToken;

use super::error::TailError;

/// Default delay between polls when no new data is available.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Where a freshly opened tailer starts reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartPosition {
    /// Replay the whole file from byte 0.
    Beginning,
    /// Only yield content appended after the tailer was opened.
    #[default]
    End,
}

/// Options controlling how a file is tailed.
#[derive(Debug, Clone)]
pub struct TailOptions {
    /// Starting position in the file.
    pub start: StartPosition,
    /// Keep polling at EOF instead of ending the sequence.
    pub follow: bool,
    /// Delay between polls when the file has not grown.
    pub poll_interval: Duration,
}

impl Default for TailOptions {
    fn default() -> Self {
        Self {
            start: StartPosition::End,
            follow: true,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

/// A single line read from the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    /// Line content without the trailing newline.
    pub text: String,
    /// Byte offset of the first byte of the line.
    pub offset: u64,
    /// Line number, counted from where tailing began (reset on truncation).
    pub number: u64,
}

/// Cursor-based file reader that tracks the read position.
///
/// Only complete, newline-terminated lines are consumed; a partial final
/// line is left in place and retried on the next poll.
#[derive(Debug)]
pub struct LogTailer {
    /// Path to the log file.
    path: PathBuf,
    /// Byte offset just past the last consumed newline.
    offset: u64,
    /// Number of lines yielded since the cursor was last reset.
    line_number: u64,
    options: TailOptions,
}

impl LogTailer {
    /// Open a tailer on `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, cannot be read, or its
    /// metadata cannot be queried.
    pub async fn open(path: impl Into<PathBuf>, options: TailOptions) -> Result<Self, TailError> {
        let path = path.into();
        let file = File::open(&path)
            .await
            .map_err(|e| TailError::from_io(&path, e))?;
        let len = file.metadata().await?.len();

        let offset = match options.start {
            StartPosition::Beginning => 0,
            StartPosition::End => len,
        };

        tracing::debug!(
            path = %path.display(),
            offset,
            follow = options.follow,
            "Opened log tailer"
        );

        Ok(Self {
            path,
            offset,
            line_number: 0,
            options,
        })
    }

    /// Get the current byte offset.
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Get the path being tailed.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the options this tailer was opened with.
    #[must_use]
    pub fn options(&self) -> &TailOptions {
        &self.options
    }

    /// Read the complete lines appended since the last read.
    ///
    /// A file that has briefly disappeared (rotation in progress) yields no
    /// lines rather than an error. If the file shrank below the cursor, the
    /// cursor is reset to 0 and reading restarts from the beginning.
    ///
    /// # Errors
    ///
    /// Returns an error on permission or other I/O failures.
    pub async fn read_new_lines(&mut self) -> Result<Vec<RawLine>, TailError> {
        self.poll(false).await
    }

    /// Reset the cursor to the beginning of the file.
    pub fn reset(&mut self) {
        self.offset = 0;
        self.line_number = 0;
    }

    async fn poll(&mut self, flush_partial: bool) -> Result<Vec<RawLine>, TailError> {
        let mut file = match File::open(&self.path).await {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::trace!(path = %self.path.display(), "Log file not available yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(TailError::from_io(&self.path, e)),
        };

        let file_len = file.metadata().await?.len();

        if file_len < self.offset {
            tracing::warn!(
                path = %self.path.display(),
                old_offset = self.offset,
                new_len = file_len,
                "Log truncated, resetting offset to 0"
            );
            self.reset();
        }

        if file_len == self.offset {
            return Ok(Vec::new());
        }

        file.seek(std::io::SeekFrom::Start(self.offset)).await?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf).await?;

        let consumed = match buf.iter().rposition(|&b| b == b'\n') {
            Some(last_newline) => last_newline + 1,
            None if flush_partial && !buf.is_empty() => buf.len(),
            None => return Ok(Vec::new()),
        };

        let mut lines = Vec::new();
        let mut line_start = self.offset;
        for chunk in buf[..consumed].split_inclusive(|&b| b == b'\n') {
            let chunk_len = chunk.len() as u64;
            lines.push(self.make_line(chunk, line_start));
            line_start += chunk_len;
        }

        self.offset += consumed as u64;
        Ok(lines)
    }

    fn make_line(&mut self, chunk: &[u8], offset: u64) -> RawLine {
        let bytes = chunk.strip_suffix(b"\n").unwrap_or(chunk);
        let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
        let mut text = String::from_utf8_lossy(bytes).into_owned();
        if offset == 0 && text.starts_with('\u{feff}') {
            text.remove(0);
        }

        self.line_number += 1;
        RawLine {
            text,
            offset,
            number: self.line_number,
        }
    }

    /// Turn the tailer into a lazy, unbounded sequence of lines.
    ///
    /// In follow mode the sequence sleeps for the poll interval whenever no
    /// new data is available and never ends on its own. Without follow, the
    /// sequence ends at EOF after yielding any unterminated final line.
    ///
    /// Cancelling `cancel` ends the sequence, discarding lines that were read
    /// but not yet yielded. The first fatal error is yielded once and then
    /// the sequence ends.
    pub fn lines(
        self,
        cancel: CancellationToken,
    ) -> impl futures_core::Stream<Item = Result<RawLine, TailError>> {
        let state = LineState {
            tailer: self,
            pending: VecDeque::new(),
            cancel,
            done: false,
        };

        futures_util::stream::unfold(state, |mut state| async move {
            loop {
                if state.done || state.cancel.is_cancelled() {
                    return None;
                }

                if let Some(line) = state.pending.pop_front() {
                    return Some((Ok(line), state));
                }

                let follow = state.tailer.options.follow;
                match state.tailer.poll(!follow).await {
                    Ok(lines) if !lines.is_empty() => state.pending.extend(lines),
                    Ok(_) if !follow => {
                        tracing::debug!(
                            path = %state.tailer.path.display(),
                            "Reached end of log"
                        );
                        state.done = true;
                    }
                    Ok(_) => {
                        let interval = state.tailer.options.poll_interval;
                        tokio::select! {
                            () = state.cancel.cancelled() => return None,
                            () = tokio::time::sleep(interval) => {}
                        }
                    }
                    Err(e) => {
                        state.done = true;
                        return Some((Err(e), state));
                    }
                }
            }
        })
    }
}

struct LineState {
    tailer: LogTailer,
    pending: VecDeque<RawLine>,
    cancel: CancellationToken,
    done: bool,
}
