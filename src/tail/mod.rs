//! Tailing of the append-only client log.
//!
//! Provides a cursor-based reader that yields newly appended lines.

mod error;
mod tailer;

pub use error::TailError;
pub use tailer::{LogTailer, RawLine, StartPosition, TailOptions, DEFAULT_POLL_INTERVAL};
