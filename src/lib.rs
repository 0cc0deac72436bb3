//! mtga-log - Streaming parser for the MTG Arena client log.
//!
//! Lines are tailed from the log file, grouped into records, classified by
//! header, decoded into typed events, and dispatched to registered
//! listeners.

pub mod config;
pub mod decode;
pub mod display;
pub mod event;
pub mod parser;
pub mod record;
pub mod tail;

pub use parser::{watch, Parser, RunSummary};
