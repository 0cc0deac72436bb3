//! Colored CLI display utilities for watched events.

use std::io::{self, Write};

use chrono::Local;
use owo_colors::OwoColorize;

use crate::event::{DecodedEvent, EventKind};
use crate::parser::RunSummary;

/// Get current timestamp in the same format as tracing.
fn timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

/// Maximum length for truncated payloads.
const DEFAULT_MAX_LEN: usize = 160;

/// Truncate a string to a maximum number of characters, adding ellipsis if
/// truncated.
#[must_use]
pub fn truncate(s: &str, max_len: usize, raw_mode: bool) -> String {
    if raw_mode || s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return "...".to_string();
    }
    let cut = s
        .char_indices()
        .nth(max_len - 3)
        .map_or(s.len(), |(idx, _)| idx);
    format!("{}...", &s[..cut])
}

/// Which part of the log an event kind comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Incoming,
    Outgoing,
    Client,
    Sentence,
    Raw,
}

fn source(kind: EventKind) -> Source {
    match kind {
        EventKind::OutgoingRequest | EventKind::LogInfo => Source::Outgoing,
        EventKind::AuthenticateRequest
        | EventKind::ConnectRequest
        | EventKind::ClientToGre
        | EventKind::ClientToGreUi
        | EventKind::AuthenticateResponse
        | EventKind::GreToClient
        | EventKind::RoomStateChanged => Source::Client,
        EventKind::CardNotExist
        | EventKind::NullEntity
        | EventKind::SkinsSeen
        | EventKind::StateChanged
        | EventKind::ZoneChange
        | EventKind::AccountLoggedIn => Source::Sentence,
        EventKind::RawLine => Source::Raw,
        _ => Source::Incoming,
    }
}

/// Render the payload of an event as compact JSON.
#[must_use]
pub fn format_payload(event: &DecodedEvent, raw_mode: bool) -> String {
    let payload = match serde_json::to_value(event) {
        Ok(mut value) => value
            .get_mut("payload")
            .map(serde_json::Value::take)
            .unwrap_or_default(),
        Err(e) => {
            tracing::debug!(error = %e, "Failed to serialize event");
            serde_json::Value::Null
        }
    };
    let text = match payload {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    };
    truncate(&text, DEFAULT_MAX_LEN, raw_mode)
}

/// Print one dispatched event.
pub fn print_event(event: &DecodedEvent, raw_mode: bool) {
    let kind = event.kind();
    let label = format!("[{kind:?}]");
    let payload = format_payload(event, raw_mode);
    let ts = timestamp();

    match source(kind) {
        Source::Incoming => println!("{} {} {}", ts.dimmed(), label.cyan().bold(), payload),
        Source::Outgoing => println!("{} {} {}", ts.dimmed(), label.magenta().bold(), payload),
        Source::Client => println!("{} {} {}", ts.dimmed(), label.blue().bold(), payload),
        Source::Sentence => println!("{} {} {}", ts.dimmed(), label.yellow().bold(), payload),
        Source::Raw => println!("{} {} {}", ts.dimmed(), label.dimmed(), payload.dimmed()),
    }
    let _ = io::stdout().flush();
}

/// Print the counters of a finished run.
pub fn print_summary(summary: &RunSummary) {
    println!(
        "{} {} lines={}, records={}, events={}, dropped={}",
        timestamp().dimmed(),
        "[DONE]".green().bold(),
        summary.lines,
        summary.records,
        summary.events.green(),
        if summary.dropped > 0 {
            summary.dropped.red().to_string()
        } else {
            summary.dropped.to_string()
        }
    );
    let _ = io::stdout().flush();
}

/// Print a fatal error.
pub fn print_error(message: &str) {
    eprintln!(
        "{} {} {}",
        timestamp().dimmed(),
        "[ERROR]".red().bold(),
        message.red()
    );
}
