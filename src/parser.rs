//! Pipeline driver: classify, decode, and dispatch records.

use std::path::PathBuf;

use futures_util::StreamExt;
use tokio_util::sync::CancellationToken;

use crate::config::ParserConfig;
use crate::decode::{DecodeError, Decoder};
use crate::event::{DecodedEvent, EventKind, ListenerRegistry};
use crate::record::{classify, ClassifiedRecord, RawRecord, RecordAssembler, RecordShape};
use crate::tail::{LogTailer, RawLine, TailError, TailOptions};

/// Counters for one pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines read from the source.
    pub lines: u64,
    /// Records assembled from those lines.
    pub records: u64,
    /// Events decoded and dispatched.
    pub events: u64,
    /// Records dropped for a framing or payload fault.
    pub dropped: u64,
}

enum Outcome {
    Event(DecodedEvent),
    Ignored,
    Dropped,
}

/// Owns a listener registry and feeds it decoded records.
#[derive(Debug, Default)]
pub struct Parser {
    registry: ListenerRegistry,
    decoder: Decoder,
    config: ParserConfig,
}

impl Parser {
    /// Create a parser with default settings and no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with the given settings.
    #[must_use]
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Replace the decoder, e.g. to add sentence rules.
    #[must_use]
    pub fn with_decoder(mut self, decoder: Decoder) -> Self {
        self.decoder = decoder;
        self
    }

    /// The listeners events are dispatched to.
    #[must_use]
    pub fn registry(&self) -> &ListenerRegistry {
        &self.registry
    }

    /// Register listeners through the returned registry.
    pub fn registry_mut(&mut self) -> &mut ListenerRegistry {
        &mut self.registry
    }

    /// The settings this parser runs with.
    #[must_use]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Classify and decode a record without dispatching it.
    ///
    /// Faults are logged and yield `None`.
    #[must_use]
    pub fn decode(&self, record: RawRecord) -> Option<DecodedEvent> {
        match self.decode_record(record) {
            Outcome::Event(event) => Some(event),
            Outcome::Ignored | Outcome::Dropped => None,
        }
    }

    /// Classify, decode, and dispatch one record.
    ///
    /// Returns the kind of the dispatched event, or `None` when the record
    /// was dropped or produced no event.
    pub fn parse_record(&mut self, record: RawRecord) -> Option<EventKind> {
        match self.decode_record(record) {
            Outcome::Event(event) => Some(self.dispatch(&event)),
            Outcome::Ignored | Outcome::Dropped => None,
        }
    }

    fn dispatch(&mut self, event: &DecodedEvent) -> EventKind {
        self.registry.dispatch(event);
        event.kind()
    }

    /// Drive lines through the assembler until the stream ends or `cancel`
    /// fires.
    ///
    /// A partial record buffered at that point is discarded.
    ///
    /// # Errors
    ///
    /// Returns the first [`TailError`] produced by the line stream.
    pub async fn run<S>(
        &mut self,
        lines: S,
        cancel: CancellationToken,
    ) -> Result<RunSummary, TailError>
    where
        S: futures_core::Stream<Item = Result<RawLine, TailError>>,
    {
        let mut lines = std::pin::pin!(lines);
        let mut assembler = RecordAssembler::new();
        let mut summary = RunSummary::default();

        loop {
            let next = tokio::select! {
                biased;
                () = cancel.cancelled() => {
                    tracing::debug!("Pipeline cancelled");
                    break;
                }
                next = lines.next() => next,
            };

            let Some(line) = next else {
                break;
            };
            summary.lines += 1;

            let Some(record) = assembler.push(&line?) else {
                continue;
            };
            summary.records += 1;

            match self.decode_record(record) {
                Outcome::Event(event) => {
                    self.dispatch(&event);
                    summary.events += 1;
                }
                Outcome::Ignored => {}
                Outcome::Dropped => summary.dropped += 1,
            }
        }

        assembler.finish();
        tracing::info!(
            lines = summary.lines,
            records = summary.records,
            events = summary.events,
            dropped = summary.dropped,
            "Pipeline stopped"
        );
        Ok(summary)
    }

    fn decode_record(&self, record: RawRecord) -> Outcome {
        let offset = record.offset();
        let classified = match classify(record) {
            Ok(classified) => classified,
            Err(e) => {
                tracing::debug!(offset, error = %e, "Dropping malformed record");
                return Outcome::Dropped;
            }
        };

        match self.decoder.decode(&classified) {
            Ok(Some(event)) => {
                tracing::trace!(offset, kind = ?event.kind(), "Decoded record");
                Outcome::Event(event)
            }
            Ok(None) => self.unmatched(classified),
            Err(e) => {
                self.report_decode_error(&classified, offset, &e);
                Outcome::Dropped
            }
        }
    }

    fn unmatched(&self, classified: ClassifiedRecord) -> Outcome {
        let wants_raw = self.config.emit_raw_lines
            && matches!(classified.shape, RecordShape::FreeText)
            && self.registry.has_listeners(EventKind::RawLine);

        if wants_raw {
            Outcome::Event(DecodedEvent::RawLine(classified.body.join("\n")))
        } else {
            tracing::trace!(method = ?classified.method(), "No event for record");
            Outcome::Ignored
        }
    }

    fn report_decode_error(&self, record: &ClassifiedRecord, offset: Option<u64>, e: &DecodeError) {
        let method = record.method().unwrap_or_default();
        match record.shape {
            RecordShape::Outgoing { .. } if self.config.log_outgoing_failures => {
                tracing::warn!(offset, method, error = %e, "Failed to decode outgoing message");
            }
            _ => {
                tracing::debug!(offset, method, error = %e, "Dropping undecodable record");
            }
        }
    }
}

/// Tail `path` and run `parser` over it until cancelled or, when not
/// following, until end of file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub async fn watch(
    path: impl Into<PathBuf>,
    options: TailOptions,
    parser: &mut Parser,
    cancel: CancellationToken,
) -> Result<RunSummary, TailError> {
    let tailer = LogTailer::open(path, options).await?;
    tracing::info!(
        path = %tailer.path().display(),
        offset = tailer.offset(),
        "Watching log"
    );
    let lines = tailer.lines(cancel.clone());
    parser.run(lines, cancel).await
}
