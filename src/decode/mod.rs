//! Payload decoding.
//!
//! Turns a [`ClassifiedRecord`] into a typed [`DecodedEvent`]. JSON bodies
//! are decoded by method name; free-text sentences by [`SentenceRules`].

mod error;
mod pattern;
mod structured;

pub use error::DecodeError;
pub use pattern::{parse_skins, Extractor, SentenceRule, SentenceRules};
pub use structured::{base_method, decode_client, decode_incoming, decode_outgoing, join_body};

use crate::event::DecodedEvent;
use crate::record::{ClassifiedRecord, RecordShape};

/// Decodes classified records into events.
#[derive(Debug, Clone)]
pub struct Decoder {
    sentences: SentenceRules,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    /// Create a decoder with the built-in sentence rules.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rules(SentenceRules::with_default_rules())
    }

    /// Create a decoder with a custom sentence rule set.
    #[must_use]
    pub fn with_rules(sentences: SentenceRules) -> Self {
        Self { sentences }
    }

    /// Mutable access to the sentence rules, for adding rules.
    pub fn rules_mut(&mut self) -> &mut SentenceRules {
        &mut self.sentences
    }

    /// Decode one record.
    ///
    /// Returns `Ok(None)` when the record is well formed but names no known
    /// method or sentence.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] when the payload cannot be decoded.
    pub fn decode(&self, record: &ClassifiedRecord) -> Result<Option<DecodedEvent>, DecodeError> {
        match &record.shape {
            RecordShape::Outgoing {
                method,
                correlation_id,
            } => decode_outgoing(method, correlation_id.as_deref(), &record.body).map(Some),
            RecordShape::Incoming { method, .. } => decode_incoming(method, &record.body),
            RecordShape::Client { method, .. } => decode_client(method, &record.body),
            RecordShape::FreeText => match record.sentence() {
                Some(sentence) => self.sentences.decode(sentence).transpose(),
                None => Ok(None),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{classify, RawRecord};

    fn classified(lines: &[&str]) -> ClassifiedRecord {
        classify(RawRecord::from_lines(lines.iter().copied()).unwrap()).unwrap()
    }

    #[test]
    fn test_decode_free_text() {
        let record = classified(&["[UnityCrossThreadLogger]STATE CHANGED Playing -> MatchCompleted"]);
        let event = Decoder::new().decode(&record).unwrap().unwrap();
        assert_eq!(event.kind(), crate::event::EventKind::StateChanged);
    }

    #[test]
    fn test_decode_incoming() {
        let record = classified(&[
            "[UnityCrossThreadLogger]1/15/2020 8:12:44 PM",
            "<== MotD.GetMotD(12)",
            "{",
            r#""title": "Welcome", "text": "Hello""#,
            "}",
        ]);
        match Decoder::new().decode(&record).unwrap() {
            Some(DecodedEvent::MotD(motd)) => assert_eq!(motd.title, "Welcome"),
            other => panic!("Expected MotD, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_sentence_is_none() {
        let record = classified(&["Initialize engine version: 2018.4.11f1"]);
        assert!(Decoder::new().decode(&record).unwrap().is_none());
    }

    #[test]
    fn test_empty_rules_decode_nothing() {
        let record = classified(&["[UnityCrossThreadLogger]STATE CHANGED Playing -> MatchCompleted"]);
        let decoder = Decoder::with_rules(SentenceRules::new());
        assert!(decoder.decode(&record).unwrap().is_none());
    }
}
