//! Payloads decoded from free-text diagnostic sentences.

use serde::{Deserialize, Serialize};

use crate::event::OneOrMany;

/// A card whose parent id was missing from the game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardNotExist {
    pub card_id: u64,
    pub card_name: String,
    pub parent_id: u64,
}

/// An annotation logged against a missing entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NullEntity {
    pub id: u64,
    pub affector_id: u64,
    pub affected_ids: OneOrMany<u64>,
    #[serde(rename = "type")]
    pub kind: OneOrMany<String>,
    pub details: Vec<AnnotationDetail>,
    pub allow_redaction: bool,
}

/// A key/value detail attached to an annotation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnnotationDetail {
    pub key: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value_int32: OneOrMany<i32>,
    pub value_string: OneOrMany<String>,
}

/// A card art skin seen in the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skin {
    pub id: u64,
    pub code: String,
}

/// A client state machine transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateChange {
    pub from: String,
    pub to: String,
}

/// A successful account login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountLogin {
    pub name: String,
    pub number: String,
}
