//! Client/match-service message payloads.

use serde::{Deserialize, Serialize};

/// A request sent from the client to the match service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientRequest {
    pub request_id: i64,
    #[serde(rename = "clientToMatchServiceMessageType")]
    pub message_type: String,
    /// Encoded inner message, left opaque.
    pub payload: String,
    pub timestamp: Option<String>,
}

/// A response from the match service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientResponse {
    pub transaction_id: String,
    pub request_id: i64,
    pub authenticate_response: AuthenticateResponse,
}

/// Body of an authenticate response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthenticateResponse {
    pub client_id: String,
    pub session_id: String,
    pub screen_name: String,
}

/// A batch of game-rules-engine messages pushed to the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MessageEvent {
    pub transaction_id: String,
    pub timestamp: String,
    pub gre_to_client_event: GreToClientEvent,
}

/// Inner envelope of [`MessageEvent`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GreToClientEvent {
    /// Individual engine messages, left untyped.
    pub gre_to_client_messages: Vec<serde_json::Value>,
}

/// A match room state change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StateEvent {
    pub transaction_id: String,
    pub timestamp: String,
    pub match_game_room_state_changed_event: serde_json::Value,
}

impl StateEvent {
    /// The room state name, e.g. `MatchGameRoomStateType_Playing`.
    #[must_use]
    pub fn state_type(&self) -> Option<&str> {
        self.match_game_room_state_changed_event
            .pointer("/gameRoomInfo/stateType")
            .and_then(serde_json::Value::as_str)
    }
}
