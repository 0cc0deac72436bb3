//! Front door connection payload.

use serde::{Deserialize, Serialize};

/// Session details handed out when the client connects to the front door.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConnectionDetails {
    pub session_id: String,
    pub player_id: Option<String>,
    pub screen_name: Option<String>,
    pub client_version: Option<String>,
}
