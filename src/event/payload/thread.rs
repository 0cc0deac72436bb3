//! Outgoing thread-logger payloads.

use serde::{Deserialize, Serialize};

/// A JSON-RPC style request logged by the client (`==>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingRequest {
    pub method: String,
    pub id: Option<String>,
    pub params: serde_json::Value,
}

/// Client-side diagnostics sent through `Log.Info`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogInfo {
    pub id: Option<String>,
    /// Raw parameters as logged.
    pub params: serde_json::Value,
}
