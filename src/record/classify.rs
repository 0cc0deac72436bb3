//! Record classification by header shape.
//!
//! A record's header is matched against the known origin tags in a fixed
//! order: the thread logger first, then client messages, then the account
//! startup logger. Anything else is untagged free text.

use chrono::NaiveDateTime;
use serde::Serialize;

use super::assembler::RawRecord;
use super::error::ClassifyError;
use super::timestamp::parse_log_time;

/// Header tag of the cross-thread logger.
pub const THREAD_LOGGER_TAG: &str = "[UnityCrossThreadLogger]";
/// Header tag of client/match-service messages.
pub const CLIENT_GRE_TAG: &str = "[Client GRE]";
/// Header tag of the account startup logger.
pub const ACCOUNTS_STARTUP_TAG: &str = "[Accounts - Startup]";

const OUTGOING_MARKER: &str = "==>";
const INCOMING_MARKER: &str = "<==";

/// Log subsystem a record originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// `[UnityCrossThreadLogger]`
    ThreadLogger,
    /// `[Client GRE]`
    ClientGre,
    /// `[Accounts - Startup]`
    AccountsStartup,
    /// No recognized tag.
    Untagged,
}

impl Origin {
    /// The literal header tag, if any.
    #[must_use]
    pub fn tag(self) -> Option<&'static str> {
        match self {
            Self::ThreadLogger => Some(THREAD_LOGGER_TAG),
            Self::ClientGre => Some(CLIENT_GRE_TAG),
            Self::AccountsStartup => Some(ACCOUNTS_STARTUP_TAG),
            Self::Untagged => None,
        }
    }
}

/// Direction marker of a thread-logger message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// `==>` request sent by the client.
    Outgoing,
    /// `<==` response received by the client.
    Incoming,
    /// No marker.
    Unmarked,
}

/// Protocol method named in a client-message header.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum ClientMethod {
    AuthenticateRequest,
    ConnectRequest,
    ClientToGre,
    ClientToGreUi,
    AuthenticateResponse,
    GreToClient,
    RoomStateChanged,
    /// Any method outside the known set.
    Other(String),
}

impl ClientMethod {
    /// Map a header method name onto the known set.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "ClientToMatchServiceMessageType_AuthenticateRequest" => Self::AuthenticateRequest,
            "ClientToMatchServiceMessageType_ClientToMatchDoorConnectRequest" => {
                Self::ConnectRequest
            }
            "ClientToMatchServiceMessageType_ClientToGREMessage" => Self::ClientToGre,
            "ClientToMatchServiceMessageType_ClientToGREUIMessage" => Self::ClientToGreUi,
            "AuthenticateResponse" => Self::AuthenticateResponse,
            "GreToClientEvent" => Self::GreToClient,
            "MatchGameRoomStateChangedEvent" => Self::RoomStateChanged,
            other => Self::Other(other.to_string()),
        }
    }

    /// The method name as it appears in the log.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::AuthenticateRequest => "ClientToMatchServiceMessageType_AuthenticateRequest",
            Self::ConnectRequest => {
                "ClientToMatchServiceMessageType_ClientToMatchDoorConnectRequest"
            }
            Self::ClientToGre => "ClientToMatchServiceMessageType_ClientToGREMessage",
            Self::ClientToGreUi => "ClientToMatchServiceMessageType_ClientToGREUIMessage",
            Self::AuthenticateResponse => "AuthenticateResponse",
            Self::GreToClient => "GreToClientEvent",
            Self::RoomStateChanged => "MatchGameRoomStateChangedEvent",
            Self::Other(name) => name,
        }
    }
}

/// Shape-specific header data of a classified record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum RecordShape {
    /// Thread-logger request: `==> Method(id)`.
    Outgoing {
        method: String,
        correlation_id: Option<String>,
    },
    /// Thread-logger response: `<== Method(id)`.
    Incoming {
        method: String,
        correlation_id: Option<String>,
    },
    /// Client message: `[Client GRE]<time>: <route>: <method>`.
    Client { route: String, method: ClientMethod },
    /// Free-text sentence; the first body line is the sentence.
    FreeText,
}

/// A record annotated with its origin, time and header fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedRecord {
    pub origin: Origin,
    pub timestamp: Option<NaiveDateTime>,
    pub shape: RecordShape,
    /// Lines left after the header (and direction marker, if any).
    pub body: Vec<String>,
}

impl ClassifiedRecord {
    /// Direction of the record.
    #[must_use]
    pub fn direction(&self) -> Direction {
        match self.shape {
            RecordShape::Outgoing { .. } => Direction::Outgoing,
            RecordShape::Incoming { .. } => Direction::Incoming,
            RecordShape::Client { .. } | RecordShape::FreeText => Direction::Unmarked,
        }
    }

    /// Method name, for thread messages and client messages.
    #[must_use]
    pub fn method(&self) -> Option<&str> {
        match &self.shape {
            RecordShape::Outgoing { method, .. } | RecordShape::Incoming { method, .. } => {
                Some(method)
            }
            RecordShape::Client { method, .. } => Some(method.as_str()),
            RecordShape::FreeText => None,
        }
    }

    /// Correlation id, for thread messages that carry one.
    #[must_use]
    pub fn correlation_id(&self) -> Option<&str> {
        match &self.shape {
            RecordShape::Outgoing { correlation_id, .. }
            | RecordShape::Incoming { correlation_id, .. } => correlation_id.as_deref(),
            _ => None,
        }
    }

    /// The sentence of a free-text record.
    #[must_use]
    pub fn sentence(&self) -> Option<&str> {
        match self.shape {
            RecordShape::FreeText => self.body.first().map(String::as_str),
            _ => None,
        }
    }
}

/// Classify a record by its header.
///
/// # Errors
///
/// Returns a framing fault when a tagged header is malformed; the record
/// should be dropped.
pub fn classify(record: RawRecord) -> Result<ClassifiedRecord, ClassifyError> {
    let mut lines = record.into_lines();
    let header = lines.remove(0);

    if let Some(rest) = header.strip_prefix(THREAD_LOGGER_TAG) {
        classify_thread(rest.trim(), lines)
    } else if let Some(rest) = header.strip_prefix(CLIENT_GRE_TAG) {
        classify_client(rest, lines)
    } else if let Some(rest) = header.strip_prefix(ACCOUNTS_STARTUP_TAG) {
        free_text(Origin::AccountsStartup, None, rest.trim(), lines)
    } else {
        free_text(Origin::Untagged, None, &header, lines)
    }
}

fn classify_thread(rest: &str, mut body: Vec<String>) -> Result<ClassifiedRecord, ClassifyError> {
    // A sentence logged straight after the tag, e.g. `[UnityCrossThreadLogger]Skins seen: ...`.
    if !rest.starts_with(|c: char| c.is_ascii_digit()) {
        return free_text(Origin::ThreadLogger, None, rest, body);
    }

    let timestamp =
        parse_log_time(rest).ok_or_else(|| ClassifyError::MalformedTimestamp(rest.to_string()))?;

    let Some(marker) = body.first() else {
        return Err(ClassifyError::MissingBody);
    };

    let shape = if let Some(call) = marker.strip_prefix(OUTGOING_MARKER) {
        let (method, correlation_id) = parse_call(call)?;
        body.remove(0);
        RecordShape::Outgoing {
            method,
            correlation_id,
        }
    } else if let Some(call) = marker.strip_prefix(INCOMING_MARKER) {
        let (method, correlation_id) = parse_call(call)?;
        body.remove(0);
        RecordShape::Incoming {
            method,
            correlation_id,
        }
    } else {
        RecordShape::FreeText
    };

    Ok(ClassifiedRecord {
        origin: Origin::ThreadLogger,
        timestamp: Some(timestamp),
        shape,
        body,
    })
}

/// Split `Method(id)` into its parts. The id is optional.
fn parse_call(call: &str) -> Result<(String, Option<String>), ClassifyError> {
    let call = call.trim().trim_end_matches(':').trim_end();
    let (method, id) = match call.split_once('(') {
        Some((method, rest)) => {
            let id = rest.trim_end_matches(')').trim();
            (method.trim(), (!id.is_empty()).then(|| id.to_string()))
        }
        None => (call, None),
    };

    if method.is_empty() {
        return Err(ClassifyError::MissingMethod(call.to_string()));
    }
    Ok((method.to_string(), id))
}

fn classify_client(rest: &str, body: Vec<String>) -> Result<ClassifiedRecord, ClassifyError> {
    // <h:mm:ss split by the colons> : <route> : <method>
    let parts: Vec<&str> = rest.split(':').collect();
    if parts.len() < 5 {
        return Err(ClassifyError::MissingMethod(rest.to_string()));
    }

    let time = parts[0..3].join(":");
    let timestamp =
        parse_log_time(&time).ok_or_else(|| ClassifyError::MalformedTimestamp(time.clone()))?;

    let method = parts[4].trim();
    if method.is_empty() {
        return Err(ClassifyError::MissingMethod(rest.to_string()));
    }
    if body.is_empty() {
        return Err(ClassifyError::MissingBody);
    }

    Ok(ClassifiedRecord {
        origin: Origin::ClientGre,
        timestamp: Some(timestamp),
        shape: RecordShape::Client {
            route: parts[3].trim().to_string(),
            method: ClientMethod::from_name(method),
        },
        body,
    })
}

fn free_text(
    origin: Origin,
    timestamp: Option<NaiveDateTime>,
    sentence: &str,
    mut body: Vec<String>,
) -> Result<ClassifiedRecord, ClassifyError> {
    if !sentence.is_empty() {
        body.insert(0, sentence.to_string());
    }
    if body.is_empty() {
        return Err(ClassifyError::MissingBody);
    }

    Ok(ClassifiedRecord {
        origin,
        timestamp,
        shape: RecordShape::FreeText,
        body,
    })
}
