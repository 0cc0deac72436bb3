//! JSON payload decoding for thread and client messages.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::event::payload::{LogInfo, OutgoingRequest};
use crate::event::DecodedEvent;
use crate::record::ClientMethod;

use super::error::DecodeError;

/// Rejoin body lines with single spaces.
#[must_use]
pub fn join_body(body: &[String]) -> String {
    body.join(" ")
}

/// Strip a trailing `V<digits>` version suffix from a method name.
///
/// `Deck.GetDeckListsV3` becomes `Deck.GetDeckLists`.
#[must_use]
pub fn base_method(method: &str) -> &str {
    let without_digits = method.trim_end_matches(|c: char| c.is_ascii_digit());
    if without_digits.len() == method.len() {
        return method;
    }
    without_digits.strip_suffix('V').unwrap_or(method)
}

fn parse<T: DeserializeOwned>(raw: &str) -> Result<T, DecodeError> {
    Ok(serde_json::from_str(raw)?)
}

/// Decode the body of an incoming (`<==`) message.
///
/// Returns `Ok(None)` for methods outside the catalog.
///
/// # Errors
///
/// Returns `TruncatedBody` when the body has fewer than two lines, or a JSON
/// error when it does not match the expected payload.
pub fn decode_incoming(method: &str, body: &[String]) -> Result<Option<DecodedEvent>, DecodeError> {
    if body.len() < 2 {
        return Err(DecodeError::TruncatedBody { lines: body.len() });
    }

    let raw = join_body(body);
    let event = match base_method(method) {
        "FrontDoor.ConnectionDetails" => DecodedEvent::ConnectionDetails(parse(&raw)?),
        "Deck.GetDeckLists" => DecodedEvent::DeckLists(parse(&raw)?),
        "Deck.GetPreconDecks" => DecodedEvent::PreconDecks(parse(&raw)?),
        "PlayerInventory.GetCatalogStatus" => DecodedEvent::CatalogStatus(parse(&raw)?),
        "Event.GetActiveEvents" => DecodedEvent::ActiveEvents(parse(&raw)?),
        "Event.GetCombinedRankInfo" => DecodedEvent::CombinedRankInfo(parse(&raw)?),
        "Event.GetSeasonAndRankDetail" => DecodedEvent::SeasonAndRankDetail(parse(&raw)?),
        "PlayerInventory.GetFormats" => DecodedEvent::Formats(parse(&raw)?),
        "PlayerInventory.GetPlayerArtSkins" => DecodedEvent::PlayerArtSkins(parse(&raw)?),
        "PlayerInventory.GetPlayerCards" => DecodedEvent::PlayerCards(parse(&raw)?),
        "PlayerInventory.GetPlayerInventory" => DecodedEvent::PlayerInventory(parse(&raw)?),
        "PlayerInventory.GetProductCatalog" => DecodedEvent::ProductCatalog(parse(&raw)?),
        "PlayerInventory.GetRewardSchedule" => DecodedEvent::RewardSchedule(parse(&raw)?),
        "MotD.GetMotD" => DecodedEvent::MotD(parse(&raw)?),
        "Progression.GetAllTracks" => DecodedEvent::AllTracks(parse(&raw)?),
        "Progression.GetPlayerProgress" => DecodedEvent::PlayerProgress(parse(&raw)?),
        "Mercantile.GetAllProducts" => DecodedEvent::AllProducts(parse(&raw)?),
        "Mercantile.GetStoreStatus" => DecodedEvent::StoreStatus(parse(&raw)?),
        "Quest.GetPlayerQuests" => DecodedEvent::PlayerQuests(parse(&raw)?),
        _ => return Ok(None),
    };
    Ok(Some(event))
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    params: serde_json::Value,
    #[serde(default)]
    id: Option<serde_json::Value>,
}

/// Decode the body of an outgoing (`==>`) message.
///
/// The method and id from the header take precedence; the JSON id fills in
/// when the header carried none.
///
/// # Errors
///
/// Returns an error if the body is empty or is not a JSON object.
pub fn decode_outgoing(
    method: &str,
    id: Option<&str>,
    body: &[String],
) -> Result<DecodedEvent, DecodeError> {
    if body.is_empty() {
        return Err(DecodeError::TruncatedBody { lines: 0 });
    }

    let envelope: Envelope = parse(&join_body(body))?;
    let id = id.map(str::to_string).or_else(|| {
        envelope.id.map(|value| match value {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        })
    });

    Ok(if base_method(method) == "Log.Info" {
        DecodedEvent::LogInfo(LogInfo {
            id,
            params: envelope.params,
        })
    } else {
        DecodedEvent::OutgoingRequest(OutgoingRequest {
            method: method.to_string(),
            id,
            params: envelope.params,
        })
    })
}

/// Decode the body of a client message.
///
/// Returns `Ok(None)` for methods outside the known set.
///
/// # Errors
///
/// Returns `NotAnObject` if the body does not open a JSON object, or a
/// JSON error when it does not match the expected payload.
pub fn decode_client(
    method: &ClientMethod,
    body: &[String],
) -> Result<Option<DecodedEvent>, DecodeError> {
    if let ClientMethod::Other(name) = method {
        tracing::trace!(method = %name, "Ignoring unknown client method");
        return Ok(None);
    }
    if !body.first().is_some_and(|line| line.starts_with('{')) {
        return Err(DecodeError::NotAnObject);
    }

    let raw = join_body(body);
    let event = match method {
        ClientMethod::AuthenticateRequest => DecodedEvent::AuthenticateRequest(parse(&raw)?),
        ClientMethod::ConnectRequest => DecodedEvent::ConnectRequest(parse(&raw)?),
        ClientMethod::ClientToGre => DecodedEvent::ClientToGre(parse(&raw)?),
        ClientMethod::ClientToGreUi => DecodedEvent::ClientToGreUi(parse(&raw)?),
        ClientMethod::AuthenticateResponse => DecodedEvent::AuthenticateResponse(parse(&raw)?),
        ClientMethod::GreToClient => DecodedEvent::GreToClient(parse(&raw)?),
        ClientMethod::RoomStateChanged => DecodedEvent::RoomStateChanged(parse(&raw)?),
        ClientMethod::Other(_) => return Ok(None),
    };
    Ok(Some(event))
}
