//! Progression track payloads.

use serde::{Deserialize, Serialize};

/// A progression track, from `Progression.GetAllTracks`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Track {
    pub name: String,
    pub enabled: bool,
    pub tiers: Vec<Tier>,
}

/// One tier of a track.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tier {
    pub xp_to_complete: u32,
    pub chest: Option<serde_json::Value>,
}

/// Player position on each track, from `Progression.GetPlayerProgress`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerProgress {
    pub active_battle_pass: Option<TrackProgress>,
    pub expired_battle_passes: Vec<TrackProgress>,
}

/// Progress along one track.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackProgress {
    pub track_name: String,
    pub current_tier: u32,
    pub current_exp: u32,
    pub current_level: u32,
}
