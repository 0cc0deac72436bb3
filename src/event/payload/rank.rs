//! Event and rank payloads.

use serde::{Deserialize, Serialize};

/// An event currently open in the client, from `Event.GetActiveEvents`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ActiveEvent {
    pub public_event_name: String,
    pub internal_event_name: String,
    pub event_state: String,
    pub event_type: String,
    pub start_time: Option<String>,
    pub lock_time: Option<String>,
    pub close_time: Option<String>,
    pub flags: Vec<String>,
    pub entry_fees: Vec<EntryFee>,
}

/// Cost of entering an event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EntryFee {
    pub currency_type: String,
    pub quantity: u32,
    pub max_uses: Option<u32>,
}

/// Constructed and limited rank snapshot, from `Event.GetCombinedRankInfo`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CombinedRankInfo {
    pub player_id: String,
    pub constructed_season_ordinal: u32,
    pub constructed_class: String,
    pub constructed_level: u32,
    pub constructed_step: u32,
    pub constructed_matches_won: u32,
    pub constructed_matches_lost: u32,
    pub constructed_matches_drawn: u32,
    pub constructed_percentile: f64,
    pub limited_season_ordinal: u32,
    pub limited_class: String,
    pub limited_level: u32,
    pub limited_step: u32,
    pub limited_matches_won: u32,
    pub limited_matches_lost: u32,
    pub limited_matches_drawn: u32,
    pub limited_percentile: f64,
}

/// Season schedule and rank ladder, from `Event.GetSeasonAndRankDetail`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeasonAndRankDetail {
    pub current_season: Season,
    pub limited_rank_info: Vec<RankStep>,
    pub constructed_rank_info: Vec<RankStep>,
}

/// A ranked season.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Season {
    pub season_ordinal: u32,
    pub season_start_time: Option<String>,
    pub season_end_time: Option<String>,
}

/// One rung of the rank ladder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RankStep {
    pub rank_class: String,
    pub level: u32,
    pub steps: u32,
}
