//! Player inventory and catalog payloads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::event::OneOrMany;

/// Catalog readiness reported by `PlayerInventory.GetCatalogStatus`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogStatus {
    pub status: String,
    pub catalog_version: Option<String>,
}

/// A play format and its legality rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Format {
    pub name: String,
    pub sets: Vec<String>,
    pub banned_cards: Vec<u32>,
    pub card_count_restriction: Option<String>,
}

/// Art skins owned by the player, keyed by art id.
///
/// A single skin code may be logged as a bare string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerArtSkins(pub BTreeMap<u32, OneOrMany<String>>);

/// Owned card counts keyed by `grpId`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerCards(pub BTreeMap<u32, u32>);

impl PlayerCards {
    /// Number of copies owned of `grp_id`.
    #[must_use]
    pub fn count(&self, grp_id: u32) -> u32 {
        self.0.get(&grp_id).copied().unwrap_or(0)
    }

    /// Number of distinct cards owned.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.0.len()
    }
}

/// Currencies, wildcards and boosters, from `PlayerInventory.GetPlayerInventory`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerInventory {
    pub player_id: String,
    pub wc_common: u32,
    pub wc_uncommon: u32,
    pub wc_rare: u32,
    pub wc_mythic: u32,
    pub gold: u64,
    pub gems: u64,
    pub draft_tokens: u32,
    pub sealed_tokens: u32,
    pub wc_track_position: u32,
    pub vault_progress: f64,
    pub boosters: Vec<Booster>,
}

/// Unopened boosters of one collation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Booster {
    pub collation_id: u32,
    pub count: u32,
}

/// Purchasable catalog entries keyed by product name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductCatalog(pub BTreeMap<String, CatalogItem>);

/// One catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogItem {
    pub name: String,
    pub description: Option<String>,
    pub prices: Vec<Price>,
}

/// Price of a product in one currency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Price {
    pub currency_type: String,
    pub amount: u64,
}

/// Daily and weekly win rewards, from `PlayerInventory.GetRewardSchedule`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RewardSchedule {
    pub daily_reset: Option<String>,
    pub weekly_reset: Option<String>,
    pub daily_rewards: Vec<Reward>,
    pub weekly_rewards: Vec<Reward>,
}

/// One reward tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Reward {
    pub wins: u32,
    pub awarded: bool,
}
