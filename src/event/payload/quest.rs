//! Quest payloads.

use serde::{Deserialize, Serialize};

/// A daily quest, from `Quest.GetPlayerQuests`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerQuest {
    pub quest_id: String,
    pub goal: u32,
    pub location_key: String,
    pub loc_key: String,
    pub tile_resource_id: String,
    pub treasure_resource_id: String,
    pub quest_track: String,
    pub is_new_quest: bool,
    pub starting_progress: u32,
    pub ending_progress: u32,
    pub can_swap: bool,
    pub hours_waited_after_complete: u32,
    pub chest_description: Option<serde_json::Value>,
}

impl PlayerQuest {
    /// Whether the logged progress reaches the goal.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.goal > 0 && self.ending_progress >= self.goal
    }
}
