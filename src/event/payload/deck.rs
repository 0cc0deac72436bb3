//! Deck list payloads.

use serde::{Deserialize, Serialize};

/// A player deck from `Deck.GetDeckLists`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Deck {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub format: String,
    pub resource_id: String,
    pub deck_tile_id: u32,
    /// Flattened `grpId, quantity` pairs.
    pub main_deck: Vec<u32>,
    /// Flattened `grpId, quantity` pairs.
    pub sideboard: Vec<u32>,
    pub last_updated: Option<String>,
    pub card_skins: Vec<CardSkin>,
    pub card_back: Option<String>,
}

/// A preconstructed deck; same layout as a player deck.
pub type PreconDeck = Deck;

/// One card entry of a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeckCard {
    pub grp_id: u32,
    pub quantity: u32,
}

/// A skin applied to a card in a deck.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardSkin {
    pub grp_id: u32,
    pub cc_v: String,
}

impl Deck {
    /// Main deck as `(grpId, quantity)` entries.
    #[must_use]
    pub fn main_cards(&self) -> Vec<DeckCard> {
        pairs(&self.main_deck)
    }

    /// Sideboard as `(grpId, quantity)` entries.
    #[must_use]
    pub fn sideboard_cards(&self) -> Vec<DeckCard> {
        pairs(&self.sideboard)
    }
}

fn pairs(flat: &[u32]) -> Vec<DeckCard> {
    flat.chunks_exact(2)
        .map(|pair| DeckCard {
            grp_id: pair[0],
            quantity: pair[1],
        })
        .collect()
}
