//! Typed payloads carried by decoded events.

pub mod client;
pub mod deck;
pub mod front_door;
pub mod inventory;
pub mod mercantile;
pub mod motd;
pub mod progression;
pub mod quest;
pub mod rank;
pub mod single;
pub mod thread;
pub mod zone;

pub use client::{
    AuthenticateResponse, ClientRequest, ClientResponse, GreToClientEvent, MessageEvent,
    StateEvent,
};
pub use deck::{CardSkin, Deck, DeckCard, PreconDeck};
pub use front_door::ConnectionDetails;
pub use inventory::{
    Booster, CatalogItem, CatalogStatus, Format, PlayerArtSkins, PlayerCards, PlayerInventory,
    Price, ProductCatalog, Reward, RewardSchedule,
};
pub use mercantile::{Product, StoreStatus};
pub use motd::MotD;
pub use progression::{PlayerProgress, Tier, Track, TrackProgress};
pub use quest::PlayerQuest;
pub use rank::{ActiveEvent, CombinedRankInfo, EntryFee, RankStep, Season, SeasonAndRankDetail};
pub use single::{AccountLogin, AnnotationDetail, CardNotExist, NullEntity, Skin, StateChange};
pub use thread::{LogInfo, OutgoingRequest};
pub use zone::{ZoneChange, ZoneChangeType};
