//! The closed catalog of event kinds.
//!
//! Each kind is declared once; the declaration generates the
//! [`DecodedEvent`] variant, the matching [`EventKind`], and a typed
//! `on_<kind>` registration method on [`ListenerRegistry`].

use serde::Serialize;

use super::payload::{
    AccountLogin, ActiveEvent, CardNotExist, CatalogStatus, ClientRequest, ClientResponse,
    CombinedRankInfo, ConnectionDetails, Deck, Format, LogInfo, MessageEvent, MotD, NullEntity,
    OutgoingRequest, PlayerArtSkins, PlayerCards, PlayerInventory, PlayerProgress, PlayerQuest,
    PreconDeck, Product, ProductCatalog, RewardSchedule, SeasonAndRankDetail, Skin, StateChange,
    StateEvent, StoreStatus, Track, ZoneChange,
};
use super::registry::{ListenerId, ListenerRegistry};

macro_rules! event_catalog {
    ($( $(#[$doc:meta])* $variant:ident($payload:ty) => $listener:ident; )*) => {
        /// A decoded, strongly typed log event.
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
        pub enum DecodedEvent {
            $( $(#[$doc])* $variant($payload), )*
        }

        /// Discriminant of a [`DecodedEvent`], used to key listeners.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(rename_all = "snake_case")]
        pub enum EventKind {
            $( $(#[$doc])* $variant, )*
        }

        impl EventKind {
            /// Every kind in the catalog, in declaration order.
            pub const ALL: &'static [EventKind] = &[$( EventKind::$variant, )*];
        }

        impl DecodedEvent {
            /// The kind of this event.
            #[must_use]
            pub fn kind(&self) -> EventKind {
                match self {
                    $( Self::$variant(_) => EventKind::$variant, )*
                }
            }
        }

        impl ListenerRegistry {
            $(
                #[doc = concat!("Register a listener for [`EventKind::", stringify!($variant), "`].")]
                pub fn $listener<F>(&mut self, mut listener: F) -> ListenerId
                where
                    F: FnMut(&$payload) + Send + 'static,
                {
                    self.on(EventKind::$variant, move |event| {
                        if let DecodedEvent::$variant(payload) = event {
                            listener(payload);
                        }
                    })
                }
            )*
        }
    };
}

event_catalog! {
    // Incoming thread messages
    /// `FrontDoor.ConnectionDetails`
    ConnectionDetails(ConnectionDetails) => on_connection_details;
    /// `Deck.GetDeckLists`
    DeckLists(Vec<Deck>) => on_deck_lists;
    /// `Deck.GetPreconDecks`
    PreconDecks(Vec<PreconDeck>) => on_precon_decks;
    /// `PlayerInventory.GetCatalogStatus`
    CatalogStatus(CatalogStatus) => on_catalog_status;
    /// `Event.GetActiveEvents`
    ActiveEvents(Vec<ActiveEvent>) => on_active_events;
    /// `Event.GetCombinedRankInfo`
    CombinedRankInfo(CombinedRankInfo) => on_combined_rank_info;
    /// `Event.GetSeasonAndRankDetail`
    SeasonAndRankDetail(SeasonAndRankDetail) => on_season_and_rank_detail;
    /// `PlayerInventory.GetFormats`
    Formats(Vec<Format>) => on_formats;
    /// `PlayerInventory.GetPlayerArtSkins`
    PlayerArtSkins(PlayerArtSkins) => on_player_art_skins;
    /// `PlayerInventory.GetPlayerCards`
    PlayerCards(PlayerCards) => on_player_cards;
    /// `PlayerInventory.GetPlayerInventory`
    PlayerInventory(PlayerInventory) => on_player_inventory;
    /// `PlayerInventory.GetProductCatalog`
    ProductCatalog(ProductCatalog) => on_product_catalog;
    /// `PlayerInventory.GetRewardSchedule`
    RewardSchedule(RewardSchedule) => on_reward_schedule;
    /// `MotD.GetMotD`
    MotD(MotD) => on_motd;
    /// `Progression.GetAllTracks`
    AllTracks(Vec<Track>) => on_all_tracks;
    /// `Progression.GetPlayerProgress`
    PlayerProgress(PlayerProgress) => on_player_progress;
    /// `Mercantile.GetAllProducts`
    AllProducts(Vec<Product>) => on_all_products;
    /// `Mercantile.GetStoreStatus`
    StoreStatus(StoreStatus) => on_store_status;
    /// `Quest.GetPlayerQuests`
    PlayerQuests(Vec<PlayerQuest>) => on_player_quests;

    // Outgoing thread messages
    /// Any `==>` request other than `Log.Info`.
    OutgoingRequest(OutgoingRequest) => on_outgoing_request;
    /// `==> Log.Info`
    LogInfo(LogInfo) => on_log_info;

    // Client messages
    /// `ClientToMatchServiceMessageType_AuthenticateRequest`
    AuthenticateRequest(ClientRequest) => on_authenticate_request;
    /// `ClientToMatchServiceMessageType_ClientToMatchDoorConnectRequest`
    ConnectRequest(ClientRequest) => on_connect_request;
    /// `ClientToMatchServiceMessageType_ClientToGREMessage`
    ClientToGre(ClientRequest) => on_client_to_gre;
    /// `ClientToMatchServiceMessageType_ClientToGREUIMessage`
    ClientToGreUi(ClientRequest) => on_client_to_gre_ui;
    /// `AuthenticateResponse`
    AuthenticateResponse(ClientResponse) => on_authenticate_response;
    /// `GreToClientEvent`
    GreToClient(MessageEvent) => on_gre_to_client;
    /// `MatchGameRoomStateChangedEvent`
    RoomStateChanged(StateEvent) => on_room_state_changed;

    // Free-text sentences
    /// `Card #.. ("..") had ParentId #.. but that card did not exist in the GameState.`
    CardNotExist(CardNotExist) => on_card_not_exist;
    /// `NULL entity on {..}`
    NullEntity(NullEntity) => on_null_entity;
    /// `Skins seen: <id>=<code> ...`
    SkinsSeen(Vec<Skin>) => on_skins_seen;
    /// `STATE CHANGED <from> -> <to>`
    StateChanged(StateChange) => on_state_changed;
    /// `ZoneChange of type .. for .. had Instigator ..`
    ZoneChange(ZoneChange) => on_zone_change;
    /// `Successfully logged in to account: <name>#<number>`
    AccountLoggedIn(AccountLogin) => on_account_logged_in;
    /// Free text that matched no known sentence.
    RawLine(String) => on_raw_line;
}
