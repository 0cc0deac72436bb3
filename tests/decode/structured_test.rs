//! Tests for JSON message decoding and classification.

use mtga_log::decode::{DecodeError, Decoder};
use mtga_log::event::DecodedEvent;
use mtga_log::record::{classify, ClassifyError, ClientMethod, Origin, RawRecord, RecordShape};

fn record(lines: &[&str]) -> RawRecord {
    RawRecord::from_lines(lines.iter().copied()).expect("record should not be empty")
}

#[test]
fn incoming_player_inventory() {
    let classified = classify(record(&[
        "[UnityCrossThreadLogger]1/15/2020 8:12:44 PM",
        "<== PlayerInventory.GetPlayerInventory(5)",
        "{",
        r#""playerId": "ABC", "gems": 1200, "gold": 5375, "wcCommon": 10"#,
        "}",
    ]))
    .unwrap();

    let event = Decoder::new().decode(&classified).unwrap();
    match event {
        Some(DecodedEvent::PlayerInventory(inventory)) => {
            assert_eq!(inventory.gems, 1200);
            assert_eq!(inventory.gold, 5375);
        }
        other => panic!("Expected PlayerInventory, got {other:?}"),
    }
}

#[test]
fn incoming_versioned_method() {
    let classified = classify(record(&[
        "[UnityCrossThreadLogger]1/15/2020 8:12:44 PM",
        "<== Deck.GetDeckListsV3(9)",
        "[",
        r#"{"id": "d-1", "name": "Gruul Aggro", "mainDeck": [69853, 4, 70145, 2]}"#,
        "]",
    ]))
    .unwrap();

    match Decoder::new().decode(&classified).unwrap() {
        Some(DecodedEvent::DeckLists(decks)) => {
            assert_eq!(decks.len(), 1);
            let cards = decks[0].main_cards();
            assert_eq!(cards.len(), 2);
            assert_eq!(cards[1].grp_id, 70145);
            assert_eq!(cards[1].quantity, 2);
        }
        other => panic!("Expected DeckLists, got {other:?}"),
    }
}

#[test]
fn incoming_truncated_json_is_a_fault() {
    let classified = classify(record(&[
        "[UnityCrossThreadLogger]1/15/2020 8:12:44 PM",
        "<== PlayerInventory.GetPlayerInventory(5)",
        "{",
        r#""gems": 12"#,
    ]))
    .unwrap();

    let result = Decoder::new().decode(&classified);
    assert!(matches!(result, Err(DecodeError::Json(_))));
}

#[test]
fn outgoing_log_info() {
    let classified = classify(record(&[
        "[UnityCrossThreadLogger]6/6/2019 8:35:41 PM",
        "==> Log.Info(8):",
        r#"{"method":"Log.Info","params":{"messageName":"DuelScene.EndOfMatchReport"},"id":"8"}"#,
    ]))
    .unwrap();

    match Decoder::new().decode(&classified).unwrap() {
        Some(DecodedEvent::LogInfo(info)) => {
            assert_eq!(info.id.as_deref(), Some("8"));
            assert_eq!(info.params["messageName"], "DuelScene.EndOfMatchReport");
        }
        other => panic!("Expected LogInfo, got {other:?}"),
    }
}

#[test]
fn client_message_keeps_route() {
    let classified = classify(record(&[
        "[Client GRE]1/15/2020 8:12:44 PM: Match to A1B2: GreToClientEvent",
        r#"{ "transactionId": "t-1", "greToClientEvent": { "greToClientMessages": [ {"type": "GREMessageType_GameStateMessage"} ] } }"#,
    ]))
    .unwrap();

    assert_eq!(classified.origin, Origin::ClientGre);
    match &classified.shape {
        RecordShape::Client { route, method } => {
            assert_eq!(route, "Match to A1B2");
            assert_eq!(*method, ClientMethod::GreToClient);
        }
        other => panic!("Expected client shape, got {other:?}"),
    }

    match Decoder::new().decode(&classified).unwrap() {
        Some(DecodedEvent::GreToClient(message)) => {
            assert_eq!(message.gre_to_client_event.gre_to_client_messages.len(), 1);
        }
        other => panic!("Expected GreToClient, got {other:?}"),
    }
}

#[test]
fn malformed_timestamp_is_a_framing_fault() {
    let result = classify(record(&[
        "[UnityCrossThreadLogger]1/99/2020 8:12:44 PM",
        "<== MotD.GetMotD(1)",
        "{}",
    ]));
    assert!(matches!(result, Err(ClassifyError::MalformedTimestamp(_))));
}
