//! Tests for free-text sentence decoding through the public parser API.

use std::sync::{Arc, Mutex};

use mtga_log::event::payload::{ZoneChange, ZoneChangeType};
use mtga_log::event::{DecodedEvent, EventKind};
use mtga_log::record::RawRecord;
use mtga_log::Parser;

fn parse(lines: &[&str]) -> Option<DecodedEvent> {
    let record = RawRecord::from_lines(lines.iter().copied()).expect("record should not be empty");
    Parser::new().decode(record)
}

#[test]
fn zone_change_after_timestamp_header() {
    let event = parse(&[
        "[UnityCrossThreadLogger]1/15/2020 8:12:44 PM",
        r#"<<<<<<<<<< ZoneChange of type Destroy for ["Law-Rune Enforcer" InstanceId:294, GrpId:67740] ("Law-Rune Enforcer") had Instigator 291 ("Tyrant's Scorn")."#,
    ]);

    assert_eq!(
        event,
        Some(DecodedEvent::ZoneChange(ZoneChange {
            kind: ZoneChangeType::Destroy,
            target: "Law-Rune Enforcer".to_string(),
            instance_id: 294,
            grp_id: 67740,
            instigator: 291,
            source: "Tyrant's Scorn".to_string(),
        }))
    );
}

#[test]
fn zone_change_with_null_target() {
    let event = parse(&[
        r#"<<<<<<<<<< ZoneChange of type ZeroToughness for 338 ("[NULL]") had Instigator 334 ("Cry of the Carnarium")."#,
    ]);

    match event {
        Some(DecodedEvent::ZoneChange(change)) => {
            assert_eq!(change.kind, ZoneChangeType::ZeroToughness);
            assert_eq!(change.target, "NULL");
            assert_eq!(change.grp_id, 0);
            assert_eq!(change.instance_id, 338);
            assert_eq!(change.instigator, 334);
            assert_eq!(change.source, "Cry of the Carnarium");
        }
        other => panic!("Expected ZoneChange, got {other:?}"),
    }
}

#[test]
fn skins_seen_after_tag() {
    let event = parse(&["[UnityCrossThreadLogger]Skins seen: 68286=DA 68355=DA 68454=DA ."]);

    match event {
        Some(DecodedEvent::SkinsSeen(skins)) => {
            let ids: Vec<u64> = skins.iter().map(|s| s.id).collect();
            assert_eq!(ids, vec![68286, 68355, 68454]);
            assert!(skins.iter().all(|s| s.code == "DA"));
        }
        other => panic!("Expected SkinsSeen, got {other:?}"),
    }
}

#[test]
fn skins_seen_repeated_id_listed_once() {
    let event = parse(&["[UnityCrossThreadLogger]Skins seen: 69853=DA 68740=DA 69706=DA 69706=DA ."]);

    match event {
        Some(DecodedEvent::SkinsSeen(skins)) => {
            let ids: Vec<u64> = skins.iter().map(|s| s.id).collect();
            assert_eq!(ids, vec![69853, 68740, 69706]);
            assert!(skins.iter().all(|s| s.code == "DA"));
        }
        other => panic!("Expected SkinsSeen, got {other:?}"),
    }
}

#[test]
fn card_not_exist_sentence() {
    let event = parse(&[
        "[UnityCrossThreadLogger]1/15/2020 8:12:44 PM",
        r#"Card #491 ("Zombie") had ParentId #490 but that card did not exist in the GameState."#,
    ]);

    match event {
        Some(DecodedEvent::CardNotExist(card)) => {
            assert_eq!(card.card_id, 491);
            assert_eq!(card.card_name, "Zombie");
            assert_eq!(card.parent_id, 490);
        }
        other => panic!("Expected CardNotExist, got {other:?}"),
    }
}

#[test]
fn state_changed_sentence() {
    let event = parse(&["[UnityCrossThreadLogger]STATE CHANGED MatchCompleted -> Disconnected"]);

    match event {
        Some(DecodedEvent::StateChanged(change)) => {
            assert_eq!(change.from, "MatchCompleted");
            assert_eq!(change.to, "Disconnected");
        }
        other => panic!("Expected StateChanged, got {other:?}"),
    }
}

#[test]
fn account_login_from_startup_tag() {
    let event = parse(&["[Accounts - Startup] Successfully logged in to account: Quint#12345"]);

    match event {
        Some(DecodedEvent::AccountLoggedIn(login)) => {
            assert_eq!(login.name, "Quint");
            assert_eq!(login.number, "12345");
        }
        other => panic!("Expected AccountLoggedIn, got {other:?}"),
    }
}

#[test]
fn account_login_with_extra_hash_is_ignored() {
    let event = parse(&["[Accounts - Startup] Successfully logged in to account: Qu#int#12345"]);
    assert!(event.is_none());
}

#[test]
fn null_entity_sentence() {
    let event = parse(&[
        r#"[UnityCrossThreadLogger]NULL entity on { "id": 2450, "affectorId": 329, "affectedIds": [ 329 ], "type": [ "AnnotationType_TargetSpec" ], "details": [ { "key": "abilityGrpId", "type": "KeyValuePairValueType_int32", "valueInt32": [ 1095 ] } ] }"#,
    ]);

    match event {
        Some(DecodedEvent::NullEntity(entity)) => {
            assert_eq!(entity.id, 2450);
            assert_eq!(entity.affected_ids.as_slice(), &[329]);
            assert_eq!(entity.details.len(), 1);
        }
        other => panic!("Expected NullEntity, got {other:?}"),
    }
}

#[test]
fn unmatched_sentence_reaches_raw_line_listener() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = Arc::clone(&seen);

    let mut parser = Parser::new();
    parser
        .registry_mut()
        .on_raw_line(move |text| seen_clone.lock().unwrap().push(text.clone()));

    let record = RawRecord::from_lines(["Loading scene: Home"]).unwrap();
    assert_eq!(parser.parse_record(record), Some(EventKind::RawLine));
    assert_eq!(*seen.lock().unwrap(), vec!["Loading scene: Home".to_string()]);
}
