//! End-to-end tests for the watch pipeline.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use mtga_log::event::EventKind;
use mtga_log::tail::{StartPosition, TailOptions};
use mtga_log::{watch, Parser};
use tokio_util::sync::CancellationToken;

const SESSION: &str = "\
[Accounts - Startup] Successfully logged in to account: Quint#12345
[UnityCrossThreadLogger]1/15/2020 8:12:40 PM
==> Log.Info(3):
{\"method\":\"Log.Info\",\"params\":{\"messageName\":\"Client.Connected\"},\"id\":\"3\"}

[UnityCrossThreadLogger]1/15/2020 8:12:41 PM
<== PlayerInventory.GetPlayerCardsV3(4)
{
\"67740\": 4,
\"69853\": 1
}

[UnityCrossThreadLogger]1/15/2020 8:12:42 PM
<== PlayerInventory.GetPlayerInventory(5)
{ \"gems\":

[UnityCrossThreadLogger]1/15/2020 8:12:43 PM
<<<<<<<<<< ZoneChange of type Destroy for [\"Law-Rune Enforcer\" InstanceId:294, GrpId:67740] (\"Law-Rune Enforcer\") had Instigator 291 (\"Tyrant's Scorn\").

[UnityCrossThreadLogger]1/15/2020 8:12:44 PM
STATE CHANGED MatchCompleted -> Disconnected

";

fn replay() -> TailOptions {
    TailOptions {
        start: StartPosition::Beginning,
        follow: false,
        poll_interval: Duration::from_millis(10),
    }
}

/// A recorded session replays into the expected event sequence.
#[tokio::test]
async fn test_watch_replays_session() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("output_log.txt");
    std::fs::write(&path, SESSION).expect("Failed to write log");

    let kinds = Arc::new(Mutex::new(Vec::new()));
    let mut parser = Parser::new();
    for &kind in EventKind::ALL {
        let kinds = Arc::clone(&kinds);
        parser
            .registry_mut()
            .on(kind, move |event| kinds.lock().unwrap().push(event.kind()));
    }

    let summary = watch(&path, replay(), &mut parser, CancellationToken::new())
        .await
        .expect("watch failed");

    assert_eq!(
        *kinds.lock().unwrap(),
        vec![
            EventKind::AccountLoggedIn,
            EventKind::LogInfo,
            EventKind::PlayerCards,
            EventKind::ZoneChange,
            EventKind::StateChanged,
        ]
    );
    assert_eq!(summary.records, 6);
    assert_eq!(summary.events, 5);
    assert_eq!(summary.dropped, 1);
}

/// A failing listener does not stop later listeners or events.
#[tokio::test]
async fn test_failing_listener_does_not_stop_pipeline() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("output_log.txt");
    std::fs::write(&path, SESSION).expect("Failed to write log");

    let changes = Arc::new(Mutex::new(Vec::new()));
    let changes_clone = Arc::clone(&changes);
    let mut parser = Parser::new();
    parser
        .registry_mut()
        .on_zone_change(|_| panic!("listener bug"));
    parser.registry_mut().on_state_changed(move |change| {
        changes_clone.lock().unwrap().push(change.to.clone());
    });

    let summary = watch(&path, replay(), &mut parser, CancellationToken::new())
        .await
        .expect("watch failed");

    assert_eq!(summary.events, 5);
    assert_eq!(*changes.lock().unwrap(), vec!["Disconnected".to_string()]);
}

/// Cancelling a following watch ends it with the records seen so far.
#[tokio::test]
async fn test_watch_follow_cancelled() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("output_log.txt");
    std::fs::write(&path, SESSION).expect("Failed to write log");

    let options = TailOptions {
        follow: true,
        ..replay()
    };
    let cancel = CancellationToken::new();
    let stopper = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        stopper.cancel();
    });

    let mut parser = Parser::new();
    let summary = tokio::time::timeout(
        Duration::from_secs(5),
        watch(&path, options, &mut parser, cancel),
    )
    .await
    .expect("watch did not stop after cancel")
    .expect("watch failed");

    assert_eq!(summary.records, 6);
}
