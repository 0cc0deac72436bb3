//! Tests for tailing and record assembly over real files.

use std::io::Write;
use std::time::Duration;

use futures_util::StreamExt;
use mtga_log::record::records;
use mtga_log::tail::{LogTailer, StartPosition, TailOptions};
use tempfile::NamedTempFile;
use tokio_util::sync::CancellationToken;

fn replay() -> TailOptions {
    TailOptions {
        start: StartPosition::Beginning,
        follow: false,
        poll_interval: Duration::from_millis(10),
    }
}

/// Records come out in file order with their header offsets.
#[tokio::test]
async fn test_records_from_file() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    write!(
        file,
        "[UnityCrossThreadLogger]1/15/2020 8:12:44 PM\n<== MotD.GetMotD(1)\n{{}}\n\n\
         lonely\n\n\
         [UnityCrossThreadLogger]1/15/2020 8:12:45 PM\nSTATE CHANGED A -> B\n\n"
    )
    .expect("Failed to write");

    let tailer = LogTailer::open(file.path(), replay())
        .await
        .expect("Failed to open tailer");
    let collected: Vec<_> = records(tailer.lines(CancellationToken::new()))
        .collect()
        .await;

    let records: Vec<_> = collected
        .into_iter()
        .map(|r| r.expect("Unexpected tail error"))
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].offset(), Some(0));
    assert_eq!(records[0].len(), 3);
    assert_eq!(records[1].body(), ["STATE CHANGED A -> B"]);
}

/// Lines appended after opening are picked up while following.
#[tokio::test]
async fn test_follow_picks_up_appended_record() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "old content that should be skipped").expect("Failed to write");

    let options = TailOptions {
        start: StartPosition::End,
        follow: true,
        poll_interval: Duration::from_millis(10),
    };
    let tailer = LogTailer::open(file.path(), options)
        .await
        .expect("Failed to open tailer");
    let cancel = CancellationToken::new();
    let mut stream = Box::pin(records(tailer.lines(cancel.clone())));

    write!(file, "[Accounts - Startup]\nSuccessfully logged in to account: Quint#12345\n\n")
        .expect("Failed to write");
    file.flush().expect("Failed to flush");

    let record = tokio::time::timeout(Duration::from_secs(5), stream.next())
        .await
        .expect("Timed out waiting for record")
        .expect("Stream ended early")
        .expect("Unexpected tail error");
    assert_eq!(record.header(), "[Accounts - Startup]");

    cancel.cancel();
    assert!(stream.next().await.is_none());
}

/// A truncated file is re-read from the start.
#[tokio::test]
async fn test_truncation_restarts_from_zero() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "first line of a long session").expect("Failed to write");

    let mut tailer = LogTailer::open(file.path(), replay())
        .await
        .expect("Failed to open tailer");
    let first = tailer.read_new_lines().await.expect("Failed to read");
    assert_eq!(first.len(), 1);

    std::fs::write(file.path(), "new\n").expect("Failed to truncate");
    let after = tailer.read_new_lines().await.expect("Failed to read");
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].text, "new");
    assert_eq!(after[0].offset, 0);
    assert_eq!(tailer.offset(), 4);
}
