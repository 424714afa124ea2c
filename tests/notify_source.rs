// tests/notify_source.rs

//! Exercises the real `notify` backend against a temporary directory.

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use notify::event::{CreateKind, ModifyKind, RemoveKind, RenameMode};
use notify::{Event, EventKind};

use clipinc::buffer::{MemoryBuffer, TextBuffer};
use clipinc::errors::ClipincError;
use clipinc::types::LoopExit;
use clipinc::watch::notify_source::{collect_batch, translate_event};
use clipinc::watch::{
    cancel_pair, LoopOptions, NotificationSource, NotifySource, WatchEvent, WatchEventKind,
    WatchLoop, WatchedPath,
};
use clipinc_test_utils::{init_tracing, wait_until, with_timeout};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn creation_and_rename_to_count_as_created() {
    let created = Event::new(EventKind::Create(CreateKind::File)).add_path(PathBuf::from("/d/a 1.png"));
    assert_eq!(translate_event(&created), vec![WatchEvent::created("a 1.png")]);

    let renamed = Event::new(EventKind::Modify(ModifyKind::Name(RenameMode::Both)))
        .add_path(PathBuf::from("/d/movie.crdownload"))
        .add_path(PathBuf::from("/d/movie 2.mp4"));
    assert_eq!(translate_event(&renamed), vec![WatchEvent::created("movie 2.mp4")]);

    let removed = Event::new(EventKind::Remove(RemoveKind::File)).add_path(PathBuf::from("/d/x"));
    assert_eq!(translate_event(&removed)[0].kind, WatchEventKind::Other);
}

#[test]
fn events_before_a_source_error_are_kept() {
    let created = |name: &str| -> notify::Result<Event> {
        Ok(Event::new(EventKind::Create(CreateKind::File)).add_path(PathBuf::from("/d").join(name)))
    };

    let (batch, err) = collect_batch(vec![
        created("a 1.png"),
        created("b 1.png"),
        Err(notify::Error::generic("queue overflow")),
        created("c 1.png"),
    ]);

    assert_eq!(
        batch,
        vec![WatchEvent::created("a 1.png"), WatchEvent::created("b 1.png")]
    );
    assert!(matches!(err, Some(ClipincError::NotificationSource(_))));

    let (batch, err) = collect_batch(vec![created("d 1.png")]);
    assert_eq!(batch, vec![WatchEvent::created("d 1.png")]);
    assert!(err.is_none());
}

#[test]
fn missing_directory_fails_registration() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("missing");

    let err = NotifySource::new().register(&missing).err().unwrap();
    assert!(matches!(err, ClipincError::Registration { .. }));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn new_file_updates_buffer() -> TestResult {
    init_tracing();
    let tmp = tempfile::tempdir()?;
    let buffer = MemoryBuffer::new();
    let shared: Arc<dyn TextBuffer> = Arc::new(buffer.clone());

    let registered = WatchLoop::register(
        &WatchedPath::new(Some(tmp.path().to_path_buf())),
        &NotifySource::new(),
        shared,
        Arc::new(LoopOptions::default()),
    )?;
    let (cancel, signal) = cancel_pair();
    let task = tokio::spawn(registered.run(signal));

    fs::write(tmp.path().join("movie.part.crdownload"), b"partial")?;
    fs::write(tmp.path().join("Report (3).pdf"), b"%PDF")?;

    with_timeout(wait_until(|| buffer.text().as_deref() == Some("Report (4)"))).await;
    assert!(buffer.writes().iter().all(|w| w == "Report (4)"));

    cancel.cancel();
    assert_eq!(with_timeout(task).await??, LoopExit::Cancelled);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn removing_the_directory_invalidates_the_session() -> TestResult {
    init_tracing();
    let tmp = tempfile::tempdir()?;
    let dir = tmp.path().join("watched");
    fs::create_dir(&dir)?;

    let registered = WatchLoop::register(
        &WatchedPath::new(Some(dir.clone())),
        &NotifySource::new(),
        Arc::new(MemoryBuffer::new()),
        Arc::new(LoopOptions::default()),
    )?;
    let (_cancel, signal) = cancel_pair();
    let task = tokio::spawn(registered.run(signal));

    fs::remove_dir(&dir)?;

    assert_eq!(with_timeout(task).await??, LoopExit::Invalidated);
    Ok(())
}
