// tests/console.rs

use std::error::Error;
use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::BufReader;

use clipinc::buffer::MemoryBuffer;
use clipinc::console::{parse_command, split_args, Command, Console};
use clipinc::watch::{LoopOptions, WatchSupervisor, WatchedPath};
use clipinc_test_utils::{init_tracing, with_timeout, FakeSource};

type TestResult = Result<(), Box<dyn Error>>;

fn supervisor(source: &FakeSource) -> Arc<WatchSupervisor> {
    Arc::new(
        WatchSupervisor::new(
            WatchedPath::default(),
            Arc::new(source.clone()),
            Arc::new(MemoryBuffer::new()),
            LoopOptions::default(),
        )
        .with_shutdown_timeout(Duration::from_millis(200)),
    )
}

fn console(input: String, supervisor: &Arc<WatchSupervisor>) -> Console<BufReader<Cursor<Vec<u8>>>> {
    Console::new(
        BufReader::new(Cursor::new(input.into_bytes())),
        Arc::clone(supervisor),
    )
}

#[test]
fn split_keeps_quoted_paths_together() {
    assert_eq!(
        split_args(r#"change "C:/users/my name/Desktop/Test Folder""#),
        vec!["change", "C:/users/my name/Desktop/Test Folder"]
    );
    assert_eq!(split_args("  dir   extra "), vec!["dir", "extra"]);
    assert!(split_args("   ").is_empty());
}

#[test]
fn commands_are_case_insensitive_with_aliases() {
    assert_eq!(parse_command("HELP"), Some(Command::Help));
    assert_eq!(parse_command("dir"), Some(Command::Directory));
    assert_eq!(parse_command("Directory"), Some(Command::Directory));
    assert_eq!(parse_command("open"), Some(Command::Open));
    for word in ["exit", "Stop", "QUIT"] {
        assert_eq!(parse_command(word), Some(Command::Exit));
    }
    assert_eq!(parse_command(""), None);
    assert_eq!(
        parse_command("frobnicate now"),
        Some(Command::Unknown("frobnicate".to_string()))
    );
}

#[test]
fn change_takes_an_optional_path() {
    assert_eq!(parse_command("change"), Some(Command::Change(None)));
    assert_eq!(
        parse_command(r#"change "/tmp/with space""#),
        Some(Command::Change(Some("/tmp/with space".to_string())))
    );
}

#[tokio::test]
async fn change_to_existing_directory_starts_watching() -> TestResult {
    init_tracing();
    let tmp = tempfile::tempdir()?;
    let source = FakeSource::new();
    let supervisor = supervisor(&source);

    let input = format!("change \"{}\"\ndir\nexit\nchange /never/reached\n", tmp.path().display());
    with_timeout(console(input, &supervisor).run()).await?;

    assert_eq!(source.registered(), vec![tmp.path().to_path_buf()]);
    assert!(supervisor.is_active().await);
    supervisor.shutdown().await;
    Ok(())
}

#[tokio::test]
async fn missing_directory_is_created_after_yes() -> TestResult {
    init_tracing();
    let tmp = tempfile::tempdir()?;
    let target = tmp.path().join("new folder");
    let source = FakeSource::new();
    let supervisor = supervisor(&source);

    let input = format!("change \"{}\"\nmaybe\ny\nexit\n", target.display());
    with_timeout(console(input, &supervisor).run()).await?;

    assert!(target.is_dir());
    assert_eq!(source.registered(), vec![target.clone()]);
    supervisor.shutdown().await;
    Ok(())
}

#[tokio::test]
async fn declining_keeps_the_current_session() -> TestResult {
    init_tracing();
    let tmp = tempfile::tempdir()?;
    let target = tmp.path().join("not created");
    let source = FakeSource::new();
    let supervisor = supervisor(&source);
    supervisor.change_directory(tmp.path()).await?;

    let input = format!("change \"{}\"\nno\nexit\n", target.display());
    with_timeout(console(input, &supervisor).run()).await?;

    assert!(!target.exists());
    assert_eq!(source.registered(), vec![tmp.path().to_path_buf()]);
    assert_eq!(supervisor.active_dir().await, Some(tmp.path().to_path_buf()));
    supervisor.shutdown().await;
    Ok(())
}

#[tokio::test]
async fn change_without_argument_prompts_until_non_empty() -> TestResult {
    init_tracing();
    let tmp = tempfile::tempdir()?;
    let source = FakeSource::new();
    let supervisor = supervisor(&source);

    let input = format!("change\n\n   \n{}\nexit\n", tmp.path().display());
    with_timeout(console(input, &supervisor).run()).await?;

    assert_eq!(source.registered(), vec![tmp.path().to_path_buf()]);
    supervisor.shutdown().await;
    Ok(())
}

#[tokio::test]
async fn unknown_commands_and_eof_end_quietly() -> TestResult {
    init_tracing();
    let source = FakeSource::new();
    let supervisor = supervisor(&source);

    let input = "bogus\nhelp\ndir\n".to_string();
    with_timeout(console(input, &supervisor).run()).await?;

    assert!(source.registered().is_empty());
    assert!(!supervisor.is_active().await);
    Ok(())
}

#[tokio::test]
async fn registration_failure_is_reported_not_fatal() -> TestResult {
    init_tracing();
    let tmp = tempfile::tempdir()?;
    let source = FakeSource::new();
    source.fail_registration(true);
    let supervisor = supervisor(&source);

    let input = format!("change \"{}\"\nexit\n", tmp.path().display());
    with_timeout(console(input, &supervisor).run()).await?;

    assert!(!supervisor.is_active().await);
    assert_eq!(supervisor.paths().get(), Some(PathBuf::from(tmp.path())));
    Ok(())
}
