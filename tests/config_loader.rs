// tests/config_loader.rs

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use clipinc::config::{load_and_validate, load_config, load_optional, ConfigFile, RawConfigFile};
use clipinc::errors::ClipincError;
use clipinc::types::ExtensionMode;
use clipinc::watch::LoopOptions;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn full_config_is_loaded() -> TestResult {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("clipinc.toml");
    fs::write(
        &path,
        r#"
[watch]
directory = "/home/me/Downloads"
partial_suffixes = [".crdownload", ".part"]
extension_mode = "last"
shutdown_timeout_ms = 250
"#,
    )?;

    let cfg = load_and_validate(&path)?;
    assert_eq!(cfg.directory(), Some(&PathBuf::from("/home/me/Downloads")));
    assert_eq!(cfg.shutdown_timeout(), Duration::from_millis(250));

    let options = cfg.loop_options();
    assert_eq!(options.extension_mode, ExtensionMode::Last);
    assert!(options.is_partial_download("video.mp4.part"));
    assert!(options.is_partial_download("video.mp4.crdownload"));
    Ok(())
}

#[test]
fn empty_config_uses_defaults() -> TestResult {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("clipinc.toml");
    fs::write(&path, "")?;

    let cfg = load_and_validate(&path)?;
    assert_eq!(cfg.directory(), None);
    assert_eq!(cfg.shutdown_timeout(), Duration::from_millis(800));
    assert_eq!(cfg.loop_options(), LoopOptions::default());
    assert!(cfg.clipboard_commands().is_none());
    Ok(())
}

#[test]
fn missing_file_is_optional() -> TestResult {
    let tmp = tempfile::tempdir()?;
    let cfg = load_optional(tmp.path().join("nope.toml"))?;
    assert_eq!(cfg.loop_options(), LoopOptions::default());
    Ok(())
}

#[test]
fn explicit_config_path_must_exist() -> TestResult {
    let tmp = tempfile::tempdir()?;
    let missing = tmp.path().join("typo.toml");

    let err = load_config(Some(missing.as_path())).unwrap_err();
    assert!(matches!(err, ClipincError::IoError(_)));
    Ok(())
}

#[test]
fn explicit_config_path_is_loaded() -> TestResult {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("custom.toml");
    fs::write(&path, "[watch]\nshutdown_timeout_ms = 50\n")?;

    let cfg = load_config(Some(path.as_path()))?;
    assert_eq!(cfg.shutdown_timeout(), Duration::from_millis(50));
    Ok(())
}

#[test]
fn unknown_extension_mode_is_rejected() -> TestResult {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("clipinc.toml");
    fs::write(&path, "[watch]\nextension_mode = \"some\"\n")?;

    let err = load_and_validate(&path).unwrap_err();
    assert!(matches!(err, ClipincError::TomlError(_)));
    Ok(())
}

#[test]
fn empty_partial_suffix_is_rejected() {
    let raw: RawConfigFile = toml::from_str("[watch]\npartial_suffixes = [\"\"]\n").unwrap();
    let err = ConfigFile::try_from(raw).unwrap_err();
    assert!(matches!(err, ClipincError::ConfigError(_)));
}

#[test]
fn zero_shutdown_timeout_is_rejected() {
    let raw: RawConfigFile = toml::from_str("[watch]\nshutdown_timeout_ms = 0\n").unwrap();
    let err = ConfigFile::try_from(raw).unwrap_err();
    assert!(matches!(err, ClipincError::ConfigError(_)));
}

#[test]
fn extension_mode_parses_from_str() {
    assert_eq!("ALL".parse::<ExtensionMode>(), Ok(ExtensionMode::All));
    assert_eq!(" last ".parse::<ExtensionMode>(), Ok(ExtensionMode::Last));
    assert!("both".parse::<ExtensionMode>().is_err());
}

#[test]
fn clipboard_commands_are_loaded() -> TestResult {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("clipinc.toml");
    fs::write(
        &path,
        r#"
[clipboard]
read_command = ["xsel", "--clipboard", "--output"]
write_command = ["xsel", "--clipboard", "--input"]
"#,
    )?;

    let cfg = load_and_validate(&path)?;
    let (read, write) = cfg.clipboard_commands().unwrap();
    assert_eq!(read.to_vec(), vec!["xsel", "--clipboard", "--output"]);
    assert_eq!(write[2], "--input");
    Ok(())
}

#[test]
fn clipboard_commands_must_come_in_pairs() {
    let raw: RawConfigFile =
        toml::from_str("[clipboard]\nread_command = [\"xsel\", \"-o\"]\n").unwrap();
    let err = ConfigFile::try_from(raw).unwrap_err();
    assert!(matches!(err, ClipincError::ConfigError(_)));

    let raw: RawConfigFile =
        toml::from_str("[clipboard]\nread_command = []\nwrite_command = [\"wl-copy\"]\n").unwrap();
    assert!(ConfigFile::try_from(raw).is_err());
}
