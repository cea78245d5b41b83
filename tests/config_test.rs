// tests/config_test.rs
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use release_stamp::config::{load_config, Config, CONFIG_FILE_NAME};
use release_stamp::domain::VersionTriple;
use release_stamp::ReleaseStampError;
use serial_test::serial;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.version.triple(), VersionTriple::new(0, 0, 0));
    assert_eq!(config.repository.tag_prefix, "v");
    assert_eq!(config.artifact.path, PathBuf::from("version.py"));
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[version]
major = 0
minor = 0
micro = 2

[repository]
path = "../checkout"
tag_prefix = "release-"

[artifact]
path = "src/packutil/version.py"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path())).unwrap();
    assert_eq!(config.version.triple(), VersionTriple::new(0, 0, 2));
    assert_eq!(config.repository.path, PathBuf::from("../checkout"));
    assert_eq!(config.repository.tag_prefix, "release-");
    assert_eq!(
        config.artifact.path,
        PathBuf::from("src/packutil/version.py")
    );
}

#[test]
fn test_missing_sections_use_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[version]\nmajor = 3\n").unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path())).unwrap();
    assert_eq!(config.version.triple(), VersionTriple::new(3, 0, 0));
    assert_eq!(config.repository.path, PathBuf::from("."));
    assert_eq!(config.artifact.path, PathBuf::from("version.py"));
}

#[test]
fn test_missing_explicit_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = load_config(Some(temp_dir.path().join("absent.toml").as_path()));
    assert!(matches!(result, Err(ReleaseStampError::Io(_))));
}

#[test]
fn test_malformed_file_is_config_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[version\nmajor = 1\n").unwrap();
    temp_file.flush().unwrap();

    let result = load_config(Some(temp_file.path()));
    assert!(matches!(result, Err(ReleaseStampError::Config(_))));
}

#[test]
#[serial]
fn test_load_from_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(CONFIG_FILE_NAME),
        "[version]\nminor = 7\n",
    )
    .unwrap();

    let original_dir = env::current_dir().unwrap();
    env::set_current_dir(temp_dir.path()).expect("Could not change to temp dir");
    let result = load_config(None);
    env::set_current_dir(original_dir).unwrap();

    let config = result.expect("Should load config from working directory");
    assert_eq!(config.version.triple(), VersionTriple::new(0, 7, 0));
}
