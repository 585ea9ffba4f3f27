use super::Config;
use crate::formats::OutputFormat;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("worldbook.toml"));

    assert_eq!(config, Config::default());
    assert_eq!(config.format, OutputFormat::Json);
    assert!(config.pretty);
}

#[test]
fn test_file_overrides_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "format = \"text\"\npretty = false").unwrap();

    let config = Config::load_from(file.path());

    assert_eq!(config.format, OutputFormat::Text);
    assert!(!config.pretty);
}

#[test]
fn test_invalid_file_uses_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "pretty = [not toml").unwrap();

    assert_eq!(Config::load_from(file.path()), Config::default());
}

#[test]
fn test_unknown_format_is_resolved_at_load() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "format = \"yaml\"\npretty = false").unwrap();

    let config = Config::load_from(file.path());

    assert_eq!(config.format, OutputFormat::Json);
    assert!(!config.pretty);
}
