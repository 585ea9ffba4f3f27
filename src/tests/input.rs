use super::{normalize_line_endings, output_path, read_source, write_output};
use crate::formats::json::JsonFormat;
use crate::formats::text::TextFormat;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_normalize_line_endings() {
    assert_eq!(normalize_line_endings("a\r\nb\rc\n"), "a\nb\nc\n");
}

#[test]
fn test_read_source_normalises_crlf() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "---\r\n## China\r\n### Beijing\r\n").unwrap();

    let text = read_source(Some(file.path())).unwrap();
    assert_eq!(text, "---\n## China\n### Beijing\n");
}

#[test]
fn test_read_source_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(read_source(Some(dir.path().join("absent.md").as_path())).is_err());
}

#[test]
fn test_output_path_in_directory() {
    let dir = tempfile::tempdir().unwrap();

    assert_eq!(
        output_path(dir.path(), &JsonFormat { pretty: true }),
        dir.path().join("worldbook.json")
    );
    assert_eq!(
        output_path(dir.path(), &TextFormat),
        dir.path().join("worldbook.txt")
    );
}

#[test]
fn test_output_path_for_file() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("lore.json");

    assert_eq!(output_path(&target, &TextFormat), target);
}

#[test]
fn test_write_output_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("out.json");

    write_output(Some(target.as_path()), "{}").unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), "{}");
}
