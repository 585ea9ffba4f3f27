use super::{from_json, JsonFormat};
use crate::formats::Format;
use crate::parser::parse;

#[test]
fn test_pretty_uses_two_space_indent() {
    let doc = parse("## China\n*overview").unwrap();
    let json = JsonFormat { pretty: true }.render(&doc).unwrap();

    assert!(json.starts_with("{\n  \"entries\": {\n    \"0\": {"));
}

#[test]
fn test_compact_is_one_line() {
    let doc = parse("## China\n*overview\n### Beijing\n*desc").unwrap();
    let json = JsonFormat { pretty: false }.render(&doc).unwrap();

    assert!(!json.contains('\n'));
    assert!(json.starts_with("{\"entries\":{\"0\":{"));
}

#[test]
fn test_reads_rendered_output_back() {
    let doc = parse("## China\n*overview\n### Beijing\n*desc").unwrap();
    let json = JsonFormat { pretty: true }.render(&doc).unwrap();

    assert_eq!(from_json(&json).unwrap(), doc);
}

#[test]
fn test_rejects_other_json() {
    assert!(from_json("{\"items\": []}").is_err());
    assert!(from_json("not json").is_err());
}

#[test]
fn test_format_metadata() {
    let format = JsonFormat { pretty: true };
    assert_eq!(format.name(), "json");
    assert_eq!(format.file_extension(), "json");
}
