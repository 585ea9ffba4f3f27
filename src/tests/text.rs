use super::{flatten, TextFormat};
use crate::formats::{Format, OutputFormat};
use crate::parser::parse;

#[test]
fn test_flatten_region_and_location() {
    let doc = parse("---\n## China\n*overview\n\n### Beijing\n*desc\n").unwrap();

    assert_eq!(
        flatten(&doc),
        "[China]\n## China\n*overview\n\n[Beijing]\n### Beijing\n*desc"
    );
}

#[test]
fn test_single_entry_has_no_separator() {
    let doc = parse("## Region(north)\n*text").unwrap();
    assert_eq!(flatten(&doc), "[Region]\n## Region(north)\n*text");
}

#[test]
fn test_render_matches_flatten() {
    let doc = parse("## A\n### B\n---\n## C").unwrap();
    assert_eq!(TextFormat.render(&doc).unwrap(), flatten(&doc));
    assert_eq!(TextFormat.file_extension(), "txt");
}

#[test]
fn test_output_format_names() {
    assert_eq!(OutputFormat::from_name("json"), Some(OutputFormat::Json));
    assert_eq!(OutputFormat::from_name(" Text "), Some(OutputFormat::Text));
    assert_eq!(OutputFormat::from_name("txt"), Some(OutputFormat::Text));
    assert_eq!(OutputFormat::from_name("yaml"), None);
    assert_eq!(OutputFormat::Text.formatter(true).name(), "text");
    assert_eq!(OutputFormat::Json.formatter(false).name(), "json");
}
