use omap::core::CodebaseAnalyzer;
use omap::formatters::HtmlReportFormatter;
use serde_json::Value;
use std::fs;

fn embedded_array(html: &str, key: &str) -> Value {
    let marker = format!("{key}: ");
    let start = html.find(&marker).unwrap() + marker.len();
    let line_end = html[start..].find('\n').unwrap() + start;
    let raw = html[start..line_end].trim_end().trim_end_matches(',');
    serde_json::from_str(raw).unwrap()
}

#[test]
fn report_embeds_nodes_links_and_stats() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("include")).unwrap();
    fs::write(dir.path().join("include/foo.h"), "#pragma once\n").unwrap();
    fs::write(dir.path().join("main.cpp"), "#include \"include/foo.h\"\nint main() {}\n").unwrap();

    let map = CodebaseAnalyzer::new().analyze(dir.path()).unwrap();
    let html = HtmlReportFormatter::new()
        .render(&map, "2024-01-02 03:04:05")
        .unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.trim_end().ends_with("</html>"));
    assert!(html.contains("GENERATED: 2024-01-02 03:04:05"));
    assert!(!html.contains("{{"));

    let nodes = embedded_array(&html, "nodes");
    assert_eq!(nodes.as_array().unwrap().len(), 2);
    assert_eq!(nodes[0]["id"], "main.cpp");
    assert_eq!(nodes[0]["lines"], 2);
    assert_eq!(nodes[1]["id"], "include/foo.h");

    let links = embedded_array(&html, "links");
    assert_eq!(
        links,
        serde_json::json!([{"source": "main.cpp", "target": "include/foo.h", "value": 2}])
    );

    assert!(html.contains("data: [1,1,0,0],"));
}

#[test]
fn render_is_deterministic_apart_from_timestamp() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::write(dir.path().join("a.py"), "import b\n").unwrap();
    fs::write(dir.path().join("b.py"), "\n").unwrap();

    let formatter = HtmlReportFormatter::new();
    let first = formatter
        .render(&CodebaseAnalyzer::new().analyze(dir.path()).unwrap(), "T")
        .unwrap();
    let second = formatter
        .render(&CodebaseAnalyzer::new().analyze(dir.path()).unwrap(), "T")
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn empty_tree_still_writes_a_document() {
    let dir = tempfile::TempDir::new().unwrap();
    let scanned = dir.path().join("empty");
    fs::create_dir_all(&scanned).unwrap();
    let out = dir.path().join("CODEBASE_MAP.html");

    let map = CodebaseAnalyzer::new().analyze(&scanned).unwrap();
    HtmlReportFormatter::new().format_to_file(&map, &out).unwrap();

    let html = fs::read_to_string(&out).unwrap();
    assert_eq!(embedded_array(&html, "nodes"), serde_json::json!([]));
    assert_eq!(embedded_array(&html, "links"), serde_json::json!([]));
    assert!(html.contains("data: [0,0,0,0],"));
}

#[test]
fn names_are_embedded_without_markup_escaping() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::write(dir.path().join("<i>x<i>.txt"), "").unwrap();

    let map = CodebaseAnalyzer::new().analyze(dir.path()).unwrap();
    let html = HtmlReportFormatter::new().render(&map, "T").unwrap();
    assert!(html.contains("\"name\":\"<i>x<i>.txt\""));
}

#[test]
fn unwritable_output_path_is_an_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let map = CodebaseAnalyzer::new().analyze(dir.path()).unwrap();
    let out = dir.path().join("no/such/dir/CODEBASE_MAP.html");

    assert!(HtmlReportFormatter::new().format_to_file(&map, &out).is_err());
    assert!(!out.exists());
}
