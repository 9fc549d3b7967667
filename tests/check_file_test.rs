use rs_grader::{check_html, check_html_file, run, Error, Options, Source};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

const PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><title>Bitstarter</title></head>
<body>
    <h1 class="title">Bitstarter</h1>
    <div id="video"><iframe src="https://example.com/embed"></iframe></div>
    <a href="/faq">FAQ</a>
    <form><input type="submit" value="Go"></form>
</body>
</html>"#;

#[test]
fn file_report_maps_each_selector() {
    let dir = TempDir::new().expect("temp dir");
    let html = write(&dir, "index.html", PAGE);
    let checks = write(
        &dir,
        "checks.json",
        r##"["h1", ".title", "#video", "a[href]", "input[type=submit]", "footer", "#missing"]"##,
    );

    let report = check_html_file(&html, &checks).expect("check");
    let got: Vec<(&str, bool)> = report.iter().collect();
    assert_eq!(
        got,
        vec![
            ("h1", true),
            (".title", true),
            ("#video", true),
            ("a[href]", true),
            ("input[type=submit]", true),
            ("footer", false),
            ("#missing", false),
        ]
    );
}

#[test]
fn empty_checks_produce_empty_object() {
    let dir = TempDir::new().expect("temp dir");
    let html = write(&dir, "index.html", PAGE);
    let checks = write(&dir, "checks.json", "[]");

    let report = check_html_file(&html, &checks).expect("check");
    assert!(report.is_empty());
    assert_eq!(report.to_pretty_json().expect("serialize"), "{}");
}

#[test]
fn output_round_trips_as_flat_boolean_object() {
    let report = check_html("<html><h1>Hi</h1></html>", &["h1", "h2", "h1"]).expect("check");
    let value: serde_json::Value =
        serde_json::from_str(&report.to_pretty_json().expect("serialize")).expect("parse");

    let object = value.as_object().expect("object");
    assert_eq!(object.len(), 2);
    assert_eq!(object["h1"], serde_json::Value::Bool(true));
    assert_eq!(object["h2"], serde_json::Value::Bool(false));
}

#[test]
fn malformed_checks_file_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    let html = write(&dir, "index.html", PAGE);
    let checks = write(&dir, "checks.json", r#"{"not": "an array"}"#);

    match check_html_file(&html, &checks) {
        Err(Error::InvalidChecks { path, .. }) => assert_eq!(path, checks),
        other => panic!("expected InvalidChecks, got {other:?}"),
    }
}

#[test]
fn invalid_selector_is_reported() {
    let result = check_html("<p></p>", &["p", "div[", "span"]);
    assert!(matches!(result, Err(Error::InvalidSelector(ref s)) if s == "div["));
}

#[test]
fn unreadable_html_file_is_io_error() {
    let dir = TempDir::new().expect("temp dir");
    let checks = write(&dir, "checks.json", r#"["h1"]"#);

    // A directory exists but cannot be read as a file.
    let result = check_html_file(dir.path(), &checks);
    assert!(matches!(result, Err(Error::Io { .. })));
}

#[tokio::test]
async fn run_uses_checks_file_from_options() {
    let dir = TempDir::new().expect("temp dir");
    let html = write(&dir, "index.html", PAGE);
    let checks = write(&dir, "my-checks.json", r#"["title", "nav"]"#);

    let options = Options {
        checks_file: checks,
        ..Options::default()
    };
    let report = run(&Source::File(html), &options).await.expect("run");
    assert_eq!(report.get("title"), Some(true));
    assert_eq!(report.get("nav"), Some(false));
}

#[tokio::test]
async fn run_reports_missing_checks_file() {
    let dir = TempDir::new().expect("temp dir");
    let html = write(&dir, "index.html", PAGE);
    let options = Options {
        checks_file: Path::new("no/such/checks.json").to_path_buf(),
        ..Options::default()
    };

    let result = run(&Source::File(html), &options).await;
    assert!(matches!(result, Err(Error::Io { .. })));
}
