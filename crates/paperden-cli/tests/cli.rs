use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn bin_path() -> PathBuf {
    if let Some(path) = env::var_os("CARGO_BIN_EXE_paperden-cli") {
        return PathBuf::from(path);
    }
    if let Some(path) = env::var_os("CARGO_BIN_EXE_paperden_cli") {
        return PathBuf::from(path);
    }
    let exe = env::current_exe().expect("current exe");
    let mut debug_dir = exe.as_path();
    while let Some(parent) = debug_dir.parent() {
        if parent.file_name().and_then(|name| name.to_str()) == Some("debug") {
            let candidate = parent.join("paperden-cli");
            if candidate.exists() {
                return candidate;
            }
        }
        debug_dir = parent;
    }
    panic!("binary path missing");
}

fn temp_path(name: &str, ext: &str) -> PathBuf {
    let now = SystemTime::now().duration_since(UNIX_EPOCH).expect("time");
    env::temp_dir().join(format!(
        "paperden_cli_{}_{}_{}.{}",
        name,
        now.as_secs(),
        now.subsec_nanos(),
        ext
    ))
}

fn temp_file(name: &str, ext: &str, contents: &str) -> PathBuf {
    let path = temp_path(name, ext);
    fs::write(&path, contents).expect("write temp file");
    path
}

#[test]
fn paper_renders_header_and_body() {
    let input = temp_file(
        "paper",
        "md",
        "---\ntitle: Warrens\nauthor: Eden\n---\n# Digging\n\nSoft ground only.\n",
    );
    let output = Command::new(bin_path())
        .arg(input.to_str().expect("path"))
        .output()
        .expect("run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("<h1>Warrens</h1>"), "stdout: {}", stdout);
    assert!(stdout.contains("<strong>Author:</strong> Eden"));
    assert!(stdout.contains("<h1>Digging</h1>"));
    assert!(stdout.contains("<p>Soft ground only.</p>"));
}

#[test]
fn missing_paper_prints_the_fallback_and_fails() {
    let missing = temp_path("does_not_exist", "md");
    let output = Command::new(bin_path())
        .args(["paper", missing.to_str().expect("path")])
        .output()
        .expect("run");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Oops! Could not load this paper."));
    assert!(stdout.contains("Paper not found:"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read"));
}

#[test]
fn standalone_paper_is_a_full_page() {
    let input = temp_file("standalone", "md", "---\ntitle: T\n---\nhello\n");
    let output = Command::new(bin_path())
        .args(["--standalone", "paper", input.to_str().expect("path")])
        .output()
        .expect("run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("<!doctype html>"));
    assert!(stdout.contains("<title>T | Eden's Library</title>"));
}

#[test]
fn updates_come_out_newest_first() {
    let input = temp_file(
        "updates",
        "json",
        r#"{"versions":[{"number":"1.2","description":"older"},{"number":"2.1","description":"newer"}]}"#,
    );
    let output = Command::new(bin_path())
        .args(["updates", input.to_str().expect("path")])
        .output()
        .expect("run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let newer = stdout.find("v2.1").expect("v2.1 missing");
    let older = stdout.find("v1.2").expect("v1.2 missing");
    assert!(newer < older, "stdout: {}", stdout);
}

#[test]
fn malformed_updates_print_the_fallback_and_fail() {
    let input = temp_file("bad_updates", "json", "not json at all");
    let output = Command::new(bin_path())
        .args(["updates", input.to_str().expect("path")])
        .output()
        .expect("run");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Oopsie!"), "stdout: {}", stdout);
}

#[test]
fn gallery_lists_only_image_files() {
    let dir = temp_path("gallery", "d");
    fs::create_dir_all(&dir).expect("create temp dir");
    fs::write(dir.join("one.jpg"), b"x").unwrap();
    fs::write(dir.join("two.png"), b"x").unwrap();
    fs::write(dir.join("skip.txt"), b"x").unwrap();

    let output = Command::new(bin_path())
        .args(["gallery", dir.to_str().expect("path")])
        .output()
        .expect("run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("<img ").count(), 2, "stdout: {}", stdout);
    assert!(!stdout.contains("skip.txt"));
    assert!(stdout.contains("loading=\"lazy\""));
    fs::remove_dir_all(&dir).ok();
}
