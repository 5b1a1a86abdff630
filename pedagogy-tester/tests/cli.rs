use std::path::PathBuf;
use std::process::Command;

fn temp_path(label: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "pedagogy-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

fn write_catalog(label: &str, body: &str) -> PathBuf {
    let path = temp_path(label);
    std::fs::write(&path, body).expect("write catalog");
    path
}

const SCENARIO: &str = r#"[
    {"id":"a","title":"Warm-up","phase":"start","description":"d","commands":["go","begin"]},
    {"id":"b","title":"Cool-down","phase":"end","description":"d","commands":["stop"]}
]"#;

#[test]
fn cli_check_passes_on_clean_catalog() {
    let exe = env!("CARGO_BIN_EXE_pedagogy-tester");
    let catalog = write_catalog("clean", SCENARIO);
    let output_path = temp_path("clean-report");
    let status = Command::new(exe)
        .arg("--catalog")
        .arg(&catalog)
        .args(["--report", "json", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    let value: serde_json::Value = serde_json::from_str(&content).expect("json report");
    assert_eq!(value["check"]["errors"], 0);
    assert_eq!(value["check"]["strategies"], 2);
}

#[test]
fn cli_check_fails_on_duplicate_ids() {
    let exe = env!("CARGO_BIN_EXE_pedagogy-tester");
    let catalog = write_catalog(
        "dupes",
        r#"[{"id":"a","title":"A","phase":"p"},{"id":"a","title":"B","phase":"p"}]"#,
    );
    let output = Command::new(exe)
        .arg("--catalog")
        .arg(&catalog)
        .args(["--report", "markdown"])
        .output()
        .expect("run cli");
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("duplicate id"));
}

#[test]
fn cli_query_applies_search_and_phase() {
    let exe = env!("CARGO_BIN_EXE_pedagogy-tester");
    let catalog = write_catalog("query", SCENARIO);
    let run = |phase: &str| {
        let output = Command::new(exe)
            .arg("--catalog")
            .arg(&catalog)
            .args(["--search", "GO", "--phase", phase, "--report", "json"])
            .output()
            .expect("run cli");
        assert!(output.status.success());
        let value: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("json report");
        value["matches"]
            .as_array()
            .expect("matches")
            .iter()
            .map(|m| m["id"].as_str().unwrap_or_default().to_string())
            .collect::<Vec<_>>()
    };
    assert_eq!(run("all"), ["a"]);
    assert!(run("end").is_empty());
}

#[test]
fn cli_lists_phases() {
    let exe = env!("CARGO_BIN_EXE_pedagogy-tester");
    let catalog = write_catalog("phases", SCENARIO);
    let output = Command::new(exe)
        .arg("--catalog")
        .arg(&catalog)
        .arg("--list-phases")
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let start = stdout.find("start").expect("start phase");
    let end = stdout.find("  end").expect("end phase");
    assert!(start < end);
}

#[test]
fn cli_reports_unreadable_catalog() {
    let exe = env!("CARGO_BIN_EXE_pedagogy-tester");
    let output = Command::new(exe)
        .arg("--catalog")
        .arg(temp_path("missing"))
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read"));
}
