use dialectic_cli::read_catalog;
use dialectic_test_utils::sample_catalog;
use pretty_assertions::assert_eq;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn demo_catalog() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/debates.yaml")
}

fn dialectic(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dialectic"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn demo_catalog_matches_fixtures() {
    assert_eq!(read_catalog(&demo_catalog()).unwrap(), sample_catalog());
}

#[test]
fn analyze_prints_every_framework() {
    let catalog = demo_catalog();
    let output = dialectic(&["analyze", catalog.to_str().unwrap()]);
    assert!(output.status.success());

    let text = stdout_of(&output);
    assert!(text.contains("grounded   {A4, A6}"));
    assert!(text.contains("undecided  {A1, A2}"));
    assert!(text.contains("grounded   {B3, B4}"));
}

#[test]
fn analyze_one_framework_as_json() {
    let catalog = demo_catalog();
    let output = dialectic(&[
        "analyze",
        catalog.to_str().unwrap(),
        "--framework",
        "constructivism-debate",
        "--json",
    ]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(1));
    assert_eq!(value[0]["grounded"]["out"], serde_json::json!(["B1", "B2"]));
}

#[test]
fn audit_fails_on_drift() {
    let catalog = demo_catalog();
    let output = dialectic(&["audit", catalog.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("A5: claimed in, computed out"));
}

#[test]
fn audit_passes_without_claims() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"{{"pair": {{"title": "t",
            "arguments": [{{"id": "A", "agentId": "x", "claim": "a"}},
                          {{"id": "B", "agentId": "y", "claim": "b"}}],
            "attacks": [{{"id": "k", "attackerId": "A", "targetId": "B", "type": "rebut"}}]}}}}"#
    )
    .unwrap();

    let output = dialectic(&["audit", file.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("pair: claims agree"));
}

#[test]
fn attacks_on_one_argument() {
    let catalog = demo_catalog();
    let output = dialectic(&[
        "attacks",
        catalog.to_str().unwrap(),
        "--framework",
        "collapse-debate",
        "--argument",
        "A4",
    ]);
    assert!(output.status.success());
    let text = stdout_of(&output);
    assert!(text.contains("A5 undercut (att2)"));
    assert!(text.contains("A3 rebut (att1)"));
}

#[test]
fn attacks_with_extension_selection() {
    let catalog = demo_catalog();
    let run = |selection: &str| {
        dialectic(&[
            "attacks",
            catalog.to_str().unwrap(),
            "-f",
            "collapse-debate",
            "-a",
            "A4",
            "--extension",
            selection,
        ])
    };

    let output = run("grounded");
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("  grounded: in"));

    let output = run("preferred-9");
    assert_eq!(output.status.code(), Some(1));

    let output = run("stable");
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("preferred-N"));
}

#[test]
fn load_failures_exit_with_two() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(
        file,
        "bad:\n  title: t\n  arguments: [{{ id: A, agentId: x, claim: a }}]\n  \
         attacks: [{{ id: k, attackerId: A, targetId: GHOST, type: rebut }}]"
    )
    .unwrap();

    let output = dialectic(&["analyze", file.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("GHOST"));

    let output = dialectic(&["analyze", "/nonexistent/catalog.json"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn unknown_framework_key_is_an_error() {
    let catalog = demo_catalog();
    let output = dialectic(&["analyze", catalog.to_str().unwrap(), "--framework", "nope"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("framework not found"));
}

#[test]
fn config_file_budget_is_applied() {
    let mut config = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(config, "[search]\nmax_steps = 2").unwrap();

    let catalog = demo_catalog();
    let output = dialectic(&[
        "analyze",
        catalog.to_str().unwrap(),
        "--framework",
        "collapse-debate",
        "--config",
        config.path().to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("incomplete"));
}
