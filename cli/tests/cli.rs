use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    Command::cargo_bin("arena-cli").expect("binary built")
}

#[test]
fn builtins_are_listed() {
    cli()
        .arg("builtins")
        .assert()
        .success()
        .stdout(predicate::str::contains("scenario_a").and(predicate::str::contains("scenario_e")));
}

#[test]
fn run_builtin_prints_log() {
    cli()
        .args(["run", "--builtin", "scenario_a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("== scenario-a =="))
        .stdout(predicate::str::contains("hit for 25 (HP 100 → 75)"))
        .stdout(predicate::str::contains("Weapon in use: Sword"));
}

#[test]
fn run_builtin_as_json() {
    let out = cli()
        .args(["run", "--builtin", "scenario_c", "--json"])
        .output()
        .expect("ran");
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json");
    assert_eq!(v["steps"][4]["outcome"]["value"], "List of items: none");
}

#[test]
fn run_file_with_bom() {
    let dir = std::env::temp_dir().join(format!("arena-cli-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("bom.json");
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(
        br#"{"name":"bom","players":[{"name":"Fay","class":"healer"}],"steps":[{"action":"use","player":"Fay","item":"Unknown"}]}"#,
    );
    std::fs::write(&path, bytes).unwrap();

    cli()
        .args(["run", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("[USE][Fay] Unknown → not carried"));
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn run_needs_a_source() {
    cli()
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--builtin"));
}

#[test]
fn demo_prints_both_reports() {
    cli()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice attacks Bob: HIT"))
        .stdout(predicate::str::contains("Name: Bob\nType: Fighter\nHealth: 75"));
}
