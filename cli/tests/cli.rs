use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn play_writes_the_narrative_log() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("log.txt");

    Command::cargo_bin("cli")
        .unwrap()
        .args(["play", "--seed", "7", "--log"])
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("is the winner of this duel against the"))
        .stdout(predicate::str::contains("rounds=1"));

    let text = std::fs::read_to_string(&log).unwrap();
    assert!(text.lines().any(|l| l.contains(" has attacked ")));
    assert!(text.lines().any(|l| l.starts_with("The ")));
}

#[test]
fn play_reads_bom_prefixed_json_config() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("game.json");
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(
        br#"{"heroes":["knight"],"monsters":["spider"],"weapons":["sword"],"seed":3,"max_rounds":5}"#,
    );
    std::fs::write(&cfg, bytes).unwrap();

    Command::cargo_bin("cli")
        .unwrap()
        .args(["play", "--json", "--config"])
        .arg(&cfg)
        .arg("--log")
        .arg(dir.path().join("log.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"rounds\": 1"));
}

#[test]
fn roster_rejects_unknown_heroes() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("bad.yaml");
    std::fs::write(&cfg, "heroes: [bard]\nmonsters: [spider]\n").unwrap();

    Command::cargo_bin("cli")
        .unwrap()
        .args(["roster", "--config"])
        .arg(&cfg)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Available heroes: Wizard, Knight"));
}

#[test]
fn missing_config_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("nowhere.yaml");

    Command::cargo_bin("cli")
        .unwrap()
        .args(["roster", "--config"])
        .arg(&cfg)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read game config"))
        .stderr(predicate::str::contains("nowhere.yaml"));
}

#[test]
fn roster_shows_equip_attempts() {
    Command::cargo_bin("cli")
        .unwrap()
        .args(["roster", "--game", "classic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\":\"rejected\""))
        .stdout(predicate::str::contains("\"weapon_pool\":[]"));
}

#[test]
fn simulate_vs_reports_win_rate() {
    Command::cargo_bin("simulate-vs")
        .unwrap()
        .args(["--hero", "wizard", "--monster", "dragon", "--trials", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hero win rate:"));
}

#[test]
fn simulate_vs_rejects_wrong_class_weapon() {
    Command::cargo_bin("simulate-vs")
        .unwrap()
        .args(["--hero", "wizard", "--weapon", "sword"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot equip 'sword'"));
}
