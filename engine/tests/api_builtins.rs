use engine::api::{simulate_game, simulate_game_many, GameConfig};
use engine::game::GameOutcome;
use engine::GameError;

#[test]
fn classic_matches_the_original_lineup() {
    let cfg = GameConfig::builtin("classic").unwrap();
    assert_eq!(cfg.heroes.len(), 5);
    assert_eq!(cfg.monsters.len(), 5);
    assert_eq!(cfg.weapons.len(), 8);
    assert_eq!(cfg.max_rounds, 1);
    assert!(cfg.drop_test);
    assert_eq!(cfg.seed, None);
}

#[test]
fn unknown_builtin_is_an_error() {
    let err = GameConfig::builtin("nope").unwrap_err();
    assert!(err.to_string().contains("classic"));
}

#[test]
fn classic_game_runs_one_duel() {
    let mut cfg = GameConfig::builtin("classic").unwrap();
    cfg.seed = Some(2025);
    let mut log: Vec<String> = Vec::new();
    let summary = simulate_game(&cfg, &mut log).unwrap();

    assert_eq!(summary.rounds, 1);
    assert_eq!(summary.duels.len(), 1);
    assert_eq!(summary.outcome, GameOutcome::Undecided);
    let last_duel_line = log
        .iter()
        .rev()
        .find(|l| l.starts_with("The "))
        .unwrap();
    assert!(last_duel_line.contains("is the winner of this duel against the"));
}

#[test]
fn seeded_games_replay_identically() {
    let mut cfg = GameConfig::builtin("gauntlet").unwrap();
    cfg.seed = Some(42);
    let a = simulate_game(&cfg, Vec::<String>::new()).unwrap();
    let b = simulate_game(&cfg, Vec::<String>::new()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn bad_roster_names_abort_construction() {
    let cfg: GameConfig = serde_yaml::from_str(
        "heroes: [knight, bard]\nmonsters: [spider]\nweapons: [sword]\n",
    )
    .unwrap();
    assert!(matches!(
        cfg.build_roster(),
        Err(GameError::InvalidHeroType { .. })
    ));

    let cfg: GameConfig =
        serde_json::from_str(r#"{"heroes":["knight"],"monsters":["orc"]}"#).unwrap();
    assert!(matches!(
        cfg.build_roster(),
        Err(GameError::InvalidMonsterType { .. })
    ));

    let cfg: GameConfig = serde_json::from_str(
        r#"{"heroes":["knight"],"monsters":["spider"],"weapons":["bow"]}"#,
    )
    .unwrap();
    assert!(matches!(
        cfg.build_roster(),
        Err(GameError::InvalidWeapon { .. })
    ));
    assert!(simulate_game(&cfg, Vec::<String>::new()).is_err());
}

#[test]
fn config_files_load_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let json = dir.path().join("game.json");
    std::fs::write(
        &json,
        r#"{"heroes":["wizard"],"monsters":["dragon"],"weapons":["sorcery"],"seed":5,"max_rounds":3}"#,
    )
    .unwrap();
    let cfg = GameConfig::from_path(&json).unwrap();
    assert_eq!(cfg.seed, Some(5));
    assert_eq!(cfg.max_rounds, 3);
    assert!(!cfg.drop_test);

    let yaml = dir.path().join("game.yaml");
    std::fs::write(&yaml, "heroes: [wizard]\nmonsters: [dragon]\n").unwrap();
    let cfg = GameConfig::from_path(&yaml).unwrap();
    assert!(cfg.weapons.is_empty());
    assert_eq!(cfg.max_rounds, 1);

    assert!(GameConfig::from_path(dir.path().join("missing.yaml")).is_err());
}

#[test]
fn many_games_summary_makes_sense() {
    let mut cfg = GameConfig::builtin("gauntlet").unwrap();
    cfg.seed = Some(1);
    let stats = simulate_game_many(&cfg, 30).unwrap();

    assert_eq!(stats.samples, 30);
    assert_eq!(stats.heroes_win + stats.monsters_win + stats.undecided, 30);
    let tallied: u32 = stats.duel_wins.values().sum();
    assert_eq!(tallied, stats.hero_duel_wins + stats.monster_duel_wins);
    assert!(stats.avg_rounds > 0.0);
}
