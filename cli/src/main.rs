use anyhow::Context;
use clap::{Parser, Subcommand};
use encoding_rs::Encoding;
use engine::api::{simulate_game, GameConfig};
use engine::game::EquipOutcome;
use engine::log::FileLog;
use engine::{Dice, Game, Weapon};
use serde::Serialize;
use std::{fs, path::Path, path::PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Subcommand)]
enum Cmd {
    /// Play a game: hand out weapons, then fight duel rounds
    Play {
        /// Built-in game id (default: classic)
        #[arg(long, conflicts_with = "config")]
        game: Option<String>,
        /// Path to a YAML or JSON game file
        #[arg(long)]
        config: Option<PathBuf>,
        /// RNG seed; omit for a different game every time
        #[arg(long)]
        seed: Option<u64>,
        /// Override the number of duel rounds
        #[arg(long)]
        rounds: Option<u32>,
        /// Drop and redistribute a random weapon after each round
        #[arg(long, default_value_t = false)]
        drop_test: bool,
        /// Narrative log file (truncated at start)
        #[arg(long, default_value = "log.txt")]
        log: PathBuf,
        /// Print the summary as JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show the roster after the initial weapon hand-out, as JSON
    Roster {
        /// Built-in game id (default: classic)
        #[arg(long, conflicts_with = "config")]
        game: Option<String>,
        /// Path to a YAML or JSON game file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Pretty-print JSON
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
}

#[derive(Parser)]
#[command(name = "heroes-cli")]
#[command(about = "Heroes vs monsters duel harness")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Serialize)]
struct AttemptView {
    hero: usize,
    weapon: Weapon,
    outcome: EquipOutcome,
}

#[derive(Serialize)]
struct RosterView<'a> {
    config: &'a GameConfig,
    roster: &'a engine::Roster,
    attempts: Vec<AttemptView>,
    unarmed: Vec<usize>,
}

fn read_text_auto(path: &Path) -> anyhow::Result<String> {
    let bytes = fs::read(path)
        .with_context(|| format!("failed to read game config: {}", path.display()))?;
    if let Some((enc, bom_len)) = Encoding::for_bom(&bytes) {
        let (cow, _, _) = enc.decode(&bytes[bom_len..]);
        Ok(cow.into_owned())
    } else {
        String::from_utf8(bytes)
            .with_context(|| format!("game config is not valid UTF-8: {}", path.display()))
    }
}

fn load_config(game: Option<String>, config: Option<PathBuf>) -> anyhow::Result<GameConfig> {
    match config {
        Some(path) => {
            let text = read_text_auto(&path)?;
            GameConfig::from_text(&text, &path)
        }
        None => GameConfig::builtin(game.as_deref().unwrap_or("classic")),
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Play {
            game,
            config,
            seed,
            rounds,
            drop_test,
            log,
            json,
        } => {
            let mut cfg = load_config(game, config)?;
            if seed.is_some() {
                cfg.seed = seed;
            }
            if let Some(rounds) = rounds {
                cfg.max_rounds = rounds;
            }
            cfg.drop_test |= drop_test;
            tracing::debug!(?cfg, "resolved game config");

            let sink = FileLog::create(&log)?;
            let summary = simulate_game(&cfg, sink)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
                return Ok(());
            }
            for hero in &summary.unarmed {
                println!("hero #{} could not be equipped with any weapon", hero);
            }
            for duel in &summary.duels {
                println!(
                    "The {} is the winner of this duel against the {} ({} exchanges)",
                    duel.winner_kind, duel.loser_kind, duel.exchanges
                );
            }
            for event in &summary.drops {
                match event.to {
                    Some(to) => println!("hero #{} dropped {} -> hero #{}", event.from, event.weapon, to),
                    None => println!("hero #{} dropped {} -> back to the pool", event.from, event.weapon),
                }
            }
            println!(
                "rounds={} heroes_left={} monsters_left={} outcome={:?}",
                summary.rounds, summary.heroes_left, summary.monsters_left, summary.outcome
            );
            println!("log written to {}", log.display());
        }
        Cmd::Roster {
            game,
            config,
            pretty,
        } => {
            let cfg = load_config(game, config)?;
            let roster = cfg.build_roster()?;
            let mut game = Game::new(roster, Dice::from_entropy(), engine::log::NullLog);
            let report = game.equip_all();
            let view = RosterView {
                config: &cfg,
                roster: game.roster(),
                attempts: report
                    .attempts
                    .iter()
                    .map(|a| AttemptView {
                        hero: a.hero,
                        weapon: a.weapon,
                        outcome: a.outcome_kind(),
                    })
                    .collect(),
                unarmed: report.unarmed.clone(),
            };
            if pretty {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                println!("{}", serde_json::to_string(&view)?);
            }
        }
    }
    Ok(())
}
