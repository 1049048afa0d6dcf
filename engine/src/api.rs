use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::attack::Weapon;
use crate::content::builtin_games;
use crate::duel::Side;
use crate::error::GameError;
use crate::game::{Game, GameOutcome, GameSummary, SimulationOptions};
use crate::hero::Hero;
use crate::log::{Logger, NullLog};
use crate::monster::Monster;
use crate::roster::Roster;
use crate::Dice;

const DEFAULT_MAX_ROUNDS: u32 = 1;

fn default_max_rounds() -> u32 {
    DEFAULT_MAX_ROUNDS
}

/// Who plays, which weapons are up for grabs and how long the game lasts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GameConfig {
    pub heroes: Vec<String>,
    pub monsters: Vec<String>,
    #[serde(default)]
    pub weapons: Vec<String>,
    /// Unseeded games draw a fresh seed every time.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_max_rounds")]
    pub max_rounds: u32,
    #[serde(default)]
    pub drop_test: bool,
}

impl GameConfig {
    pub fn builtin(id: &str) -> Result<Self> {
        let games = builtin_games();
        let Some(text) = games.get(id) else {
            let mut known: Vec<_> = games.keys().copied().collect();
            known.sort_unstable();
            bail!("unknown built-in game '{}' (known: {})", id, known.join(", "));
        };
        serde_yaml::from_str(text).with_context(|| format!("failed to parse built-in game: {}", id))
    }

    /// Reads a YAML or JSON file, picked by extension (YAML otherwise).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read game config: {}", path.display()))?;
        Self::from_text(&text, path)
    }

    /// Parses already-decoded file contents; `path` only selects the format.
    pub fn from_text(text: &str, path: &Path) -> Result<Self> {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            serde_json::from_str(text)
                .with_context(|| format!("failed to parse game JSON: {}", path.display()))
        } else {
            serde_yaml::from_str(text)
                .with_context(|| format!("failed to parse game YAML: {}", path.display()))
        }
    }

    /// Builds every combatant and the weapon pool. Any unknown hero, monster
    /// or weapon name aborts the whole roster.
    pub fn build_roster(&self) -> Result<Roster, GameError> {
        let heroes = self
            .heroes
            .iter()
            .map(|h| Hero::from_type(h))
            .collect::<Result<Vec<_>, _>>()?;
        let monsters = self
            .monsters
            .iter()
            .map(|m| Monster::from_type(m))
            .collect::<Result<Vec<_>, _>>()?;
        let pool = self
            .weapons
            .iter()
            .map(|w| {
                w.parse::<Weapon>()
                    .map_err(|_| GameError::InvalidWeapon { given: w.clone() })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Roster::new(heroes, monsters, pool))
    }

    pub fn options(&self) -> SimulationOptions {
        SimulationOptions {
            max_rounds: self.max_rounds,
            drop_test: self.drop_test,
        }
    }

    fn dice(&self) -> Dice {
        match self.seed {
            Some(seed) => Dice::from_seed(seed),
            None => Dice::from_entropy(),
        }
    }
}

/// Plays one game described by `cfg`, narrating into `log`.
pub fn simulate_game<L: Logger>(cfg: &GameConfig, log: L) -> Result<GameSummary> {
    let roster = cfg.build_roster().context("invalid game roster")?;
    let mut game = Game::new(roster, cfg.dice(), log);
    Ok(game.run(cfg.options()))
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ManyStats {
    pub samples: u32,
    pub heroes_win: u32,
    pub monsters_win: u32,
    pub undecided: u32,
    /// Duel victories per hero class or monster species, in first-seen order.
    pub duel_wins: IndexMap<String, u32>,
    pub hero_duel_wins: u32,
    pub monster_duel_wins: u32,
    pub avg_rounds: f64,
}

/// Plays `samples` games; sample `i` of a seeded config uses `seed + i`.
pub fn simulate_game_many(cfg: &GameConfig, samples: u32) -> Result<ManyStats> {
    let mut stats = ManyStats {
        samples,
        heroes_win: 0,
        monsters_win: 0,
        undecided: 0,
        duel_wins: IndexMap::new(),
        hero_duel_wins: 0,
        monster_duel_wins: 0,
        avg_rounds: 0.0,
    };
    let mut total_rounds = 0u64;

    for i in 0..samples {
        let mut sample = cfg.clone();
        sample.seed = cfg.seed.map(|s| s.wrapping_add(i as u64));
        let summary = simulate_game(&sample, NullLog)?;

        total_rounds += summary.rounds as u64;
        match summary.outcome {
            GameOutcome::HeroesWin => stats.heroes_win += 1,
            GameOutcome::MonstersWin => stats.monsters_win += 1,
            GameOutcome::Undecided => stats.undecided += 1,
        }
        for duel in &summary.duels {
            *stats.duel_wins.entry(duel.winner_kind.clone()).or_insert(0) += 1;
            match duel.winner {
                Side::Hero => stats.hero_duel_wins += 1,
                Side::Monster => stats.monster_duel_wins += 1,
            }
        }
    }

    if samples > 0 {
        stats.avg_rounds = total_rounds as f64 / samples as f64;
    }
    Ok(stats)
}
