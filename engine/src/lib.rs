use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub mod api;
pub mod attack;
pub mod combatant;
pub mod content;
pub mod duel;
pub mod error;
pub mod game;
pub mod hero;
pub mod log;
pub mod monster;
pub mod roster;

pub use attack::{Attack, Weapon};
pub use combatant::Combatant;
pub use duel::{resolve_duel, DuelRound, Side};
pub use error::GameError;
pub use game::Game;
pub use hero::{Hero, HeroClass};
pub use log::Logger;
pub use monster::{Monster, Species};
pub use roster::Roster;

enum Source {
    Seeded(ChaCha8Rng),
    Scripted { values: Vec<u32>, cursor: usize },
}

/// Randomness for duel pairing, the attack-side roll and monster attack picks.
pub struct Dice {
    source: Source,
}

impl Dice {
    pub fn from_seed(seed: u64) -> Self {
        Self { source: Source::Seeded(ChaCha8Rng::seed_from_u64(seed)) }
    }

    /// Unseeded dice; every game plays out differently.
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }

    /// Replays `values` in a loop, each reduced into the requested range.
    pub fn from_scripted(values: Vec<u32>) -> Self {
        Self { source: Source::Scripted { values, cursor: 0 } }
    }

    /// Uniform in `0..n`.
    ///
    /// # Panics
    ///
    /// If `n` is 0. Callers pick from non-empty slices only.
    pub fn below(&mut self, n: usize) -> usize {
        assert!(n > 0, "Dice::below called with an empty range");
        if let Source::Seeded(rng) = &mut self.source {
            return rng.gen_range(0..n);
        }
        self.next_scripted() as usize % n
    }

    /// Uniform in `0..=100`.
    pub fn percentile(&mut self) -> u32 {
        if let Source::Seeded(rng) = &mut self.source {
            return rng.gen_range(0..=100);
        }
        self.next_scripted() % 101
    }

    fn next_scripted(&mut self) -> u32 {
        match &mut self.source {
            Source::Scripted { values, cursor } if !values.is_empty() => {
                let v = values[*cursor % values.len()];
                *cursor += 1;
                v
            }
            _ => 0,
        }
    }
}
