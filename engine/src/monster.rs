use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::attack::Attack;
use crate::combatant::Combatant;
use crate::error::GameError;

const DRAGON_ATTACKS: [Attack; 2] = [Attack::Hit, Attack::Firespit];
const SPIDER_ATTACKS: [Attack; 2] = [Attack::Hit, Attack::Bite];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    Dragon,
    Spider,
}

impl Species {
    pub const fn starting_health(self) -> i32 {
        match self {
            Species::Dragon => 300,
            Species::Spider => 200,
        }
    }

    pub const fn attacks(self) -> &'static [Attack; 2] {
        match self {
            Species::Dragon => &DRAGON_ATTACKS,
            Species::Spider => &SPIDER_ATTACKS,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Species::Dragon => "dragon",
            Species::Spider => "spider",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Species {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dragon" => Ok(Species::Dragon),
            "spider" => Ok(Species::Spider),
            _ => Err(GameError::InvalidMonsterType {
                given: s.to_string(),
                available: "Dragon, Spider".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Monster {
    species: Species,
    health: i32,
    in_duel: bool,
}

impl Monster {
    pub fn new(species: Species) -> Self {
        Self {
            species,
            health: species.starting_health(),
            in_duel: false,
        }
    }

    pub fn from_type(name: &str) -> Result<Self, GameError> {
        Ok(Self::new(name.parse()?))
    }

    pub fn species(&self) -> Species {
        self.species
    }

    /// One of the two fixed attacks; `index` wraps.
    pub fn attack(&self, index: usize) -> Attack {
        let attacks = self.species.attacks();
        attacks[index % attacks.len()]
    }
}

impl Combatant for Monster {
    fn health(&self) -> i32 {
        self.health
    }

    fn health_mut(&mut self) -> &mut i32 {
        &mut self.health
    }

    fn kind(&self) -> &'static str {
        self.species.name()
    }

    fn attack_table(&self) -> &'static [Attack] {
        self.species.attacks()
    }

    fn in_duel(&self) -> bool {
        self.in_duel
    }

    fn set_in_duel(&mut self, in_duel: bool) {
        self.in_duel = in_duel;
    }
}
