use serde::Serialize;

use crate::attack::Weapon;
use crate::combatant::Combatant;
use crate::hero::Hero;
use crate::monster::Monster;

/// Live heroes and monsters plus the stock of unclaimed weapons.
///
/// Entities are addressed by index for the length of a single call; indices
/// shift once defeated combatants are removed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Roster {
    pub heroes: Vec<Hero>,
    pub monsters: Vec<Monster>,
    pub weapon_pool: Vec<Weapon>,
}

impl Roster {
    pub fn new(heroes: Vec<Hero>, monsters: Vec<Monster>, weapon_pool: Vec<Weapon>) -> Self {
        Self {
            heroes,
            monsters,
            weapon_pool,
        }
    }

    /// Heroes that can be sent into a duel: armed and not already fighting.
    pub fn eligible_heroes(&self) -> Vec<usize> {
        self.heroes
            .iter()
            .enumerate()
            .filter(|(_, h)| h.is_armed() && !h.in_duel())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn eligible_monsters(&self) -> Vec<usize> {
        self.monsters
            .iter()
            .enumerate()
            .filter(|(_, m)| !m.in_duel())
            .map(|(i, _)| i)
            .collect()
    }

    /// Drops every combatant whose health is at or below zero.
    pub(crate) fn remove_defeated(&mut self) -> usize {
        let before = self.heroes.len() + self.monsters.len();
        self.heroes.retain(|h| !h.is_defeated());
        self.monsters.retain(|m| !m.is_defeated());
        before - self.heroes.len() - self.monsters.len()
    }

    pub fn is_decided(&self) -> bool {
        self.heroes.is_empty() || self.monsters.is_empty()
    }
}
