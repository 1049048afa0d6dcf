use serde::Serialize;

use crate::attack::Weapon;
use crate::duel::{resolve_duel, DuelResult, DuelRound};
use crate::error::GameError;
use crate::hero::INVENTORY_CAPACITY;
use crate::log::Logger;
use crate::roster::Roster;
use crate::Dice;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum EquipOutcome {
    Equipped,
    AlreadyCarried,
    Rejected { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipAttempt {
    pub hero: usize,
    pub weapon: Weapon,
    pub outcome: Result<bool, GameError>,
}

impl EquipAttempt {
    pub fn outcome_kind(&self) -> EquipOutcome {
        match &self.outcome {
            Ok(true) => EquipOutcome::Equipped,
            Ok(false) => EquipOutcome::AlreadyCarried,
            Err(e) => EquipOutcome::Rejected {
                error: e.to_string(),
            },
        }
    }
}

/// Everything that happened during the initial hand-out of the weapon pool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquipReport {
    pub attempts: Vec<EquipAttempt>,
    /// Heroes left without any weapon.
    pub unarmed: Vec<usize>,
}

impl EquipReport {
    pub fn rejected(&self) -> impl Iterator<Item = &EquipAttempt> {
        self.attempts.iter().filter(|a| a.outcome.is_err())
    }
}

/// A weapon leaving one hero and, if anyone could take it, landing with the
/// first hero in roster order able to carry it (possibly the same one).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DropEvent {
    pub weapon: Weapon,
    pub from: usize,
    pub to: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationOptions {
    /// Upper bound on duel rounds; a game may end sooner.
    pub max_rounds: u32,
    /// After each round a random armed hero drops the weapon in hand.
    pub drop_test: bool,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            max_rounds: 1,
            drop_test: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    HeroesWin,
    MonstersWin,
    Undecided,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub rounds: u32,
    pub duels: Vec<DuelResult>,
    pub drops: Vec<DropEvent>,
    pub unarmed: Vec<usize>,
    pub heroes_left: usize,
    pub monsters_left: usize,
    pub outcome: GameOutcome,
}

/// Owns the roster and decides when weapons are handed out and duels fought.
pub struct Game<L: Logger> {
    roster: Roster,
    dice: Dice,
    log: L,
}

impl<L: Logger> Game<L> {
    pub fn new(roster: Roster, dice: Dice, log: L) -> Self {
        Self { roster, dice, log }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    pub fn into_parts(self) -> (Roster, L) {
        (self.roster, self.log)
    }

    /// Hands out the weapon pool: heroes in order, pool entries in order.
    ///
    /// A successful pickup consumes that pool entry. Weapons a hero already
    /// carries or cannot use stay in the pool for the next hero.
    pub fn equip_all(&mut self) -> EquipReport {
        let mut report = EquipReport::default();
        let Roster {
            heroes,
            weapon_pool,
            ..
        } = &mut self.roster;

        for (idx, hero) in heroes.iter_mut().enumerate() {
            let mut slot = 0;
            while slot < weapon_pool.len() && hero.inventory().len() < INVENTORY_CAPACITY {
                let weapon = weapon_pool[slot];
                let outcome = hero.equip_weapon(weapon);
                match &outcome {
                    Ok(true) => {
                        weapon_pool.remove(slot);
                        tracing::debug!(hero = idx, %weapon, "equipped from pool");
                    }
                    Ok(false) => slot += 1,
                    Err(e) => {
                        tracing::trace!(hero = idx, %weapon, error = %e, "pool entry skipped");
                        slot += 1;
                    }
                }
                report.attempts.push(EquipAttempt {
                    hero: idx,
                    weapon,
                    outcome,
                });
            }

            if !hero.is_armed() {
                tracing::warn!(hero = idx, class = %hero.class(), "unable to equip hero with any weapon");
                report.unarmed.push(idx);
            }
        }
        report
    }

    /// Offers a loose weapon to each hero in roster order; the first one who
    /// picks it up keeps it. Unclaimed weapons return to the pool.
    pub fn redistribute(&mut self, weapon: Weapon) -> Option<usize> {
        for (idx, hero) in self.roster.heroes.iter_mut().enumerate() {
            if let Ok(true) = hero.equip_weapon(weapon) {
                self.log.append(&format!(
                    "{} equipped themselves with {}!",
                    hero.class(),
                    weapon
                ));
                tracing::debug!(hero = idx, %weapon, "picked up dropped weapon");
                return Some(idx);
            }
        }
        tracing::warn!(%weapon, "unable to equip dropped weapon to any hero");
        self.roster.weapon_pool.push(weapon);
        None
    }

    /// Has `hero` drop a weapon (the one in hand when `name` is `None`) and
    /// passes it on.
    pub fn drop_weapon(&mut self, hero: usize, name: Option<&str>) -> Result<DropEvent, GameError> {
        let weapon = self
            .roster
            .heroes
            .get_mut(hero)
            .ok_or(GameError::UnknownHero(hero))?
            .drop(name)?;
        tracing::debug!(hero, %weapon, "weapon dropped");
        let to = self.redistribute(weapon);
        Ok(DropEvent {
            weapon,
            from: hero,
            to,
        })
    }

    /// A random hero with a weapon in hand drops it.
    pub fn drop_random(&mut self) -> Option<DropEvent> {
        let holders: Vec<usize> = self
            .roster
            .heroes
            .iter()
            .enumerate()
            .filter(|(_, h)| h.equipped().is_some())
            .map(|(i, _)| i)
            .collect();
        if holders.is_empty() {
            return None;
        }
        let hero = holders[self.dice.below(holders.len())];
        match self.drop_weapon(hero, None) {
            Ok(event) => Some(event),
            Err(e) => {
                tracing::warn!(hero, error = %e, "drop test failed");
                None
            }
        }
    }

    /// Fights a single duel.
    pub fn run_round(&mut self) -> DuelRound {
        resolve_duel(&mut self.roster, &mut self.dice, &mut self.log)
    }

    /// Equips everyone, then fights rounds until one side is wiped out, no
    /// pair can be formed, or `max_rounds` is reached.
    pub fn run(&mut self, options: SimulationOptions) -> GameSummary {
        let report = self.equip_all();
        let mut duels = Vec::new();
        let mut drops = Vec::new();
        let mut rounds = 0;

        while rounds < options.max_rounds && !self.roster.is_decided() {
            let DuelRound::Resolved(result) = self.run_round() else {
                break;
            };
            rounds += 1;
            duels.push(result);
            if options.drop_test {
                drops.extend(self.drop_random());
            }
        }

        let outcome = match (self.roster.heroes.is_empty(), self.roster.monsters.is_empty()) {
            (false, true) => GameOutcome::HeroesWin,
            (true, false) => GameOutcome::MonstersWin,
            _ => GameOutcome::Undecided,
        };
        tracing::info!(rounds, ?outcome, "game finished");

        GameSummary {
            rounds,
            duels,
            drops,
            unarmed: report.unarmed,
            heroes_left: self.roster.heroes.len(),
            monsters_left: self.roster.monsters.len(),
            outcome,
        }
    }
}
