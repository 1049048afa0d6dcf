//! One hero against one monster, until one of them is down.
//!
//! A duel moves through [`DuelPhase::Idle`] (looking for a pair),
//! [`DuelPhase::Engaged`] (exchanging blows) and [`DuelPhase::Resolved`]
//! (flags cleared, the loser removed from the roster). Nothing carries over
//! between calls except the roster itself.

use serde::Serialize;

use crate::combatant::Combatant;
use crate::hero::Hero;
use crate::log::Logger;
use crate::monster::Monster;
use crate::roster::Roster;
use crate::Dice;

/// Rolls below this (out of 0..=100) let the hero strike.
pub const HERO_STRIKE_BELOW: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuelPhase {
    Idle,
    Engaged,
    Resolved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Hero,
    Monster,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DuelResult {
    pub winner: Side,
    pub winner_kind: String,
    pub loser_kind: String,
    pub exchanges: u32,
    pub hero_health: i32,
    pub monster_health: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DuelRound {
    /// No armed, idle hero or no idle monster was available.
    Idle,
    Resolved(DuelResult),
}

impl DuelRound {
    pub fn result(&self) -> Option<&DuelResult> {
        match self {
            DuelRound::Idle => None,
            DuelRound::Resolved(r) => Some(r),
        }
    }
}

/// Picks a random eligible pair from the roster, fights it out and removes
/// whoever lost.
pub fn resolve_duel<L: Logger + ?Sized>(
    roster: &mut Roster,
    dice: &mut Dice,
    log: &mut L,
) -> DuelRound {
    let heroes = roster.eligible_heroes();
    if heroes.is_empty() {
        tracing::debug!(phase = ?DuelPhase::Idle, "no armed hero available");
        return DuelRound::Idle;
    }
    let hero_idx = heroes[dice.below(heroes.len())];

    let monsters = roster.eligible_monsters();
    if monsters.is_empty() {
        tracing::debug!(phase = ?DuelPhase::Idle, "no monster available");
        return DuelRound::Idle;
    }
    let monster_idx = monsters[dice.below(monsters.len())];

    let result = fight(
        &mut roster.heroes[hero_idx],
        &mut roster.monsters[monster_idx],
        dice,
        log,
    );

    let removed = roster.remove_defeated();
    tracing::debug!(phase = ?DuelPhase::Resolved, removed, "roster updated");
    DuelRound::Resolved(result)
}

/// Runs the exchange loop between two specific combatants.
///
/// Every exchange damages exactly one side by a positive amount, so the loop
/// always ends and exactly one side ends at or below zero health. An unarmed
/// hero only takes hits.
pub fn fight<L: Logger + ?Sized>(
    hero: &mut Hero,
    monster: &mut Monster,
    dice: &mut Dice,
    log: &mut L,
) -> DuelResult {
    let weapon = hero.ready_weapon();
    hero.set_in_duel(true);
    monster.set_in_duel(true);
    tracing::debug!(
        phase = ?DuelPhase::Engaged,
        hero = hero.kind(),
        monster = monster.kind(),
        ?weapon,
        "duel engaged"
    );

    let mut exchanges = 0u32;
    while !hero.is_defeated() && !monster.is_defeated() {
        exchanges += 1;
        let roll = dice.percentile();
        match weapon {
            Some(weapon) if roll < HERO_STRIKE_BELOW => {
                log.append(&format!(
                    "{} has attacked {} using {}!",
                    hero.kind(),
                    monster.kind(),
                    weapon
                ));
                monster.apply_damage(weapon.damage());
            }
            _ => {
                let attack = monster.attack(dice.below(2));
                log.append(&format!(
                    "{} has attacked {} using {}!",
                    monster.kind(),
                    hero.kind(),
                    attack
                ));
                hero.apply_damage(attack.damage());
            }
        }
    }

    hero.set_in_duel(false);
    monster.set_in_duel(false);

    let (winner, winner_kind, loser_kind) = if hero.is_defeated() {
        (Side::Monster, monster.kind(), hero.kind())
    } else {
        (Side::Hero, hero.kind(), monster.kind())
    };
    log.append(&format!(
        "The {} is the winner of this duel against the {}",
        winner_kind, loser_kind
    ));
    tracing::info!(
        winner = winner_kind,
        loser = loser_kind,
        exchanges,
        hero_health = hero.health(),
        monster_health = monster.health(),
        "duel resolved"
    );

    DuelResult {
        winner,
        winner_kind: winner_kind.to_string(),
        loser_kind: loser_kind.to_string(),
        exchanges,
        hero_health: hero.health(),
        monster_health: monster.health(),
    }
}
