use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::attack::{Attack, Weapon};
use crate::combatant::Combatant;
use crate::error::GameError;

/// A hero never carries more than this many weapons.
pub const INVENTORY_CAPACITY: usize = 2;

const KNIGHT_WEAPONS: [Weapon; 2] = [Weapon::Sword, Weapon::Javelin];
const WIZARD_WEAPONS: [Weapon; 1] = [Weapon::Sorcery];
const KNIGHT_ATTACKS: [Attack; 2] = [Attack::Sword, Attack::Javelin];
const WIZARD_ATTACKS: [Attack; 1] = [Attack::Sorcery];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeroClass {
    Knight,
    Wizard,
}

impl HeroClass {
    pub const fn starting_health(self) -> i32 {
        match self {
            HeroClass::Knight => 100,
            HeroClass::Wizard => 150,
        }
    }

    pub const fn allowed_weapons(self) -> &'static [Weapon] {
        match self {
            HeroClass::Knight => &KNIGHT_WEAPONS,
            HeroClass::Wizard => &WIZARD_WEAPONS,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            HeroClass::Knight => "knight",
            HeroClass::Wizard => "wizard",
        }
    }

    const fn attacks(self) -> &'static [Attack] {
        match self {
            HeroClass::Knight => &KNIGHT_ATTACKS,
            HeroClass::Wizard => &WIZARD_ATTACKS,
        }
    }
}

impl fmt::Display for HeroClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HeroClass {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "knight" => Ok(HeroClass::Knight),
            "wizard" => Ok(HeroClass::Wizard),
            _ => Err(GameError::InvalidHeroType {
                given: s.to_string(),
                available: "Wizard, Knight".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hero {
    class: HeroClass,
    health: i32,
    inventory: Vec<Weapon>,
    equipped: Option<Weapon>,
    in_duel: bool,
}

impl Hero {
    pub fn new(class: HeroClass) -> Self {
        Self {
            class,
            health: class.starting_health(),
            inventory: Vec::with_capacity(INVENTORY_CAPACITY),
            equipped: None,
            in_duel: false,
        }
    }

    /// Builds a hero from a class name such as `"Knight"`.
    pub fn from_type(name: &str) -> Result<Self, GameError> {
        Ok(Self::new(name.parse()?))
    }

    pub fn class(&self) -> HeroClass {
        self.class
    }

    pub fn inventory(&self) -> &[Weapon] {
        &self.inventory
    }

    pub fn equipped(&self) -> Option<Weapon> {
        self.equipped
    }

    pub fn is_armed(&self) -> bool {
        !self.inventory.is_empty()
    }

    pub fn carries(&self, weapon: Weapon) -> bool {
        self.inventory.contains(&weapon)
    }

    /// Damage dealt with the weapon in hand.
    pub fn weapon_damage(&self) -> Option<i32> {
        self.equipped.map(Weapon::damage)
    }

    /// Puts the named weapon into the inventory and in hand.
    ///
    /// Returns `Ok(false)` without changing anything when the weapon is already
    /// carried.
    pub fn equip(&mut self, name: &str) -> Result<bool, GameError> {
        let weapon: Weapon = name.parse().map_err(|_| GameError::InvalidWeapon {
            given: name.to_string(),
        })?;
        self.equip_weapon(weapon)
    }

    pub fn equip_weapon(&mut self, weapon: Weapon) -> Result<bool, GameError> {
        if self.carries(weapon) {
            return Ok(false);
        }
        let allowed = self.class.allowed_weapons();
        if !allowed.contains(&weapon) {
            return Err(GameError::WrongClassWeapon {
                class: self.class,
                given: weapon.name().to_string(),
                allowed: allowed.to_vec(),
            });
        }
        if self.inventory.len() >= INVENTORY_CAPACITY {
            return Err(GameError::InventoryFull {
                capacity: INVENTORY_CAPACITY,
            });
        }
        self.inventory.push(weapon);
        self.equipped = Some(weapon);
        Ok(true)
    }

    /// Takes the first carried weapon that is not in hand.
    pub fn switch_weapon(&mut self) -> Result<Weapon, GameError> {
        if self.inventory.is_empty() {
            return Err(GameError::NoWeapons);
        }
        let next = self
            .inventory
            .iter()
            .copied()
            .find(|w| Some(*w) != self.equipped)
            .ok_or(GameError::OnlyOneWeapon)?;
        self.equipped = Some(next);
        Ok(next)
    }

    /// Removes a weapon from the inventory: the named one, or the one in hand
    /// when `name` is `None`. The returned weapon is up for redistribution.
    pub fn drop(&mut self, name: Option<&str>) -> Result<Weapon, GameError> {
        let weapon = match name {
            None => self.equipped.ok_or(GameError::NothingEquipped)?,
            Some(name) => name
                .parse::<Weapon>()
                .ok()
                .filter(|w| self.carries(*w))
                .ok_or_else(|| GameError::NotCarried(name.to_lowercase()))?,
        };
        self.inventory.retain(|w| *w != weapon);
        if self.equipped == Some(weapon) {
            self.equipped = None;
        }
        Ok(weapon)
    }

    /// Puts the first carried weapon in hand if nothing is.
    pub(crate) fn ready_weapon(&mut self) -> Option<Weapon> {
        if self.equipped.is_none() {
            self.equipped = self.inventory.first().copied();
        }
        self.equipped
    }
}

impl Combatant for Hero {
    fn health(&self) -> i32 {
        self.health
    }

    fn health_mut(&mut self) -> &mut i32 {
        &mut self.health
    }

    fn kind(&self) -> &'static str {
        self.class.name()
    }

    fn attack_table(&self) -> &'static [Attack] {
        self.class.attacks()
    }

    fn in_duel(&self) -> bool {
        self.in_duel
    }

    fn set_in_duel(&mut self, in_duel: bool) {
        self.in_duel = in_duel;
    }
}
