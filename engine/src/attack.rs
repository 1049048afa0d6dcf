use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Every attack any combatant can make, heroes' weapons included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attack {
    Sword,
    Javelin,
    Sorcery,
    Hit,
    Firespit,
    Bite,
}

impl Attack {
    pub const fn damage(self) -> i32 {
        match self {
            Attack::Sword => 10,
            Attack::Javelin => 15,
            Attack::Sorcery => 20,
            Attack::Hit => 5,
            Attack::Firespit => 20,
            Attack::Bite => 8,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Attack::Sword => "sword",
            Attack::Javelin => "javelin",
            Attack::Sorcery => "sorcery",
            Attack::Hit => "hit",
            Attack::Firespit => "firespit",
            Attack::Bite => "bite",
        }
    }

    /// Case-insensitive lookup; `None` for names outside the table.
    pub fn parse(name: &str) -> Option<Attack> {
        use Attack::*;
        match name.trim().to_lowercase().as_str() {
            "sword" => Some(Sword),
            "javelin" => Some(Javelin),
            "sorcery" => Some(Sorcery),
            "hit" => Some(Hit),
            "firespit" => Some(Firespit),
            "bite" => Some(Bite),
            _ => None,
        }
    }
}

impl fmt::Display for Attack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Weapons a hero can carry. A strict subset of [`Attack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weapon {
    Sword,
    Javelin,
    Sorcery,
}

impl Weapon {
    pub const ALL: [Weapon; 3] = [Weapon::Sword, Weapon::Javelin, Weapon::Sorcery];

    pub const fn attack(self) -> Attack {
        match self {
            Weapon::Sword => Attack::Sword,
            Weapon::Javelin => Attack::Javelin,
            Weapon::Sorcery => Attack::Sorcery,
        }
    }

    pub const fn name(self) -> &'static str {
        self.attack().name()
    }

    pub const fn damage(self) -> i32 {
        self.attack().damage()
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for names that are not a weapon of any hero class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownWeapon(pub String);

impl FromStr for Weapon {
    type Err = UnknownWeapon;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sword" => Ok(Weapon::Sword),
            "javelin" => Ok(Weapon::Javelin),
            "sorcery" => Ok(Weapon::Sorcery),
            _ => Err(UnknownWeapon(s.to_string())),
        }
    }
}

/// `xyz` -> `Xyz`
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Presentation form used in error messages, e.g. `Sword, Javelin`.
pub fn format_weapon_list(weapons: &[Weapon]) -> String {
    weapons
        .iter()
        .map(|w| capitalize(w.name()))
        .collect::<Vec<_>>()
        .join(", ")
}
