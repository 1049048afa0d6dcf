use thiserror::Error;

use crate::attack::{format_weapon_list, Weapon};
use crate::hero::HeroClass;

/// Failures of a single roster operation. None of them is fatal to a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("'{given}' is an invalid weapon! Available weapons: {}", format_weapon_list(&Weapon::ALL))]
    InvalidWeapon { given: String },

    #[error(
        "a {class} cannot equip '{given}'! Available weapons for a {class}: {}",
        format_weapon_list(.allowed)
    )]
    WrongClassWeapon {
        class: HeroClass,
        given: String,
        allowed: Vec<Weapon>,
    },

    #[error("cannot carry more than {capacity} weapons at a time")]
    InventoryFull { capacity: usize },

    #[error("no weapons available at all")]
    NoWeapons,

    #[error("can't switch to the only weapon available, it is already in hand")]
    OnlyOneWeapon,

    #[error("no weapon equipped at all")]
    NothingEquipped,

    #[error("'{0}' is not in this hero's inventory")]
    NotCarried(String),

    #[error("a {kind} has no attack named '{attack}'")]
    UnknownAttack { kind: String, attack: String },

    #[error("'{given}' is an invalid hero! Available heroes: {available}")]
    InvalidHeroType { given: String, available: String },

    #[error("no hero at roster position {0}")]
    UnknownHero(usize),

    #[error("'{given}' is an invalid monster! Available monsters: {available}")]
    InvalidMonsterType { given: String, available: String },
}
