use crate::attack::Attack;
use crate::error::GameError;

/// Capability shared by heroes and monsters: a health pool and a fixed attack table.
pub trait Combatant {
    fn health(&self) -> i32;

    fn health_mut(&mut self) -> &mut i32;

    /// Lowercase type tag, e.g. `knight` or `spider`.
    fn kind(&self) -> &'static str;

    /// Attacks this combatant may use. Never changes after construction.
    fn attack_table(&self) -> &'static [Attack];

    fn in_duel(&self) -> bool;

    fn set_in_duel(&mut self, in_duel: bool);

    /// Damage of the named attack, matched case-insensitively against
    /// [`Combatant::attack_table`].
    fn compute_damage(&self, attack: &str) -> Result<i32, GameError> {
        Attack::parse(attack)
            .filter(|a| self.attack_table().contains(a))
            .map(Attack::damage)
            .ok_or_else(|| GameError::UnknownAttack {
                kind: self.kind().to_string(),
                attack: attack.to_string(),
            })
    }

    /// Subtracts `amount` without clamping; health may go negative.
    fn apply_damage(&mut self, amount: i32) {
        *self.health_mut() -= amount;
    }

    fn is_defeated(&self) -> bool {
        self.health() <= 0
    }
}
