use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{DAMAGE_VARIANCE_ABOVE, DAMAGE_VARIANCE_BELOW};

/// Combat attributes held by value inside a character. Kept deliberately
/// separate from inventory and quest state: nothing in here can reach
/// either, so combat can never corrupt them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatStats {
    pub health: u32,
    pub max_health: u32,
    pub attack: u32,
}

impl CombatStats {
    /// Starts at full health.
    pub fn new(max_health: u32, attack: u32) -> Self {
        Self {
            health: max_health,
            max_health,
            attack,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn take_damage(&mut self, damage: u32) {
        self.health = self.health.saturating_sub(damage);
        debug!(damage, health = self.health, "damage taken");
    }

    /// Heals up to `amount`, capped at max health.
    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount).min(self.max_health);
    }

    /// Rolls damage and applies it to `target`. Both sides must be
    /// alive; a dead attacker or target makes this a no-op returning
    /// `None`. Returns the damage dealt otherwise.
    pub fn attack_target(&self, target: &mut CombatStats, rng: &mut impl Rng) -> Option<u32> {
        if !self.is_alive() || !target.is_alive() {
            return None;
        }
        let damage = roll_damage(self.attack, rng);
        target.take_damage(damage);
        Some(damage)
    }
}

/// Damage roll with uniform variance around the attack stat.
pub fn roll_damage(attack: u32, rng: &mut impl Rng) -> u32 {
    let low = attack.saturating_sub(DAMAGE_VARIANCE_BELOW);
    let high = attack.saturating_add(DAMAGE_VARIANCE_ABOVE);
    rng.gen_range(low..=high)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_starts_at_full_health() {
        let stats = CombatStats::new(100, 15);
        assert_eq!(stats.health, 100);
        assert!(stats.is_alive());
    }

    #[test]
    fn test_take_damage_saturates_at_zero() {
        let mut stats = CombatStats::new(10, 5);
        stats.take_damage(25);
        assert_eq!(stats.health, 0);
        assert!(!stats.is_alive());
    }

    #[test]
    fn test_heal_caps_at_max() {
        let mut stats = CombatStats::new(100, 15);
        stats.take_damage(40);
        stats.heal(100);
        assert_eq!(stats.health, 100);
    }

    #[test]
    fn test_heal_extreme_amount_saturates_at_max() {
        let mut stats = CombatStats::new(100, 15);
        stats.take_damage(50);
        stats.heal(u32::MAX);
        assert_eq!(stats.health, 100);
    }

    #[test]
    fn test_roll_damage_extreme_attack_does_not_overflow() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let damage = roll_damage(u32::MAX, &mut rng);
        assert!(damage >= u32::MAX - DAMAGE_VARIANCE_BELOW);
    }

    #[test]
    fn test_roll_damage_stays_in_variance_window() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..2000 {
            let damage = roll_damage(15, &mut rng);
            assert!((12..=18).contains(&damage), "rolled {damage}");
        }
    }

    #[test]
    fn test_roll_damage_low_attack_clamps_at_zero() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..500 {
            let damage = roll_damage(1, &mut rng);
            assert!(damage <= 1 + DAMAGE_VARIANCE_ABOVE);
        }
    }

    #[test]
    fn test_dead_attacker_cannot_attack() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut dead = CombatStats::new(10, 5);
        dead.take_damage(10);
        let mut target = CombatStats::new(50, 5);
        assert!(dead.attack_target(&mut target, &mut rng).is_none());
        assert_eq!(target.health, 50);
    }

    #[test]
    fn test_attack_damages_target() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let attacker = CombatStats::new(100, 15);
        let mut target = CombatStats::new(100, 5);
        let damage = attacker.attack_target(&mut target, &mut rng).unwrap();
        assert_eq!(target.health, 100 - damage);
    }
}
