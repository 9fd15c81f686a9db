//! Game balance and subsystem tunables.

/// Item id the quick-use shortcut (`Player::use_potion`) looks for.
pub const HEALTH_POTION_ID: &str = "health_potion";

/// Fraction of an item's listed value a shop pays when buying it back.
pub const SHOP_BUYBACK_RATIO: f64 = 0.6;

/// Damage rolls span `attack - DAMAGE_VARIANCE_BELOW ..= attack + DAMAGE_VARIANCE_ABOVE`,
/// clamped at zero on the low end.
pub const DAMAGE_VARIANCE_BELOW: u32 = 3;
pub const DAMAGE_VARIANCE_ABOVE: u32 = 3;

/// Current save file format version. Bump when `PlayerSaveData` changes shape.
pub const SAVE_VERSION: u32 = 1;
