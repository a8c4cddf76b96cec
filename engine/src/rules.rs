//! Fixed numeric rules of an encounter.

/// Upper bound for both health and stamina.
pub const MAX_STAT: i32 = 100;

/// Stamina spent by every attack or heal that is actually attempted.
pub const ACTION_STAMINA_COST: i32 = 10;

/// Attack power of an unarmed fighter.
pub const BASE_ATTACK: i32 = 10;

/// Health restored by a single successful heal.
pub const HEAL_AMOUNT: i32 = 20;

/// Equipped-weapon name that stands for bare hands, also what reports print
/// when nothing is equipped.
pub const UNARMED: &str = "none";

/// Clamp a health or stamina value into `0..=MAX_STAT`.
pub fn clamp_stat(value: i32) -> i32 {
    value.clamp(0, MAX_STAT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_stat_bounds() {
        assert_eq!(clamp_stat(-5), 0);
        assert_eq!(clamp_stat(0), 0);
        assert_eq!(clamp_stat(55), 55);
        assert_eq!(clamp_stat(120), MAX_STAT);
    }
}
