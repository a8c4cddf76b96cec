use serde::Serialize;
use tracing::debug;

use crate::error::GameError;
use crate::player::{Class, Player};
use crate::rules::{ACTION_STAMINA_COST, HEAL_AMOUNT, MAX_STAT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum HealOutcome {
    /// Not enough stamina; nothing was spent.
    Exhausted,
    /// Target was already at full health. Stamina is still spent.
    AlreadyFull,
    Healed { before: i32, after: i32 },
}

impl HealOutcome {
    pub fn healed(&self) -> bool {
        matches!(self, HealOutcome::Healed { .. })
    }
}

pub fn resolve_heal(healer: &mut Player, target: &mut Player) -> Result<HealOutcome, GameError> {
    healer.ensure_class(Class::Healer, "heal")?;
    healer.ensure_alive()?;
    target.ensure_target_alive()?;

    if healer.stamina() < ACTION_STAMINA_COST {
        debug!(healer = healer.name(), stamina = healer.stamina(), "too tired to heal");
        return Ok(HealOutcome::Exhausted);
    }
    healer.vitals.spend_stamina(ACTION_STAMINA_COST);

    if target.health() == MAX_STAT {
        debug!(healer = healer.name(), target = target.name(), "target already at full health");
        return Ok(HealOutcome::AlreadyFull);
    }

    let before = target.health();
    target.vitals.restore_health(HEAL_AMOUNT);
    let after = target.health();
    debug!(healer = healer.name(), target = target.name(), before, after, "healed");
    Ok(HealOutcome::Healed { before, after })
}

/// `true` when the target gained health.
pub fn heal(healer: &mut Player, target: &mut Player) -> Result<bool, GameError> {
    resolve_heal(healer, target).map(|o| o.healed())
}

impl Player {
    /// Healer-only: restore some of `target`'s health. See [`resolve_heal`].
    pub fn heal(&mut self, target: &mut Player) -> Result<bool, GameError> {
        heal(self, target)
    }
}
