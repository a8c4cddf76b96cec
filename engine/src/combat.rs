use serde::Serialize;
use tracing::{debug, trace};

use crate::error::GameError;
use crate::player::{Class, Player};
use crate::rules::{ACTION_STAMINA_COST, BASE_ATTACK, UNARMED};

/// How a single attack resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum AttackOutcome {
    /// Not enough stamina to swing; nothing was spent.
    Exhausted,
    /// Attack beat defence and the difference came off the target's health.
    Hit {
        attack: i32,
        defence: i32,
        damage: i32,
    },
    /// Defence was stronger.
    Blocked { attack: i32, defence: i32 },
    /// Equal powers; ties go to the defender.
    Tied { attack: i32, defence: i32 },
}

impl AttackOutcome {
    pub fn landed(&self) -> bool {
        matches!(self, AttackOutcome::Hit { .. })
    }
}

/// Attack power: base plus the value of the equipped weapon, if any. A weapon
/// named `"none"` reads as bare hands.
pub fn attack_power(player: &Player) -> Result<i32, GameError> {
    let Some(weapon) = player.equipped_weapon().filter(|w| *w != UNARMED) else {
        return Ok(BASE_ATTACK);
    };
    let item = player
        .find_item(weapon)
        .ok_or_else(|| GameError::MissingEquipment {
            player: player.name().to_string(),
            item: weapon.to_string(),
        })?;
    Ok(BASE_ATTACK.saturating_add(item.value()))
}

/// Defence power: every equipped armour name counts, duplicates included.
pub fn defence_power(player: &Player) -> Result<i32, GameError> {
    player.equipped_armour().iter().try_fold(0i32, |acc, name| {
        let item = player
            .find_item(name)
            .ok_or_else(|| GameError::MissingEquipment {
                player: player.name().to_string(),
                item: name.clone(),
            })?;
        Ok(acc.saturating_add(item.value()))
    })
}

/// Resolve a fighter's attack on `target`.
///
/// Stamina is spent whenever the attacker has enough of it, even if the blow
/// is blocked or tied. Powers are computed before anything is spent so a
/// `MissingEquipment` failure leaves both players untouched.
pub fn resolve_attack(
    attacker: &mut Player,
    target: &mut Player,
) -> Result<AttackOutcome, GameError> {
    attacker.ensure_class(Class::Fighter, "attack")?;
    attacker.ensure_alive()?;
    target.ensure_target_alive()?;

    if attacker.stamina() < ACTION_STAMINA_COST {
        debug!(
            attacker = attacker.name(),
            stamina = attacker.stamina(),
            "too tired to attack"
        );
        return Ok(AttackOutcome::Exhausted);
    }

    let attack = attack_power(attacker)?;
    let defence = defence_power(target)?;
    trace!(attacker = attacker.name(), target = target.name(), attack, defence, "attack powers");

    attacker.vitals.spend_stamina(ACTION_STAMINA_COST);

    let outcome = if attack > defence {
        let damage = attack - defence;
        let before = target.health();
        target.vitals.take_damage(damage);
        debug!(
            attacker = attacker.name(),
            target = target.name(),
            damage,
            before,
            after = target.health(),
            "attack hit"
        );
        AttackOutcome::Hit {
            attack,
            defence,
            damage,
        }
    } else if defence > attack {
        debug!(attacker = attacker.name(), target = target.name(), "attack blocked");
        AttackOutcome::Blocked { attack, defence }
    } else {
        debug!(attacker = attacker.name(), target = target.name(), "attack tied");
        AttackOutcome::Tied { attack, defence }
    };
    Ok(outcome)
}

/// `true` when the attack dealt damage.
pub fn attack(attacker: &mut Player, target: &mut Player) -> Result<bool, GameError> {
    resolve_attack(attacker, target).map(|o| o.landed())
}

impl Player {
    /// Fighter-only: attack `target`. See [`resolve_attack`].
    pub fn attack(&mut self, target: &mut Player) -> Result<bool, GameError> {
        attack(self, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Item;

    #[test]
    fn missing_weapon_fails_without_spending_stamina() {
        let mut a = Player::fighter("A");
        a.pickup(Item::weapon("Sword", 15).unwrap()).unwrap();
        a.use_item("Sword").unwrap();
        a.inventory.clear();
        let mut b = Player::fighter("B");

        assert_eq!(
            a.attack(&mut b),
            Err(GameError::MissingEquipment {
                player: "A".to_string(),
                item: "Sword".to_string()
            })
        );
        assert_eq!(a.stamina(), 100);
        assert_eq!(b.health(), 100);
    }

    #[test]
    fn missing_armour_is_reported_for_the_target() {
        let mut a = Player::fighter("A");
        let mut b = Player::fighter("B");
        b.pickup(Item::armour("Shield", 5).unwrap()).unwrap();
        b.use_item("Shield").unwrap();
        b.inventory.clear();

        assert!(matches!(
            resolve_attack(&mut a, &mut b),
            Err(GameError::MissingEquipment { player, .. }) if player == "B"
        ));
    }
}
