use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GameError;
use crate::item::{Applied, Item};
use crate::report;
use crate::rules::{clamp_stat, MAX_STAT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Class {
    Fighter,
    Healer,
}

impl Class {
    pub fn as_str(self) -> &'static str {
        match self {
            Class::Fighter => "Fighter",
            Class::Healer => "Healer",
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Health and stamina, both kept inside `0..=MAX_STAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vitals {
    pub(crate) health: i32,
    pub(crate) stamina: i32,
}

impl Vitals {
    pub(crate) fn full() -> Self {
        Self {
            health: MAX_STAT,
            stamina: MAX_STAT,
        }
    }

    pub(crate) fn spend_stamina(&mut self, amount: i32) {
        self.stamina = clamp_stat(self.stamina.saturating_sub(amount));
    }

    pub(crate) fn take_damage(&mut self, amount: i32) {
        self.health = clamp_stat(self.health.saturating_sub(amount));
    }

    pub(crate) fn restore_health(&mut self, amount: i32) {
        self.health = clamp_stat(self.health.saturating_add(amount));
    }
}

/// Names of the items currently in use. Equipping never moves an item out of
/// the inventory, the names are resolved against it when needed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Loadout {
    pub(crate) weapon: Option<String>,
    pub(crate) armour: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    class: Class,
    pub(crate) vitals: Vitals,
    pub(crate) loadout: Loadout,
    pub(crate) inventory: Vec<Item>,
}

impl Player {
    pub fn new(name: impl Into<String>, class: Class) -> Self {
        Self {
            name: name.into(),
            class,
            vitals: Vitals::full(),
            loadout: Loadout::default(),
            inventory: Vec::new(),
        }
    }

    pub fn fighter(name: impl Into<String>) -> Self {
        Self::new(name, Class::Fighter)
    }

    pub fn healer(name: impl Into<String>) -> Self {
        Self::new(name, Class::Healer)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> Class {
        self.class
    }

    pub fn health(&self) -> i32 {
        self.vitals.health
    }

    pub fn stamina(&self) -> i32 {
        self.vitals.stamina
    }

    pub fn is_dead(&self) -> bool {
        self.vitals.health == 0
    }

    /// Name of the weapon in use, if any.
    pub fn equipped_weapon(&self) -> Option<&str> {
        self.loadout.weapon.as_deref()
    }

    /// Armour names in the order they were put on, duplicates included.
    pub fn equipped_armour(&self) -> &[String] {
        &self.loadout.armour
    }

    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    /// First carried item called `name`, in pickup order.
    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.inventory.iter().find(|item| item.name() == name)
    }

    pub(crate) fn ensure_alive(&self) -> Result<(), GameError> {
        if self.is_dead() {
            return Err(GameError::DeadPlayer {
                name: self.name.clone(),
            });
        }
        Ok(())
    }

    pub(crate) fn ensure_target_alive(&self) -> Result<(), GameError> {
        if self.is_dead() {
            return Err(GameError::TargetDead {
                name: self.name.clone(),
            });
        }
        Ok(())
    }

    pub(crate) fn ensure_class(&self, class: Class, action: &'static str) -> Result<(), GameError> {
        if self.class != class {
            return Err(GameError::NotCapable {
                name: self.name.clone(),
                class: self.class,
                action,
            });
        }
        Ok(())
    }

    /// Take ownership of `item`, appending it to the inventory.
    pub fn pickup(&mut self, item: Item) -> Result<(), GameError> {
        self.ensure_alive()?;
        debug!(player = %self.name, item = %item.name(), kind = %item.kind(), "picked up item");
        self.inventory.push(item);
        Ok(())
    }

    /// Use the first carried item called `name`. Returns `Ok(false)` when no
    /// such item is carried.
    pub fn use_item(&mut self, name: &str) -> Result<bool, GameError> {
        self.ensure_alive()?;
        let Some(idx) = self.inventory.iter().position(|item| item.name() == name) else {
            debug!(player = %self.name, item = name, "nothing to use");
            return Ok(false);
        };
        let applied = self.inventory[idx].apply(&self.name, &mut self.vitals, &mut self.loadout);
        if applied == Applied::Consumed {
            // remove by position so a same-named sibling stays put
            self.inventory.remove(idx);
        }
        Ok(true)
    }

    /// `"List of items:"` followed by one indented line per item.
    pub fn inventory_report(&self) -> String {
        report::inventory(self)
    }

    /// Multi-line summary; the weapon line is only present for fighters.
    pub fn report(&self) -> String {
        report::player(self)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.report())
    }
}
