use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GameError;
use crate::player::{Loadout, Vitals};
use crate::rules::clamp_stat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Food,
    Weapon,
    Armour,
}

impl ItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Food => "Food",
            ItemKind::Weapon => "Weapon",
            ItemKind::Armour => "Armour",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happened to an item after it was applied to its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Applied {
    /// The item is used up and must leave the inventory.
    Consumed,
    /// The item stays in the inventory.
    Equipped,
}

/// A named, valued object a player can carry. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    kind: ItemKind,
    name: String,
    value: i32,
}

impl Item {
    pub fn new(kind: ItemKind, name: impl Into<String>, value: i32) -> Result<Self, GameError> {
        let name = name.into();
        if name.is_empty() {
            return Err(GameError::EmptyName);
        }
        if value < 0 {
            return Err(GameError::InvalidValue { name, value });
        }
        Ok(Self { kind, name, value })
    }

    pub fn food(name: impl Into<String>, value: i32) -> Result<Self, GameError> {
        Self::new(ItemKind::Food, name, value)
    }

    pub fn weapon(name: impl Into<String>, value: i32) -> Result<Self, GameError> {
        Self::new(ItemKind::Weapon, name, value)
    }

    pub fn armour(name: impl Into<String>, value: i32) -> Result<Self, GameError> {
        Self::new(ItemKind::Armour, name, value)
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// `"<Kind>, name: <name>, value: <value>"`
    pub fn describe(&self) -> String {
        format!("{}, name: {}, value: {}", self.kind, self.name, self.value)
    }

    /// Exert this item's effect on the player that owns it. Only reachable
    /// through `Player::use_item`, which also removes consumed items.
    pub(crate) fn apply(
        &self,
        owner: &str,
        vitals: &mut Vitals,
        loadout: &mut Loadout,
    ) -> Applied {
        match self.kind {
            ItemKind::Food => {
                let before = vitals.stamina;
                vitals.stamina = clamp_stat(vitals.stamina.saturating_add(self.value));
                debug!(
                    player = owner,
                    item = %self.name,
                    before,
                    after = vitals.stamina,
                    "ate food"
                );
                Applied::Consumed
            }
            ItemKind::Weapon => {
                loadout.weapon = Some(self.name.clone());
                debug!(player = owner, item = %self.name, "equipped weapon");
                Applied::Equipped
            }
            ItemKind::Armour => {
                loadout.armour.push(self.name.clone());
                debug!(
                    player = owner,
                    item = %self.name,
                    pieces = loadout.armour.len(),
                    "equipped armour"
                );
                Applied::Equipped
            }
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
