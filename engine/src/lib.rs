//! Deterministic item/player model for a turn-based encounter: players carry
//! food, weapons and armour, equip or eat them, and trade attacks and heals
//! under fixed rules.

pub mod api;
pub mod combat;
pub mod content;
pub mod error;
pub mod healing;
pub mod item;
pub mod player;
mod report;
pub mod rules;

pub use combat::{attack, resolve_attack, AttackOutcome};
pub use error::GameError;
pub use healing::{heal, resolve_heal, HealOutcome};
pub use item::{Item, ItemKind};
pub use player::{Class, Player};
