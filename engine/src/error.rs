use thiserror::Error;

use crate::player::Class;

/// Failures raised by the core. A `false` result from `use_item`, `attack` or
/// `heal` is a normal game outcome and never shows up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("item '{name}' cannot have a negative value ({value})")]
    InvalidValue { name: String, value: i32 },

    #[error("item name cannot be empty")]
    EmptyName,

    #[error("{name} is dead")]
    DeadPlayer { name: String },

    #[error("stop! {name} is already dead")]
    TargetDead { name: String },

    #[error("{name} is a {class} and cannot {action}")]
    NotCapable {
        name: String,
        class: Class,
        action: &'static str,
    },

    /// An equipped name no longer matches anything in the inventory.
    #[error("{player} has '{item}' equipped but does not carry it")]
    MissingEquipment { player: String, item: String },
}
