//! Text renderings of players and their inventories. Drivers print these
//! verbatim, so the layout is fixed.

use crate::player::{Class, Player};
use crate::rules::UNARMED as NONE;

pub(crate) fn inventory(player: &Player) -> String {
    let mut out = String::from("List of items:");
    if player.inventory().is_empty() {
        out.push(' ');
        out.push_str(NONE);
        return out;
    }
    for item in player.inventory() {
        out.push_str("\n ");
        out.push_str(&item.describe());
    }
    out
}

pub(crate) fn player(player: &Player) -> String {
    let mut lines = vec![
        format!("Name: {}", player.name()),
        format!("Type: {}", player.class()),
        format!("Health: {}", player.health()),
        format!("Stamina: {}", player.stamina()),
        inventory(player),
    ];
    if player.class() == Class::Fighter {
        lines.push(format!(
            "Weapon in use: {}",
            player.equipped_weapon().unwrap_or(NONE)
        ));
    }
    lines.push(format!("Armour in use: {}", armour_list(player.equipped_armour())));
    lines.join("\n")
}

fn armour_list(names: &[String]) -> String {
    if names.is_empty() {
        NONE.to_string()
    } else {
        names.join(", ")
    }
}
