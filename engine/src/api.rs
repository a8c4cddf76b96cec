use std::{fs, path::Path};

use anyhow::{anyhow, bail, Context, Result};
use encoding_rs::Encoding;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::combat::{resolve_attack, AttackOutcome};
use crate::content::builtin_encounters;
use crate::healing::{resolve_heal, HealOutcome};
use crate::{Class, GameError, Item, ItemKind, Player};

type Roster = IndexMap<String, Player>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncounterFormat {
    Json,
    Yaml,
}

impl EncounterFormat {
    /// `.json` files are JSON, everything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => EncounterFormat::Json,
            _ => EncounterFormat::Yaml,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ItemSpec {
    pub kind: ItemKind,
    pub name: String,
    pub value: i32,
}

impl ItemSpec {
    pub fn build(&self) -> Result<Item, GameError> {
        Item::new(self.kind, self.name.clone(), self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PlayerSpec {
    pub name: String,
    pub class: Class,
    /// Picked up in order before the first step runs.
    #[serde(default)]
    pub items: Vec<ItemSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Pickup { player: String, item: ItemSpec },
    Use { player: String, item: String },
    Attack { player: String, target: String },
    Heal { player: String, target: String },
    Report { player: String },
    Inventory { player: String },
}

impl Step {
    pub fn actor(&self) -> &str {
        match self {
            Step::Pickup { player, .. }
            | Step::Use { player, .. }
            | Step::Attack { player, .. }
            | Step::Heal { player, .. }
            | Step::Report { player }
            | Step::Inventory { player } => player.as_str(),
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            Step::Pickup { .. } => "pickup",
            Step::Use { .. } => "use",
            Step::Attack { .. } => "attack",
            Step::Heal { .. } => "heal",
            Step::Report { .. } => "report",
            Step::Inventory { .. } => "inventory",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EncounterConfig {
    #[serde(default)]
    pub name: String,
    pub players: Vec<PlayerSpec>,
    #[serde(default)]
    pub steps: Vec<Step>,
    /// Abort on the first rejected action instead of recording it and moving on.
    #[serde(default)]
    pub stop_on_error: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum StepOutcome {
    Done,
    Used(bool),
    Attack(AttackOutcome),
    Heal(HealOutcome),
    Text(String),
    Failed(String),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct StepRecord {
    pub index: usize,
    pub action: String,
    pub player: String,
    pub outcome: StepOutcome,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PlayerSummary {
    pub name: String,
    pub class: Class,
    pub health: i32,
    pub stamina: i32,
    pub report: String,
}

impl From<&Player> for PlayerSummary {
    fn from(p: &Player) -> Self {
        Self {
            name: p.name().to_string(),
            class: p.class(),
            health: p.health(),
            stamina: p.stamina(),
            report: p.report(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EncounterResult {
    pub name: String,
    pub steps: Vec<StepRecord>,
    pub players: Vec<PlayerSummary>,
    pub log: Vec<String>,
}

pub fn parse_encounter(text: &str, format: EncounterFormat) -> Result<EncounterConfig> {
    let cfg: EncounterConfig = match format {
        EncounterFormat::Json => {
            serde_json::from_str(text).context("failed to parse encounter JSON")?
        }
        EncounterFormat::Yaml => {
            serde_yaml::from_str(text).context("failed to parse encounter YAML")?
        }
    };
    Ok(cfg)
}

/// Read a script file as text, honouring a UTF-8 or UTF-16 byte order mark.
fn read_text_auto(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to read encounter: {}", path.display()))?;
    match Encoding::for_bom(&bytes) {
        Some((enc, bom_len)) => {
            let (text, _, _) = enc.decode(&bytes[bom_len..]);
            Ok(text.into_owned())
        }
        None => String::from_utf8(bytes)
            .with_context(|| format!("encounter is not UTF-8: {}", path.display())),
    }
}

pub fn load_encounter(path: &Path) -> Result<EncounterConfig> {
    let text = read_text_auto(path)?;
    parse_encounter(&text, EncounterFormat::from_path(path))
        .with_context(|| format!("in encounter file: {}", path.display()))
}

pub fn builtin_encounter(name: &str) -> Result<EncounterConfig> {
    let builtins = builtin_encounters();
    let (format, text) = builtins
        .get(name)
        .ok_or_else(|| anyhow!("unknown builtin encounter '{}'", name))?;
    parse_encounter(text, *format).with_context(|| format!("in builtin encounter '{}'", name))
}

/// Play every step of `cfg` against a fresh roster.
///
/// Script mistakes (unknown player, self-targeting, bad starting items) are
/// returned as errors. Rejected game actions are recorded as
/// [`StepOutcome::Failed`] unless `stop_on_error` is set.
pub fn run_encounter(cfg: &EncounterConfig) -> Result<EncounterResult> {
    let mut log = Vec::new();
    let mut roster = build_roster(&cfg.players, &mut log)?;
    info!(
        encounter = %cfg.name,
        players = roster.len(),
        steps = cfg.steps.len(),
        "running encounter"
    );

    let mut steps = Vec::with_capacity(cfg.steps.len());
    for (index, step) in cfg.steps.iter().enumerate() {
        let outcome = match apply_step(&mut roster, step, &mut log) {
            Ok(outcome) => outcome,
            Err(err) => match err.downcast_ref::<GameError>() {
                Some(game) if !cfg.stop_on_error => {
                    warn!(step = index, error = %game, "action rejected");
                    log.push(format!("[ERROR][{}] {}", step.actor(), game));
                    StepOutcome::Failed(game.to_string())
                }
                _ => {
                    return Err(err.context(format!(
                        "step {} ({} by {}) failed",
                        index + 1,
                        step.action(),
                        step.actor()
                    )));
                }
            },
        };
        steps.push(StepRecord {
            index,
            action: step.action().to_string(),
            player: step.actor().to_string(),
            outcome,
        });
    }

    for p in roster.values() {
        log.push(format!(
            "[END][{}] health {}, stamina {}{}",
            p.name(),
            p.health(),
            p.stamina(),
            if p.is_dead() { " (dead)" } else { "" }
        ));
    }

    Ok(EncounterResult {
        name: cfg.name.clone(),
        steps,
        players: roster.values().map(PlayerSummary::from).collect(),
        log,
    })
}

fn build_roster(specs: &[PlayerSpec], log: &mut Vec<String>) -> Result<Roster> {
    let mut roster = Roster::with_capacity(specs.len());
    for spec in specs {
        if roster.contains_key(&spec.name) {
            bail!("duplicate player name '{}'", spec.name);
        }
        let mut player = Player::new(spec.name.clone(), spec.class);
        for item in &spec.items {
            let item = item
                .build()
                .with_context(|| format!("bad starting item for {}", spec.name))?;
            player.pickup(item)?;
        }
        log.push(format!(
            "[START][{}] {} with {} item(s)",
            spec.name,
            spec.class,
            player.inventory().len()
        ));
        roster.insert(spec.name.clone(), player);
    }
    Ok(roster)
}

fn player_mut<'a>(roster: &'a mut Roster, name: &str) -> Result<&'a mut Player> {
    roster
        .get_mut(name)
        .ok_or_else(|| anyhow!("unknown player '{}'", name))
}

fn player_ref<'a>(roster: &'a Roster, name: &str) -> Result<&'a Player> {
    roster
        .get(name)
        .ok_or_else(|| anyhow!("unknown player '{}'", name))
}

/// Borrow two distinct players at once.
fn pair_mut<'a>(
    roster: &'a mut Roster,
    actor: &str,
    target: &str,
) -> Result<(&'a mut Player, &'a mut Player)> {
    if actor == target {
        bail!("{} cannot target themselves", actor);
    }
    let a = roster
        .get_index_of(actor)
        .ok_or_else(|| anyhow!("unknown player '{}'", actor))?;
    let t = roster
        .get_index_of(target)
        .ok_or_else(|| anyhow!("unknown player '{}'", target))?;

    let mut first = None;
    let mut second = None;
    for (idx, player) in roster.values_mut().enumerate() {
        if idx == a {
            first = Some(player);
        } else if idx == t {
            second = Some(player);
        }
    }
    match (first, second) {
        (Some(a), Some(t)) => Ok((a, t)),
        _ => bail!("could not borrow {} and {}", actor, target),
    }
}

fn apply_step(roster: &mut Roster, step: &Step, log: &mut Vec<String>) -> Result<StepOutcome> {
    match step {
        Step::Pickup { player, item } => {
            let item = item.build()?;
            let p = player_mut(roster, player)?;
            let line = format!("[PICKUP][{}] {}", player, item);
            p.pickup(item)?;
            log.push(line);
            Ok(StepOutcome::Done)
        }
        Step::Use { player, item } => {
            let used = player_mut(roster, player)?.use_item(item)?;
            log.push(format!(
                "[USE][{}] {} → {}",
                player,
                item,
                if used { "used" } else { "not carried" }
            ));
            Ok(StepOutcome::Used(used))
        }
        Step::Attack { player, target } => {
            let (attacker, defender) = pair_mut(roster, player, target)?;
            let before = defender.health();
            let outcome = resolve_attack(attacker, defender)?;
            log.push(log_attack(player, target, &outcome, before, defender.health()));
            Ok(StepOutcome::Attack(outcome))
        }
        Step::Heal { player, target } => {
            let (healer, patient) = pair_mut(roster, player, target)?;
            let outcome = resolve_heal(healer, patient)?;
            log.push(log_heal(player, target, &outcome));
            Ok(StepOutcome::Heal(outcome))
        }
        Step::Report { player } => {
            let report = player_ref(roster, player)?.report();
            log.push(format!("[REPORT][{}]\n{}", player, report));
            Ok(StepOutcome::Text(report))
        }
        Step::Inventory { player } => {
            let report = player_ref(roster, player)?.inventory_report();
            log.push(format!("[INVENTORY][{}] {}", player, report));
            Ok(StepOutcome::Text(report))
        }
    }
}

fn log_attack(
    attacker: &str,
    target: &str,
    outcome: &AttackOutcome,
    before: i32,
    after: i32,
) -> String {
    match outcome {
        AttackOutcome::Exhausted => {
            format!("[ATTACK][{}] too tired to attack {}", attacker, target)
        }
        AttackOutcome::Hit {
            attack,
            defence,
            damage,
        } => format!(
            "[ATTACK][{}] {} vs {} defence {} → hit for {} (HP {} → {})",
            attacker, attack, target, defence, damage, before, after
        ),
        AttackOutcome::Blocked { attack, defence } => format!(
            "[ATTACK][{}] {} vs {} defence {} → blocked",
            attacker, attack, target, defence
        ),
        AttackOutcome::Tied { attack, defence } => format!(
            "[ATTACK][{}] {} vs {} defence {} → tie, no damage",
            attacker, attack, target, defence
        ),
    }
}

fn log_heal(healer: &str, target: &str, outcome: &HealOutcome) -> String {
    match outcome {
        HealOutcome::Exhausted => format!("[HEAL][{}] too tired to heal {}", healer, target),
        HealOutcome::AlreadyFull => {
            format!("[HEAL][{}] {} is already at full health", healer, target)
        }
        HealOutcome::Healed { before, after } => {
            format!("[HEAL][{}] {} {} → {}", healer, target, before, after)
        }
    }
}
