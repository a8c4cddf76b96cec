use std::collections::HashMap;

use crate::api::EncounterFormat;

/// Encounter scripts bundled with the engine, keyed by name.
pub fn builtin_encounters() -> HashMap<&'static str, (EncounterFormat, &'static str)> {
    HashMap::from([
        (
            "scenario_a",
            (
                EncounterFormat::Yaml,
                include_str!("../content/encounters/scenario_a.yaml"),
            ),
        ),
        (
            "scenario_b",
            (
                EncounterFormat::Yaml,
                include_str!("../content/encounters/scenario_b.yaml"),
            ),
        ),
        (
            "scenario_c",
            (
                EncounterFormat::Yaml,
                include_str!("../content/encounters/scenario_c.yaml"),
            ),
        ),
        (
            "scenario_d",
            (
                EncounterFormat::Yaml,
                include_str!("../content/encounters/scenario_d.yaml"),
            ),
        ),
        (
            "scenario_e",
            (
                EncounterFormat::Json,
                include_str!("../content/encounters/scenario_e.json"),
            ),
        ),
    ])
}
